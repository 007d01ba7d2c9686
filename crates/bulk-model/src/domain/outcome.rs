use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemKey;

/// Terminal result of one item action.
///
/// Serialized the way front ends expect it: `null` for success, the message
/// string for failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Outcome {
    Succeeded,
    Failed(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }
}

impl From<Option<String>> for Outcome {
    fn from(v: Option<String>) -> Self {
        match v {
            None => Outcome::Succeeded,
            Some(msg) => Outcome::Failed(msg),
        }
    }
}

impl From<Outcome> for Option<String> {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Succeeded => None,
            Outcome::Failed(msg) => Some(msg),
        }
    }
}

/// Borrowed view of a single key's entry in an [`OutcomeMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus<'a> {
    /// Not attempted yet, or still in flight.
    Pending,
    Succeeded,
    Failed(&'a str),
}

/// Per-item outcomes of a run, keyed by [`ItemKey`].
///
/// A missing key means the item is still pending. Entries are write-once:
/// [`OutcomeMap::settle`] never replaces an existing outcome.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OutcomeMap(BTreeMap<ItemKey, Outcome>);

impl OutcomeMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of settled items.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record the outcome for `key`.
    ///
    /// Returns `false` and leaves the map untouched if the key already settled.
    pub fn settle(&mut self, key: ItemKey, outcome: Outcome) -> bool {
        use std::collections::btree_map::Entry;

        match self.0.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(outcome);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &ItemKey) -> Option<&Outcome> {
        self.0.get(key)
    }

    /// Status of `key`; unknown keys are pending.
    pub fn status(&self, key: &ItemKey) -> ItemStatus<'_> {
        match self.0.get(key) {
            None => ItemStatus::Pending,
            Some(Outcome::Succeeded) => ItemStatus::Succeeded,
            Some(Outcome::Failed(msg)) => ItemStatus::Failed(msg),
        }
    }

    pub fn is_succeeded(&self, key: &ItemKey) -> bool {
        matches!(self.0.get(key), Some(Outcome::Succeeded))
    }

    pub fn failed_count(&self) -> usize {
        self.0.values().filter(|o| o.is_failure()).count()
    }

    pub fn succeeded_count(&self) -> usize {
        self.len() - self.failed_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemKey, &Outcome)> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_pending() {
        let map = OutcomeMap::new();
        assert_eq!(map.status(&ItemKey::from(1)), ItemStatus::Pending);
        assert!(!map.is_succeeded(&ItemKey::from(1)));
    }

    #[test]
    fn settle_is_write_once() {
        let mut map = OutcomeMap::new();
        assert!(map.settle(ItemKey::from(1), Outcome::Failed("conflict".into())));
        assert!(!map.settle(ItemKey::from(1), Outcome::Succeeded));

        assert_eq!(map.status(&ItemKey::from(1)), ItemStatus::Failed("conflict"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn counts_split_by_outcome() {
        let mut map = OutcomeMap::new();
        map.settle(ItemKey::from(1), Outcome::Succeeded);
        map.settle(ItemKey::from(2), Outcome::Failed("boom".into()));
        map.settle(ItemKey::from("x"), Outcome::Succeeded);

        assert_eq!(map.succeeded_count(), 2);
        assert_eq!(map.failed_count(), 1);
    }

    #[test]
    fn serializes_success_as_null_and_failure_as_message() {
        let mut map = OutcomeMap::new();
        map.settle(ItemKey::from(1), Outcome::Succeeded);
        map.settle(ItemKey::from(2), Outcome::Failed("conflict".into()));

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"1":null,"2":"conflict"}"#);
    }

    #[test]
    fn outcome_deserializes_from_null_or_string() {
        let ok: Outcome = serde_json::from_str("null").unwrap();
        let failed: Outcome = serde_json::from_str(r#""denied""#).unwrap();

        assert_eq!(ok, Outcome::Succeeded);
        assert_eq!(failed, Outcome::Failed("denied".into()));
    }
}
