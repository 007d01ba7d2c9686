use std::{fmt, num::TryFromIntError};

use serde::{Deserialize, Serialize};

/// Identity of one item inside a bulk run.
///
/// Produced by the caller's key extractor. Keys must be unique across the
/// items of a single run; the dialog rejects duplicates up front.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemKey {
    /// Numeric key, typically a database id.
    Int(i64),
    /// String key, e.g. a name or a composite id.
    Str(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKey::Int(n) => write!(f, "{n}"),
            ItemKey::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        ItemKey::Int(n)
    }
}

impl From<i32> for ItemKey {
    fn from(n: i32) -> Self {
        ItemKey::Int(n.into())
    }
}

impl From<u32> for ItemKey {
    fn from(n: u32) -> Self {
        ItemKey::Int(n.into())
    }
}

impl TryFrom<u64> for ItemKey {
    type Error = TryFromIntError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        i64::try_from(n).map(ItemKey::Int)
    }
}

impl TryFrom<usize> for ItemKey {
    type Error = TryFromIntError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        i64::try_from(n).map(ItemKey::Int)
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        ItemKey::Str(s)
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        ItemKey::Str(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::ItemKey;

    #[test]
    fn display_is_plain_value() {
        assert_eq!(ItemKey::from(42).to_string(), "42");
        assert_eq!(ItemKey::from("web-01").to_string(), "web-01");
    }

    #[test]
    fn unsigned_ids_convert_when_in_range() {
        assert_eq!(ItemKey::try_from(42u64), Ok(ItemKey::Int(42)));
        assert_eq!(ItemKey::try_from(7usize), Ok(ItemKey::Int(7)));
        assert!(ItemKey::try_from(u64::MAX).is_err());
    }

    #[test]
    fn int_and_str_with_same_text_are_distinct() {
        assert_ne!(ItemKey::from(7), ItemKey::from("7"));
    }

    #[test]
    fn deserializes_numbers_and_strings() {
        let keys: Vec<ItemKey> = serde_json::from_str(r#"[1, "two", -3]"#).unwrap();
        assert_eq!(
            keys,
            vec![ItemKey::Int(1), ItemKey::Str("two".into()), ItemKey::Int(-3)]
        );
    }
}
