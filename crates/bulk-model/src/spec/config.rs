use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CONCURRENCY, DEFAULT_PER_PAGE,
    error::{ModelError, ModelResult},
    strategy::CompletionPolicy,
};

/// Execution settings for one bulk action dialog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkConfig {
    /// Maximum number of item actions in flight at once.
    pub concurrency: usize,
    /// What happens after every item settled.
    pub completion: CompletionPolicy,
    /// Initial page size of the item and result tables.
    pub per_page: usize,
}

impl Default for BulkConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            completion: CompletionPolicy::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl BulkConfig {
    /// Validate the configuration before a dialog is built.
    ///
    /// Rules:
    /// - `concurrency` is at least 1.
    /// - `per_page` is at least 1.
    pub fn validate(&self) -> ModelResult<()> {
        if self.concurrency == 0 {
            return Err(ModelError::Invalid("concurrency must be at least 1".into()));
        }
        if self.per_page == 0 {
            return Err(ModelError::Invalid("perPage must be at least 1".into()));
        }
        Ok(())
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_completion(mut self, completion: CompletionPolicy) -> Self {
        self.completion = completion;
        self
    }

    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = BulkConfig::default();
        assert_eq!(cfg.concurrency, 5);
        assert_eq!(cfg.per_page, 10);
        assert_eq!(cfg.completion, CompletionPolicy::ManualDismiss);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: BulkConfig = serde_json::from_str(r#"{"concurrency": 2}"#).unwrap();
        assert_eq!(cfg.concurrency, 2);
        assert_eq!(cfg.per_page, 10);
    }

    #[test]
    fn zero_values_are_rejected() {
        assert!(BulkConfig::default().with_concurrency(0).validate().is_err());
        assert!(BulkConfig::default().with_per_page(0).validate().is_err());
    }
}
