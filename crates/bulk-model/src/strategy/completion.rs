use std::{str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    AUTO_CLOSE_DELAY_MS,
    error::{ModelError, ModelResult},
};

/// Defines what the dialog does once every item has settled.
///
/// Strategies:
/// - `ManualDismiss`: Stay open until the operator closes the dialog, whatever the outcome.
/// - `AutoClose`: Close by itself after `delay_ms` when no item failed.
///   A run with at least one failure stays open so the operator can read the errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CompletionPolicy {
    /// The operator always dismisses the dialog explicitly.
    ManualDismiss,
    /// Close automatically after a clean run.
    #[serde(rename_all = "camelCase")]
    AutoClose { delay_ms: u64 },
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        CompletionPolicy::ManualDismiss
    }
}

impl CompletionPolicy {
    /// Auto-close with the standard delay.
    pub const fn auto_close() -> Self {
        CompletionPolicy::AutoClose {
            delay_ms: AUTO_CLOSE_DELAY_MS,
        }
    }

    /// Delay before closing a completed run, or `None` if the dialog must wait for the operator.
    pub fn close_delay(&self, has_error: bool) -> Option<Duration> {
        match self {
            CompletionPolicy::AutoClose { delay_ms } if !has_error => {
                Some(Duration::from_millis(*delay_ms))
            }
            _ => None,
        }
    }
}

impl FromStr for CompletionPolicy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" | "manual-dismiss" | "" => Ok(CompletionPolicy::ManualDismiss),
            "auto" | "auto-close" => Ok(CompletionPolicy::auto_close()),
            other => Err(ModelError::UnknownCompletion(other.to_string())),
        }
    }
}
