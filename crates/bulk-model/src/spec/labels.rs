use serde::{Deserialize, Serialize};

/// Operator-facing text of a bulk action dialog.
///
/// `confirm` doubles as the switch for the confirmation checkbox: when it is
/// set, the run cannot start until the operator ticks the box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DialogLabels {
    pub title: String,
    /// Description shown above the item list before the run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    pub submit: String,
    /// Submit button text while the run is in progress.
    pub submitting: String,
    /// Progress bar title while the run is in progress.
    pub submitting_title: String,
    /// Confirmation checkbox label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
    pub cancel: String,
    /// Progress bar title once any item failed.
    pub error: String,
    pub close: String,
    pub success: String,
    pub pending: String,
    /// Render the dialog as destructive (warning icon, danger button).
    pub is_danger: bool,
}

impl Default for DialogLabels {
    fn default() -> Self {
        Self {
            title: "Bulk action".into(),
            prompt: None,
            submit: "Submit".into(),
            submitting: "Submitting".into(),
            submitting_title: "Processing".into(),
            confirm: None,
            cancel: "Cancel".into(),
            error: "There were errors".into(),
            close: "Close".into(),
            success: "Success".into(),
            pending: "Pending".into(),
            is_danger: false,
        }
    }
}

impl DialogLabels {
    /// Returns the confirmation text if a non-empty one is configured.
    pub fn confirm_prompt(&self) -> Option<&str> {
        self.confirm.as_deref().filter(|s| !s.trim().is_empty())
    }
}
