/// Visual weight of a dialog button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Danger,
    Secondary,
    Link,
}

/// One footer button of the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    /// Stable identifier: `submit`, `cancel` or `close`.
    pub key: &'static str,
    pub label: String,
    pub variant: ButtonVariant,
    pub disabled: bool,
    /// Show a spinner.
    pub loading: bool,
}

impl ActionButton {
    pub(crate) fn new(key: &'static str, label: &str, variant: ButtonVariant) -> Self {
        Self {
            key,
            label: label.to_string(),
            variant,
            disabled: false,
            loading: false,
        }
    }

    pub(crate) fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub(crate) fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}
