use std::fmt;

use bulk_model::{DialogLabels, RunSnapshot};

/// Color of the aggregate progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressVariant {
    Default,
    Success,
    Danger,
}

/// Aggregate progress bar state.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressView {
    /// Percentage in `0.0..=100.0`.
    pub value: f64,
    pub title: String,
    pub variant: ProgressVariant,
    /// Whether the percentage is printed next to the bar.
    pub show_measure: bool,
}

impl ProgressView {
    /// Derive the bar from a snapshot.
    ///
    /// Any failure turns the bar red with the error label, even while items are
    /// still running; the percentage is hidden once a failed run is complete.
    pub fn from_snapshot(snapshot: &RunSnapshot, labels: &DialogLabels) -> Self {
        let done = snapshot.all_settled();
        let (title, variant) = if snapshot.has_error {
            (&labels.error, ProgressVariant::Danger)
        } else if done {
            (&labels.success, ProgressVariant::Success)
        } else {
            (&labels.submitting_title, ProgressVariant::Default)
        };

        Self {
            value: snapshot.progress() * 100.0,
            title: title.clone(),
            variant,
            show_measure: !(snapshot.has_error && done),
        }
    }
}

impl fmt::Display for ProgressView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WIDTH: usize = 20;
        let filled = ((self.value / 100.0) * WIDTH as f64).round() as usize;
        let filled = filled.min(WIDTH);

        write!(
            f,
            "{} [{}{}]",
            self.title,
            "#".repeat(filled),
            "-".repeat(WIDTH - filled)
        )?;
        if self.show_measure {
            write!(f, " {:.0}%", self.value)?;
        }
        Ok(())
    }
}
