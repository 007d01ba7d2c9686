use std::fmt;

use bulk_model::{DialogLabels, ItemKey, ItemStatus, OutcomeMap, RunState};

use super::{
    buttons::{ActionButton, ButtonVariant},
    progress::ProgressView,
};
use crate::gate::ConfirmationGate;

/// Color class of a status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Danger,
}

/// Rendered status of one item in the result table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusCell {
    Pending { label: String },
    Success { label: String },
    Failure { message: String },
}

impl StatusCell {
    pub fn tone(&self) -> Tone {
        match self {
            StatusCell::Pending { .. } => Tone::Info,
            StatusCell::Success { .. } => Tone::Success,
            StatusCell::Failure { .. } => Tone::Danger,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StatusCell::Pending { label } | StatusCell::Success { label } => label,
            StatusCell::Failure { message } => message,
        }
    }

    fn icon(&self) -> char {
        match self {
            StatusCell::Pending { .. } => '…',
            StatusCell::Success { .. } => '✔',
            StatusCell::Failure { .. } => '✖',
        }
    }
}

impl fmt::Display for StatusCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.text())
    }
}

/// Maps run state to what the operator sees, using the dialog's labels.
#[derive(Debug, Clone, Default)]
pub struct ResultPresenter {
    labels: DialogLabels,
}

impl ResultPresenter {
    pub fn new(labels: DialogLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &DialogLabels {
        &self.labels
    }

    /// Status cell for one entry. Depends on nothing but `status`.
    pub fn status(&self, status: ItemStatus<'_>) -> StatusCell {
        match status {
            ItemStatus::Pending => StatusCell::Pending {
                label: self.labels.pending.clone(),
            },
            ItemStatus::Succeeded => StatusCell::Success {
                label: self.labels.success.clone(),
            },
            ItemStatus::Failed(msg) => StatusCell::Failure {
                message: msg.to_string(),
            },
        }
    }

    pub fn status_for(&self, outcomes: &OutcomeMap, key: &ItemKey) -> StatusCell {
        self.status(outcomes.status(key))
    }

    pub fn progress(&self, snapshot: &bulk_model::RunSnapshot) -> ProgressView {
        ProgressView::from_snapshot(snapshot, &self.labels)
    }

    /// Dialog description; only shown before the run starts.
    pub fn description(&self, state: RunState) -> Option<&str> {
        match state {
            RunState::Idle => self.labels.prompt.as_deref(),
            _ => None,
        }
    }

    /// Confirmation checkbox label, while it can still be ticked.
    pub fn confirmation(&self, gate: &ConfirmationGate, state: RunState) -> Option<&str> {
        if !gate.is_required() || state != RunState::Idle {
            return None;
        }
        self.labels.confirm_prompt()
    }

    /// Footer buttons for the given state.
    ///
    /// Before completion: submit (disabled unless the gate allows a start) and cancel.
    /// After completion: close only.
    pub fn buttons(&self, gate: &ConfirmationGate, state: RunState) -> Vec<ActionButton> {
        if state == RunState::Completed {
            return vec![ActionButton::new(
                "close",
                &self.labels.close,
                ButtonVariant::Secondary,
            )];
        }

        let running = state == RunState::Running;
        let submit_label = if running {
            &self.labels.submitting
        } else {
            &self.labels.submit
        };
        let submit_variant = if self.labels.is_danger {
            ButtonVariant::Danger
        } else {
            ButtonVariant::Primary
        };

        vec![
            ActionButton::new("submit", submit_label, submit_variant)
                .disabled(!gate.can_start(state))
                .loading(running),
            ActionButton::new("cancel", &self.labels.cancel, ButtonVariant::Link),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulk_model::Outcome;

    fn presenter() -> ResultPresenter {
        ResultPresenter::new(DialogLabels {
            pending: "Waiting".into(),
            success: "Deleted".into(),
            ..Default::default()
        })
    }

    #[test]
    fn three_exclusive_states() {
        let p = presenter();
        let mut map = OutcomeMap::new();
        map.settle(ItemKey::from(1), Outcome::Succeeded);
        map.settle(ItemKey::from(2), Outcome::Failed("conflict".into()));

        let pending = p.status_for(&map, &ItemKey::from(3));
        let ok = p.status_for(&map, &ItemKey::from(1));
        let failed = p.status_for(&map, &ItemKey::from(2));

        assert_eq!(pending.tone(), Tone::Info);
        assert_eq!(pending.text(), "Waiting");
        assert_eq!(ok.tone(), Tone::Success);
        assert_eq!(ok.text(), "Deleted");
        assert_eq!(failed.tone(), Tone::Danger);
        assert_eq!(failed.text(), "conflict");
    }

    #[test]
    fn status_is_a_function_of_the_entry_only() {
        let p = presenter();
        let mut a = OutcomeMap::new();
        a.settle(ItemKey::from(1), Outcome::Failed("conflict".into()));
        let mut b = a.clone();
        b.settle(ItemKey::from(9), Outcome::Succeeded);

        let key = ItemKey::from(1);
        assert_eq!(p.status_for(&a, &key), p.status_for(&a, &key));
        assert_eq!(p.status_for(&a, &key), p.status_for(&b, &key));
    }

    #[test]
    fn display_includes_icon() {
        let cell = StatusCell::Failure {
            message: "conflict".into(),
        };
        assert_eq!(cell.to_string(), "✖ conflict");
    }

    #[test]
    fn buttons_before_and_after_run() {
        let p = presenter();
        let gate = ConfirmationGate::new(true);

        let idle = p.buttons(&gate, RunState::Idle);
        assert_eq!(idle.len(), 2);
        assert_eq!(idle[0].key, "submit");
        assert!(idle[0].disabled);

        let done = p.buttons(&ConfirmationGate::new(false), RunState::Completed);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].key, "close");
        assert_eq!(done[0].label, "Close");
    }

    #[test]
    fn running_submit_is_loading_and_disabled() {
        let p = ResultPresenter::new(DialogLabels {
            is_danger: true,
            ..Default::default()
        });
        let buttons = p.buttons(&ConfirmationGate::new(false), RunState::Running);

        assert_eq!(buttons[0].label, "Submitting");
        assert_eq!(buttons[0].variant, ButtonVariant::Danger);
        assert!(buttons[0].loading);
        assert!(buttons[0].disabled);
    }

    #[test]
    fn prompt_and_confirmation_hide_once_running() {
        let p = ResultPresenter::new(DialogLabels {
            prompt: Some("Delete 3 hosts?".into()),
            confirm: Some("I understand".into()),
            ..Default::default()
        });
        let gate = ConfirmationGate::new(true);

        assert_eq!(p.description(RunState::Idle), Some("Delete 3 hosts?"));
        assert_eq!(p.confirmation(&gate, RunState::Idle), Some("I understand"));
        assert_eq!(p.description(RunState::Running), None);
        assert_eq!(p.confirmation(&gate, RunState::Completed), None);
    }
}
