use bulk_model::RunState;

/// Pre-flight checkbox that must be ticked before a run may start.
///
/// Without a configured confirmation prompt the gate starts out confirmed.
/// Once a run leaves `Idle` the checkbox is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationGate {
    required: bool,
    confirmed: bool,
}

impl ConfirmationGate {
    pub fn new(required: bool) -> Self {
        Self {
            required,
            confirmed: !required,
        }
    }

    /// Gate for an optional confirmation prompt.
    pub fn for_prompt(prompt: Option<&str>) -> Self {
        Self::new(prompt.is_some())
    }

    /// Whether the checkbox is shown at all.
    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Tick or untick the checkbox. Ignored unless the run is still idle.
    ///
    /// Returns `true` if the value was applied.
    pub fn set_confirmed(&mut self, confirmed: bool, state: RunState) -> bool {
        if !self.required || state != RunState::Idle {
            return false;
        }
        self.confirmed = confirmed;
        true
    }

    /// Start is allowed only when confirmed and no run has started yet.
    pub fn can_start(&self, state: RunState) -> bool {
        self.confirmed && state == RunState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_prompt_means_confirmed() {
        let gate = ConfirmationGate::for_prompt(None);
        assert!(!gate.is_required());
        assert!(gate.can_start(RunState::Idle));
    }

    #[test]
    fn prompt_blocks_until_ticked() {
        let mut gate = ConfirmationGate::for_prompt(Some("I understand"));
        assert!(!gate.can_start(RunState::Idle));

        assert!(gate.set_confirmed(true, RunState::Idle));
        assert!(gate.can_start(RunState::Idle));

        assert!(gate.set_confirmed(false, RunState::Idle));
        assert!(!gate.can_start(RunState::Idle));
    }

    #[test]
    fn start_is_disabled_while_running_and_after_completion() {
        let gate = ConfirmationGate::new(false);
        assert!(!gate.can_start(RunState::Running));
        assert!(!gate.can_start(RunState::Completed));
    }

    #[test]
    fn checkbox_is_frozen_after_start() {
        let mut gate = ConfirmationGate::new(true);
        assert!(!gate.set_confirmed(true, RunState::Running));
        assert!(!gate.is_confirmed());
    }
}
