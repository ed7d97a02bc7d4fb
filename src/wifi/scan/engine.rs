use statig::blocking::IntoStateMachineExt as _;

use super::machine::{DispatchContext, ScanEvent, ScanMachine, ScanPhase, ScanStep};

#[derive(Clone, Copy, Debug)]
pub(super) struct ScanApplyResult {
    pub(super) before: ScanPhase,
    pub(super) after: ScanPhase,
    pub(super) step: Option<ScanStep>,
}

impl ScanApplyResult {
    pub(super) fn rejected(self) -> bool {
        self.step.is_none()
    }
}

pub(super) struct ScanEngine {
    machine: statig::blocking::StateMachine<ScanMachine>,
}

impl ScanEngine {
    pub(super) fn new() -> Self {
        Self {
            machine: ScanMachine::new().state_machine(),
        }
    }

    pub(super) fn phase(&self) -> ScanPhase {
        self.machine.inner().phase
    }

    pub(super) fn apply(&mut self, event: ScanEvent) -> ScanApplyResult {
        let before = self.phase();
        let mut context = DispatchContext::default();
        self.machine.handle_with_context(&event, &mut context);
        ScanApplyResult {
            before,
            after: self.phase(),
            step: context.step,
        }
    }
}
