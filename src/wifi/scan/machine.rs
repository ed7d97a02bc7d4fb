use statig::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanPhase {
    Idle,
    Disconnecting,
    Scanning,
    Reconnecting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ScanEvent {
    Request { uplink_connected: bool },
    Settled,
    ScanFinished,
    Reconnected,
}

/// Driver work the runner has to do before feeding the next event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ScanStep {
    Disconnect,
    Scan,
    Reconnect,
    Finish,
}

#[derive(Clone, Copy, Debug)]
pub(super) struct ScanMachine {
    pub(super) phase: ScanPhase,
    /// Set when this scan tore down a pending uplink attempt and owes a reconnect.
    pub(super) resume_uplink: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct DispatchContext {
    /// `None` when the event does not apply to the current phase.
    pub(super) step: Option<ScanStep>,
}

impl ScanMachine {
    pub(super) fn new() -> Self {
        Self {
            phase: ScanPhase::Idle,
            resume_uplink: false,
        }
    }
}

#[state_machine(initial = "State::idle()")]
impl ScanMachine {
    #[state]
    fn idle(&mut self, context: &mut DispatchContext, event: &ScanEvent) -> Outcome<State> {
        match event {
            ScanEvent::Request {
                uplink_connected: false,
            } => {
                self.resume_uplink = true;
                self.phase = ScanPhase::Disconnecting;
                context.step = Some(ScanStep::Disconnect);
                Transition(State::disconnecting())
            }
            ScanEvent::Request {
                uplink_connected: true,
            } => {
                self.resume_uplink = false;
                self.phase = ScanPhase::Scanning;
                context.step = Some(ScanStep::Scan);
                Transition(State::scanning())
            }
            _ => Handled,
        }
    }

    #[state]
    fn disconnecting(
        &mut self,
        context: &mut DispatchContext,
        event: &ScanEvent,
    ) -> Outcome<State> {
        match event {
            ScanEvent::Settled => {
                self.phase = ScanPhase::Scanning;
                context.step = Some(ScanStep::Scan);
                Transition(State::scanning())
            }
            _ => Handled,
        }
    }

    #[state]
    fn scanning(&mut self, context: &mut DispatchContext, event: &ScanEvent) -> Outcome<State> {
        match event {
            // Success or not, a torn-down uplink attempt is always restored.
            ScanEvent::ScanFinished if self.resume_uplink => {
                self.phase = ScanPhase::Reconnecting;
                context.step = Some(ScanStep::Reconnect);
                Transition(State::reconnecting())
            }
            ScanEvent::ScanFinished => {
                self.phase = ScanPhase::Idle;
                context.step = Some(ScanStep::Finish);
                Transition(State::idle())
            }
            _ => Handled,
        }
    }

    #[state]
    fn reconnecting(
        &mut self,
        context: &mut DispatchContext,
        event: &ScanEvent,
    ) -> Outcome<State> {
        match event {
            ScanEvent::Reconnected => {
                self.resume_uplink = false;
                self.phase = ScanPhase::Idle;
                context.step = Some(ScanStep::Finish);
                Transition(State::idle())
            }
            _ => Handled,
        }
    }
}
