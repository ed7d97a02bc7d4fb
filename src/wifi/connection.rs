use core::cell::Cell;

use embassy_sync::blocking_mutex::{
    raw::{CriticalSectionRawMutex, RawMutex},
    Mutex,
};
use log::{info, warn};

use super::telemetry::NetTelemetry;

// esp-wifi `wifi_err_reason_t` values that mean the credentials were rejected.
const REASON_AUTH_FAIL: u8 = 202;
const REASON_HANDSHAKE_TIMEOUT: u8 = 204;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub uplink_connected: bool,
    pub scanning_in_progress: bool,
    pub auth_failed: bool,
    /// The running scan stopped a pending uplink attempt and will restart it itself.
    pub scan_owns_uplink: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UplinkEvent {
    Connected,
    Disconnected { reason: u8 },
}

/// What the event loop should do after an uplink event was folded into the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UplinkEventAction {
    None,
    Reconnect,
    /// A scan took the uplink down and reconnects when it is done.
    DeferredToScan,
}

/// Shared connection flags plus counters, handed by reference to the driver event path,
/// the scan orchestrator and the status assembler.
pub struct NetState<M: RawMutex> {
    connection: Mutex<M, Cell<ConnectionState>>,
    telemetry: NetTelemetry,
}

pub type SharedNetState = NetState<CriticalSectionRawMutex>;

impl<M: RawMutex> Default for NetState<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> NetState<M> {
    pub const fn new() -> Self {
        Self {
            connection: Mutex::new(Cell::new(ConnectionState {
                uplink_connected: false,
                scanning_in_progress: false,
                auth_failed: false,
                scan_owns_uplink: false,
            })),
            telemetry: NetTelemetry::new(),
        }
    }

    pub fn snapshot(&self) -> ConnectionState {
        self.connection.lock(Cell::get)
    }

    pub fn telemetry(&self) -> &NetTelemetry {
        &self.telemetry
    }

    pub fn set_uplink_connected(&self, connected: bool) {
        self.update(|state| state.uplink_connected = connected);
    }

    /// Marks a scan as running. Returns the uplink flag observed at that instant, or `None`
    /// when another scan already holds the radio.
    pub(crate) fn try_begin_scan(&self) -> Option<bool> {
        self.connection.lock(|cell| {
            let mut state = cell.get();
            if state.scanning_in_progress {
                return None;
            }
            state.scanning_in_progress = true;
            state.scan_owns_uplink = !state.uplink_connected;
            cell.set(state);
            Some(state.uplink_connected)
        })
    }

    pub(crate) fn end_scan(&self) {
        self.update(|state| {
            state.scanning_in_progress = false;
            state.scan_owns_uplink = false;
        });
    }

    pub fn on_uplink_event(&self, event: UplinkEvent) -> UplinkEventAction {
        self.connection.lock(|cell| {
            let mut state = cell.get();
            let action = match event {
                UplinkEvent::Connected => {
                    state.uplink_connected = true;
                    state.auth_failed = false;
                    info!("wifi: uplink connected");
                    UplinkEventAction::None
                }
                UplinkEvent::Disconnected { reason } => {
                    state.uplink_connected = false;
                    if state.scan_owns_uplink {
                        info!("wifi: uplink disconnected reason={} during scan", reason);
                        UplinkEventAction::DeferredToScan
                    } else {
                        if matches!(reason, REASON_AUTH_FAIL | REASON_HANDSHAKE_TIMEOUT) {
                            state.auth_failed = true;
                            warn!("wifi: uplink auth failed reason={}", reason);
                        } else {
                            info!("wifi: uplink disconnected reason={}", reason);
                        }
                        UplinkEventAction::Reconnect
                    }
                }
            };
            cell.set(state);
            action
        })
    }

    fn update(&self, f: impl FnOnce(&mut ConnectionState)) {
        self.connection.lock(|cell| {
            let mut state = cell.get();
            f(&mut state);
            cell.set(state);
        });
    }
}
