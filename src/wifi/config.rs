use embassy_time::Duration;

/// Hard cap on simultaneously associated stations, matching the AP's `max_connection`.
pub const MAX_STATIONS: usize = 10;
/// Upper bound on access-point records kept from a single scan.
pub const MAX_SCAN_RECORDS: usize = 32;
pub const SSID_MAX: usize = 32;

// Policy baselines for the scan dance around a pending uplink connection.
//
// - A disconnect that is still draining makes some drivers reject the scan start with
//   "scan in progress", so the radio gets half a second to quiesce first.
// - Reconnecting immediately after scan completion races the driver's channel restore.
pub const SCAN_DISCONNECT_SETTLE_DEFAULT_MS: u32 = 500;
pub const SCAN_RECONNECT_SETTLE_DEFAULT_MS: u32 = 300;
const SCAN_SETTLE_MAX_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanPolicy {
    pub disconnect_settle_ms: u32,
    pub reconnect_settle_ms: u32,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self::defaults()
    }
}

impl ScanPolicy {
    pub const fn defaults() -> Self {
        Self {
            disconnect_settle_ms: SCAN_DISCONNECT_SETTLE_DEFAULT_MS,
            reconnect_settle_ms: SCAN_RECONNECT_SETTLE_DEFAULT_MS,
        }
    }

    pub const fn sanitized(self) -> Self {
        Self {
            disconnect_settle_ms: clamp_u32(self.disconnect_settle_ms, 0, SCAN_SETTLE_MAX_MS),
            reconnect_settle_ms: clamp_u32(self.reconnect_settle_ms, 0, SCAN_SETTLE_MAX_MS),
        }
    }

    pub const fn disconnect_settle(self) -> Duration {
        Duration::from_millis(self.disconnect_settle_ms as u64)
    }

    pub const fn reconnect_settle(self) -> Duration {
        Duration::from_millis(self.reconnect_settle_ms as u64)
    }
}

/// Effective station limit: the driver's configured connection count, never above the cap.
pub const fn station_limit(configured: u8) -> usize {
    let configured = configured as usize;
    if configured > MAX_STATIONS {
        MAX_STATIONS
    } else {
        configured
    }
}

const fn clamp_u32(value: u32, min: u32, max: u32) -> u32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}
