//! Collaborator seams: radio driver, DHCP server, IP stack and MAC filter list.
//!
//! Everything here is implemented by the platform layer; this crate only sequences calls.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Duration;
use log::debug;

use super::types::{
    ApInfo, ApRecord, FilterListMode, LeaseBinding, MacAddress, UplinkIpInfo, UplinkOverrides,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DriverError {
    #[error("radio not started")]
    NotStarted,
    #[error("radio busy with another operation")]
    Busy,
    #[error("operation timed out")]
    Timeout,
    #[error("driver error code {0}")]
    Code(i32),
}

/// Adapters always run an active scan that skips hidden SSIDs; only the channel varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// `None` sweeps every channel.
    pub channel: Option<u8>,
}

impl ScanConfig {
    pub const fn all_channels() -> Self {
        Self {
            channel: None,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait RadioDriver {
    async fn disconnect(&mut self) -> Result<(), DriverError>;

    async fn connect(&mut self) -> Result<(), DriverError>;

    /// Starts a scan and resolves once the driver reports completion, yielding the number of
    /// access points found.
    async fn start_scan(&mut self, config: ScanConfig) -> Result<u16, DriverError>;

    /// Records of the last completed scan, in driver order.
    fn scan_results(
        &mut self,
        count: u16,
    ) -> Result<impl Iterator<Item = ApRecord> + '_, DriverError>;

    /// Lets the radio quiesce between control operations.
    async fn settle(&mut self, duration: Duration);

    /// `None` when the uplink is not (or no longer) associated.
    fn current_ap_info(&mut self) -> Option<ApInfo>;

    /// Stations currently associated with the soft-AP, in association-slot order.
    fn associated_stations(&mut self) -> &[MacAddress];

    /// `max_connection` the soft-AP was configured with.
    fn max_connections(&self) -> u8;
}

pub trait DhcpLeaseSource {
    fn leases(&self) -> impl Iterator<Item = LeaseBinding> + '_;
}

pub trait IpStack {
    /// Address, gateway and main DNS of the station interface, if it has a lease.
    fn uplink_ip_info(&self) -> Option<UplinkIpInfo>;

    fn overrides(&self) -> UplinkOverrides;

    fn ap_ip(&self) -> core::net::Ipv4Addr;
}

pub trait FilterListSource {
    type Payload;

    fn mode(&self) -> FilterListMode;

    /// `None` means the list is empty.
    fn payload(&self) -> Option<Self::Payload>;
}

/// Turns a callback-style "scan done" event into something `start_scan` can await.
///
/// The driver adapter calls [`begin`](Self::begin) before kicking the vendor scan, the event
/// handler calls [`complete`](Self::complete), and the adapter awaits [`wait`](Self::wait).
pub struct ScanCompletion<M: RawMutex> {
    done: Signal<M, Result<u16, DriverError>>,
}

impl<M: RawMutex> Default for ScanCompletion<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> ScanCompletion<M> {
    pub const fn new() -> Self {
        Self {
            done: Signal::new(),
        }
    }

    /// Drops a completion left over from an earlier scan.
    pub fn begin(&self) {
        self.done.reset();
    }

    /// `status` is the vendor's raw error code, `0` meaning success.
    pub fn complete(&self, status: i32, count: u16) {
        debug!("wifi: scan_done status={} count={}", status, count);
        let result = if status == 0 {
            Ok(count)
        } else {
            Err(DriverError::Code(status))
        };
        self.done.signal(result);
    }

    pub fn fail(&self, error: DriverError) {
        self.done.signal(Err(error));
    }

    pub async fn wait(&self) -> Result<u16, DriverError> {
        self.done.wait().await
    }
}
