pub mod config;
pub mod connection;
pub mod driver;
pub mod leases;
pub mod scan;
#[cfg(feature = "serde")]
mod serialize;
pub mod stations;
pub mod status;
pub mod telemetry;
#[cfg(test)]
pub(crate) mod test_support;
pub mod types;

pub use config::{ScanPolicy, MAX_SCAN_RECORDS, MAX_STATIONS, SSID_MAX};
pub use connection::{ConnectionState, NetState, SharedNetState, UplinkEvent, UplinkEventAction};
pub use driver::{
    DhcpLeaseSource, DriverError, FilterListSource, IpStack, RadioDriver, ScanCompletion,
    ScanConfig,
};
pub use leases::LeaseIndex;
pub use scan::{ScanError, ScanOrchestrator, ScanPhase};
#[cfg(feature = "serde")]
pub use serialize::ScanReport;
pub use stations::{merge_stations, StationList};
pub use status::{assemble_status, StatusSnapshot, StatusSources};
pub use telemetry::{NetTelemetry, NetTelemetrySnapshot};
pub use types::{
    ApInfo, ApList, ApRecord, AuthMode, FilterListMode, LeaseBinding, MacAddress,
    MacParseError, Ssid, StationRecord, UplinkIpInfo, UplinkOverrides,
};
