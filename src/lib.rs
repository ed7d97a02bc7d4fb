//! Station/uplink status aggregation for a WiFi AP+STA router.
//!
//! The radio driver, DHCP server, IP stack and MAC filter list live outside this crate and
//! are reached through the traits in [`wifi::driver`].

#![cfg_attr(not(test), no_std)]

pub mod wifi;

pub use wifi::{
    assemble_status, merge_stations, ApList, ApRecord, AuthMode, ConnectionState, DriverError,
    LeaseBinding, LeaseIndex, MacAddress, NetState, ScanError, ScanOrchestrator, ScanPolicy,
    StationList, StationRecord, StatusSnapshot,
};
