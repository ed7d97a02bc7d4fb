//! External form of status and scan results, using the field names the web UI expects.

use core::fmt;
use core::net::Ipv4Addr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::status::StatusSnapshot;
use super::types::{ApRecord, FilterListMode, MacAddress, Ssid, StationRecord};

/// Renders an unknown address as an empty string.
struct AddrField(Option<Ipv4Addr>);

impl fmt::Display for AddrField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(addr) => write!(f, "{addr}"),
            None => Ok(()),
        }
    }
}

impl Serialize for AddrField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for Ssid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for FilterListMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl Serialize for StationRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut client = serializer.serialize_struct("Client", 2)?;
        client.serialize_field("ipAddress", &AddrField(self.ip))?;
        client.serialize_field("macAddress", &self.mac)?;
        client.end()
    }
}

impl Serialize for ApRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut ap = serializer.serialize_struct("Ap", 5)?;
        ap.serialize_field("c", &self.channel)?;
        ap.serialize_field("m", &self.bssid)?;
        ap.serialize_field("ss", &self.ssid)?;
        ap.serialize_field("r", &self.rssi)?;
        ap.serialize_field("e", &self.auth_mode.code())?;
        ap.end()
    }
}

impl<P: Serialize> Serialize for StatusSnapshot<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut status = serializer.serialize_struct("Status", 9)?;
        status.serialize_field("ssid", &self.ssid)?;
        status.serialize_field("gatewayAddress", &AddrField(self.gateway))?;
        status.serialize_field("ipAddress", &AddrField(self.ip))?;
        status.serialize_field("dns", &AddrField(self.dns))?;
        status.serialize_field("filterListType", &self.filter_list_mode)?;
        status.serialize_field("rss", &self.rssi)?;
        status.serialize_field("wifiAuthFail", &self.auth_failed)?;
        status.serialize_field("clients", self.stations.as_slice())?;
        match &self.filter_list {
            Some(list) => status.serialize_field("filterList", list)?,
            None => status.skip_field("filterList")?,
        }
        status.end()
    }
}

/// Scan results wrapped as `{"aps": [...]}`.
pub struct ScanReport<'a>(pub &'a [ApRecord]);

impl Serialize for ScanReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut report = serializer.serialize_struct("ScanReport", 1)?;
        report.serialize_field("aps", self.0)?;
        report.end()
    }
}
