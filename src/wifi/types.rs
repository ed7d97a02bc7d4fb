use core::fmt;
use core::net::Ipv4Addr;
use core::str::FromStr;

use super::config::{MAX_SCAN_RECORDS, SSID_MAX};

/// 6-byte IEEE 802 physical address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 6]> for MacAddress {
    fn from(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

impl fmt::Debug for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacAddress({self})")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MacParseError {
    #[error("expected 6 colon-separated octets")]
    WrongLength,
    #[error("octet {index} is not two hex digits")]
    InvalidOctet { index: usize },
}

impl FromStr for MacAddress {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; 6];
        let mut parts = s.split(':');
        for (index, slot) in bytes.iter_mut().enumerate() {
            let part = parts.next().ok_or(MacParseError::WrongLength)?;
            if part.len() != 2 || !part.bytes().all(|byte| byte.is_ascii_hexdigit()) {
                return Err(MacParseError::InvalidOctet { index });
            }
            *slot = u8::from_str_radix(part, 16)
                .map_err(|_| MacParseError::InvalidOctet { index })?;
        }
        if parts.next().is_some() {
            return Err(MacParseError::WrongLength);
        }
        Ok(Self(bytes))
    }
}

/// SSID as reported by the radio: up to 32 opaque bytes, not necessarily UTF-8.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Ssid(heapless::Vec<u8, SSID_MAX>);

impl Ssid {
    pub const fn empty() -> Self {
        Self(heapless::Vec::new())
    }

    /// Copies at most [`SSID_MAX`] bytes, stopping at the first NUL like the driver's
    /// fixed `[u8; 33]` field.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(bytes.len())
            .min(SSID_MAX);
        let mut ssid = heapless::Vec::new();
        // Cannot fail: len <= capacity.
        let _ = ssid.extend_from_slice(&bytes[..len]);
        Self(ssid)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ssid(\"{self}\")")
    }
}

impl From<&str> for Ssid {
    fn from(value: &str) -> Self {
        Self::from_bytes(value.as_bytes())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Open,
    Wep,
    WpaPsk,
    Wpa2Psk,
    WpaWpa2Psk,
    Wpa2Enterprise,
    Wpa3Psk,
    Wpa2Wpa3Psk,
    WapiPsk,
    Other(u8),
}

impl AuthMode {
    pub const fn code(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Wep => 1,
            Self::WpaPsk => 2,
            Self::Wpa2Psk => 3,
            Self::WpaWpa2Psk => 4,
            Self::Wpa2Enterprise => 5,
            Self::Wpa3Psk => 6,
            Self::Wpa2Wpa3Psk => 7,
            Self::WapiPsk => 8,
            Self::Other(code) => code,
        }
    }

    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Open,
            1 => Self::Wep,
            2 => Self::WpaPsk,
            3 => Self::Wpa2Psk,
            4 => Self::WpaWpa2Psk,
            5 => Self::Wpa2Enterprise,
            6 => Self::Wpa3Psk,
            7 => Self::Wpa2Wpa3Psk,
            8 => Self::WapiPsk,
            other => Self::Other(other),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FilterListMode {
    Allow,
    #[default]
    Deny,
}

impl FilterListMode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Deny => "Deny",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeaseBinding {
    pub mac: MacAddress,
    pub ip: Ipv4Addr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationRecord {
    pub mac: MacAddress,
    /// `None` while the station is associated but has not finished DHCP.
    pub ip: Option<Ipv4Addr>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApRecord {
    pub channel: u8,
    pub bssid: MacAddress,
    pub ssid: Ssid,
    pub rssi: i8,
    pub auth_mode: AuthMode,
}

pub type ApList = heapless::Vec<ApRecord, MAX_SCAN_RECORDS>;

/// Identity and signal of the AP the uplink is associated with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApInfo {
    pub ssid: Ssid,
    pub rssi: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UplinkIpInfo {
    pub ip: Ipv4Addr,
    pub gateway: Ipv4Addr,
    pub dns: Ipv4Addr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UplinkOverrides {
    pub static_ip: bool,
    pub custom_dns: bool,
    /// Resolver handed out when either override is active.
    pub dns: Option<Ipv4Addr>,
}

impl UplinkOverrides {
    pub const fn active(&self) -> bool {
        self.static_ip || self.custom_dns
    }
}
