use core::net::Ipv4Addr;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use embassy_time::Duration;

use super::connection::{NetState, UplinkEvent, UplinkEventAction};
use super::driver::{
    DhcpLeaseSource, DriverError, FilterListSource, IpStack, RadioDriver, ScanCompletion,
    ScanConfig,
};
use super::types::{
    ApInfo, ApRecord, AuthMode, FilterListMode, LeaseBinding, MacAddress, Ssid, UplinkIpInfo,
    UplinkOverrides,
};

pub(crate) type TestNet = NetState<NoopRawMutex>;

pub(crate) fn mac(n: u8) -> MacAddress {
    MacAddress::new([0xAA, 0xAA, 0xAA, 0xAA, 0xAA, n])
}

pub(crate) fn ip(n: u8) -> Ipv4Addr {
    Ipv4Addr::new(192, 168, 4, n)
}

pub(crate) fn ap(n: u8, rssi: i8) -> ApRecord {
    ApRecord {
        channel: n % 13 + 1,
        bssid: MacAddress::new([0x10, 0x20, 0x30, 0x40, 0x50, n]),
        ssid: Ssid::from_bytes(&[b'a', b'p', b'0' + n % 10]),
        rssi,
        auth_mode: AuthMode::Wpa2Psk,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RadioCall {
    Disconnect,
    Settle(Duration),
    StartScan,
    ScanResults(u16),
    Connect,
    ApInfo,
}

/// Records every driver call together with the scanning flag seen at that moment.
pub(crate) struct FakeRadio<'a> {
    net: &'a TestNet,
    pub(crate) calls: Vec<(RadioCall, bool)>,
    pub(crate) scan: Result<Vec<ApRecord>, DriverError>,
    pub(crate) results_error: Option<DriverError>,
    pub(crate) ap_info: Option<ApInfo>,
    pub(crate) stations: Vec<MacAddress>,
    pub(crate) max_connections: u8,
    /// Delivered to the shared state while the scan is running.
    pub(crate) scan_event: Option<UplinkEvent>,
    pub(crate) event_actions: Vec<UplinkEventAction>,
    completion: ScanCompletion<NoopRawMutex>,
}

impl<'a> FakeRadio<'a> {
    pub(crate) fn new(net: &'a TestNet) -> Self {
        Self {
            net,
            calls: Vec::new(),
            scan: Ok(Vec::new()),
            results_error: None,
            ap_info: None,
            stations: Vec::new(),
            max_connections: 10,
            scan_event: None,
            event_actions: Vec::new(),
            completion: ScanCompletion::new(),
        }
    }

    pub(crate) fn call_kinds(&self) -> Vec<RadioCall> {
        self.calls.iter().map(|(call, _)| *call).collect()
    }

    fn record(&mut self, call: RadioCall) {
        let scanning = self.net.snapshot().scanning_in_progress;
        self.calls.push((call, scanning));
    }
}

impl RadioDriver for FakeRadio<'_> {
    async fn disconnect(&mut self) -> Result<(), DriverError> {
        self.record(RadioCall::Disconnect);
        Ok(())
    }

    async fn connect(&mut self) -> Result<(), DriverError> {
        self.record(RadioCall::Connect);
        Ok(())
    }

    async fn start_scan(&mut self, config: ScanConfig) -> Result<u16, DriverError> {
        assert_eq!(config, ScanConfig::all_channels());
        self.record(RadioCall::StartScan);
        if let Some(event) = self.scan_event {
            let action = self.net.on_uplink_event(event);
            self.event_actions.push(action);
        }
        self.completion.begin();
        // Stands in for the vendor's scan-done event firing.
        match &self.scan {
            Ok(records) => self.completion.complete(0, records.len() as u16),
            Err(err) => self.completion.fail(*err),
        }
        self.completion.wait().await
    }

    fn scan_results(
        &mut self,
        count: u16,
    ) -> Result<impl Iterator<Item = ApRecord> + '_, DriverError> {
        self.record(RadioCall::ScanResults(count));
        if let Some(err) = self.results_error {
            return Err(err);
        }
        let records = self.scan.as_deref().unwrap_or(&[]);
        Ok(records.iter().take(count as usize).cloned())
    }

    async fn settle(&mut self, duration: Duration) {
        self.record(RadioCall::Settle(duration));
    }

    fn current_ap_info(&mut self) -> Option<ApInfo> {
        self.record(RadioCall::ApInfo);
        self.ap_info.clone()
    }

    fn associated_stations(&mut self) -> &[MacAddress] {
        &self.stations
    }

    fn max_connections(&self) -> u8 {
        self.max_connections
    }
}

#[derive(Default)]
pub(crate) struct FakeDhcp {
    leases: Vec<LeaseBinding>,
}

impl FakeDhcp {
    pub(crate) fn with(bindings: &[(MacAddress, Ipv4Addr)]) -> Self {
        let mut dhcp = Self::default();
        dhcp.set(bindings);
        dhcp
    }

    pub(crate) fn set(&mut self, bindings: &[(MacAddress, Ipv4Addr)]) {
        self.leases = bindings
            .iter()
            .map(|&(mac, ip)| LeaseBinding { mac, ip })
            .collect();
    }
}

impl DhcpLeaseSource for FakeDhcp {
    fn leases(&self) -> impl Iterator<Item = LeaseBinding> + '_ {
        self.leases.iter().copied()
    }
}

pub(crate) struct FakeIpStack {
    pub(crate) uplink: Option<UplinkIpInfo>,
    pub(crate) overrides: UplinkOverrides,
    pub(crate) ap_ip: Ipv4Addr,
}

impl Default for FakeIpStack {
    fn default() -> Self {
        Self {
            uplink: None,
            overrides: UplinkOverrides::default(),
            ap_ip: Ipv4Addr::new(192, 168, 4, 1),
        }
    }
}

impl IpStack for FakeIpStack {
    fn uplink_ip_info(&self) -> Option<UplinkIpInfo> {
        self.uplink
    }

    fn overrides(&self) -> UplinkOverrides {
        self.overrides
    }

    fn ap_ip(&self) -> Ipv4Addr {
        self.ap_ip
    }
}

#[derive(Default)]
pub(crate) struct FakeFilterList {
    pub(crate) mode: FilterListMode,
    pub(crate) entries: Option<Vec<MacAddress>>,
}

impl FilterListSource for FakeFilterList {
    type Payload = Vec<MacAddress>;

    fn mode(&self) -> FilterListMode {
        self.mode
    }

    fn payload(&self) -> Option<Vec<MacAddress>> {
        self.entries.clone()
    }
}
