use core::net::Ipv4Addr;

use embassy_sync::blocking_mutex::raw::RawMutex;
use log::debug;

use super::config::station_limit;
use super::connection::NetState;
use super::driver::{DhcpLeaseSource, FilterListSource, IpStack, RadioDriver};
use super::leases::LeaseIndex;
use super::stations::{merge_counted, StationList};
use super::types::{FilterListMode, Ssid};

/// Point-in-time view of uplink, local clients and admission filter.
///
/// Address fields are `None` when unknown; the external form renders them as empty strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusSnapshot<P> {
    pub uplink_connected: bool,
    pub ssid: Ssid,
    pub rssi: i8,
    pub ip: Option<Ipv4Addr>,
    pub gateway: Option<Ipv4Addr>,
    pub dns: Option<Ipv4Addr>,
    pub static_ip: bool,
    pub custom_dns: bool,
    pub ap_ip: Ipv4Addr,
    pub filter_list_mode: FilterListMode,
    pub auth_failed: bool,
    pub scan_in_progress: bool,
    pub stations: StationList,
    pub filter_list: Option<P>,
}

pub struct StatusSources<'a, R, D, I, F> {
    pub radio: &'a mut R,
    pub dhcp: &'a D,
    pub ip_stack: &'a I,
    pub filter_list: &'a F,
}

pub fn assemble_status<R, D, I, F, M>(
    sources: StatusSources<'_, R, D, I, F>,
    net: &NetState<M>,
) -> StatusSnapshot<F::Payload>
where
    R: RadioDriver,
    D: DhcpLeaseSource,
    I: IpStack,
    F: FilterListSource,
    M: RawMutex,
{
    let StatusSources {
        radio,
        dhcp,
        ip_stack,
        filter_list,
    } = sources;
    let connection = net.snapshot();
    net.telemetry().record_status_request();

    let mut ssid = Ssid::empty();
    let mut rssi = 0;
    let mut ip = None;
    let mut gateway = None;
    let mut dns = None;
    if connection.uplink_connected {
        // The connected flag can run ahead of the driver's AP info; report blanks then.
        match radio.current_ap_info() {
            Some(info) => {
                ssid = info.ssid;
                rssi = info.rssi;
                if let Some(addresses) = ip_stack.uplink_ip_info() {
                    ip = Some(addresses.ip);
                    gateway = Some(addresses.gateway);
                    dns = Some(addresses.dns);
                }
            }
            None => debug!("wifi: status uplink flagged connected but no ap info"),
        }
    }

    let overrides = ip_stack.overrides();
    if overrides.active() {
        dns = overrides.dns;
    }

    let limit = station_limit(radio.max_connections());
    let associated = radio.associated_stations();
    let leases = LeaseIndex::refresh(dhcp, associated, limit);
    net.telemetry().record_duplicate_leases(leases.duplicates());
    let (stations, dropped) = merge_counted(associated.iter().copied(), &leases, limit);
    net.telemetry().record_stations_dropped(dropped);

    StatusSnapshot {
        uplink_connected: connection.uplink_connected,
        ssid,
        rssi,
        ip,
        gateway,
        dns,
        static_ip: overrides.static_ip,
        custom_dns: overrides.custom_dns,
        ap_ip: ip_stack.ap_ip(),
        filter_list_mode: filter_list.mode(),
        auth_failed: connection.auth_failed,
        scan_in_progress: connection.scanning_in_progress,
        stations,
        filter_list: filter_list.payload(),
    }
}
