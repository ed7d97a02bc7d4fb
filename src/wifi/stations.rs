use log::warn;

use super::config::MAX_STATIONS;
use super::leases::LeaseIndex;
use super::types::{MacAddress, StationRecord};

pub type StationList = heapless::Vec<StationRecord, MAX_STATIONS>;

/// One record per associated MAC, in association order, with the leased IP when the DHCP
/// exchange has completed.
///
/// The association list is authoritative: stations without a lease still appear. Output is
/// bounded by `limit` and by [`MAX_STATIONS`]; anything past that is dropped.
pub fn merge_stations(
    associated: impl IntoIterator<Item = MacAddress>,
    leases: &LeaseIndex,
    limit: usize,
) -> StationList {
    merge_counted(associated, leases, limit).0
}

pub(crate) fn merge_counted(
    associated: impl IntoIterator<Item = MacAddress>,
    leases: &LeaseIndex,
    limit: usize,
) -> (StationList, u32) {
    let limit = limit.min(MAX_STATIONS);
    let mut stations = StationList::new();
    let mut dropped = 0u32;
    for mac in associated {
        if stations.len() >= limit {
            dropped += 1;
            continue;
        }
        let _ = stations.push(StationRecord {
            mac,
            ip: leases.lookup(mac),
        });
    }
    if dropped > 0 {
        warn!(
            "wifi: association list over limit={} dropped={}",
            limit, dropped
        );
    }
    (stations, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wifi::test_support::{ip, mac};
    use crate::wifi::types::LeaseBinding;

    fn index(bindings: &[(MacAddress, core::net::Ipv4Addr)]) -> LeaseIndex {
        let live: Vec<MacAddress> = bindings.iter().map(|&(mac, _)| mac).collect();
        LeaseIndex::from_bindings(
            bindings
                .iter()
                .map(|&(mac, ip)| LeaseBinding { mac, ip }),
            &live,
            MAX_STATIONS,
        )
    }

    #[test]
    fn station_without_lease_is_kept_with_empty_ip() {
        let a1: MacAddress = "AA:AA:AA:AA:AA:01".parse().unwrap();
        let a2: MacAddress = "AA:AA:AA:AA:AA:02".parse().unwrap();
        let leases = index(&[(a1, "192.168.1.50".parse().unwrap())]);

        let stations = merge_stations([a1, a2], &leases, MAX_STATIONS);

        assert_eq!(
            stations.as_slice(),
            &[
                StationRecord {
                    mac: a1,
                    ip: Some("192.168.1.50".parse().unwrap()),
                },
                StationRecord { mac: a2, ip: None },
            ]
        );
    }

    #[test]
    fn preserves_association_order_and_count() {
        let leases = index(&[(mac(3), ip(13)), (mac(1), ip(11))]);
        let associated = [mac(1), mac(2), mac(3), mac(4)];

        let stations = merge_stations(associated, &leases, MAX_STATIONS);

        assert_eq!(stations.len(), associated.len());
        for (record, expected) in stations.iter().zip(associated) {
            assert_eq!(record.mac, expected);
            assert_eq!(record.ip, leases.lookup(expected));
        }
        assert_eq!(stations[0].ip, Some(ip(11)));
        assert_eq!(stations[1].ip, None);
    }

    #[test]
    fn empty_association_list_yields_no_records() {
        let leases = index(&[(mac(1), ip(11))]);
        let none: [MacAddress; 0] = [];
        assert!(merge_stations(none, &leases, MAX_STATIONS).is_empty());
    }

    #[test]
    fn oversized_association_list_is_truncated() {
        let associated: Vec<_> = (0..14).map(mac).collect();
        let (stations, dropped) =
            merge_counted(associated.iter().copied(), &LeaseIndex::empty(), 32);
        assert_eq!(stations.len(), MAX_STATIONS);
        assert_eq!(dropped, 4);
        assert_eq!(stations[9].mac, mac(9));
    }

    #[test]
    fn configured_limit_below_cap_applies() {
        let associated: Vec<_> = (0..5).map(mac).collect();
        let stations = merge_stations(associated, &LeaseIndex::empty(), 3);
        assert_eq!(stations.len(), 3);
    }
}
