use core::net::Ipv4Addr;

use log::{debug, warn};

use super::config::MAX_STATIONS;
use super::driver::DhcpLeaseSource;
use super::types::{LeaseBinding, MacAddress};

/// MAC → IP view of the DHCP server's pool, rebuilt wholesale on every refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeaseIndex {
    bindings: heapless::Vec<LeaseBinding, MAX_STATIONS>,
    duplicates: u32,
}

impl LeaseIndex {
    pub const fn empty() -> Self {
        Self {
            bindings: heapless::Vec::new(),
            duplicates: 0,
        }
    }

    /// Pulls the bindings of the first `limit` associated stations (never more than
    /// [`MAX_STATIONS`]). Leases of stations that already left are skipped, so pool order
    /// never decides which live station loses its address. A MAC seen twice keeps its
    /// earliest binding.
    pub fn refresh(
        source: &impl DhcpLeaseSource,
        associated: &[MacAddress],
        limit: usize,
    ) -> Self {
        Self::from_bindings(source.leases(), associated, limit)
    }

    pub fn from_bindings(
        bindings: impl IntoIterator<Item = LeaseBinding>,
        associated: &[MacAddress],
        limit: usize,
    ) -> Self {
        let live = &associated[..associated.len().min(limit).min(MAX_STATIONS)];
        let mut index = Self::empty();
        let mut stale = 0usize;
        for binding in bindings {
            if !live.contains(&binding.mac) {
                stale += 1;
                continue;
            }
            if let Some(kept) = index.lookup(binding.mac) {
                index.duplicates += 1;
                warn!(
                    "wifi: duplicate lease mac={} kept={} ignored={}",
                    binding.mac, kept, binding.ip
                );
                continue;
            }
            // Cannot fail: every kept MAC is distinct and drawn from `live`.
            let _ = index.bindings.push(binding);
        }
        if stale > 0 {
            debug!("wifi: lease pool skipped={} without live station", stale);
        }
        index
    }

    pub fn lookup(&self, mac: MacAddress) -> Option<Ipv4Addr> {
        self.bindings
            .iter()
            .find(|binding| binding.mac == mac)
            .map(|binding| binding.ip)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings dropped during the last refresh because their MAC was already present.
    pub fn duplicates(&self) -> u32 {
        self.duplicates
    }
}
