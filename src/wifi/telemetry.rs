use core::sync::atomic::{AtomicU32, Ordering};

#[derive(Default)]
pub struct NetTelemetry {
    scan_runs: AtomicU32,
    scan_failures: AtomicU32,
    scan_rejected: AtomicU32,
    scan_records_dropped: AtomicU32,
    status_requests: AtomicU32,
    stations_dropped: AtomicU32,
    duplicate_leases: AtomicU32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NetTelemetrySnapshot {
    pub scan_runs: u32,
    pub scan_failures: u32,
    pub scan_rejected: u32,
    pub scan_records_dropped: u32,
    pub status_requests: u32,
    pub stations_dropped: u32,
    pub duplicate_leases: u32,
}

impl NetTelemetry {
    pub const fn new() -> Self {
        Self {
            scan_runs: AtomicU32::new(0),
            scan_failures: AtomicU32::new(0),
            scan_rejected: AtomicU32::new(0),
            scan_records_dropped: AtomicU32::new(0),
            status_requests: AtomicU32::new(0),
            stations_dropped: AtomicU32::new(0),
            duplicate_leases: AtomicU32::new(0),
        }
    }

    pub(crate) fn record_scan_run(&self) {
        self.scan_runs.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan_failure(&self) {
        self.scan_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan_rejected(&self) {
        self.scan_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_scan_records_dropped(&self, count: u32) {
        if count > 0 {
            self.scan_records_dropped.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_status_request(&self) {
        self.status_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_stations_dropped(&self, count: u32) {
        if count > 0 {
            self.stations_dropped.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_duplicate_leases(&self, count: u32) {
        if count > 0 {
            self.duplicate_leases.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self) -> NetTelemetrySnapshot {
        NetTelemetrySnapshot {
            scan_runs: self.scan_runs.load(Ordering::Relaxed),
            scan_failures: self.scan_failures.load(Ordering::Relaxed),
            scan_rejected: self.scan_rejected.load(Ordering::Relaxed),
            scan_records_dropped: self.scan_records_dropped.load(Ordering::Relaxed),
            status_requests: self.status_requests.load(Ordering::Relaxed),
            stations_dropped: self.stations_dropped.load(Ordering::Relaxed),
            duplicate_leases: self.duplicate_leases.load(Ordering::Relaxed),
        }
    }
}
