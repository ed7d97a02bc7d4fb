mod engine;
mod machine;

use embassy_sync::blocking_mutex::raw::RawMutex;
use log::{debug, info, warn};

use super::config::ScanPolicy;
use super::connection::NetState;
use super::driver::{DriverError, RadioDriver, ScanConfig};
use super::types::ApList;

use engine::ScanEngine;
use machine::{ScanEvent, ScanStep};

pub use machine::ScanPhase;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("a scan is already in progress")]
    Busy,
    #[error("scan failed: {0}")]
    Driver(#[from] DriverError),
}

/// Clears the scanning flag however the scan future ends.
struct ScanGuard<'a, M: RawMutex> {
    net: &'a NetState<M>,
}

impl<M: RawMutex> Drop for ScanGuard<'_, M> {
    fn drop(&mut self) {
        self.net.end_scan();
    }
}

/// Runs one active scan at a time, suspending a pending uplink attempt around it.
///
/// A live uplink is never torn down: the radio scans while associated. When the uplink is
/// down the pending connection attempt is stopped first (some drivers refuse to scan while
/// a connect is cycling) and restarted afterwards, even if the scan itself failed. A live
/// uplink that drops mid-scan is left to the event path, which gets
/// [`UplinkEventAction::Reconnect`](crate::wifi::UplinkEventAction::Reconnect) for it.
pub struct ScanOrchestrator {
    engine: ScanEngine,
    policy: ScanPolicy,
}

impl Default for ScanOrchestrator {
    fn default() -> Self {
        Self::new(ScanPolicy::defaults())
    }
}

impl ScanOrchestrator {
    pub fn new(policy: ScanPolicy) -> Self {
        Self {
            engine: ScanEngine::new(),
            policy: policy.sanitized(),
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.engine.phase()
    }

    pub fn policy(&self) -> ScanPolicy {
        self.policy
    }

    fn step(&mut self, event: ScanEvent) -> Option<ScanStep> {
        let applied = self.engine.apply(event);
        if applied.rejected() {
            warn!("wifi: scan event {:?} rejected in {:?}", event, applied.before);
        } else {
            debug!("wifi: scan {:?} -> {:?}", applied.before, applied.after);
        }
        applied.step
    }

    pub async fn scan<D: RadioDriver, M: RawMutex>(
        &mut self,
        driver: &mut D,
        net: &NetState<M>,
    ) -> Result<ApList, ScanError> {
        let Some(uplink_connected) = net.try_begin_scan() else {
            net.telemetry().record_scan_rejected();
            warn!("wifi: scan rejected, another scan in progress");
            return Err(ScanError::Busy);
        };
        let _guard = ScanGuard { net };
        net.telemetry().record_scan_run();

        if self.engine.phase() != ScanPhase::Idle {
            // A previous scan future was dropped mid-sequence.
            warn!(
                "wifi: discarding abandoned scan in phase={:?}",
                self.engine.phase()
            );
            self.engine = ScanEngine::new();
        }

        if self.step(ScanEvent::Request { uplink_connected }) == Some(ScanStep::Disconnect) {
            if let Err(err) = driver.disconnect().await {
                warn!("wifi: pre-scan disconnect err={:?}", err);
            }
            driver.settle(self.policy.disconnect_settle()).await;
            self.step(ScanEvent::Settled);
        }

        let result = collect_scan(driver, net).await;
        if let Err(err) = &result {
            net.telemetry().record_scan_failure();
            warn!("wifi: scan failed err={}", err);
        }

        // Success or not, a torn-down uplink attempt is restored before returning.
        if self.step(ScanEvent::ScanFinished) == Some(ScanStep::Reconnect) {
            driver.settle(self.policy.reconnect_settle()).await;
            if let Err(err) = driver.connect().await {
                warn!("wifi: post-scan reconnect err={:?}", err);
            }
            self.step(ScanEvent::Reconnected);
        }

        result
    }
}

async fn collect_scan<D: RadioDriver, M: RawMutex>(
    driver: &mut D,
    net: &NetState<M>,
) -> Result<ApList, ScanError> {
    info!("wifi: scan start");
    let count = driver.start_scan(ScanConfig::all_channels()).await?;
    let mut aps = ApList::new();
    let mut dropped = 0u32;
    for record in driver.scan_results(count)? {
        if aps.push(record).is_err() {
            dropped += 1;
        }
    }
    if dropped > 0 {
        warn!(
            "wifi: scan found={} over cap={} dropped={}",
            count,
            aps.capacity(),
            dropped
        );
        net.telemetry().record_scan_records_dropped(dropped);
    }
    info!("wifi: scan done found={} kept={}", count, aps.len());
    Ok(aps)
}
