//! Worker pool management.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::matcher::PatternSet;
use crate::stats::SearchStats;

use super::cpu::CpuWorker;

/// A found vanity address with its private key.
#[derive(Debug, Clone)]
pub struct VanityResult {
    /// EIP-55 checksummed address with 0x prefix.
    pub address: String,
    /// Private key, 0x-prefixed hex.
    pub private_key: String,
    /// Worker that found it.
    pub worker_id: usize,
}

impl fmt::Display for VanityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address: {}\nPrivate Key: {}", self.address, self.private_key)
    }
}

/// Spawns and coordinates the generation workers.
///
/// Owns the stop flag, the shared stats context and the receiving end of the
/// single-slot match handoff. Matches are rare relative to attempts, so one
/// in-flight slot is enough; a second simultaneous finder simply waits.
pub struct WorkerPool {
    num_workers: usize,
    handles: Option<Vec<JoinHandle<()>>>,
    result_rx: Option<Receiver<VanityResult>>,
    stop_flag: Arc<AtomicBool>,
    stats: Arc<SearchStats>,
}

impl WorkerPool {
    /// Starts `num_workers` threads searching for the given pattern set.
    pub fn new(num_workers: usize, patterns: PatternSet) -> Self {
        let (result_tx, result_rx) = bounded(1);
        let stop_flag = Arc::new(AtomicBool::new(false));
        let stats = Arc::new(SearchStats::new());
        let patterns = Arc::new(patterns);

        let handles = Self::spawn_workers(
            num_workers,
            patterns,
            result_tx,
            stop_flag.clone(),
            stats.clone(),
        );

        Self {
            num_workers,
            handles: Some(handles),
            result_rx: Some(result_rx),
            stop_flag,
            stats,
        }
    }

    fn spawn_workers(
        num_workers: usize,
        patterns: Arc<PatternSet>,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<SearchStats>,
    ) -> Vec<JoinHandle<()>> {
        (0..num_workers)
            .map(|id| {
                let patterns = patterns.clone();
                let result_tx = result_tx.clone();
                let stop_flag = stop_flag.clone();
                let stats = stats.clone();

                thread::Builder::new()
                    .name(format!("genaddr-worker-{}", id))
                    .spawn(move || {
                        let worker = CpuWorker::new(id, patterns, result_tx, stop_flag, stats);
                        worker.run();
                    })
                    .expect("Failed to spawn worker thread")
            })
            .collect()
    }

    /// Waits up to `timeout` for a match.
    ///
    /// Returns `None` on timeout, which the caller uses as its status-line
    /// tick.
    pub fn wait_for_result(&self, timeout: Duration) -> Option<VanityResult> {
        self.result_rx
            .as_ref()
            .and_then(|rx| rx.recv_timeout(timeout).ok())
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Stops the workers and waits for them to exit.
    pub fn join(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop();
        // Dropping the receiver disconnects the channel, releasing any worker
        // blocked on a send.
        self.result_rx.take();
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }

    /// Returns the number of workers in the pool.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Total keypairs generated so far.
    pub fn attempts(&self) -> u64 {
        self.stats.attempts()
    }

    /// Average generation rate in addresses per second.
    pub fn rate(&self) -> f64 {
        self.stats.rate()
    }

    /// Time elapsed since the search started.
    pub fn elapsed(&self) -> Duration {
        self.stats.elapsed()
    }

    /// Returns a handle to the stop flag for signal handlers.
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Returns true once the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Keypair;
    use secp256k1::Secp256k1;

    #[test]
    fn finds_match_and_key_rederives_address() {
        // "*0*" matches any address containing a zero nibble, which is all
        // but (15/16)^40 of them, so a match arrives almost immediately.
        let patterns = PatternSet::compile("*0*").unwrap();
        let pool = WorkerPool::new(2, patterns);

        let result = pool
            .wait_for_result(Duration::from_secs(30))
            .expect("expected a match within 30s");

        assert!(result.address.starts_with("0x"));
        assert_eq!(result.address.len(), 42);
        assert!(result.worker_id < 2);
        assert!(pool.attempts() > 0);

        // The reported private key must derive the reported address.
        let secret: [u8; 32] = hex::decode(&result.private_key[2..])
            .unwrap()
            .try_into()
            .unwrap();
        let secp = Secp256k1::new();
        let keypair = Keypair::from_secret_key(&secp, secret).unwrap();
        assert_eq!(keypair.address().to_checksum(), result.address);

        pool.join();
    }

    #[test]
    fn stop_releases_workers() {
        // 41 literal chars can never match a 40-char address body.
        let impossible = "0".repeat(41);
        let patterns = PatternSet::compile(&impossible).unwrap();
        let pool = WorkerPool::new(2, patterns);

        assert!(pool.wait_for_result(Duration::from_millis(200)).is_none());
        assert!(!pool.is_stopped());

        pool.stop();
        assert!(pool.is_stopped());
        pool.join();
    }
}
