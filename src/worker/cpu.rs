//! CPU worker: the generate -> derive -> match loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{SendTimeoutError, Sender};
use secp256k1::Secp256k1;

use crate::crypto::Keypair;
use crate::matcher::PatternSet;
use crate::stats::SearchStats;

use super::VanityResult;

/// How long a blocked match send waits before re-checking the stop flag.
const SEND_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A worker thread generating and testing keypairs until stopped.
pub struct CpuWorker {
    id: usize,
    patterns: Arc<PatternSet>,
    result_tx: Sender<VanityResult>,
    stop_flag: Arc<AtomicBool>,
    stats: Arc<SearchStats>,
}

impl CpuWorker {
    pub fn new(
        id: usize,
        patterns: Arc<PatternSet>,
        result_tx: Sender<VanityResult>,
        stop_flag: Arc<AtomicBool>,
        stats: Arc<SearchStats>,
    ) -> Self {
        Self {
            id,
            patterns,
            result_tx,
            stop_flag,
            stats,
        }
    }

    /// Runs the generation loop until the stop flag is set or the result
    /// channel is closed.
    ///
    /// Each iteration: generate a keypair (an out-of-range scalar is retried
    /// silently, without counting), record exactly one attempt, then test the
    /// 40-char hex body against the pattern set. Matches are handed to the
    /// coordinator; the send blocks if the handoff slot is full, but keeps
    /// polling the stop flag so cancellation stays prompt.
    pub fn run(&self) {
        let secp = Secp256k1::new();
        let mut rng = rand::thread_rng();

        while !self.stop_flag.load(Ordering::Relaxed) {
            let keypair = match Keypair::generate(&secp, &mut rng) {
                Ok(keypair) => keypair,
                Err(_) => continue,
            };

            self.stats.record_attempt();

            if self.patterns.matches_any(&keypair.address().to_hex()) {
                let result = VanityResult {
                    address: keypair.address().to_checksum(),
                    private_key: keypair.private_key_hex(),
                    worker_id: self.id,
                };
                if !self.send_result(result) {
                    break;
                }
            }
        }
    }

    /// Sends a match to the coordinator. Returns false when the worker
    /// should exit (stop requested or channel closed).
    fn send_result(&self, result: VanityResult) -> bool {
        let mut pending = result;
        loop {
            match self.result_tx.send_timeout(pending, SEND_POLL_INTERVAL) {
                Ok(()) => return true,
                Err(SendTimeoutError::Timeout(returned)) => {
                    if self.stop_flag.load(Ordering::Relaxed) {
                        return false;
                    }
                    pending = returned;
                }
                Err(SendTimeoutError::Disconnected(_)) => return false,
            }
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}
