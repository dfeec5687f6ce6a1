//! Parallel search workers.
//!
//! `CpuWorker` runs the unbounded generate -> derive -> match loop;
//! `WorkerPool` spawns N of them, shares the stop flag and stats context,
//! and hands matches to the caller over a single-slot channel.

mod cpu;
mod pool;

pub use cpu::CpuWorker;
pub use pool::{VanityResult, WorkerPool};
