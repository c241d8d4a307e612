//! Cumulative CPU time accounting from `/proc/stat`.
//!
//! The kernel exposes per-core counters of clock ticks spent in each
//! scheduler bucket since boot. Utilization here is the since-boot ratio
//! `(total - idle) / total`, not a delta between consecutive reads.

use std::fs;

use crate::error::{HostPulseError, Result};

/// Cumulative time buckets for one logical core, in clock ticks since boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoreTimes {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub irq: u64,
}

impl CoreTimes {
    /// Total ticks across all buckets, idle included.
    pub fn total(&self) -> u64 {
        self.user + self.nice + self.system + self.idle + self.irq
    }

    /// Parse a per-core line (`cpu0 4705 150 1120 16250 60 220 404 0 0 0`).
    ///
    /// The aggregate `cpu` line yields `None` so cores are counted exactly
    /// once; fields past `idle` default to 0 on truncated lines.
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let label = parts.next()?;
        let ordinal = label.strip_prefix("cpu")?;
        if ordinal.is_empty() || !ordinal.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let user: u64 = parts.next()?.parse().ok()?;
        let nice: u64 = parts.next()?.parse().ok()?;
        let system: u64 = parts.next()?.parse().ok()?;
        let idle: u64 = parts.next()?.parse().ok()?;
        let _iowait = parts.next();
        let irq: u64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);

        Some(Self { user, nice, system, idle, irq })
    }
}

/// Aggregate utilization percentage across all cores, since boot.
///
/// Sums every bucket across cores and returns `(total - idle) / total * 100`.
/// A zero bucket total (empty core list) yields NaN; the kernel never reports
/// that for a live core, so the division is left unguarded.
pub fn usage_percent(cores: &[CoreTimes]) -> f64 {
    let mut total = 0u64;
    let mut idle = 0u64;
    for core in cores {
        total += core.total();
        idle += core.idle;
    }
    (total - idle) as f64 / total as f64 * 100.0
}

/// Parse every per-core line out of a `/proc/stat` payload.
pub fn parse_proc_stat(stat: &str) -> Vec<CoreTimes> {
    stat.lines().filter_map(CoreTimes::parse).collect()
}

/// Read the current per-core counters from the running kernel.
pub fn read_core_times() -> Result<Vec<CoreTimes>> {
    let stat = fs::read_to_string("/proc/stat")
        .map_err(|e| HostPulseError::Sys(format!("read /proc/stat failed: {e}")))?;
    let cores = parse_proc_stat(&stat);
    if cores.is_empty() {
        return Err(HostPulseError::Sys("no per-core counters in /proc/stat".into()));
    }
    Ok(cores)
}
