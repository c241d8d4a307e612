//! Process memory probe backed by `sysinfo`.

use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::error::{HostPulseError, Result};

/// Reusable probe for the current process's resident memory.
///
/// Holds one `sysinfo::System` so repeated reads refresh in place instead of
/// rebuilding the process table every sample.
pub struct MemoryProbe {
    sys: System,
    pid: Pid,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self {
            sys: System::new(),
            pid: Pid::from_u32(std::process::id()),
        }
    }

    /// Resident memory of the current process, in bytes.
    pub fn read_bytes(&mut self) -> Result<u64> {
        self.sys
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.sys
            .process(self.pid)
            .map(|p| p.memory())
            .ok_or_else(|| {
                HostPulseError::Sys("current process missing from process table".into())
            })
    }
}

impl Default for MemoryProbe {
    fn default() -> Self {
        Self::new()
    }
}
