use std::collections::HashMap;
use std::sync::Arc;

use sysinfo::{PidExt, ProcessExt, System, SystemExt};
use sysnet_common::process::{ProcessInfo, ProcessResolver};
use tracing::debug;

/// An immutable PID to process lookup table.
#[derive(Debug, Clone, Default)]
pub struct ProcessTable {
    procs: HashMap<u32, Arc<ProcessInfo>>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the processes currently running on this machine.
    pub fn from_system() -> Self {
        let mut sys = System::new();
        sys.refresh_processes();

        let table: Self = sys
            .processes()
            .iter()
            .map(|(pid, process)| {
                let path = process.exe().to_string_lossy().into_owned();
                (pid.as_u32(), ProcessInfo::new(process.name(), path))
            })
            .collect();

        debug!(count = table.len(), "captured process table");
        table
    }

    pub fn insert(&mut self, pid: u32, info: ProcessInfo) {
        self.procs.insert(pid, Arc::new(info));
    }

    pub fn len(&self) -> usize {
        self.procs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.procs.is_empty()
    }
}

impl FromIterator<(u32, ProcessInfo)> for ProcessTable {
    fn from_iter<I: IntoIterator<Item = (u32, ProcessInfo)>>(iter: I) -> Self {
        Self {
            procs: iter.into_iter().map(|(pid, info)| (pid, Arc::new(info))).collect(),
        }
    }
}

impl ProcessResolver for ProcessTable {
    fn resolve(&self, pid: u32) -> Option<Arc<ProcessInfo>> {
        self.procs.get(&pid).cloned()
    }
}
