use std::sync::{Arc, Mutex};

use sysnet_common::network::entry::{FileTime, NetEntry, NetMap};
use sysnet_common::process::ProcessInfo;
use sysnet_common::source::ConnectionSource;
use sysnet_common::timeline::{TimelineAction, TimelineSink};
use sysnet_core::process::ProcessTable;
use sysnet_core::vfs::NetVfs;

/// A connection source whose current snapshot can be swapped or withdrawn.
#[derive(Clone, Default)]
pub struct FakeSource {
    current: Arc<Mutex<Option<Arc<NetMap>>>>,
}

impl FakeSource {
    pub fn with(map: NetMap) -> Self {
        let source = Self::default();
        source.publish(map);
        source
    }

    pub fn unavailable() -> Self {
        Self::default()
    }

    pub fn publish(&self, map: NetMap) {
        *self.current.lock().unwrap() = Some(Arc::new(map));
    }

    pub fn withdraw(&self) {
        *self.current.lock().unwrap() = None;
    }

    /// Handles to the current snapshot held outside this source.
    pub fn outstanding(&self) -> usize {
        self.current
            .lock()
            .unwrap()
            .as_ref()
            .map_or(0, |map| Arc::strong_count(map) - 1)
    }
}

impl ConnectionSource for FakeSource {
    fn acquire(&self) -> Option<Arc<NetMap>> {
        self.current.lock().unwrap().clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recorded {
    pub time: FileTime,
    pub action: TimelineAction,
    pub pid: u32,
    pub value: u64,
    pub text: String,
}

#[derive(Default)]
pub struct RecordingSink {
    pub entries: Vec<Recorded>,
    pub batches: Vec<Vec<String>>,
}

impl TimelineSink for RecordingSink {
    fn add_entry(&mut self, time: FileTime, action: TimelineAction, pid: u32, value: u64, text: &str) {
        self.entries.push(Recorded {
            time,
            action,
            pid,
            value,
            text: text.to_string(),
        });
    }

    fn add_entries(&mut self, statements: &[String]) {
        self.batches.push(statements.to_vec());
    }
}

pub fn at(secs: u64) -> FileTime {
    FileTime::from_unix_secs(secs).unwrap()
}

pub fn processes() -> ProcessTable {
    [
        (612, ProcessInfo::new("sshd", "/usr/sbin/sshd")),
        (1044, ProcessInfo::new("firefox", "/usr/lib/firefox/firefox")),
    ]
    .into_iter()
    .collect()
}

/// Three connections: two owned by known processes, one orphaned.
pub fn three_connections() -> NetMap {
    NetMap::new(vec![
        NetEntry::new(612, "TCPv4  LISTENING    0.0.0.0:22                    0.0.0.0:0")
            .with_object(0xffff_9a00_0000_1000)
            .with_time(at(1_600_000_000)),
        NetEntry::new(1044, "TCPv4  ESTABLISHED  10.0.0.2:51000                93.184.216.34:443")
            .with_object(0xffff_9a00_0000_2000)
            .with_time(at(1_600_000_100)),
        NetEntry::new(77, "TCPv6  TIME_WAIT    [::1]:5432                    [::1]:40000"),
    ])
}

pub fn mount(source: &FakeSource) -> NetVfs {
    NetVfs::new(Box::new(source.clone()), Box::new(processes()))
}
