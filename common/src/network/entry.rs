//! # Connection Table Snapshot
//!
//! A [`NetMap`] is an immutable, ordered capture of [`NetEntry`] records taken at one
//! point in time. Sources hand it out behind an `Arc`, so every reader holds its own
//! consistent view and releases it by dropping the handle.

use std::num::NonZeroU64;

/// Number of 100ns ticks between 1601-01-01 and 1970-01-01 (UTC).
const UNIX_EPOCH_TICKS: u64 = 116_444_736_000_000_000;
const TICKS_PER_SECOND: u64 = 10_000_000;

/// A Windows FILETIME: 100ns ticks since 1601-01-01 UTC.
///
/// Zero is reserved for "no timestamp" and has no `FileTime` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileTime(NonZeroU64);

impl FileTime {
    pub fn new(ticks: u64) -> Option<Self> {
        NonZeroU64::new(ticks).map(Self)
    }

    /// Converts whole seconds since the Unix epoch.
    pub fn from_unix_secs(secs: u64) -> Option<Self> {
        secs.checked_mul(TICKS_PER_SECOND)
            .and_then(|ticks| ticks.checked_add(UNIX_EPOCH_TICKS))
            .and_then(Self::new)
    }

    pub fn ticks(self) -> u64 {
        self.0.get()
    }

    /// Splits into seconds and sub-second nanoseconds relative to the Unix epoch.
    pub fn to_unix(self) -> (i64, u32) {
        let ticks = self.ticks() as i128 - UNIX_EPOCH_TICKS as i128;
        let secs = ticks.div_euclid(TICKS_PER_SECOND as i128) as i64;
        let nanos = (ticks.rem_euclid(TICKS_PER_SECOND as i128) * 100) as u32;
        (secs, nanos)
    }
}

/// One row of the connection table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetEntry {
    /// Owning process.
    pub pid: u32,
    /// Human readable description, e.g. protocol, state and endpoints.
    pub text: String,
    /// Address or handle of the backing kernel object, when known.
    pub object: Option<u64>,
    /// Creation time of the connection, when known.
    pub time: Option<FileTime>,
}

impl NetEntry {
    pub fn new(pid: u32, text: impl Into<String>) -> Self {
        Self {
            pid,
            text: text.into(),
            object: None,
            time: None,
        }
    }

    pub fn with_object(mut self, object: u64) -> Self {
        self.object = Some(object);
        self
    }

    pub fn with_time(mut self, time: FileTime) -> Self {
        self.time = Some(time);
        self
    }
}

/// Point-in-time connection table. Index order is enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetMap {
    entries: Vec<NetEntry>,
}

impl NetMap {
    pub fn new(entries: Vec<NetEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NetEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[NetEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NetEntry> {
        self.entries.iter()
    }
}

impl FromIterator<NetEntry> for NetMap {
    fn from_iter<I: IntoIterator<Item = NetEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a NetMap {
    type Item = &'a NetEntry;
    type IntoIter = std::slice::Iter<'a, NetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
