//! # Sys/Net Virtual Directory
//!
//! Projects the connection table into a flat directory of three files:
//!
//! * `readme.txt` - A static description of the module.
//! * `netstat.txt` - The compact table, one [`COMPACT_WIDTH`] byte line per connection.
//! * `netstat-v.txt` - The verbose table, one [`VERBOSE_WIDTH`] byte line per connection.
//!
//! Every call acquires its own snapshot from the [`ConnectionSource`] and drops it
//! before returning, so a [`NetVfs`] carries no state between requests.
//!
//! [`COMPACT_WIDTH`]: crate::render::COMPACT_WIDTH
//! [`VERBOSE_WIDTH`]: crate::render::VERBOSE_WIDTH

use sysnet_common::error::{Result, VfsError};
use sysnet_common::network::entry::NetMap;
use sysnet_common::process::ProcessResolver;
use sysnet_common::source::ConnectionSource;
use sysnet_common::timeline::TimelineSink;
use tracing::debug;

use crate::paging;
use crate::render::LineMode;
use crate::timeline;

pub const README_FILE: &str = "readme.txt";
pub const NETSTAT_FILE: &str = "netstat.txt";
pub const NETSTAT_VERBOSE_FILE: &str = "netstat-v.txt";

pub const README: &str = concat!(
    "Information about the sys net module                                         \n",
    "====================================                                         \n",
    "The sys/net module lists the TCP connections captured in the current         \n",
    "connection table snapshot, in the style of 'netstat'.                        \n",
    "netstat.txt   - one fixed width (128 byte) line per connection.              \n",
    "netstat-v.txt - one fixed width (278 byte) line per connection, adding       \n",
    "                creation time, kernel object address and process path.       \n",
    "Both files start with a header line. Listening and UDP sockets are only      \n",
    "shown when the connection source reports them.                               \n",
);

/// Registration details of the module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Directory the module is mounted at.
    pub path: &'static str,
    /// Whether the module shows up in the root directory.
    pub root_module: bool,
    pub timeline: TimelineInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineInfo {
    /// Six byte tag identifying this module's events.
    pub short_name: &'static str,
    pub text_file: &'static str,
    pub json_file: &'static str,
}

pub const MODULE_INFO: ModuleInfo = ModuleInfo {
    path: "/sys/net",
    root_module: true,
    timeline: TimelineInfo {
        short_name: "Net   ",
        text_file: "timeline_net.txt",
        json_file: "timeline_net.json",
    },
};

/// A listed file and its current size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsEntry {
    pub name: &'static str,
    pub size: u64,
}

/// Files the module exposes, resolved from their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Readme,
    Table(LineMode),
}

impl Target {
    fn from_path(path: &str) -> Option<Self> {
        match path.trim_start_matches('/') {
            README_FILE => Some(Target::Readme),
            NETSTAT_FILE => Some(Target::Table(LineMode::Compact)),
            NETSTAT_VERBOSE_FILE => Some(Target::Table(LineMode::Verbose)),
            _ => None,
        }
    }
}

/// The sys/net directory over a connection source and a process resolver.
pub struct NetVfs {
    source: Box<dyn ConnectionSource>,
    resolver: Box<dyn ProcessResolver>,
}

impl NetVfs {
    pub fn new(source: Box<dyn ConnectionSource>, resolver: Box<dyn ProcessResolver>) -> Self {
        Self { source, resolver }
    }

    pub fn info(&self) -> ModuleInfo {
        MODULE_INFO
    }

    /// Exports the connection timeline of a fresh snapshot into `sink`.
    pub fn timeline(&self, sink: &mut dyn TimelineSink) -> usize {
        timeline::export(self.source.as_ref(), sink)
    }

    /// Lists the files at `path`, relative to the module directory.
    ///
    /// The module is a single flat directory: only `""` and `"/"` have entries.
    /// The table files are listed only while the source can produce a snapshot.
    pub fn list(&self, path: &str) -> Vec<VfsEntry> {
        if !path.trim_start_matches('/').is_empty() {
            return Vec::new();
        }

        let mut entries = vec![VfsEntry {
            name: README_FILE,
            size: README.len() as u64,
        }];

        match self.source.acquire() {
            Some(map) => {
                debug!(count = map.len(), "listing connection tables");
                for (name, mode) in [
                    (NETSTAT_FILE, LineMode::Compact),
                    (NETSTAT_VERBOSE_FILE, LineMode::Verbose),
                ] {
                    entries.push(VfsEntry {
                        name,
                        size: paging::file_size(map.len(), mode.width()),
                    });
                }
            }
            None => debug!("connection source unavailable, listing readme only"),
        }

        entries
    }

    /// Reads up to `buf.len()` bytes at `offset` from the file at `path`.
    ///
    /// # Returns
    /// * `Ok(n)` - Bytes written into `buf`, zero at end of file or while the
    ///   connection source is unavailable.
    /// * `Err(VfsError::InvalidTarget)` - If `path` names no file of this module.
    pub fn read(&self, path: &str, buf: &mut [u8], offset: u64) -> Result<usize> {
        let target = Target::from_path(path).ok_or_else(|| VfsError::InvalidTarget(path.to_string()))?;

        let mode = match target {
            Target::Readme => return Ok(paging::read_bytes(buf, offset, README.as_bytes())),
            Target::Table(mode) => mode,
        };

        let Some(map) = self.source.acquire() else {
            debug!(path, "connection source unavailable, empty read");
            return Ok(0);
        };

        let n = self.read_table(mode, &map, buf, offset);
        debug!(path, offset, requested = buf.len(), read = n, "read connection table");
        Ok(n)
    }

    /// Reads the whole file at `path` from a single snapshot.
    pub fn read_all(&self, path: &str) -> Result<Vec<u8>> {
        let target = Target::from_path(path).ok_or_else(|| VfsError::InvalidTarget(path.to_string()))?;

        let mode = match target {
            Target::Readme => return Ok(README.as_bytes().to_vec()),
            Target::Table(mode) => mode,
        };

        let Some(map) = self.source.acquire() else {
            return Ok(Vec::new());
        };

        let mut buf = vec![0u8; paging::file_size(map.len(), mode.width()) as usize];
        let n = self.read_table(mode, &map, &mut buf, 0);
        buf.truncate(n);
        Ok(buf)
    }

    fn read_table(&self, mode: LineMode, map: &NetMap, buf: &mut [u8], offset: u64) -> usize {
        let entries = map.entries();
        let resolver = self.resolver.as_ref();
        paging::read_lines(buf, offset, entries.len(), mode.width(), mode.header(), |i, line| {
            mode.render(i, &entries[i], resolver, line)
        })
    }
}
