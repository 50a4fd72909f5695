//! Line rendering for the two connection table views.

use std::fmt::Write;

use chrono::{DateTime, Datelike};
use sysnet_common::network::entry::{FileTime, NetEntry};
use sysnet_common::process::ProcessResolver;

pub const COMPACT_WIDTH: usize = 128;
pub const VERBOSE_WIDTH: usize = 278;

pub const COMPACT_HEADER: &str = "   #    PID Proto  State        Src                           Dst                          Process";
pub const VERBOSE_HEADER: &str = concat!(
    "   #    PID Proto  State        Src                           Dst                          Process",
    "              Time                     Object Address    Process Path"
);

/// Rendered in place of a missing timestamp. Same width as a formatted one.
pub const NO_TIME: &str = "                    ***";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
const NAME_WIDTH: usize = 20;
const MAX_YEAR: i32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineMode {
    /// Index, PID, description and process name.
    Compact,
    /// Compact columns plus time, object address and process path.
    Verbose,
}

impl LineMode {
    pub fn width(self) -> usize {
        match self {
            LineMode::Compact => COMPACT_WIDTH,
            LineMode::Verbose => VERBOSE_WIDTH,
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            LineMode::Compact => COMPACT_HEADER,
            LineMode::Verbose => VERBOSE_HEADER,
        }
    }

    /// Appends the unclipped text of record `index` to `line`.
    ///
    /// The owner process is resolved for the duration of this call only.
    pub fn render(self, index: usize, entry: &NetEntry, resolver: &dyn ProcessResolver, line: &mut String) {
        let process = resolver.resolve(entry.pid);
        let name = process.as_deref().map_or("", |p| p.name.as_str());

        match self {
            LineMode::Compact => write!(line, "{:04x}{:7} {} {}", index, entry.pid, entry.text, name).ok(),
            LineMode::Verbose => {
                let path = process.as_deref().map_or("", |p| p.path.as_str());
                write!(
                    line,
                    "{:04x}{:7} {} {:<nw$} {}  {}  {}",
                    index,
                    entry.pid,
                    entry.text,
                    name,
                    format_time(entry.time),
                    format_object(entry.object),
                    path,
                    nw = NAME_WIDTH,
                )
                .ok()
            }
        };
    }
}

/// Formats a FILETIME as `YYYY-MM-DD HH:MM:SS UTC`.
///
/// Absent times and times past year 9999 render as [`NO_TIME`].
pub fn format_time(time: Option<FileTime>) -> String {
    time.and_then(|t| {
        let (secs, nanos) = t.to_unix();
        DateTime::from_timestamp(secs, nanos)
    })
    .filter(|dt| dt.year() <= MAX_YEAR)
    .map_or_else(|| NO_TIME.to_string(), |dt| dt.format(TIME_FORMAT).to_string())
}

fn format_object(object: Option<u64>) -> String {
    match object {
        Some(va) => format!("{va:016x}"),
        None => " ".repeat(16),
    }
}
