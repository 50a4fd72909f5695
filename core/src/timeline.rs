//! Timeline extraction for the connection table.
//!
//! Every connection that carries a creation time and a description becomes one
//! [`TimelineAction::Create`] event. Events keep snapshot order; ordering by time is
//! left to the consumer.

use sysnet_common::network::entry::{FileTime, NetEntry, NetMap};
use sysnet_common::source::ConnectionSource;
use sysnet_common::timeline::{TimelineAction, TimelineSink};
use tracing::{debug, info};

/// An event borrowed from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEvent<'a> {
    pub time: FileTime,
    pub action: TimelineAction,
    pub pid: u32,
    pub value: u64,
    pub text: &'a str,
}

impl<'a> TimelineEvent<'a> {
    fn from_entry(entry: &'a NetEntry) -> Option<Self> {
        let time = entry.time?;
        if entry.text.is_empty() {
            return None;
        }
        Some(Self {
            time,
            action: TimelineAction::Create,
            pid: entry.pid,
            value: entry.object.unwrap_or(0),
            text: &entry.text,
        })
    }
}

/// Lazily yields one event per timestamped, labelled entry of `map`.
pub fn extract(map: &NetMap) -> impl Iterator<Item = TimelineEvent<'_>> {
    map.iter().filter_map(TimelineEvent::from_entry)
}

/// Pushes the events of a fresh snapshot into `sink`.
///
/// # Returns
/// The number of events added. Zero when the source is unavailable.
pub fn export(source: &dyn ConnectionSource, sink: &mut dyn TimelineSink) -> usize {
    let Some(map) = source.acquire() else {
        debug!("connection source unavailable, no timeline events");
        return 0;
    };

    let mut added = 0;
    for event in extract(&map) {
        sink.add_entry(event.time, event.action, event.pid, event.value, event.text);
        added += 1;
    }
    info!("Added {added} of {} connections to the timeline", map.len());
    added
}
