use std::fmt;

use crate::network::entry::FileTime;

/// Kind of a timeline event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimelineAction {
    Create,
}

impl TimelineAction {
    pub fn as_str(self) -> &'static str {
        match self {
            TimelineAction::Create => "CRE",
        }
    }
}

impl fmt::Display for TimelineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines the contract for ingesting timeline events.
pub trait TimelineSink {
    /// Records a single event.
    ///
    /// # Arguments
    /// * `time` - When the event happened.
    /// * `action` - What happened.
    /// * `pid` - The process the event belongs to.
    /// * `value` - Module specific auxiliary value, e.g. an object address.
    /// * `text` - Human readable label.
    fn add_entry(&mut self, time: FileTime, action: TimelineAction, pid: u32, value: u64, text: &str);

    /// Records a batch of pre-built, query-like entries in one call.
    fn add_entries(&mut self, statements: &[String]);
}
