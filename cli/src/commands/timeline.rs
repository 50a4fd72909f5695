use colored::*;
use sysnet_common::network::entry::FileTime;
use sysnet_common::timeline::{TimelineAction, TimelineSink};
use sysnet_core::render;
use sysnet_core::vfs::NetVfs;

use crate::terminal::{colors, print};

/// Prints every event as one timeline text line.
struct TextTimeline {
    short_name: &'static str,
}

impl TimelineSink for TextTimeline {
    fn add_entry(&mut self, time: FileTime, action: TimelineAction, pid: u32, value: u64, text: &str) {
        print::print(&format!(
            "{} {} {} {:>7} {:016x} {}",
            render::format_time(Some(time)).color(colors::ACCENT),
            self.short_name.color(colors::PRIMARY),
            action,
            pid,
            value,
            text
        ));
    }

    fn add_entries(&mut self, statements: &[String]) {
        for statement in statements {
            print::print(statement);
        }
    }
}

pub fn timeline(vfs: &NetVfs) {
    let mut sink = TextTimeline {
        short_name: vfs.info().timeline.short_name,
    };
    let added: usize = vfs.timeline(&mut sink);
    if added == 0 {
        print::print_status("No timestamped connections in the current table");
    }
    print::end_of_program();
}
