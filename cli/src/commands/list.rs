use colored::*;
use sysnet_core::vfs::{MODULE_INFO, NetVfs, VfsEntry};
use tracing::warn;
use unicode_width::UnicodeWidthStr;

use crate::terminal::{colors, print};
use crate::terminal::print::GLOBAL_KEY_WIDTH;

pub fn list(vfs: &NetVfs, path: &str) -> anyhow::Result<()> {
    let entries: Vec<VfsEntry> = vfs.list(path);
    if entries.is_empty() {
        warn!("{}/{} has no entries", MODULE_INFO.path, path.trim_start_matches('/'));
        return Ok(());
    }

    let longest: usize = entries
        .iter()
        .map(|entry| UnicodeWidthStr::width(entry.name))
        .max()
        .unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(longest);

    print::header(MODULE_INFO.path);
    for entry in &entries {
        print::aligned_line(entry.name, format!("{} bytes", entry.size).color(colors::SIZE));
    }
    print::end_of_program();
    Ok(())
}
