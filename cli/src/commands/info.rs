use colored::*;
use sysnet_core::render::LineMode;
use sysnet_core::vfs::{NETSTAT_FILE, NETSTAT_VERBOSE_FILE, NetVfs, README_FILE};

use crate::terminal::{colors, print};
use crate::terminal::print::GLOBAL_KEY_WIDTH;

pub fn info(vfs: &NetVfs) {
    let module = vfs.info();
    GLOBAL_KEY_WIDTH.set(14);

    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Mount point", module.path.color(colors::ACCENT));
    print::aligned_line("Root module", module.root_module);
    print::aligned_line("Files", format!("{README_FILE}, {NETSTAT_FILE}, {NETSTAT_VERBOSE_FILE}"));
    print::aligned_line("Line widths", format!(
        "{} / {} bytes",
        LineMode::Compact.width(),
        LineMode::Verbose.width()
    ));

    print::header("timeline");
    print::aligned_line("Short name", format!("{:?}", module.timeline.short_name));
    print::aligned_line("Text file", module.timeline.text_file);
    print::aligned_line("JSON file", module.timeline.json_file);
    print::end_of_program();
}
