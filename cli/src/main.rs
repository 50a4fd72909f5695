mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, list, read, timeline};
use sysnet_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose)?;

    let cfg = Config {
        no_resolve: commands.no_resolve,
        proc_root: commands.proc_root,
    };
    let vfs = commands::mount(&cfg);

    match commands.command {
        Commands::Info => {
            print::header("about the module");
            info::info(&vfs);
            Ok(())
        }
        Commands::List { path } => list::list(&vfs, path.as_deref().unwrap_or("")),
        Commands::Read {
            file,
            offset,
            length,
        } => read::read(&vfs, &file, offset, length),
        Commands::Timeline => {
            print::header("connection timeline");
            timeline::timeline(&vfs);
            Ok(())
        }
    }
}
