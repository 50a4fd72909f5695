pub mod info;
pub mod list;
pub mod read;
pub mod timeline;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use sysnet_common::config::{Config, DEFAULT_PROC_ROOT};
use sysnet_common::process::{NoResolver, ProcessResolver};
use sysnet_core::process::ProcessTable;
use sysnet_core::procfs::ProcNetSource;
use sysnet_core::vfs::NetVfs;

#[derive(Parser)]
#[command(name = "sysnet")]
#[command(about = "Browse the connection table as fixed-width virtual files.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not resolve PIDs to process names and paths
    #[arg(long, global = true)]
    pub no_resolve: bool,

    /// Root of the procfs tree to read sockets from
    #[arg(long, global = true, default_value = DEFAULT_PROC_ROOT)]
    pub proc_root: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how the module registers itself
    #[command(alias = "i")]
    Info,
    /// List the files of the module directory
    #[command(alias = "ls")]
    List { path: Option<String> },
    /// Write a window of a virtual file to stdout
    #[command(alias = "cat")]
    Read {
        file: String,
        /// Byte offset to start reading at
        #[arg(long, default_value_t = 0)]
        offset: u64,
        /// Number of bytes to read, defaults to the rest of the file
        #[arg(long)]
        length: Option<usize>,
    },
    /// Print the timeline events of the current connection table
    #[command(alias = "t")]
    Timeline,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Wires the procfs source and the process resolver into the virtual directory.
pub fn mount(cfg: &Config) -> NetVfs {
    let source = Box::new(ProcNetSource::new(cfg.proc_root.clone()));
    let resolver: Box<dyn ProcessResolver> = if cfg.no_resolve {
        Box::new(NoResolver)
    } else {
        Box::new(ProcessTable::from_system())
    };
    NetVfs::new(source, resolver)
}
