use std::path::PathBuf;

pub const DEFAULT_PROC_ROOT: &str = "/proc";

#[derive(Debug, Clone)]
pub struct Config {
    /// Disables resolving owner PIDs to process names and paths.
    ///
    /// Rendered lines keep their fixed width, the process columns stay blank.
    pub no_resolve: bool,
    /// Root of the procfs tree the connection source reads from.
    pub proc_root: PathBuf,
}

