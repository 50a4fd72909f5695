use std::sync::Arc;

/// Display metadata of a running process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessInfo {
    /// Long display name, e.g. `sshd`.
    pub name: String,
    /// On-disk image path, e.g. `/usr/sbin/sshd`.
    pub path: String,
}

impl ProcessInfo {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// Defines the contract for resolving owner PIDs into process metadata.
pub trait ProcessResolver: Send + Sync {
    /// Looks up the process owning `pid`.
    ///
    /// # Returns
    /// * `Some(Arc<ProcessInfo>)` - A shared handle, released by dropping it.
    /// * `None` - If the process is gone or was never known.
    fn resolve(&self, pid: u32) -> Option<Arc<ProcessInfo>>;
}

/// Resolver that knows no processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResolver;

impl ProcessResolver for NoResolver {
    fn resolve(&self, _pid: u32) -> Option<Arc<ProcessInfo>> {
        None
    }
}
