use thiserror::Error;

pub type Result<T> = std::result::Result<T, VfsError>;

/// Errors surfaced by the virtual file module.
///
/// An unavailable connection source is not an error: files backed by it are
/// simply absent from listings and read as empty.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VfsError {
    /// The requested name is not a file this module exposes.
    #[error("invalid target: {0}")]
    InvalidTarget(String),
}
