//! # Sysnet Core
//!
//! Exposes a connection table as fixed-width virtual text files.
//!
//! * **[`paging`]**: Offset arithmetic and windowed rendering of fixed-stride line files.
//! * **[`render`]**: The compact and verbose line formats.
//! * **[`vfs`]**: The `sys/net` directory: listing and reads by file name.
//! * **[`timeline`]**: Timeline events derived from a snapshot.
//!
//! ## Adapters
//! * **[`procfs`]**: Captures the connection table from a Linux procfs tree.
//! * **[`process`]**: Resolves PIDs from an in-memory table, optionally captured with `sysinfo`.

pub mod paging;
pub mod process;
pub mod procfs;
pub mod render;
pub mod timeline;
pub mod vfs;
