//! # Sysnet Common
//!
//! Shared models and boundaries of the `sysnet` workspace.
//!
//! * **[`network`]**: The connection table snapshot and its records.
//! * **[`source`]**, **[`process`]**, **[`timeline`]**: Traits for the collaborators
//!   the virtual file module consumes but does not own.
//! * **[`config`]** and **[`error`]**: Runtime switches and the library error type.

pub mod config;
pub mod error;
pub mod network;
pub mod process;
pub mod source;
pub mod timeline;
