pub mod connection;
pub mod entry;
