//! Cross-crate tests of the sys/net virtual directory, driven through fake
//! connection sources, process tables and timeline sinks.

#[cfg(test)]
mod fakes;
#[cfg(test)]
mod timeline;
#[cfg(test)]
mod vfs;
