use std::io::Write;

use anyhow::Context;
use sysnet_core::vfs::NetVfs;
use tracing::debug;

const CHUNK_SIZE: usize = 64 * 1024;

/// Streams `length` bytes (or everything) from `offset` of `file` to stdout.
pub fn read(vfs: &NetVfs, file: &str, offset: u64, length: Option<usize>) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut chunk: Vec<u8> = vec![0u8; length.unwrap_or(CHUNK_SIZE).min(CHUNK_SIZE)];
    let mut remaining: Option<usize> = length;
    let mut position: u64 = offset;

    while remaining != Some(0) {
        let want: usize = remaining.map_or(chunk.len(), |r| r.min(chunk.len()));
        let n: usize = vfs.read(file, &mut chunk[..want], position)?;
        if n == 0 {
            break;
        }
        stdout.write_all(&chunk[..n]).context("writing to stdout")?;
        position += n as u64;
        remaining = remaining.map(|r| r - n);
    }

    stdout.flush().context("flushing stdout")?;
    debug!(file, offset, read = position - offset, "read finished");
    Ok(())
}
