//! Fixed-stride line paging.
//!
//! A table of `count` records is exposed as a virtual text file of `count + 1` lines,
//! every line exactly `width` bytes and terminated by `\n`. Line 0 is the header,
//! line `i > 0` renders record `i - 1`. The file size follows from the record count
//! alone, and a read renders only the lines overlapping the requested window.

use tracing::trace;

/// Size in bytes of a table of `count` records rendered at `width` bytes per line.
pub fn file_size(count: usize, width: usize) -> u64 {
    (count as u64 + 1) * width as u64
}

/// Reads `buf.len()` bytes at `offset` from the virtual table file.
///
/// `render(index, line)` appends the text of record `index` to `line`. The text is
/// clipped or padded to `width` by the engine, so renderers need not care about width.
///
/// # Returns
/// The number of bytes written into `buf`. Zero when `offset` is at or past the end.
pub fn read_lines<F>(
    buf: &mut [u8],
    offset: u64,
    count: usize,
    width: usize,
    header: &str,
    mut render: F,
) -> usize
where
    F: FnMut(usize, &mut String),
{
    let size = file_size(count, width);
    if width == 0 || offset >= size || buf.is_empty() {
        return 0;
    }

    let len = (buf.len() as u64).min(size - offset) as usize;
    let stride = width as u64;
    let first_line = offset / stride;
    let last_line = (offset + len as u64 - 1) / stride;
    let shift = (offset % stride) as usize;

    trace!(offset, len, first_line, last_line, "rendering line window");

    let mut rendered: Vec<u8> = Vec::with_capacity((last_line - first_line + 1) as usize * width);
    let mut line = String::with_capacity(width);
    for line_index in first_line..=last_line {
        line.clear();
        match line_index {
            0 => line.push_str(header),
            _ => render((line_index - 1) as usize, &mut line),
        }
        push_fixed(&mut rendered, &line, width);
    }

    buf[..len].copy_from_slice(&rendered[shift..shift + len]);
    len
}

/// Reads `buf.len()` bytes at `offset` from an in-memory document.
pub fn read_bytes(buf: &mut [u8], offset: u64, data: &[u8]) -> usize {
    let Ok(start) = usize::try_from(offset) else {
        return 0;
    };
    if start >= data.len() {
        return 0;
    }
    let len = buf.len().min(data.len() - start);
    buf[..len].copy_from_slice(&data[start..start + len]);
    len
}

/// Appends `text` as one line of exactly `width` bytes.
///
/// Content longer than `width - 1` bytes is cut at the last character boundary that fits,
/// shorter content is padded with spaces. The last byte is always `\n`.
pub fn push_fixed(out: &mut Vec<u8>, text: &str, width: usize) {
    if width == 0 {
        return;
    }
    let room = width - 1;
    let mut cut = text.len().min(room);
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    let start = out.len();
    out.extend_from_slice(&text.as_bytes()[..cut]);
    out.resize(start + room, b' ');
    out.push(b'\n');
}

/// Renders `text` into a standalone line of exactly `width` bytes.
pub fn fixed_line(text: &str, width: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width);
    push_fixed(&mut out, text, width);
    out
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
