use sysnet_common::error::VfsError;
use sysnet_core::render::{COMPACT_WIDTH, LineMode, VERBOSE_WIDTH};
use sysnet_core::vfs::{NETSTAT_FILE, NETSTAT_VERBOSE_FILE, README, README_FILE, VfsEntry};

use crate::fakes::{self, FakeSource};

fn read(source: &FakeSource, file: &str, offset: u64, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len];
    let n = fakes::mount(source).read(file, &mut buf, offset).unwrap();
    buf.truncate(n);
    buf
}

#[test]
fn root_listing_with_three_connections() {
    let source = FakeSource::with(fakes::three_connections());
    let entries = fakes::mount(&source).list("");

    assert_eq!(
        entries,
        vec![
            VfsEntry { name: README_FILE, size: README.len() as u64 },
            VfsEntry { name: NETSTAT_FILE, size: 4 * 128 },
            VfsEntry { name: NETSTAT_VERBOSE_FILE, size: 4 * 278 },
        ]
    );
}

#[test]
fn root_listing_tracks_source_availability() {
    let source = FakeSource::unavailable();
    let vfs = fakes::mount(&source);
    let names = |entries: Vec<VfsEntry>| entries.into_iter().map(|e| e.name).collect::<Vec<_>>();

    assert_eq!(names(vfs.list("")), vec![README_FILE]);

    source.publish(fakes::three_connections());
    assert_eq!(names(vfs.list("")), vec![README_FILE, NETSTAT_FILE, NETSTAT_VERBOSE_FILE]);

    source.withdraw();
    assert_eq!(names(vfs.list("")), vec![README_FILE]);
}

#[test]
fn header_window() {
    let source = FakeSource::with(fakes::three_connections());
    let out = read(&source, NETSTAT_FILE, 0, 64);

    assert_eq!(out.len(), 64);
    assert_eq!(out, &LineMode::Compact.header().as_bytes()[..64]);
}

#[test]
fn window_across_first_two_records() {
    let source = FakeSource::with(fakes::three_connections());
    let full = fakes::mount(&source).read_all(NETSTAT_FILE).unwrap();
    let out = read(&source, NETSTAT_FILE, 130, 128);

    assert_eq!(out, &full[130..258]);
    // Bytes 2.. of the first record line, then the start of the second.
    assert!(out.starts_with(b"00    612 TCPv4  LISTENING"));
    assert!(out.ends_with(b"00"));
}

#[test]
fn reads_at_or_past_end_are_empty() {
    let source = FakeSource::with(fakes::three_connections());
    for file in [NETSTAT_FILE, NETSTAT_VERBOSE_FILE] {
        let size = fakes::mount(&source).read_all(file).unwrap().len() as u64;
        assert!(read(&source, file, size, 100).is_empty());
        assert!(read(&source, file, size + 5000, 100).is_empty());
        assert_eq!(read(&source, file, size - 1, 100), b"\n");
    }
}

#[test]
fn every_line_has_its_mode_width() {
    let source = FakeSource::with(fakes::three_connections());
    let vfs = fakes::mount(&source);

    for (file, width) in [(NETSTAT_FILE, COMPACT_WIDTH), (NETSTAT_VERBOSE_FILE, VERBOSE_WIDTH)] {
        let data = vfs.read_all(file).unwrap();
        let lines: Vec<&[u8]> = data.split_inclusive(|&b| b == b'\n').collect();
        assert_eq!(lines.len(), 4, "{file}");
        assert!(lines.iter().all(|line| line.len() == width), "{file}");
    }
}

#[test]
fn verbose_lines_carry_resolved_process() {
    let source = FakeSource::with(fakes::three_connections());
    let data = fakes::mount(&source).read_all(NETSTAT_VERBOSE_FILE).unwrap();
    let text = String::from_utf8(data).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[1].contains("sshd"));
    assert!(lines[1].contains("2020-09-13 12:26:40 UTC  ffff9a0000001000  /usr/sbin/sshd"));
    assert!(lines[2].contains("/usr/lib/firefox/firefox"));
    // PID 77 is not in the process table.
    assert!(lines[3].starts_with("0002     77 TCPv6  TIME_WAIT"));
    assert!(lines[3].contains("***"));
    assert!(!lines[3].contains("/usr"));
}

#[test]
fn snapshots_are_released_after_each_call() {
    let source = FakeSource::with(fakes::three_connections());
    let vfs = fakes::mount(&source);
    let mut buf = [0u8; 300];

    vfs.list("");
    vfs.read(NETSTAT_VERBOSE_FILE, &mut buf, 100).unwrap();
    vfs.read_all(NETSTAT_FILE).unwrap();

    assert_eq!(source.outstanding(), 0);
}

#[test]
fn unknown_files_are_invalid_targets() {
    let source = FakeSource::with(fakes::three_connections());
    let vfs = fakes::mount(&source);
    let mut buf = [0u8; 16];

    assert_eq!(
        vfs.read("netstat.json", &mut buf, 0),
        Err(VfsError::InvalidTarget("netstat.json".into()))
    );
    assert!(vfs.read_all("").is_err());
    assert!(vfs.list("netstat.txt").is_empty());
}

#[test]
fn table_reads_while_unavailable_are_empty() {
    let source = FakeSource::unavailable();
    let vfs = fakes::mount(&source);
    let mut buf = [0u8; 16];

    assert_eq!(vfs.read(NETSTAT_FILE, &mut buf, 0), Ok(0));
    assert_eq!(vfs.read(README_FILE, &mut buf, 0), Ok(16));
    assert_eq!(&buf, &README.as_bytes()[..16]);
}
