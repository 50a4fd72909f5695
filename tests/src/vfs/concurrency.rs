use std::thread;

use sysnet_common::network::entry::{NetEntry, NetMap};
use sysnet_core::vfs::NETSTAT_VERBOSE_FILE;

use crate::fakes::{self, FakeSource};

fn table(rows: u32) -> NetMap {
    (0..rows)
        .map(|i| NetEntry::new(1000 + i, format!("TCPv4  ESTABLISHED  row {i}")).with_object(u64::from(i)))
        .collect()
}

/// Readers racing a writer that swaps snapshots each see exactly one whole snapshot.
#[test]
fn concurrent_reads_see_whole_snapshots() {
    let small = fakes::mount(&FakeSource::with(table(5))).read_all(NETSTAT_VERBOSE_FILE).unwrap();
    let large = fakes::mount(&FakeSource::with(table(50))).read_all(NETSTAT_VERBOSE_FILE).unwrap();

    let source = FakeSource::with(table(5));
    let vfs = fakes::mount(&source);

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                source.publish(table(if i % 2 == 0 { 50 } else { 5 }));
            }
        });

        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..50 {
                    let data = vfs.read_all(NETSTAT_VERBOSE_FILE).unwrap();
                    assert!(data == small || data == large, "torn read of {} bytes", data.len());
                }
            });
        }
    });

    assert_eq!(source.outstanding(), 0);
}
