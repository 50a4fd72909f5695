use sysnet_common::network::entry::{NetEntry, NetMap};
use sysnet_common::timeline::TimelineAction;
use sysnet_core::timeline;

use crate::fakes::{self, FakeSource, Recorded, RecordingSink};

#[test]
fn exports_timestamped_connections_in_snapshot_order() {
    let source = FakeSource::with(fakes::three_connections());
    let mut sink = RecordingSink::default();

    let added = fakes::mount(&source).timeline(&mut sink);

    assert_eq!(added, 2);
    assert_eq!(
        sink.entries[0],
        Recorded {
            time: fakes::at(1_600_000_000),
            action: TimelineAction::Create,
            pid: 612,
            value: 0xffff_9a00_0000_1000,
            text: "TCPv4  LISTENING    0.0.0.0:22                    0.0.0.0:0".to_string(),
        }
    );
    assert_eq!(sink.entries[1].pid, 1044);
    assert!(sink.batches.is_empty());
    assert_eq!(source.outstanding(), 0);
}

#[test]
fn unavailable_source_exports_nothing() {
    let source = FakeSource::unavailable();
    let mut sink = RecordingSink::default();

    assert_eq!(timeline::export(&source, &mut sink), 0);
    assert!(sink.entries.is_empty());
}

#[test]
fn filter_keeps_exactly_timestamped_labelled_entries() {
    let map = NetMap::new(vec![
        NetEntry::new(1, "b").with_time(fakes::at(50)),
        NetEntry::new(2, ""),
        NetEntry::new(3, "").with_time(fakes::at(10)),
        NetEntry::new(4, "a"),
        NetEntry::new(5, "c").with_time(fakes::at(5)),
    ]);

    let pids: Vec<u32> = timeline::extract(&map).map(|e| e.pid).collect();
    assert_eq!(pids, vec![1, 5]);
}

#[test]
fn each_snapshot_extracts_independently() {
    let source = FakeSource::with(fakes::three_connections());
    let vfs = fakes::mount(&source);

    let mut first = RecordingSink::default();
    let mut second = RecordingSink::default();
    vfs.timeline(&mut first);
    source.publish(NetMap::new(vec![NetEntry::new(9, "new").with_time(fakes::at(1))]));
    vfs.timeline(&mut second);

    assert_eq!(first.entries.len(), 2);
    assert_eq!(second.entries.len(), 1);
    assert_eq!(second.entries[0].text, "new");
}
