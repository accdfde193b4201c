#[path = "../common/mod.rs"]
mod common;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use libs6350::prelude::*;
use proptest::prelude::*;

use common::{SharedTransport, SimulatedReader};

fn run_with(reader: SimulatedReader) -> (Result<InventoryReport>, Rc<RefCell<SimulatedReader>>) {
    let shared = Rc::new(RefCell::new(reader));
    let mut engine = InventoryEngine::new(Box::new(SharedTransport::new(shared.clone())));
    (engine.run(), shared)
}

#[test]
fn finds_every_tag_behind_nested_collisions() {
    common::init_logging();
    // Three tags share the low byte 0x23, two of them also the next nibble.
    let uids = [
        0xE004_0000_0000_0123,
        0xE004_0000_0000_0223,
        0xE004_0000_0000_1223,
        0xE004_0000_0000_0045,
    ];
    let (report, reader) = run_with(SimulatedReader::new().with_tags(&uids));
    let report = report.unwrap();

    let found: HashSet<u64> = report.tags().iter().map(|t| t.uid().as_u64()).collect();
    assert_eq!(found, uids.iter().copied().collect::<HashSet<u64>>());

    let masks: Vec<(u8, Vec<u8>)> = reader
        .borrow()
        .requests
        .iter()
        .map(|m| (m.bit_len(), m.as_bytes().to_vec()))
        .collect();
    assert_eq!(
        masks,
        vec![
            (0, vec![]),
            (4, vec![0x03]),
            (8, vec![0x23]),
            (12, vec![0x23, 0x02]),
        ]
    );
}

#[test]
fn depth_first_order_follows_last_pushed_branch() {
    // first round collides in slots 0 and 3
    let uids = [0x10, 0x20, 0x13, 0x23];
    let (report, reader) = run_with(SimulatedReader::new().with_tags(&uids));
    let order: Vec<u64> = report.unwrap().tags().iter().map(|t| t.uid().as_u64()).collect();
    assert_eq!(order, vec![0x13, 0x23, 0x10, 0x20]);

    let second = reader.borrow().requests[1];
    assert_eq!(second.as_bytes(), &[0x03]);
}

#[test]
fn iso_error_mid_session_stops_the_walk() {
    let reader = SimulatedReader::new()
        .with_tags(&[0x10, 0x20, 0x13, 0x23])
        .iso_error_on_round(1, 0x01);
    let (result, reader) = run_with(reader);
    match result {
        Err(Error::IsoError { code, meaning }) => {
            assert_eq!(code, 0x01);
            assert_eq!(meaning, "Transponder not found");
        }
        other => panic!("expected IsoError, got: {:?}", other),
    }
    assert_eq!(reader.borrow().requests.len(), 2);
}

#[test]
fn reader_going_silent_is_a_timeout() {
    let reader = SimulatedReader::new()
        .with_tags(&[0x10, 0x20])
        .silent_from_round(1);
    let (result, _) = run_with(reader);
    assert!(matches!(
        result,
        Err(Error::TransportTimeout {
            expected: 2,
            actual: 0
        })
    ));
}

#[test]
fn corrupted_round_is_a_checksum_error() {
    let reader = SimulatedReader::new()
        .with_tags(&[0x10, 0x20])
        .corrupt_round(1);
    let (result, _) = run_with(reader);
    assert!(matches!(result, Err(Error::ChecksumMismatch { .. })));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn distinct_uids_are_all_found(uids in prop::collection::hash_set(any::<u64>(), 0..12)) {
        let uids: Vec<u64> = uids.into_iter().collect();
        let (report, reader) = run_with(SimulatedReader::new().with_tags(&uids));
        let report = report.unwrap();

        prop_assert_eq!(report.count(), uids.len());
        let found: HashSet<u64> = report.tags().iter().map(|t| t.uid().as_u64()).collect();
        prop_assert_eq!(found, uids.iter().copied().collect::<HashSet<u64>>());

        // no mask ever grows past 60 bits for distinct UIDs
        prop_assert!(reader.borrow().requests.iter().all(|m| m.bit_len() <= 60));
    }
}
