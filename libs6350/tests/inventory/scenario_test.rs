#[path = "../common/mod.rs"]
mod common;

use libs6350::prelude::*;

#[test]
fn scenario_single_tag() {
    common::init_logging();
    let transport = common::boxed_mock_with_replies(vec![common::fixtures::single_tag_reply()]);
    let mut engine = InventoryEngine::new(transport);

    let report = engine.run().unwrap();
    assert_eq!(engine.state(), EngineState::Done);
    assert_eq!(report.count(), 1);
    assert_eq!(report.tags()[0].uid().as_u64(), 0x0102030405060708);
    assert_eq!(report.tags()[0].dsfid(), Dsfid::new(0));
    assert_eq!(report.rounds(), 1);
}

#[test]
fn scenario_corrupted_reply() {
    let mut reply = common::fixtures::single_tag_reply();
    let last = reply.len() - 1;
    reply[last] ^= 0x01;

    let mut engine = InventoryEngine::new(common::boxed_mock_with_replies(vec![reply]));
    assert!(matches!(engine.run(), Err(Error::ChecksumMismatch { .. })));
    assert_eq!(engine.state(), EngineState::Fatal);
}

#[test]
fn scenario_cloned_tags() {
    common::init_logging();
    let reader = common::SimulatedReader::new().with_tags(&[0xE004_0100_DEAD_BEEF, 0xE004_0100_DEAD_BEEF]);
    let mut engine = InventoryEngine::new(Box::new(reader));

    match engine.run() {
        Err(Error::ClonedOrFault { mask_bits }) => assert_eq!(mask_bits, 64),
        other => panic!("expected ClonedOrFault, got: {:?}", other),
    }
    // 16 rounds at most: masks of 0, 4, ..., 60 bits
    assert_eq!(engine.rounds(), 16);
    assert_eq!(engine.current_mask().bit_len(), 60);
}

#[test]
fn empty_field_reports_no_tags() {
    let mut engine = InventoryEngine::new(Box::new(common::SimulatedReader::new()));
    let report = engine.run().unwrap();
    assert!(report.is_empty());
    assert_eq!(report.to_string(), "No tags found.\n");
}

#[test]
fn builder_and_convenience_entry_point() {
    let report = run_inventory(common::boxed_mock_with_replies(vec![
        common::fixtures::single_tag_reply(),
    ]))
    .unwrap();
    assert_eq!(report.count(), 1);

    let mut engine = InventoryEngineBuilder::new()
        .with_transport(common::boxed_mock_with_replies(vec![]))
        .timeout_ms(20)
        .build()
        .unwrap();
    assert!(matches!(
        engine.run(),
        Err(Error::TransportTimeout { .. })
    ));
}
