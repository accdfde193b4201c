//! Run a full inventory against a simulated reader with a few tags in its
//! field and print the result the way the reader tools do.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libs6350 --example simulated_inventory

use libs6350::prelude::*;
use libs6350::test_support::SimulatedReader;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let reader = SimulatedReader::new()
        .with_tag(0xE004_0100_0A1B_2C13, 0x00)
        .with_tag(0xE004_0100_0A1B_2C23, 0x00)
        .with_tag(0xE004_0100_7F00_0045, 0x01)
        .with_tag(0xE004_0100_7F00_0145, 0x02);

    let mut engine = InventoryEngineBuilder::new()
        .with_transport(Box::new(reader))
        .timeout_ms(DEFAULT_INVENTORY_TIMEOUT_MS)
        .build()?;

    let report = engine.run()?;
    print!("{}", report);
    println!("({} inventory rounds)", report.rounds());
    Ok(())
}
