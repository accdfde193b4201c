// libs6350-rs/libs6350/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use checksum::{checksum_pair, complement, xor_checksum};
pub use commands::InventoryRequest;
pub use frame::{Frame, encode};
pub use responses::{InventoryResponse, check_iso_error, decode_inventory_reply};
