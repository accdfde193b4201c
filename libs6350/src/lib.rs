// libs6350-rs/libs6350/src/lib.rs

//! libs6350
//!
//! Pure Rust driver for the Texas Instruments S6350 ISO15693 RFID reader:
//! the serial frame codec and the 16-slot anti-collision inventory.
#![warn(missing_docs)]

pub mod constants;
pub mod error;
pub mod inventory;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
