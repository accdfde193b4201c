//! Small helpers shared by the codec, the engine and the log output.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
