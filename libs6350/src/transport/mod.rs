// libs6350-rs/libs6350/src/transport/mod.rs

pub mod io;
pub mod mock;
pub mod traits;

pub use io::{IoTransport, ReadTimeout};
pub use mock::MockTransport;
pub use traits::Transport;
