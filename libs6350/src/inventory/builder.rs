// libs6350-rs/libs6350/src/inventory/builder.rs

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::inventory::engine::{InventoryConfig, InventoryEngine};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct an InventoryEngine with optional configuration.
#[derive(Default)]
pub struct InventoryEngineBuilder {
    transport: Option<Box<dyn Transport>>,
    config: InventoryConfig,
    cancel: Option<Arc<AtomicBool>>,
}

impl InventoryEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-opened transport (serial adapter, MockTransport, ...)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    pub fn max_rounds(mut self, limit: usize) -> Self {
        self.config.max_rounds = Some(limit);
        self
    }

    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Consume the builder and return an idle engine.
    /// Requires a transport to be provided; otherwise returns TransportMissing.
    pub fn build(self) -> Result<InventoryEngine> {
        let transport = self.transport.ok_or(Error::TransportMissing)?;
        let mut engine = InventoryEngine::with_config(transport, self.config);
        if let Some(flag) = self.cancel {
            engine.set_cancel_flag(flag);
        }
        Ok(engine)
    }
}
