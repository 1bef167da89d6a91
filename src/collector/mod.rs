//! Form collector module: where finished bookings are sent

mod client;
mod payload;
mod simulated;
mod traits;

pub use client::HttpCollector;
pub use payload::{FieldMapping, FormPayload};
pub use simulated::SimulatedCollector;
pub use traits::CollectorTransport;

#[cfg(test)]
pub use traits::MockCollectorTransport;

use crate::config::{BookingConfig, TransportKind};
use crate::error::ConfigError;
use std::sync::Arc;
use std::time::Duration;

/// Build the transport selected by the configuration
pub fn from_config(config: &BookingConfig) -> Result<Arc<dyn CollectorTransport>, ConfigError> {
    let transport: Arc<dyn CollectorTransport> = match config.transport {
        TransportKind::Simulated => Arc::new(SimulatedCollector::new(
            Duration::from_millis(config.simulated_delay_ms),
            config.simulated_success_rate,
        )),
        TransportKind::Http => Arc::new(HttpCollector::new(config.endpoint_url()?)),
    };
    Ok(transport)
}
