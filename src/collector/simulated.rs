//! Stand-in collector used until a real endpoint is wired up

use super::payload::FormPayload;
use super::traits::CollectorTransport;
use crate::error::SubmissionError;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Waits a fixed delay, then succeeds or fails at random. Never touches the network.
pub struct SimulatedCollector {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedCollector {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }
}

#[async_trait]
impl CollectorTransport for SimulatedCollector {
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmissionError> {
        tracing::debug!("Simulating submission of {} fields", payload.len());
        tokio::time::sleep(self.delay).await;

        if rand::thread_rng().gen_bool(self.success_rate) {
            Ok(())
        } else {
            Err(SubmissionError::Simulated)
        }
    }

    fn describe(&self) -> String {
        format!(
            "simulated collector ({}ms, {:.0}% success)",
            self.delay.as_millis(),
            self.success_rate * 100.0
        )
    }
}
