//! Order submission collaborator.
//!
//! The booking core stays synchronous; this is the explicit async
//! boundary where a validated selection leaves the process. The mock
//! gateway stands in for the real reservation backend, simulating its
//! latency the way the original front end faked network calls with
//! timers. Seat inventory is NOT reserved against other concurrent
//! shoppers here; if that guarantee exists anywhere, it belongs to the
//! real backend.

use chrono::Utc;
use thiserror::Error;
use tokio::time::{sleep, Duration};
use tracing::info;
use uuid::Uuid;

use crate::config::OrderGatewayConfig;
use crate::models::{OrderReceipt, OrderSummary};

#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order contains no seats")]
    EmptyOrder,
}

/// Mocked reservation/payment backend.
#[derive(Debug, Clone)]
pub struct MockOrderGateway {
    latency: Duration,
}

impl MockOrderGateway {
    pub fn from_config(config: &OrderGatewayConfig) -> Self {
        Self {
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    /// Accept a checkout summary and mint a receipt. The caller is
    /// expected to have run the engine's checkout validation already;
    /// the only hard rejection here is a summary with no seats at all.
    pub async fn submit(&self, summary: OrderSummary) -> Result<OrderReceipt, OrderError> {
        if summary.seat_ids.is_empty() {
            return Err(OrderError::EmptyOrder);
        }

        // Simulated gateway round trip.
        sleep(self.latency).await;

        let receipt = OrderReceipt {
            order_id: Uuid::new_v4(),
            grand_total: summary.grand_total,
            created_at: Utc::now(),
        };
        info!(
            "order {} accepted: {} seats, total {}",
            receipt.order_id,
            summary.seat_ids.len(),
            receipt.grand_total
        );
        Ok(receipt)
    }
}
