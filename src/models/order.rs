use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::product::Product;

/// A (ticket type, quantity) pair. At most one line per ticket type;
/// a line at quantity 0 is removed, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLine {
    #[serde(rename = "ticketTypeId")]
    pub ticket_type_id: String,
    pub quantity: u32,
}

/// A concession cart line. The product is carried whole so the
/// discount survives into the order summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcessionLine {
    pub product: Product,
    pub quantity: u32,
}

/// What the booking flow hands to the order gateway once
/// checkout validation passes. The gateway owns everything after
/// this point: persistence, payment, confirmation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    #[serde(rename = "seatIds")]
    pub seat_ids: Vec<String>,
    #[serde(rename = "ticketLines")]
    pub ticket_lines: Vec<TicketLine>,
    #[serde(rename = "concessionItems")]
    pub concession_items: Vec<ConcessionLine>,
    #[serde(rename = "grandTotal")]
    pub grand_total: Decimal,
}

/// Acknowledgement returned by the order gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub grand_total: Decimal,
    pub created_at: DateTime<Utc>,
}
