use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A ticket category (adult, child, ...) with its unit price.
/// Static catalog data, never mutated by the booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketType {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

impl TicketType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}
