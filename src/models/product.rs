use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A concession product (snack, drink, combo) with an optional
/// percentage discount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    /// Percentage 0..=100. Absent means full price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            discount: None,
        }
    }

    pub fn with_discount(mut self, percent: u8) -> Self {
        self.discount = Some(percent);
        self
    }

    /// Unit price after discount. Kept exact; rounding happens only
    /// at display time.
    pub fn effective_price(&self) -> Decimal {
        match self.discount {
            Some(percent) if percent > 0 => {
                let percent = u32::from(percent.min(100));
                self.price * Decimal::from(100 - percent) / Decimal::from(100u32)
            }
            _ => self.price,
        }
    }
}
