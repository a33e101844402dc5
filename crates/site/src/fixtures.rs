//! Seller-dashboard fixture orders.
//!
//! The payload mirrors the marketplace API envelope: `{ "data": [...] }`.

use chrono::NaiveDate;
use market_ui::TextTone;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded fixture payload.
pub const ORDERS_JSON: &str = include_str!("../fixtures/orders.json");

#[derive(Debug, Error)]
/// Fixture payload could not be decoded.
pub enum FixtureError {
    /// The JSON did not match the order envelope.
    #[error("invalid order payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Fulfilment state of an order.
pub enum OrderStatus {
    /// Paid, waiting to ship.
    Pending,
    /// Handed to the carrier.
    Shipped,
    /// Received by the buyer.
    Delivered,
    /// Cancelled before shipping.
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Pending, Self::Shipped, Self::Delivered, Self::Cancelled];

    /// Wire token, also used as the dropdown value.
    pub fn token(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Shipped => "Enviado",
            Self::Delivered => "Entregado",
            Self::Cancelled => "Cancelado",
        }
    }

    /// Badge tone.
    pub fn tone(self) -> TextTone {
        match self {
            Self::Pending => TextTone::Warning,
            Self::Shipped => TextTone::Accent,
            Self::Delivered => TextTone::Success,
            Self::Cancelled => TextTone::Danger,
        }
    }

    /// Parses a wire token.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.token() == token)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One marketplace order.
pub struct Order {
    /// Order number.
    pub id: String,
    /// Buyer display name.
    pub buyer: String,
    /// Buyer age, when the buyer shared it.
    pub buyer_age: Option<u32>,
    /// Product title.
    pub product: String,
    /// Fulfilment state.
    pub status: OrderStatus,
    /// Order total in MXN. Missing for cancelled orders.
    pub total: Option<f64>,
    /// Purchase date.
    pub placed_on: NaiveDate,
    /// Promised shipping date.
    pub ship_by: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

/// Decodes an `{ "data": [...] }` order payload.
pub fn parse_orders(payload: &str) -> Result<Vec<Order>, FixtureError> {
    let envelope: Envelope<Order> = serde_json::from_str(payload)?;
    Ok(envelope.data)
}

/// Orders matching `status`, or every order when `status` is `None`.
pub fn filter_orders(orders: &[Order], status: Option<OrderStatus>) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| status.map_or(true, |status| order.status == status))
        .cloned()
        .collect()
}

/// Formats an amount in pesos, e.g. `$1,850.00`.
pub fn format_mxn(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}
