//! Wire DTOs for the Advanced Trade REST API.
//!
//! Every response is deserialized into an exact struct here and converted
//! to the `advtrade-core` domain types in one place. A shape mismatch
//! (missing required field, unparsable decimal, unknown side token) fails
//! fast with `ExchangeError::Decode` instead of leaking partial objects.

use advtrade_core::{Account, Order, OrderSide, Product, ProductStatus};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::error::ExchangeError;

/// Placeholder the exchange historically used for absent order fields;
/// kept for render parity in the order listing.
fn not_available() -> String {
    "N/A".to_string()
}

/// Monetary amount as the exchange reports it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMoney {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAccount {
    pub currency: String,
    pub available_balance: RawMoney,
    pub hold: RawMoney,
    pub uuid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AccountsEnvelope {
    #[serde(default)]
    pub accounts: Vec<RawAccount>,
}

impl TryFrom<RawAccount> for Account {
    type Error = ExchangeError;

    fn try_from(raw: RawAccount) -> Result<Self, Self::Error> {
        let available = parse_decimal("available_balance.value", &raw.available_balance.value)?;
        let hold = parse_decimal("hold.value", &raw.hold.value)?;
        Ok(Account {
            currency: raw.currency,
            available,
            hold,
            id: raw.uuid,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProduct {
    pub product_id: String,
    pub base_currency: String,
    pub quote_currency: String,
    pub base_min_size: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsEnvelope {
    #[serde(default)]
    pub products: Vec<RawProduct>,
}

impl TryFrom<RawProduct> for Product {
    type Error = ExchangeError;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let min_base_size = parse_decimal("base_min_size", &raw.base_min_size)?;
        Ok(Product {
            id: raw.product_id,
            base_currency: raw.base_currency,
            quote_currency: raw.quote_currency,
            min_base_size,
            status: ProductStatus::from(raw.status.as_str()),
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawOrder {
    #[serde(alias = "order_id")]
    pub id: String,
    pub product_id: String,
    pub side: String,
    #[serde(default = "not_available")]
    pub size: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default = "not_available")]
    pub status: String,
    #[serde(rename = "type", default = "not_available")]
    pub order_type: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<RawOrder>,
}

/// Envelope around a newly placed order.
#[derive(Debug, Deserialize)]
pub(crate) struct OrderEnvelope {
    pub order: RawOrder,
}

impl TryFrom<RawOrder> for Order {
    type Error = ExchangeError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        let side = match raw.side.to_lowercase().as_str() {
            "buy" => OrderSide::Buy,
            "sell" => OrderSide::Sell,
            other => {
                return Err(ExchangeError::Decode(format!(
                    "Unknown order side '{other}' for order {}",
                    raw.id
                )))
            }
        };
        Ok(Order {
            id: raw.id,
            product_id: raw.product_id,
            side,
            size: raw.size,
            price: raw.price,
            status: raw.status,
            order_type: raw.order_type,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCancelResult {
    pub success: bool,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub failure_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CancelResultsEnvelope {
    #[serde(default)]
    pub results: Vec<RawCancelResult>,
}

/// Confirmation that the exchange accepted a cancellation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelReceipt {
    pub order_id: String,
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, ExchangeError> {
    Decimal::from_str(value)
        .map_err(|e| ExchangeError::Decode(format!("Bad decimal in {field}: '{value}' ({e})")))
}
