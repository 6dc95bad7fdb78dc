//! Order-related types and identifiers.
//!
//! Provides the trade action, order side, and order type enums together
//! with the client order ID used for placement idempotency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

/// Trade action as expressed in agent commands: BUY or SELL.
///
/// This is the user-facing counterpart of [`OrderSide`]; commands carry
/// uppercase tokens while the exchange expects lowercase ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TradeAction {
    Buy,
    Sell,
}

impl TradeAction {
    /// The exchange-facing side for this action.
    pub fn side(&self) -> OrderSide {
        match self {
            Self::Buy => OrderSide::Buy,
            Self::Sell => OrderSide::Sell,
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for TradeAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(CoreError::InvalidAction(other.to_string())),
        }
    }
}

/// Order side: buy or sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Market,
    Limit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
        }
    }
}

impl FromStr for OrderType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(Self::Market),
            "limit" => Ok(Self::Limit),
            other => Err(CoreError::InvalidOrderType(other.to_string())),
        }
    }
}

/// Client order ID for placement idempotency.
///
/// Every placement must carry a unique id so a retried request cannot
/// create a duplicate order on the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientOrderId(String);

impl ClientOrderId {
    /// Create a new unique client order ID.
    ///
    /// Format: `advtrade_{timestamp_ms}_{uuid_short}`
    pub fn new() -> Self {
        let ts = chrono::Utc::now().timestamp_millis();
        let uuid_short = &Uuid::new_v4().to_string()[..8];
        Self(format!("advtrade_{ts}_{uuid_short}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ClientOrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An order as reported by the exchange.
///
/// Status transitions are exchange-owned; this is a value copy returned to
/// callers, never tracked locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Exchange-assigned order id.
    pub id: String,
    /// Trading pair (e.g. "BTC-USD").
    pub product_id: String,
    /// buy or sell.
    pub side: OrderSide,
    /// Base quantity, decimal-as-string as the exchange reports it.
    pub size: String,
    /// Limit price, present only for priced orders.
    pub price: Option<String>,
    /// Exchange-owned status token (e.g. "OPEN", "FILLED").
    pub status: String,
    /// Exchange-owned order type token.
    #[serde(rename = "type")]
    pub order_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_action_parses_uppercase_only() {
        assert_eq!("BUY".parse::<TradeAction>().unwrap(), TradeAction::Buy);
        assert_eq!("SELL".parse::<TradeAction>().unwrap(), TradeAction::Sell);
        assert!("buy".parse::<TradeAction>().is_err());
        assert!("HOLD".parse::<TradeAction>().is_err());
    }

    #[test]
    fn test_trade_action_side_is_lowercase() {
        assert_eq!(TradeAction::Buy.side().to_string(), "buy");
        assert_eq!(TradeAction::Sell.side().to_string(), "sell");
    }

    #[test]
    fn test_order_type_parses_lowercase_only() {
        assert_eq!("market".parse::<OrderType>().unwrap(), OrderType::Market);
        assert_eq!("limit".parse::<OrderType>().unwrap(), OrderType::Limit);
        assert!("MARKET".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_client_order_id_unique() {
        let id1 = ClientOrderId::new();
        let id2 = ClientOrderId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_client_order_id_format() {
        let id = ClientOrderId::new();
        assert!(id.as_str().starts_with("advtrade_"));
    }

    #[test]
    fn test_order_type_field_serializes_as_type() {
        let order = Order {
            id: "abc".to_string(),
            product_id: "BTC-USD".to_string(),
            side: OrderSide::Buy,
            size: "0.001".to_string(),
            price: None,
            status: "OPEN".to_string(),
            order_type: "limit".to_string(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["type"], "limit");
        assert_eq!(json["side"], "buy");
    }
}
