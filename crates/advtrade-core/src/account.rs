//! Account and product value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single currency account on the exchange.
///
/// Sourced fresh on every query; balances are exact decimals, never
/// floats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Currency code (e.g. "BTC").
    pub currency: String,
    /// Funds available for trading.
    pub available: Decimal,
    /// Funds held by open orders.
    pub hold: Decimal,
    /// Opaque exchange account id.
    pub id: String,
}

impl Account {
    /// Total balance: available plus hold.
    pub fn total(&self) -> Decimal {
        self.available + self.hold
    }

    /// Whether any funds exist in this account at all.
    pub fn has_funds(&self) -> bool {
        self.available > Decimal::ZERO || self.hold > Decimal::ZERO
    }
}

/// Tradability status of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    /// Accepting orders.
    Online,
    /// Any other exchange-reported state (delisted, auction, ...).
    Other(String),
}

impl ProductStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }
}

impl From<&str> for ProductStatus {
    fn from(s: &str) -> Self {
        if s == "online" {
            Self::Online
        } else {
            Self::Other(s.to_string())
        }
    }
}

/// A trading pair as listed by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Pair id (e.g. "BTC-USD").
    pub id: String,
    /// Base currency code.
    pub base_currency: String,
    /// Quote currency code.
    pub quote_currency: String,
    /// Minimum order size in base units.
    pub min_base_size: Decimal,
    /// Whether the pair currently accepts orders.
    pub status: ProductStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_total() {
        let account = Account {
            currency: "BTC".to_string(),
            available: Decimal::new(15, 1),
            hold: Decimal::new(25, 2),
            id: "uuid-1".to_string(),
        };
        assert_eq!(account.total(), Decimal::new(175, 2));
        assert!(account.has_funds());
    }

    #[test]
    fn test_account_without_funds() {
        let account = Account {
            currency: "ETH".to_string(),
            available: Decimal::ZERO,
            hold: Decimal::ZERO,
            id: "uuid-2".to_string(),
        };
        assert!(!account.has_funds());
    }

    #[test]
    fn test_product_status_from_str() {
        assert!(ProductStatus::from("online").is_online());
        assert_eq!(
            ProductStatus::from("delisted"),
            ProductStatus::Other("delisted".to_string())
        );
    }
}
