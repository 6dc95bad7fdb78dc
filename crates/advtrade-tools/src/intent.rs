//! Trade intent validation.
//!
//! Turns a parsed command map into a [`TradeIntent`] or a descriptive
//! [`IntentError`]. The error is a value, not a panic or propagated
//! exception: the trade tool renders it as reply text, because a bad
//! command is user-fixable input, not a system failure.

use std::collections::HashMap;

use advtrade_core::{OrderType, TradeAction};
use thiserror::Error;

/// Keys a trade command must carry, in reporting order.
pub const REQUIRED_PARAMS: [&str; 4] = ["action", "product", "amount", "type"];

/// A validated, not-yet-executed description of a trade to place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeIntent {
    pub action: TradeAction,
    pub product_id: String,
    /// Base quantity, decimal-as-string exactly as the user supplied it.
    pub amount: String,
    pub order_type: OrderType,
    /// Raw price parameter when supplied; forwarded to the exchange only
    /// for limit orders but echoed in the confirmation either way.
    pub price: Option<String>,
}

/// Recoverable validation failures, rendered verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("Missing required parameters: {}. Use format: 'action:BUY product:BTC-USD amount:0.001 type:market'", .0.join(", "))]
    MissingParams(Vec<String>),

    #[error("Action must be either BUY or SELL")]
    InvalidAction,

    #[error("Order type must be either 'market' or 'limit'")]
    InvalidOrderType,

    #[error("Limit orders require a price parameter")]
    MissingLimitPrice,
}

impl TradeIntent {
    /// Validate a parsed command map.
    ///
    /// Checks run in a fixed order: required-key presence (reporting
    /// exactly the absent keys), action token, order-type token, then the
    /// limit-implies-price constraint.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, IntentError> {
        let missing: Vec<String> = REQUIRED_PARAMS
            .iter()
            .filter(|key| !params.contains_key(**key))
            .map(|key| key.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IntentError::MissingParams(missing));
        }

        let action: TradeAction = params["action"]
            .parse()
            .map_err(|_| IntentError::InvalidAction)?;
        let order_type: OrderType = params["type"]
            .parse()
            .map_err(|_| IntentError::InvalidOrderType)?;

        let price = params.get("price").cloned().filter(|p| !p.is_empty());
        if order_type == OrderType::Limit && price.is_none() {
            return Err(IntentError::MissingLimitPrice);
        }

        Ok(Self {
            action,
            product_id: params["product"].clone(),
            amount: params["amount"].clone(),
            order_type,
            price,
        })
    }
}
