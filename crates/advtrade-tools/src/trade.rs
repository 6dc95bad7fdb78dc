//! Trade execution tool.

use std::sync::Arc;

use advtrade_core::OrderType;
use advtrade_exchange::ExchangeApi;
use tracing::{error, info};

use crate::command::parse_command;
use crate::intent::TradeIntent;
use crate::reply::ToolReply;

/// Parses a trade command, validates it, and places the order.
///
/// Success classification of the reply is lexical (see
/// [`trade_succeeded`](crate::reply::trade_succeeded)); every path below
/// produces text that classifies correctly under that rule.
pub struct TradeTool {
    exchange: Arc<dyn ExchangeApi>,
}

impl TradeTool {
    pub const NAME: &'static str = "coinbase_trade";
    pub const DESCRIPTION: &'static str = "Execute cryptocurrency trades on Coinbase. Input format: 'action:BUY/SELL product:BTC-USD amount:0.001 type:market/limit price:50000' (price required for limit orders only).";

    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    pub async fn run(&self, query: &str) -> ToolReply {
        let params = parse_command(query);

        let intent = match TradeIntent::from_params(&params) {
            Ok(intent) => intent,
            Err(e) => return ToolReply::from_trade_text(e.to_string()),
        };

        // The exchange sees a price only for limit orders; a price given
        // with a market order is still echoed in the confirmation.
        let limit_price = match intent.order_type {
            OrderType::Limit => intent.price.as_deref(),
            OrderType::Market => None,
        };

        let order = match self
            .exchange
            .place_order(
                &intent.product_id,
                intent.action.side(),
                intent.order_type,
                &intent.amount,
                limit_price,
            )
            .await
        {
            Ok(order) => order,
            Err(e) => {
                error!(error = %e, "Trade tool error");
                return ToolReply::from_trade_text(format!("Trade failed: {e}"));
            }
        };

        let mut text = String::from("Trade executed successfully!\n");
        text.push_str(&format!("Order ID: {}\n", order.id));
        text.push_str(&format!(
            "Action: {} {} {}\n",
            intent.action, intent.amount, intent.product_id
        ));
        text.push_str(&format!(
            "Type: {}",
            intent.order_type.to_string().to_uppercase()
        ));
        if let Some(price) = &intent.price {
            text.push_str(&format!(" at ${price}"));
        }
        text.push_str(&format!("\nStatus: {}", order.status));

        info!(
            order_id = %order.id,
            action = %intent.action,
            product = %intent.product_id,
            amount = %intent.amount,
            "Trade executed"
        );
        ToolReply::from_trade_text(text)
    }
}
