//! Order listing and cancellation tool.

use std::sync::Arc;

use advtrade_exchange::ExchangeApi;
use tracing::{error, info};

use crate::reply::ToolReply;

/// Orders fetched for a listing request.
const LIST_LIMIT: u32 = 20;

/// Three sub-modes keyed by the command string: `cancel:<id>` cancels one
/// order, `open` lists only open orders, anything else (`list`, `all`,
/// ...) lists recent orders with the exchange default status semantics.
pub struct OrdersTool {
    exchange: Arc<dyn ExchangeApi>,
}

impl OrdersTool {
    pub const NAME: &'static str = "coinbase_orders";
    pub const DESCRIPTION: &'static str = "View and manage Coinbase orders. Input options: 'list' or 'all' for recent orders, 'open' for open orders only, 'cancel:ORDER_ID' to cancel a specific order.";

    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    pub async fn run(&self, query: &str) -> ToolReply {
        let query = query.trim();

        // Mode detection is case-insensitive but the order id is taken
        // verbatim: exchange ids are opaque and must not be case-folded.
        if let Some(order_id) = strip_prefix_ignore_case(query, "cancel:") {
            return self.cancel(order_id).await;
        }

        let status_filter = if query.eq_ignore_ascii_case("open") {
            Some("open")
        } else {
            None
        };

        let orders = match self.exchange.list_orders(status_filter, LIST_LIMIT).await {
            Ok(orders) => orders,
            Err(e) => {
                error!(error = %e, "Orders tool error");
                return ToolReply::failed(format!("Failed to manage orders: {e}"));
            }
        };

        if orders.is_empty() {
            return ToolReply::ok("No orders found.");
        }

        let mut text = format!("Recent Orders ({} found):\n\n", orders.len());
        for order in &orders {
            text.push_str(&format!("ID: {}...\n", short_id(&order.id)));
            text.push_str(&format!(
                "  {} {} {}",
                order.side.to_string().to_uppercase(),
                order.size,
                order.product_id
            ));
            if let Some(price) = &order.price {
                text.push_str(&format!(" at ${price}"));
            }
            text.push_str(&format!(
                "\n  Type: {}, Status: {}\n\n",
                order.order_type.to_uppercase(),
                order.status.to_uppercase()
            ));
        }

        info!(count = orders.len(), status = ?status_filter, "Orders retrieved via tool");
        ToolReply::ok(text)
    }

    async fn cancel(&self, order_id: &str) -> ToolReply {
        match self.exchange.cancel_order(order_id).await {
            Ok(_) => {
                info!(order_id, "Order cancelled via tool");
                ToolReply::ok(format!("Order {order_id} has been cancelled successfully."))
            }
            Err(e) => {
                error!(error = %e, order_id, "Orders tool error");
                ToolReply::failed(format!("Failed to manage orders: {e}"))
            }
        }
    }
}

/// First eight characters of an order id, whole id when shorter.
fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    match input.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&input[prefix.len()..]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id_truncates_long_ids() {
        assert_eq!(short_id("deadbeef-1234-5678"), "deadbeef");
    }

    #[test]
    fn test_short_id_keeps_short_ids_whole() {
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id(""), "");
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("cancel:abc", "cancel:"), Some("abc"));
        assert_eq!(strip_prefix_ignore_case("CANCEL:Abc", "cancel:"), Some("Abc"));
        assert_eq!(strip_prefix_ignore_case("open", "cancel:"), None);
        assert_eq!(strip_prefix_ignore_case("can", "cancel:"), None);
    }
}
