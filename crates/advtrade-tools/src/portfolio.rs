//! Portfolio overview tool.

use std::sync::Arc;

use advtrade_exchange::ExchangeApi;
use tracing::{error, info};

use crate::reply::ToolReply;

/// Products considered at all, counted from the head of the exchange
/// listing.
const PRODUCT_SCAN_LIMIT: usize = 20;
/// Trading pairs actually rendered.
const PRODUCT_DISPLAY_LIMIT: usize = 10;

/// Combines account holdings with the online trading pairs.
///
/// The two exchange reads are independent: a caller may see accounts from
/// a slightly different instant than products. That is acceptable for an
/// overview and keeps the tool a pair of plain reads.
pub struct PortfolioTool {
    exchange: Arc<dyn ExchangeApi>,
}

impl PortfolioTool {
    pub const NAME: &'static str = "coinbase_portfolio";
    pub const DESCRIPTION: &'static str =
        "Get detailed portfolio information including available trading products and account overview.";

    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    pub async fn run(&self) -> ToolReply {
        let accounts = match self.exchange.list_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                error!(error = %e, "Portfolio tool error");
                return ToolReply::failed(format!("Failed to retrieve portfolio: {e}"));
            }
        };
        let products = match self.exchange.list_products().await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Portfolio tool error");
                return ToolReply::failed(format!("Failed to retrieve portfolio: {e}"));
            }
        };

        let holdings: Vec<_> = accounts
            .iter()
            .filter(|a| a.available > rust_decimal::Decimal::ZERO)
            .collect();

        // Two-stage truncation: scan the first 20 products for online
        // pairs, render at most 10 of them.
        let pairs: Vec<_> = products
            .iter()
            .take(PRODUCT_SCAN_LIMIT)
            .filter(|p| p.status.is_online())
            .collect();

        let mut text = String::from("Coinbase Portfolio Overview:\n\n");

        text.push_str("Active Holdings:\n");
        if holdings.is_empty() {
            text.push_str("- No active holdings found\n");
        } else {
            for account in &holdings {
                text.push_str(&format!("- {}: {:.8}\n", account.currency, account.available));
            }
        }

        text.push_str(&format!(
            "\nAvailable Trading Pairs (showing first {}):\n",
            pairs.len()
        ));
        for product in pairs.iter().take(PRODUCT_DISPLAY_LIMIT) {
            text.push_str(&format!(
                "- {} (min: {} {})\n",
                product.id, product.min_base_size, product.base_currency
            ));
        }

        info!(
            holdings = holdings.len(),
            trading_pairs = pairs.len(),
            "Portfolio overview completed"
        );
        ToolReply::ok(text)
    }
}
