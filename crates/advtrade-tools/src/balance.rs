//! Account balance summary tool.

use std::sync::Arc;

use advtrade_exchange::ExchangeApi;
use tracing::{error, info};

use crate::reply::ToolReply;

/// Exact sentence returned when no account holds any funds. Callers must
/// treat it as an empty result, not an error.
pub const NO_BALANCES: &str = "No cryptocurrency balances found in your Coinbase account.";

/// Reports every account with a non-zero available or hold balance.
pub struct BalanceTool {
    exchange: Arc<dyn ExchangeApi>,
}

impl BalanceTool {
    pub const NAME: &'static str = "coinbase_balance";
    pub const DESCRIPTION: &'static str = "Get current cryptocurrency balances from Coinbase account. Returns all account balances with available and hold amounts.";

    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self { exchange }
    }

    pub async fn run(&self) -> ToolReply {
        let accounts = match self.exchange.list_accounts().await {
            Ok(accounts) => accounts,
            Err(e) => {
                error!(error = %e, "Balance tool error");
                return ToolReply::failed(format!("Failed to retrieve balances: {e}"));
            }
        };

        let active: Vec<_> = accounts.iter().filter(|a| a.has_funds()).collect();

        if active.is_empty() {
            return ToolReply::ok(NO_BALANCES);
        }

        let mut text = String::from("Current Coinbase Account Balances:\n");
        for account in &active {
            text.push_str(&format!(
                "- {}: {:.8} available, {:.8} on hold (Total: {:.8})\n",
                account.currency,
                account.available,
                account.hold,
                account.total()
            ));
        }

        info!(active_accounts = active.len(), "Balance check completed");
        ToolReply::ok(text)
    }
}
