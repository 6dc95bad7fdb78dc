//! Agent tools for Coinbase trading operations.
//!
//! Four independently invokable tools, each combining one or more
//! exchange facade calls with deterministic post-processing:
//!
//! - [`BalanceTool`]: non-zero account balances
//! - [`PortfolioTool`]: holdings plus online trading pairs
//! - [`TradeTool`]: command string -> validated intent -> order placement
//! - [`OrdersTool`]: list, filter, and cancel orders
//!
//! Every tool takes a shared [`ExchangeApi`](advtrade_exchange::ExchangeApi)
//! at construction and returns a [`ToolReply`]: descriptive text plus a
//! success flag. Recoverable problems (bad user input, exchange failures)
//! become reply text, never errors: the caller is a conversational agent
//! that expects a sentence either way.

pub mod balance;
pub mod command;
pub mod intent;
pub mod orders;
pub mod portfolio;
pub mod reply;
pub mod trade;

pub use balance::BalanceTool;
pub use command::parse_command;
pub use intent::{IntentError, TradeIntent, REQUIRED_PARAMS};
pub use orders::OrdersTool;
pub use portfolio::PortfolioTool;
pub use reply::{trade_succeeded, ToolReply};
pub use trade::TradeTool;
