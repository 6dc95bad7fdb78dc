//! The facade trait the tools are written against.
//!
//! Keeping the tools on a trait rather than the concrete client allows
//! dependency injection for testing: production wires in
//! [`ExchangeClient`](crate::ExchangeClient), tests wire in a scripted
//! stub.

use advtrade_core::{Account, Order, OrderSide, OrderType, Product};
use async_trait::async_trait;

use crate::error::ExchangeResult;
use crate::types::CancelReceipt;

/// Authenticated access to the exchange.
///
/// All methods are side-effecting only on the remote exchange. Every
/// method fails with `ExchangeError::NotConfigured` when credentials are
/// absent, before any network traffic.
#[async_trait]
pub trait ExchangeApi: Send + Sync {
    /// Every account the exchange reports, unfiltered.
    async fn list_accounts(&self) -> ExchangeResult<Vec<Account>>;

    /// Every product the exchange reports, unfiltered.
    async fn list_products(&self) -> ExchangeResult<Vec<Product>>;

    /// Place an order. `size` is the base quantity; `price` is forwarded
    /// as the limit price only when present.
    async fn place_order(
        &self,
        product_id: &str,
        side: OrderSide,
        order_type: OrderType,
        size: &str,
        price: Option<&str>,
    ) -> ExchangeResult<Order>;

    /// List orders, optionally filtered to a single status token, bounded
    /// by `limit`. With no filter the exchange's recent-orders default
    /// applies.
    async fn list_orders(&self, status: Option<&str>, limit: u32) -> ExchangeResult<Vec<Order>>;

    /// Request cancellation of one order. Fails when the exchange does
    /// not know the id.
    async fn cancel_order(&self, order_id: &str) -> ExchangeResult<CancelReceipt>;
}
