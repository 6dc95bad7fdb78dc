//! Core domain types for the Advanced Trade tool server.
//!
//! This crate provides the types shared by the exchange client and the
//! agent tools:
//! - `Account`, `Product`, `Order`: exchange-owned value objects
//! - `TradeAction`, `OrderSide`, `OrderType`: trading enums
//! - `ClientOrderId`: idempotency token for order placement

pub mod account;
pub mod error;
pub mod order;

pub use account::{Account, Product, ProductStatus};
pub use error::{CoreError, Result};
pub use order::{ClientOrderId, Order, OrderSide, OrderType, TradeAction};
