//! Scripted stub exchange for tool tests.
//!
//! Implements the facade trait over canned data and records every call,
//! so tests can assert both the rendered reply and the exact facade
//! traffic a command produced.

use std::sync::Mutex;

use advtrade_core::{Account, Order, OrderSide, OrderType, Product, ProductStatus};
use advtrade_exchange::{CancelReceipt, ExchangeApi, ExchangeError, ExchangeResult};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// A recorded placement call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub product_id: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub size: String,
    pub price: Option<String>,
}

#[derive(Default)]
pub struct StubExchange {
    /// When false, every call fails with `NotConfigured`.
    pub configured: bool,
    pub accounts: Vec<Account>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub placed: Mutex<Vec<PlacedOrder>>,
    pub cancelled: Mutex<Vec<String>>,
    pub list_calls: Mutex<Vec<(Option<String>, u32)>>,
}

impl StubExchange {
    pub fn configured() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn with_accounts(mut self, accounts: Vec<Account>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }

    fn check_configured(&self) -> ExchangeResult<()> {
        if self.configured {
            Ok(())
        } else {
            Err(ExchangeError::NotConfigured)
        }
    }
}

#[async_trait]
impl ExchangeApi for StubExchange {
    async fn list_accounts(&self) -> ExchangeResult<Vec<Account>> {
        self.check_configured()?;
        Ok(self.accounts.clone())
    }

    async fn list_products(&self) -> ExchangeResult<Vec<Product>> {
        self.check_configured()?;
        Ok(self.products.clone())
    }

    async fn place_order(
        &self,
        product_id: &str,
        side: OrderSide,
        order_type: OrderType,
        size: &str,
        price: Option<&str>,
    ) -> ExchangeResult<Order> {
        self.check_configured()?;
        self.placed.lock().unwrap().push(PlacedOrder {
            product_id: product_id.to_string(),
            side,
            order_type,
            size: size.to_string(),
            price: price.map(|p| p.to_string()),
        });
        // Echo a deterministic order back.
        Ok(Order {
            id: "stub-order-0001".to_string(),
            product_id: product_id.to_string(),
            side,
            size: size.to_string(),
            price: price.map(|p| p.to_string()),
            status: "PENDING".to_string(),
            order_type: order_type.to_string(),
        })
    }

    async fn list_orders(&self, status: Option<&str>, limit: u32) -> ExchangeResult<Vec<Order>> {
        self.check_configured()?;
        self.list_calls
            .lock()
            .unwrap()
            .push((status.map(|s| s.to_string()), limit));
        Ok(self.orders.clone())
    }

    async fn cancel_order(&self, order_id: &str) -> ExchangeResult<CancelReceipt> {
        self.check_configured()?;
        self.cancelled.lock().unwrap().push(order_id.to_string());
        Ok(CancelReceipt {
            order_id: order_id.to_string(),
        })
    }
}

pub fn account(currency: &str, available: Decimal, hold: Decimal) -> Account {
    Account {
        currency: currency.to_string(),
        available,
        hold,
        id: format!("acct-{currency}"),
    }
}

pub fn product(id: &str, base: &str, status: ProductStatus) -> Product {
    Product {
        id: id.to_string(),
        base_currency: base.to_string(),
        quote_currency: "USD".to_string(),
        min_base_size: Decimal::new(1, 4),
        status,
    }
}

pub fn order(id: &str, product_id: &str, side: OrderSide, price: Option<&str>) -> Order {
    Order {
        id: id.to_string(),
        product_id: product_id.to_string(),
        side,
        size: "0.5".to_string(),
        price: price.map(|p| p.to_string()),
        status: "OPEN".to_string(),
        order_type: "limit".to_string(),
    }
}
