//! End-to-end tool tests against a scripted stub exchange.

mod common;

use std::sync::Arc;

use advtrade_core::{OrderSide, OrderType, ProductStatus};
use advtrade_tools::balance::NO_BALANCES;
use advtrade_tools::{BalanceTool, OrdersTool, PortfolioTool, TradeTool};
use common::{account, order, product, StubExchange};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_balance_renders_nonzero_accounts() {
    let stub = StubExchange::configured().with_accounts(vec![
        account("BTC", Decimal::new(15, 1), Decimal::new(25, 2)),
        account("ETH", Decimal::ZERO, Decimal::ZERO),
    ]);
    let tool = BalanceTool::new(Arc::new(stub));

    let reply = tool.run().await;
    assert!(reply.success);
    assert!(reply.text.starts_with("Current Coinbase Account Balances:"));
    assert!(reply
        .text
        .contains("- BTC: 1.50000000 available, 0.25000000 on hold (Total: 1.75000000)"));
    // Zero-balance accounts are filtered out entirely.
    assert!(!reply.text.contains("ETH"));
}

#[tokio::test]
async fn test_balance_all_zero_returns_sentinel() {
    let stub = StubExchange::configured().with_accounts(vec![
        account("BTC", Decimal::ZERO, Decimal::ZERO),
        account("ETH", Decimal::ZERO, Decimal::ZERO),
    ]);
    let tool = BalanceTool::new(Arc::new(stub));

    let reply = tool.run().await;
    assert!(reply.success);
    assert_eq!(reply.text, NO_BALANCES);
}

#[tokio::test]
async fn test_balance_unconfigured_reports_failure() {
    let tool = BalanceTool::new(Arc::new(StubExchange::unconfigured()));

    let reply = tool.run().await;
    assert!(!reply.success);
    assert!(reply.text.starts_with("Failed to retrieve balances:"));
    assert!(reply.text.contains("credentials not configured"));
}

#[tokio::test]
async fn test_portfolio_sections_and_two_stage_truncation() {
    let products = (0..25)
        .map(|i| product(&format!("P{i:02}-USD"), &format!("P{i:02}"), ProductStatus::Online))
        .collect();
    let stub = StubExchange::configured()
        .with_accounts(vec![
            account("BTC", Decimal::new(2, 0), Decimal::ZERO),
            account("USD", Decimal::ZERO, Decimal::new(100, 0)),
        ])
        .with_products(products);
    let tool = PortfolioTool::new(Arc::new(stub));

    let reply = tool.run().await;
    assert!(reply.success);
    assert!(reply.text.starts_with("Coinbase Portfolio Overview:"));
    // Held-only balances do not count as holdings.
    assert!(reply.text.contains("- BTC: 2.00000000\n"));
    assert!(!reply.text.contains("USD:"));
    // 25 online products: 20 scanned, 10 rendered.
    assert!(reply
        .text
        .contains("Available Trading Pairs (showing first 20):"));
    let rendered = reply.text.matches("-USD (min:").count();
    assert_eq!(rendered, 10);
    assert!(reply.text.contains("- P00-USD (min: 0.0001 P00)"));
    assert!(!reply.text.contains("- P10-USD"));
}

#[tokio::test]
async fn test_portfolio_offline_products_excluded() {
    let stub = StubExchange::configured().with_products(vec![
        product("BTC-USD", "BTC", ProductStatus::Online),
        product("OLD-USD", "OLD", ProductStatus::Other("delisted".to_string())),
    ]);
    let tool = PortfolioTool::new(Arc::new(stub));

    let reply = tool.run().await;
    assert!(reply.text.contains("- No active holdings found"));
    assert!(reply.text.contains("showing first 1"));
    assert!(reply.text.contains("- BTC-USD"));
    assert!(!reply.text.contains("OLD-USD"));
}

#[tokio::test]
async fn test_trade_round_trip_market() {
    let stub = Arc::new(StubExchange::configured());
    let tool = TradeTool::new(stub.clone());

    let reply = tool
        .run("action:BUY product:BTC-USD amount:0.001 type:market")
        .await;

    assert!(reply.success);
    assert!(reply.text.contains("Trade executed successfully!"));
    assert!(reply.text.contains("Order ID: stub-order-0001"));
    assert!(reply.text.contains("Action: BUY 0.001 BTC-USD"));
    assert!(reply.text.contains("Type: MARKET"));
    assert!(reply.text.contains("Status: PENDING"));

    let placed = stub.placed.lock().unwrap();
    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].product_id, "BTC-USD");
    assert_eq!(placed[0].side, OrderSide::Buy);
    assert_eq!(placed[0].order_type, OrderType::Market);
    assert_eq!(placed[0].size, "0.001");
    assert_eq!(placed[0].price, None);
}

#[tokio::test]
async fn test_trade_limit_forwards_price() {
    let stub = Arc::new(StubExchange::configured());
    let tool = TradeTool::new(stub.clone());

    let reply = tool
        .run("action:SELL product:ETH-USD amount:2 type:limit price:2500")
        .await;

    assert!(reply.success);
    assert!(reply.text.contains("Type: LIMIT at $2500"));

    let placed = stub.placed.lock().unwrap();
    assert_eq!(placed[0].price.as_deref(), Some("2500"));
    assert_eq!(placed[0].side, OrderSide::Sell);
}

#[tokio::test]
async fn test_trade_market_price_echoed_but_not_sent() {
    let stub = Arc::new(StubExchange::configured());
    let tool = TradeTool::new(stub.clone());

    let reply = tool
        .run("action:BUY product:BTC-USD amount:1 type:market price:50000")
        .await;

    assert!(reply.text.contains(" at $50000"));
    assert_eq!(stub.placed.lock().unwrap()[0].price, None);
}

#[tokio::test]
async fn test_trade_validation_failure_is_text_not_call() {
    let stub = Arc::new(StubExchange::configured());
    let tool = TradeTool::new(stub.clone());

    let reply = tool.run("product:BTC-USD type:market").await;
    assert!(!reply.success);
    assert_eq!(
        reply.text,
        "Missing required parameters: action, amount. Use format: 'action:BUY product:BTC-USD amount:0.001 type:market'"
    );
    assert!(stub.placed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_trade_exchange_failure_renders_failed() {
    let tool = TradeTool::new(Arc::new(StubExchange::unconfigured()));

    let reply = tool
        .run("action:BUY product:BTC-USD amount:0.001 type:market")
        .await;
    assert!(!reply.success);
    assert!(reply.text.starts_with("Trade failed:"));
}

#[tokio::test]
async fn test_orders_cancel_dispatches_exactly_once() {
    let stub = Arc::new(StubExchange::configured());
    let tool = OrdersTool::new(stub.clone());

    let reply = tool.run("cancel:abc123").await;
    assert!(reply.success);
    assert_eq!(reply.text, "Order abc123 has been cancelled successfully.");

    let cancelled = stub.cancelled.lock().unwrap();
    assert_eq!(cancelled.as_slice(), ["abc123"]);
    assert!(stub.list_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_orders_open_filter_and_default_listing() {
    let stub = Arc::new(StubExchange::configured());
    let tool = OrdersTool::new(stub.clone());

    let _ = tool.run("open").await;
    let _ = tool.run("list").await;
    let _ = tool.run("all").await;

    let calls = stub.list_calls.lock().unwrap();
    assert_eq!(calls[0], (Some("open".to_string()), 20));
    assert_eq!(calls[1], (None, 20));
    assert_eq!(calls[2], (None, 20));
}

#[tokio::test]
async fn test_orders_listing_format() {
    let stub = StubExchange::configured().with_orders(vec![
        order("deadbeef-1234-5678", "BTC-USD", OrderSide::Buy, Some("50000")),
        order("abc", "ETH-USD", OrderSide::Sell, None),
    ]);
    let tool = OrdersTool::new(Arc::new(stub));

    let reply = tool.run("list").await;
    assert!(reply.success);
    assert!(reply.text.starts_with("Recent Orders (2 found):"));
    assert!(reply.text.contains("ID: deadbeef...\n"));
    assert!(reply.text.contains("  BUY 0.5 BTC-USD at $50000\n"));
    // Short ids render whole, still with the ellipsis marker.
    assert!(reply.text.contains("ID: abc...\n"));
    assert!(reply.text.contains("  SELL 0.5 ETH-USD\n"));
    assert!(reply.text.contains("  Type: LIMIT, Status: OPEN\n"));
}

#[tokio::test]
async fn test_orders_empty_listing() {
    let tool = OrdersTool::new(Arc::new(StubExchange::configured()));

    let reply = tool.run("list").await;
    assert!(reply.success);
    assert_eq!(reply.text, "No orders found.");
}

#[tokio::test]
async fn test_orders_failure_reports_manage_prefix() {
    let tool = OrdersTool::new(Arc::new(StubExchange::unconfigured()));

    let reply = tool.run("cancel:abc123").await;
    assert!(!reply.success);
    assert!(reply.text.starts_with("Failed to manage orders:"));

    let reply = tool.run("open").await;
    assert!(!reply.success);
    assert!(reply.text.starts_with("Failed to manage orders:"));
}
