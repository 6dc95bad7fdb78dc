//! HTTP routes for the tool server.

use std::sync::Arc;

use advtrade_exchange::ExchangeApi;
use advtrade_tools::{BalanceTool, OrdersTool, PortfolioTool, TradeTool};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::types::{ApiResponse, HealthResponse, ToolInfo, TradeRequest, SERVICE_NAME};

/// Shared application state: the four tools over one exchange facade.
#[derive(Clone)]
pub struct AppState {
    balance: Arc<BalanceTool>,
    portfolio: Arc<PortfolioTool>,
    trade: Arc<TradeTool>,
    orders: Arc<OrdersTool>,
}

impl AppState {
    /// Wire all tools to one shared facade.
    pub fn new(exchange: Arc<dyn ExchangeApi>) -> Self {
        Self {
            balance: Arc::new(BalanceTool::new(exchange.clone())),
            portfolio: Arc::new(PortfolioTool::new(exchange.clone())),
            trade: Arc::new(TradeTool::new(exchange.clone())),
            orders: Arc::new(OrdersTool::new(exchange)),
        }
    }
}

/// Create the axum router.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(api_health))
        .route("/balance", get(get_balance))
        .route("/portfolio", get(get_portfolio))
        .route("/trade", post(execute_trade))
        .route("/orders", get(get_orders))
        .route("/orders/{order_id}", delete(cancel_order))
        .route("/tools", get(list_tools))
        .route("/tools/{tool_name}", get(get_tool_info));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .nest("/api/v1", api)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn tool_catalog() -> [ToolInfo; 4] {
    [
        ToolInfo {
            name: BalanceTool::NAME,
            description: BalanceTool::DESCRIPTION,
            endpoint: "/api/v1/balance",
            tool_type: "agent_tool",
        },
        ToolInfo {
            name: PortfolioTool::NAME,
            description: PortfolioTool::DESCRIPTION,
            endpoint: "/api/v1/portfolio",
            tool_type: "agent_tool",
        },
        ToolInfo {
            name: TradeTool::NAME,
            description: TradeTool::DESCRIPTION,
            endpoint: "/api/v1/trade",
            tool_type: "agent_tool",
        },
        ToolInfo {
            name: OrdersTool::NAME,
            description: OrdersTool::DESCRIPTION,
            endpoint: "/api/v1/orders",
            tool_type: "agent_tool",
        },
    ]
}

/// Service descriptor.
async fn root() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Tool server for agent-driven crypto trading operations",
        "endpoints": {
            "health": "/api/v1/health",
            "balance": "/api/v1/balance",
            "portfolio": "/api/v1/portfolio",
            "trade": "/api/v1/trade",
            "orders": "/api/v1/orders",
            "tools": "/api/v1/tools",
        },
    }))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": SERVICE_NAME}))
}

async fn api_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        tools_available: vec!["balance", "portfolio", "trade", "orders"],
    })
}

async fn get_balance(State(state): State<AppState>) -> Json<ApiResponse> {
    info!("Balance endpoint called");
    let reply = state.balance.run().await;
    Json(ApiResponse::new(
        reply.success,
        "Balance request processed",
        json!({"balance_info": reply.text}),
    ))
}

async fn get_portfolio(State(state): State<AppState>) -> Json<ApiResponse> {
    info!("Portfolio endpoint called");
    let reply = state.portfolio.run().await;
    Json(ApiResponse::new(
        reply.success,
        "Portfolio request processed",
        json!({"portfolio_info": reply.text}),
    ))
}

async fn execute_trade(
    State(state): State<AppState>,
    Json(request): Json<TradeRequest>,
) -> Json<ApiResponse> {
    info!(product_id = %request.product_id, action = %request.action, "Trade endpoint called");
    let reply = state.trade.run(&request.to_command()).await;
    Json(ApiResponse::new(
        reply.success,
        "Trade request processed",
        json!({"trade_result": reply.text}),
    ))
}

#[derive(Debug, Deserialize)]
struct OrdersQuery {
    status: Option<String>,
}

async fn get_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Json<ApiResponse> {
    info!(status_filter = ?query.status, "Orders endpoint called");
    let tool_input = match query.status.as_deref() {
        Some("open") => "open",
        Some("all") => "all",
        _ => "list",
    };
    let reply = state.orders.run(tool_input).await;
    Json(ApiResponse::new(
        reply.success,
        "Orders request processed",
        json!({"orders_info": reply.text}),
    ))
}

async fn cancel_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Json<ApiResponse> {
    info!(order_id = %order_id, "Cancel order endpoint called");
    let reply = state.orders.run(&format!("cancel:{order_id}")).await;
    let success = reply.text.to_lowercase().contains("cancelled successfully");
    Json(ApiResponse::new(
        success,
        "Order cancellation processed",
        json!({"cancel_result": reply.text}),
    ))
}

async fn list_tools() -> Json<ApiResponse> {
    let tools = tool_catalog();
    Json(ApiResponse::new(
        true,
        "Available tools listed",
        json!({
            "tools": tools,
            "total_count": tools.len(),
        }),
    ))
}

async fn get_tool_info(
    Path(tool_name): Path<String>,
) -> Result<Json<ApiResponse>, (StatusCode, Json<Value>)> {
    let catalog = tool_catalog();
    let index = match tool_name.as_str() {
        "balance" => 0,
        "portfolio" => 1,
        "trade" => 2,
        "orders" => 3,
        _ => {
            return Err((
                StatusCode::NOT_FOUND,
                Json(json!({
                    "detail": format!(
                        "Tool '{tool_name}' not found. Available tools: balance, portfolio, trade, orders"
                    ),
                })),
            ))
        }
    };
    let info = &catalog[index];
    Ok(Json(ApiResponse::new(
        true,
        "Tool info",
        json!({
            "name": info.name,
            "description": info.description,
            "endpoint": info.endpoint,
            "type": info.tool_type,
        }),
    )))
}
