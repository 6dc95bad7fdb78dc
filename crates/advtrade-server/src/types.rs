//! JSON request/response types for the HTTP surface.

use advtrade_core::{OrderType, TradeAction};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Service name reported by health and descriptor endpoints.
pub const SERVICE_NAME: &str = "advtrade-tool-server";

/// Uniform response envelope for every tool-backed endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiResponse {
    pub fn new(success: bool, message: impl Into<String>, data: Value) -> Self {
        Self {
            success,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub tools_available: Vec<&'static str>,
}

/// Trade execution request.
///
/// Reduced to the tool command grammar before dispatch, so the HTTP body
/// and the free-form command path validate identically.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeRequest {
    pub action: TradeAction,
    pub product_id: String,
    pub amount: String,
    #[serde(default)]
    pub order_type: OrderType,
    #[serde(default)]
    pub price: Option<String>,
}

impl TradeRequest {
    /// Render as a `key:value` command string.
    pub fn to_command(&self) -> String {
        let mut command = format!(
            "action:{} product:{} amount:{} type:{}",
            self.action, self.product_id, self.amount, self.order_type
        );
        if let Some(price) = &self.price {
            command.push_str(&format!(" price:{price}"));
        }
        command
    }
}

/// One entry in the tool catalog.
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub endpoint: &'static str,
    #[serde(rename = "type")]
    pub tool_type: &'static str,
}
