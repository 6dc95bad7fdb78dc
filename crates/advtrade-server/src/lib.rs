//! advtrade-server - HTTP facade over the Coinbase agent tools.
//!
//! Thin plumbing only: the router maps each endpoint to one tool
//! invocation and wraps the reply in a JSON envelope. All decision logic
//! lives in `advtrade-tools` and below.
//!
//! Surface:
//!
//! ```text
//! GET    /                          service descriptor
//! GET    /health                    liveness
//! GET    /api/v1/health             liveness + tool names
//! GET    /api/v1/balance            balance tool
//! GET    /api/v1/portfolio          portfolio tool
//! POST   /api/v1/trade              trade tool (JSON body -> command string)
//! GET    /api/v1/orders?status=     orders tool (list/open/all)
//! DELETE /api/v1/orders/{order_id}  orders tool (cancel)
//! GET    /api/v1/tools              tool catalog
//! GET    /api/v1/tools/{tool_name}  one tool's metadata
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use routes::{create_router, AppState};
