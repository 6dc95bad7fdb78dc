//! HTTP client for the Advanced Trade REST API.
//!
//! One `ExchangeClient` is constructed at process start and shared by all
//! tools. Credentials are optional: without them the client still
//! constructs, but every operation returns
//! [`ExchangeError::NotConfigured`] before touching the network.

use std::time::Duration;

use advtrade_core::{Account, ClientOrderId, Order, OrderSide, OrderType, Product};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::ExchangeApi;
use crate::auth::JwtSigner;
use crate::error::{ExchangeError, ExchangeResult};
use crate::types::{
    AccountsEnvelope, CancelReceipt, CancelResultsEnvelope, OrderEnvelope, OrdersEnvelope,
    ProductsEnvelope,
};

const PRODUCTION_URL: &str = "https://api.coinbase.com";
const SANDBOX_URL: &str = "https://api-public.sandbox.exchange.coinbase.com";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// API credentials: key name plus EC private key PEM.
#[derive(Clone)]
pub struct Credentials {
    pub api_key: String,
    pub private_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

/// Client construction options.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Use the sandbox environment instead of production.
    pub sandbox: bool,
    /// Request timeout. Explicit rather than the HTTP client default so
    /// operators can tune it.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Order creation request body.
#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    client_order_id: String,
    product_id: &'a str,
    side: OrderSide,
    order_type: OrderType,
    base_size: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit_price: Option<&'a str>,
}

/// Batch cancellation request body.
#[derive(Debug, Serialize)]
struct CancelOrdersRequest<'a> {
    order_ids: Vec<&'a str>,
}

/// Authenticated client for the Advanced Trade API.
pub struct ExchangeClient {
    http: Client,
    base_url: String,
    /// Host + nothing else, as bound into the token `uri` claim.
    host: String,
    signer: Option<JwtSigner>,
}

impl ExchangeClient {
    /// Create a new client.
    ///
    /// Passing `None` credentials yields an unconfigured client whose
    /// operations all fail with `NotConfigured`; this keeps startup
    /// infallible when the operator has not provisioned keys yet.
    pub fn new(credentials: Option<Credentials>, config: ClientConfig) -> ExchangeResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ExchangeError::Transport(format!("Failed to create HTTP client: {e}")))?;

        let base_url = if config.sandbox {
            SANDBOX_URL.to_string()
        } else {
            PRODUCTION_URL.to_string()
        };
        let host = base_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .to_string();

        let signer = match credentials {
            Some(c) => Some(JwtSigner::new(c.api_key, c.private_key)),
            None => {
                warn!("Coinbase API credentials not configured; exchange operations will fail until they are set");
                None
            }
        };

        info!(
            sandbox = config.sandbox,
            timeout_secs = config.timeout.as_secs(),
            credentials_configured = signer.is_some(),
            "Initialized exchange client"
        );

        Ok(Self {
            http,
            base_url,
            host,
            signer,
        })
    }

    /// Whether credentials were provided at construction.
    pub fn is_configured(&self) -> bool {
        self.signer.is_some()
    }

    fn signer(&self) -> ExchangeResult<&JwtSigner> {
        self.signer.as_ref().ok_or(ExchangeError::NotConfigured)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ExchangeResult<T> {
        let token = self
            .signer()?
            .bearer_token("GET", &format!("{}{path}", self.host))?;

        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ExchangeResult<T> {
        let token = self
            .signer()?
            .bearer_token("POST", &format!("{}{path}", self.host))?;

        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .map_err(|e| ExchangeError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ExchangeResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExchangeError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json()
            .await
            .map_err(|e| ExchangeError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ExchangeApi for ExchangeClient {
    async fn list_accounts(&self) -> ExchangeResult<Vec<Account>> {
        let envelope: AccountsEnvelope = self.get_json("/api/v3/brokerage/accounts", &[]).await?;

        let accounts = envelope
            .accounts
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(account_count = accounts.len(), "Retrieved account balances");
        Ok(accounts)
    }

    async fn list_products(&self) -> ExchangeResult<Vec<Product>> {
        let envelope: ProductsEnvelope = self.get_json("/api/v3/brokerage/products", &[]).await?;

        let products = envelope
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(product_count = products.len(), "Retrieved trading products");
        Ok(products)
    }

    async fn place_order(
        &self,
        product_id: &str,
        side: OrderSide,
        order_type: OrderType,
        size: &str,
        price: Option<&str>,
    ) -> ExchangeResult<Order> {
        let request = CreateOrderRequest {
            client_order_id: ClientOrderId::new().to_string(),
            product_id,
            side,
            order_type,
            base_size: size,
            limit_price: price,
        };

        let envelope: OrderEnvelope = self.post_json("/api/v3/brokerage/orders", &request).await?;
        let order = Order::try_from(envelope.order)?;

        info!(
            order_id = %order.id,
            product_id,
            %side,
            %order_type,
            "Order placed successfully"
        );
        Ok(order)
    }

    async fn list_orders(&self, status: Option<&str>, limit: u32) -> ExchangeResult<Vec<Order>> {
        let mut query = vec![("limit", limit.to_string())];
        if let Some(status) = status {
            query.push(("order_status", status.to_string()));
        }

        let envelope: OrdersEnvelope = self
            .get_json("/api/v3/brokerage/orders/historical/batch", &query)
            .await?;

        let orders = envelope
            .orders
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        info!(order_count = orders.len(), status = ?status, "Retrieved orders");
        Ok(orders)
    }

    async fn cancel_order(&self, order_id: &str) -> ExchangeResult<CancelReceipt> {
        let request = CancelOrdersRequest {
            order_ids: vec![order_id],
        };

        let envelope: CancelResultsEnvelope = self
            .post_json("/api/v3/brokerage/orders/batch_cancel", &request)
            .await?;

        let result = envelope.results.into_iter().next().ok_or_else(|| {
            ExchangeError::Decode("Empty cancellation result set".to_string())
        })?;

        if !result.success {
            let reason = result
                .failure_reason
                .unwrap_or_else(|| "unknown reason".to_string());
            return Err(ExchangeError::CancelRejected(format!(
                "{order_id}: {reason}"
            )));
        }

        info!(order_id, "Order cancelled successfully");
        Ok(CancelReceipt {
            order_id: if result.order_id.is_empty() {
                order_id.to_string()
            } else {
                result.order_id
            },
        })
    }
}
