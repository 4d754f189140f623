//! # View-Function RPC
//!
//! Read-only Move calls go to `POST {rpc}/rpc/v2/view` with a JSON body of
//! `{function, type_arguments, arguments}`.
//!
//! [`ViewService`] is the seam the provider calls through; [`HttpViewClient`]
//! is the reqwest implementation used in production.

use async_trait::async_trait;
use futures::future::AbortRegistration;
use lib_core::network::view_url;
use lib_core::{Result, WalletError};
use reqwest::Client;
use serde_json::Value;
use shared::dto::view::ViewFunctionBody;
use tracing::{debug, warn};

/// Parameters of a view call.
#[derive(Debug)]
pub struct ViewFunctionParams {
    pub contract_address: String,
    pub module_name: String,
    pub function_name: String,
    pub type_args: Vec<String>,
    pub function_args: Vec<Value>,
    /// Abort the request from the matching `AbortHandle`.
    pub abort: Option<AbortRegistration>,
}

impl ViewFunctionParams {
    pub fn new(
        contract_address: impl Into<String>,
        module_name: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            contract_address: contract_address.into(),
            module_name: module_name.into(),
            function_name: function_name.into(),
            type_args: Vec::new(),
            function_args: Vec::new(),
            abort: None,
        }
    }

    pub fn with_type_args(mut self, type_args: Vec<String>) -> Self {
        self.type_args = type_args;
        self
    }

    pub fn with_args(mut self, function_args: Vec<Value>) -> Self {
        self.function_args = function_args;
        self
    }

    pub fn with_abort(mut self, registration: AbortRegistration) -> Self {
        self.abort = Some(registration);
        self
    }

    /// Request body for this call.
    pub fn body(&self) -> ViewFunctionBody {
        ViewFunctionBody::new(&self.contract_address, &self.module_name, &self.function_name)
            .with_type_arguments(self.type_args.clone())
            .with_arguments(self.function_args.clone())
    }
}

/// Executes view calls against an RPC base URL.
#[async_trait(?Send)]
pub trait ViewService {
    async fn call_view(&self, rpc_base: &str, body: &ViewFunctionBody) -> Result<Value>;
}

/// reqwest-backed [`ViewService`].
#[derive(Debug, Clone, Default)]
pub struct HttpViewClient {
    client: Client,
}

impl HttpViewClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing connection pool.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl ViewService for HttpViewClient {
    async fn call_view(&self, rpc_base: &str, body: &ViewFunctionBody) -> Result<Value> {
        let url = view_url(rpc_base);
        debug!("POST {} ({})", url, body.function);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| WalletError::Rpc(format!("{url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!("View call {} failed with status {}", body.function, status);
            return Err(WalletError::Http {
                status: status.as_u16(),
                body: body_text,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WalletError::Decoding(format!("view response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::json;

    async fn spawn_rpc(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve test rpc");
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_params_body() {
        let params = ViewFunctionParams::new("0x1", "coin", "balance")
            .with_type_args(vec!["0x1::supra_coin::SupraCoin".to_string()])
            .with_args(vec![json!("0xabc")]);
        let body = params.body();
        assert_eq!(body.function, "0x1::coin::balance");
        assert_eq!(body.type_arguments, vec!["0x1::supra_coin::SupraCoin"]);
        assert_eq!(body.arguments, vec![json!("0xabc")]);
    }

    #[tokio::test]
    async fn test_posts_body_and_returns_json() {
        let router = Router::new().route(
            "/rpc/v2/view",
            post(|Json(body): Json<Value>| async move {
                Json(json!({
                    "result": [body["function"].clone(), body["type_arguments"].clone(), body["arguments"].clone()]
                }))
            }),
        );
        let base = spawn_rpc(router).await;

        let body = ViewFunctionParams::new("0x1", "coin", "balance")
            .with_type_args(vec!["T".to_string()])
            .with_args(vec![json!(7)])
            .body();
        let value = HttpViewClient::new().call_view(&base, &body).await.unwrap();

        assert_eq!(value, json!({ "result": ["0x1::coin::balance", ["T"], [7]] }));
    }

    #[tokio::test]
    async fn test_non_2xx_carries_status_and_body() {
        let router = Router::new().route(
            "/rpc/v2/view",
            post(|| async { (StatusCode::NOT_FOUND, "function not found") }),
        );
        let base = spawn_rpc(router).await;

        let body = ViewFunctionParams::new("0x1", "nope", "missing").body();
        let err = HttpViewClient::new().call_view(&base, &body).await.unwrap_err();

        assert_eq!(err.status_code(), Some(404));
        assert_eq!(
            err,
            WalletError::Http {
                status: 404,
                body: "function not found".to_string()
            }
        );
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_decoding_error() {
        let router = Router::new().route("/rpc/v2/view", post(|| async { "not json" }));
        let base = spawn_rpc(router).await;

        let body = ViewFunctionParams::new("0x1", "coin", "balance").body();
        let err = HttpViewClient::new().call_view(&base, &body).await.unwrap_err();

        assert!(matches!(err, WalletError::Decoding(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_rpc_error() {
        // Port 9 (discard) is closed on test hosts.
        let body = ViewFunctionParams::new("0x1", "coin", "balance").body();
        let err = HttpViewClient::new()
            .call_view("http://127.0.0.1:9", &body)
            .await
            .unwrap_err();

        assert!(matches!(err, WalletError::Rpc(_)));
    }
}
