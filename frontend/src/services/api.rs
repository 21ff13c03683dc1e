use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use shared::{
    Account, AccountFilter, ApiResponse, CreateTransactionRequest, RemoveRequest, Transaction,
    ViewOptions,
};

use crate::services::gateway::{DataGateway, GatewayError, GatewayResult};

/// API client for communicating with the finance server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self::with_base_url("http://localhost:3000".to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for `path`, which may or may not start with a slash
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL of a single account; the id is percent-encoded as one path segment
    pub fn account_endpoint(&self, id: &str) -> String {
        self.endpoint(&format!("account/{}", urlencoding::encode(id)))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
        // Failed operations still carry a JSON envelope, whatever the status code
        let status = response.status();
        match response.json::<ApiResponse<T>>().await {
            Ok(data) => Ok(data),
            Err(e) if response_is_ok(status) => Err(GatewayError::Decode(e.to_string())),
            Err(e) => Err(GatewayError::Transport(format!("Server error {}: {}", status, e))),
        }
    }

    async fn acknowledge(response: Response) -> GatewayResult<()> {
        let envelope = Self::decode::<IgnoredAny>(response).await?;
        Ok(ApiResponse {
            success: envelope.success,
            data: None,
            error: envelope.error,
        })
    }
}

fn response_is_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

fn transport(e: gloo::net::Error) -> GatewayError {
    GatewayError::Transport(e.to_string())
}

fn serialize(e: gloo::net::Error) -> GatewayError {
    GatewayError::Serialize(e.to_string())
}

#[async_trait(?Send)]
impl DataGateway for ApiClient {
    async fn list_accounts(&self, filter: &AccountFilter) -> GatewayResult<Vec<Account>> {
        let mut request = Request::get(&self.endpoint("account"));
        if let Some(name) = &filter.name {
            request = request.query([("name", name.as_str())]);
        }
        let response = request.send().await.map_err(transport)?;
        Self::decode(response).await
    }

    async fn get_account(&self, id: &str) -> GatewayResult<Account> {
        let response = Request::get(&self.account_endpoint(id))
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn remove_account(&self, request: &RemoveRequest) -> GatewayResult<()> {
        let response = Request::delete(&self.endpoint("account"))
            .json(request)
            .map_err(serialize)?
            .send()
            .await
            .map_err(transport)?;
        Self::acknowledge(response).await
    }

    async fn list_transactions(&self, options: &ViewOptions) -> GatewayResult<Vec<Transaction>> {
        let response = Request::get(&self.endpoint("transaction"))
            .query([("account_id", options.account_id.as_str())])
            .send()
            .await
            .map_err(transport)?;
        Self::decode(response).await
    }

    async fn create_transaction(&self, request: &CreateTransactionRequest) -> GatewayResult<()> {
        let response = Request::put(&self.endpoint("transaction"))
            .json(request)
            .map_err(serialize)?
            .send()
            .await
            .map_err(transport)?;
        Self::acknowledge(response).await
    }

    async fn remove_transaction(&self, request: &RemoveRequest) -> GatewayResult<()> {
        let response = Request::delete(&self.endpoint("transaction"))
            .json(request)
            .map_err(serialize)?
            .send()
            .await
            .map_err(transport)?;
        Self::acknowledge(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slashes() {
        let client = ApiClient::with_base_url("https://bank.example/api/".to_string());
        assert_eq!(client.base_url(), "https://bank.example/api");
        assert_eq!(client.endpoint("/account/42"), "https://bank.example/api/account/42");
        assert_eq!(client.endpoint("transaction"), "https://bank.example/api/transaction");
    }

    #[test]
    fn test_account_endpoint_encodes_id_as_one_segment() {
        let client = ApiClient::default();
        assert_eq!(client.account_endpoint("42"), "http://localhost:3000/account/42");
        assert_eq!(
            client.account_endpoint("a/b?c#d"),
            "http://localhost:3000/account/a%2Fb%3Fc%23d"
        );
        assert_eq!(
            client.account_endpoint("счёт 1"),
            "http://localhost:3000/account/%D1%81%D1%87%D1%91%D1%82%201"
        );
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiClient::default().endpoint("account"), "http://localhost:3000/account");
    }

    #[test]
    fn test_response_is_ok_range() {
        assert!(response_is_ok(200));
        assert!(response_is_ok(204));
        assert!(!response_is_ok(400));
        assert!(!response_is_ok(500));
    }
}
