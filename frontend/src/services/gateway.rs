//! # Data gateway
//!
//! The asynchronous request/response contract the page talks to. Every call
//! resolves to either a transport-level `GatewayError` or the server's
//! `ApiResponse` envelope, which may itself report `success: false`.

use async_trait::async_trait;
use shared::{
    Account, AccountFilter, ApiResponse, CreateTransactionRequest, RemoveRequest, Transaction,
    ViewOptions,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Serialize(String),
}

pub type GatewayResult<T> = Result<ApiResponse<T>, GatewayError>;

/// Account and transaction operations exposed by the server.
///
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait DataGateway {
    async fn list_accounts(&self, filter: &AccountFilter) -> GatewayResult<Vec<Account>>;

    async fn get_account(&self, id: &str) -> GatewayResult<Account>;

    async fn remove_account(&self, request: &RemoveRequest) -> GatewayResult<()>;

    /// Transactions of the account selected by `options`, in server order
    async fn list_transactions(&self, options: &ViewOptions) -> GatewayResult<Vec<Transaction>>;

    async fn create_transaction(&self, request: &CreateTransactionRequest) -> GatewayResult<()>;

    async fn remove_transaction(&self, request: &RemoveRequest) -> GatewayResult<()>;
}
