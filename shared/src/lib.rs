use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an account or transaction as issued by the server
pub type Identifier = String;

/// Parameters selecting which account's transactions are displayed.
///
/// Replaced wholesale on every render, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewOptions {
    pub account_id: Identifier,
}

impl ViewOptions {
    pub fn for_account(account_id: impl Into<Identifier>) -> Self {
        Self {
            account_id: account_id.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Identifier,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Identifier,
    /// Income or expense, drives the row's CSS modifier
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub name: String,
    pub sum: f64,
    /// Raw server timestamp, e.g. "2019-03-10T03:20:41"
    pub created_at: String,
}

/// Type of transaction for rendering purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money added to the account
    Income,
    /// Money spent from the account
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Envelope every gateway call answers with.
///
/// The server reports logical failures in-band through `success: false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Data of a successful response; `None` when the server declined or sent nothing
    pub fn payload(self) -> Option<T> {
        if self.success {
            self.data
        } else {
            None
        }
    }

    /// Human readable reason for a failed response
    pub fn failure_reason(&self) -> String {
        self.error
            .clone()
            .unwrap_or_else(|| "server reported success: false".to_string())
    }
}

impl ApiResponse<()> {
    /// Acknowledgement without data, as returned by remove/create calls
    pub fn acknowledged() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRequest {
    pub id: Identifier,
}

impl RemoveRequest {
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self { id: id.into() }
    }
}

/// Filter for listing accounts; empty means every account of the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub name: String,
    pub sum: f64,
    pub account_id: Identifier,
}
