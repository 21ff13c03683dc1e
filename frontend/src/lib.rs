//! Transactions page of the personal finance tracker: renders one account's
//! transactions and handles account/transaction deletion in the browser.

pub mod config;
pub mod error;
pub mod pages;
pub mod services;

pub use config::FrontendConfig;
pub use error::PageError;
pub use pages::{MutationOutcome, PageAction, PageServices, PageView, TransactionsPage};
