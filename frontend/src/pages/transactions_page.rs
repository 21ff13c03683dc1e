//! # Transactions page
//!
//! Owns the "current view options" of the account page and keeps the title and
//! transaction list in sync with the server. Reads are loud: a transport
//! failure is returned to the caller. Mutations are soft: failures are logged
//! and reported through [`MutationOutcome`], leaving the view untouched.

use std::rc::Rc;

use log::{debug, info, warn};
use shared::{RemoveRequest, Transaction, ViewOptions};

use crate::error::PageError;
use crate::pages::markup::transactions_html;
use crate::pages::view::{PageAction, PageView};
use crate::pages::view_state::{RenderToken, ViewState};
use crate::services::confirm::{Confirm, CONFIRM_REMOVE_ACCOUNT, CONFIRM_REMOVE_TRANSACTION};
use crate::services::gateway::{DataGateway, GatewayResult};
use crate::services::refresh::AppRefreshSignal;

/// Result of a destructive page operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Nothing to act on (no account rendered yet)
    Skipped,
    /// The user said no at the confirmation prompt
    Declined,
    /// The server confirmed the change
    Applied,
    /// Transport error or `success: false`; the view was left as is
    Failed(String),
}

/// Collaborators the page needs besides its view
pub struct PageServices {
    pub gateway: Rc<dyn DataGateway>,
    pub confirm: Rc<dyn Confirm>,
    pub refresh: Rc<dyn AppRefreshSignal>,
    /// Title shown when no account is displayed
    pub title_placeholder: String,
}

pub struct TransactionsPage {
    view: Rc<dyn PageView>,
    gateway: Rc<dyn DataGateway>,
    confirm: Rc<dyn Confirm>,
    refresh: Rc<dyn AppRefreshSignal>,
    title_placeholder: String,
    state: ViewState,
}

impl TransactionsPage {
    /// Fails with a configuration error when there is no view to render into
    pub fn new(view: Option<Rc<dyn PageView>>, services: PageServices) -> Result<Self, PageError> {
        let view = view.ok_or_else(PageError::invalid_element)?;
        Ok(Self {
            view,
            gateway: services.gateway,
            confirm: services.confirm,
            refresh: services.refresh,
            title_placeholder: services.title_placeholder,
            state: ViewState::new(),
        })
    }

    pub fn last_options(&self) -> Option<ViewOptions> {
        self.state.last_options()
    }

    /// Fetch the account title and its transactions for `options`.
    ///
    /// Both fetches run concurrently and each panel is updated as soon as its
    /// response arrives. `options` is remembered even if a fetch fails, so
    /// `update` retries both.
    pub async fn render(&self, options: Option<&ViewOptions>) -> Result<(), PageError> {
        let Some(options) = options else {
            return Ok(());
        };

        let token = self.state.begin_render(options);
        debug!("Rendering account {}", options.account_id);

        let (title, list) = futures::join!(
            self.load_title(options, token),
            self.load_transactions(options, token)
        );
        title.and(list)
    }

    /// Render again with the last options; a no-op before the first render
    pub async fn update(&self) -> Result<(), PageError> {
        let options = self.state.last_options();
        self.render(options.as_ref()).await
    }

    /// Empty the list and show the placeholder title. Keeps the last options.
    pub fn clear(&self) {
        self.state.invalidate();
        self.render_transactions(Some(&[]));
        self.render_title(&self.title_placeholder);
    }

    pub fn render_title(&self, name: &str) {
        self.view.set_title(name);
    }

    /// `Some(&[])` empties the list; `None` leaves the current rows alone
    pub fn render_transactions(&self, items: Option<&[Transaction]>) {
        match items {
            Some(items) => self.view.set_content_html(&transactions_html(items)),
            None => debug!("No transactions to render, keeping current list"),
        }
    }

    /// Delete the displayed account after confirmation
    pub async fn remove_account(&self) -> MutationOutcome {
        let Some(options) = self.state.last_options() else {
            debug!("No account displayed, nothing to remove");
            return MutationOutcome::Skipped;
        };
        if !self.confirm.confirm(CONFIRM_REMOVE_ACCOUNT) {
            return MutationOutcome::Declined;
        }

        let request = RemoveRequest::new(options.account_id.clone());
        let outcome = Self::mutation_outcome(self.gateway.remove_account(&request).await);
        match &outcome {
            MutationOutcome::Applied => {
                info!("Account {} removed", options.account_id);
                self.clear();
                self.refresh.notify_updated();
            }
            MutationOutcome::Failed(reason) => {
                warn!("Failed to remove account {}: {}", options.account_id, reason);
            }
            _ => {}
        }
        outcome
    }

    /// Delete one transaction after confirmation.
    ///
    /// The row stays on screen until the refresh signal re-renders the page.
    pub async fn remove_transaction(&self, id: &str) -> MutationOutcome {
        if !self.confirm.confirm(CONFIRM_REMOVE_TRANSACTION) {
            return MutationOutcome::Declined;
        }

        let outcome = Self::mutation_outcome(
            self.gateway
                .remove_transaction(&RemoveRequest::new(id))
                .await,
        );
        match &outcome {
            MutationOutcome::Applied => {
                info!("Transaction {} removed", id);
                self.refresh.notify_updated();
            }
            MutationOutcome::Failed(reason) => {
                warn!("Failed to remove transaction {}: {}", id, reason);
            }
            _ => {}
        }
        outcome
    }

    pub async fn handle(&self, action: PageAction) -> MutationOutcome {
        match action {
            PageAction::RemoveAccount => self.remove_account().await,
            PageAction::RemoveTransaction(id) => self.remove_transaction(&id).await,
        }
    }

    async fn load_title(&self, options: &ViewOptions, token: RenderToken) -> Result<(), PageError> {
        let response = self.gateway.get_account(&options.account_id).await?;
        if !self.state.is_current(token) {
            debug!("Discarding stale title for account {}", options.account_id);
            return Ok(());
        }
        match response.payload() {
            Some(account) => self.render_title(&account.name),
            None => debug!("Account {} not returned, title unchanged", options.account_id),
        }
        Ok(())
    }

    async fn load_transactions(
        &self,
        options: &ViewOptions,
        token: RenderToken,
    ) -> Result<(), PageError> {
        let response = self.gateway.list_transactions(options).await?;
        if !self.state.is_current(token) {
            debug!("Discarding stale transactions for account {}", options.account_id);
            return Ok(());
        }
        match response.payload() {
            Some(items) => self.render_transactions(Some(&items)),
            None => debug!("Transactions for {} not returned, list unchanged", options.account_id),
        }
        Ok(())
    }

    fn mutation_outcome(result: GatewayResult<()>) -> MutationOutcome {
        match result {
            Ok(response) if response.success => MutationOutcome::Applied,
            Ok(response) => MutationOutcome::Failed(response.failure_reason()),
            Err(e) => MutationOutcome::Failed(e.to_string()),
        }
    }
}
