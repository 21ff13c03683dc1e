//! # Page view
//!
//! The DOM regions the transactions page writes to, and the delegated click
//! handling that turns clicks inside the page root into page actions.

use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::error::PageError;
use crate::pages::transactions_page::TransactionsPage;

pub const CONTENT_SELECTOR: &str = ".content";
pub const REMOVE_ACCOUNT_SELECTOR: &str = ".remove-account";
pub const REMOVE_TRANSACTION_SELECTOR: &str = "button.transaction__remove";

/// Regions of the page the controller renders into
pub trait PageView {
    /// Replace the title text. Never interpreted as markup.
    fn set_title(&self, text: &str);

    /// Replace the markup of the transaction list region
    fn set_content_html(&self, html: &str);
}

/// User intents raised by clicks inside the page root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    RemoveAccount,
    RemoveTransaction(String),
}

/// `PageView` over real DOM elements
pub struct DomPageView {
    root: Element,
    content: Element,
    title: Element,
}

impl DomPageView {
    /// The title region is passed in rather than looked up from the document
    pub fn from_root(root: Option<&Element>, title: Element) -> Result<Self, PageError> {
        let root = root.ok_or_else(PageError::invalid_element)?;
        let content = root
            .query_selector(CONTENT_SELECTOR)
            .ok()
            .flatten()
            .ok_or_else(|| {
                PageError::Configuration(format!("invalid element: missing {}", CONTENT_SELECTOR))
            })?;
        Ok(Self {
            root: root.clone(),
            content,
            title,
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }
}

impl PageView for DomPageView {
    fn set_title(&self, text: &str) {
        self.title.set_text_content(None);
        self.title.set_text_content(Some(text));
    }

    fn set_content_html(&self, html: &str) {
        self.content.set_inner_html(html);
    }
}

/// Transaction removal requested by a click on `target`, if any
pub fn action_for_target(target: &Element) -> Option<PageAction> {
    let button = target.closest(REMOVE_TRANSACTION_SELECTOR).ok().flatten()?;
    match button.get_attribute("data-id") {
        Some(id) => Some(PageAction::RemoveTransaction(id)),
        None => {
            log::warn!("Remove button without data-id ignored");
            None
        }
    }
}

/// Click listeners bound to a page root; dropping this unbinds them
pub struct PageBindings {
    listeners: Vec<EventListener>,
}

impl PageBindings {
    /// Keep the listeners for as long as the root element lives
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

fn dispatch(page: &Rc<TransactionsPage>, action: PageAction) {
    let page = Rc::clone(page);
    spawn_local(async move {
        let outcome = page.handle(action).await;
        log::debug!("Page action finished: {:?}", outcome);
    });
}

/// Delegate clicks inside `root` to `page`
pub fn bind_events(page: Rc<TransactionsPage>, root: &Element) -> Result<PageBindings, PageError> {
    let remove_account = root
        .query_selector(REMOVE_ACCOUNT_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| {
            PageError::Configuration(format!("invalid element: missing {}", REMOVE_ACCOUNT_SELECTOR))
        })?;
    let content = root
        .query_selector(CONTENT_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| {
            PageError::Configuration(format!("invalid element: missing {}", CONTENT_SELECTOR))
        })?;

    let account_listener = {
        let page = Rc::clone(&page);
        EventListener::new(&remove_account, "click", move |_| {
            dispatch(&page, PageAction::RemoveAccount);
        })
    };

    let content_listener = EventListener::new(&content, "click", move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok());
        if let Some(action) = target.as_ref().and_then(action_for_target) {
            dispatch(&page, action);
        }
    });

    Ok(PageBindings {
        listeners: vec![account_listener, content_listener],
    })
}
