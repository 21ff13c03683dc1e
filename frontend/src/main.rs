use std::rc::Rc;

use anyhow::{anyhow, Result};
use finance_tracker_frontend::config::FrontendConfig;
use finance_tracker_frontend::pages::view::{bind_events, DomPageView};
use finance_tracker_frontend::pages::{PageServices, PageView, TransactionsPage};
use finance_tracker_frontend::services::api::ApiClient;
use finance_tracker_frontend::services::confirm::BrowserConfirm;
use finance_tracker_frontend::services::logging::ConsoleLogger;
use finance_tracker_frontend::services::refresh::RefreshBus;
use shared::ViewOptions;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

const CONFIG_ELEMENT_ID: &str = "app-config";

fn load_config(document: &Document) -> (FrontendConfig, Option<String>) {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    match FrontendConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (FrontendConfig::default(), Some(e.to_string())),
    }
}

fn spawn_render(page: Rc<TransactionsPage>, options: Option<ViewOptions>) {
    spawn_local(async move {
        let result = match options {
            Some(options) => page.render(Some(&options)).await,
            None => page.update().await,
        };
        if let Err(e) = result {
            log::error!("Failed to render transactions page: {}", e);
        }
    });
}

fn boot() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window available"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document available"))?;

    let (config, config_error) = load_config(&document);
    ConsoleLogger::new(config.level_filter(), config.remote_log_endpoint.clone()).init();
    if let Some(e) = config_error {
        log::warn!("Ignoring malformed app config: {}", e);
    }

    let root = document.query_selector(&config.root_selector).ok().flatten();
    let title = document
        .query_selector(&config.title_selector)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow!("title region {} not found", config.title_selector))?;
    let view = Rc::new(DomPageView::from_root(root.as_ref(), title)?);
    let root = view.root().clone();

    let bus = Rc::new(RefreshBus::new());
    let page = Rc::new(TransactionsPage::new(
        Some(view as Rc<dyn PageView>),
        PageServices {
            gateway: Rc::new(ApiClient::with_base_url(config.api_base_url.clone())),
            confirm: Rc::new(BrowserConfirm),
            refresh: bus.clone(),
            title_placeholder: config.title_placeholder.clone(),
        },
    )?);

    bind_events(page.clone(), &root)?.forget();

    {
        let page = Rc::downgrade(&page);
        bus.subscribe(move || {
            if let Some(page) = page.upgrade() {
                spawn_render(page, None);
            }
        });
    }

    if let Some(account_id) = config.initial_account_id.clone() {
        spawn_render(page, Some(ViewOptions::for_account(account_id)));
    }

    log::info!("Transactions page ready, API at {}", config.api_base_url);
    Ok(())
}

fn main() {
    if let Err(e) = boot() {
        gloo::console::error!(format!("Failed to start transactions page: {:#}", e));
    }
}
