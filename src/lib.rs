/// Gmail Universal URL - Browser Extension for permanent message links
/// Built with Rust + WASM + Yew

pub mod command;
pub mod host;
pub mod locator;
pub mod notification;
pub mod settings;
pub mod ui;

use wasm_bindgen::prelude::*;

use crate::command::{Command, HostMessage, Notifier};
use crate::host::{BrowserClipboard, DomPage, SurfaceNotifier};
use crate::locator::ExtractError;
use crate::notification::Notice;
use crate::settings::Settings;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the canonicalizer for JavaScript access
#[wasm_bindgen]
pub fn extract_gmail_info(url: &str) -> JsValue {
    locator::extract_locator(url)
        .and_then(|found| serde_wasm_bindgen::to_value(&found).ok())
        .unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub fn create_universal_url(account: &str, message_id: &str) -> String {
    locator::build_canonical_url(account, message_id)
}

// Background script: keyboard shortcut -> content script of the active tab
#[wasm_bindgen]
pub async fn handle_command(name: String, settings: JsValue) {
    let Some(command) = Command::from_command_name(&name) else {
        log::debug!("Ignoring command {}", name);
        return;
    };

    let settings = Settings::from_js(settings);
    // No page to draw a banner on from here
    let notifier = SurfaceNotifier {
        settings: settings.on_host_surface(),
    };

    let tab_url = match host::active_tab_url().await {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    if let Err(reason) = command::check_active_tab(tab_url.as_deref()) {
        notifier.notify(&Notice::not_found(&reason));
        return;
    }

    if let Err(e) = host::send_to_active_tab(&command.message(Some(settings))).await {
        log::error!("{}", e);
        notifier.notify(&Notice::not_found(&ExtractError::NotGmail));
    }
}

// Content script: runtime message -> extract, copy, notify
#[wasm_bindgen]
pub async fn handle_message(message: JsValue, settings: JsValue) {
    let message: HostMessage = match serde_wasm_bindgen::from_value(message) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("Ignoring message: {:?}", e);
            return;
        }
    };

    let Some(command) = Command::from_action(&message.action) else {
        return;
    };

    let notifier = SurfaceNotifier {
        settings: message
            .settings
            .unwrap_or_else(|| Settings::from_js(settings)),
    };
    command::run(command, &DomPage, &BrowserClipboard, &notifier).await;
}

// Start the Yew app for the action popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
