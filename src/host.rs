/// Browser implementations of the command capabilities

use crate::command::{ClipboardSink, HostMessage, Notifier, PageSource};
use crate::notification::{show_banner, Notice};
use crate::settings::{NoticeSurface, Settings};
use wasm_bindgen::prelude::*;

pub const LEGACY_MESSAGE_SELECTOR: &str = "[data-legacy-message-id]";
pub const LEGACY_MESSAGE_ATTRIBUTE: &str = "data-legacy-message-id";

// Import JS bridge functions
#[wasm_bindgen(module = "/extension.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn writeClipboardText(text: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getActiveTabUrl() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn sendToActiveTab(message: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    fn showHostNotification(title: &str, message: &str) -> Result<(), JsValue>;
}

/// The Gmail page the content script runs in
pub struct DomPage;

impl PageSource for DomPage {
    fn current_url(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }

    fn location_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn legacy_message_id(&self) -> Option<String> {
        let document = web_sys::window()?.document()?;
        let element = document.query_selector(LEGACY_MESSAGE_SELECTOR).ok()??;
        element.get_attribute(LEGACY_MESSAGE_ATTRIBUTE)
    }
}

/// `navigator.clipboard`, reached through the JS bridge
pub struct BrowserClipboard;

impl ClipboardSink for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), String> {
        writeClipboardText(text)
            .await
            .map_err(|e| format!("Clipboard write rejected: {:?}", e))
    }
}

/// Shows notices on the surface chosen in the settings
pub struct SurfaceNotifier {
    pub settings: Settings,
}

impl Notifier for SurfaceNotifier {
    fn notify(&self, notice: &Notice) {
        let shown = match self.settings.surface {
            NoticeSurface::Banner => show_banner(notice, &self.settings),
            NoticeSurface::Host => showHostNotification(&notice.title, &notice.message)
                .map_err(|e| format!("Failed to show notification: {:?}", e)),
        };

        if let Err(e) = shown {
            log::error!("{}", e);
        }
    }
}

/// URL of the active tab, as seen from the popup
pub async fn active_tab_url() -> Result<String, String> {
    let url_js = getActiveTabUrl()
        .await
        .map_err(|e| format!("Failed to query active tab: {:?}", e))?;

    url_js
        .as_string()
        .ok_or_else(|| "Active tab has no URL".to_string())
}

/// Forward a command to the content script of the active tab
pub async fn send_to_active_tab(message: &HostMessage) -> Result<(), String> {
    let message_js = serde_wasm_bindgen::to_value(message)
        .map_err(|e| format!("Failed to serialize: {:?}", e))?;

    sendToActiveTab(message_js)
        .await
        .map_err(|e| format!("Error sending message to content script: {:?}", e))
}
