/// Reusable UI components

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UrlPreviewProps {
    pub url: String,
    #[prop_or_default]
    pub account: Option<String>,
}

/// The universal URL as it will be copied
#[function_component(UrlPreview)]
pub fn url_preview(props: &UrlPreviewProps) -> Html {
    html! {
        <div class="url-preview">
            if let Some(account) = &props.account {
                <p class="url-account">{format!("Account {}", account)}</p>
            }
            <p class="universal-url">{&props.url}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingMessageProps {
    #[prop_or_default]
    pub message: Option<String>,
}

#[function_component(LoadingMessage)]
pub fn loading_message(props: &LoadingMessageProps) -> Html {
    html! {
        <div class="loading-container">
            <div class="loading-spinner"></div>
            if let Some(msg) = &props.message {
                <p class="loading-message">{msg}</p>
            }
        </div>
    }
}
