/// User-facing outcome notices and the in-page banner

use crate::locator::ExtractError;
use crate::settings::Settings;
use serde::Serialize;
use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub const NOTICE_TITLE: &str = "Gmail Universal URL";

const SUCCESS_COLOR: &str = "#2e7d32";
const ERROR_COLOR: &str = "#d32f2f";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A message shown once per handled command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Success,
            title: NOTICE_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Error,
            title: NOTICE_TITLE.to_string(),
            message: message.into(),
        }
    }

    pub fn copied() -> Notice {
        Notice::success("Universal URL copied to clipboard!")
    }

    pub fn not_found(reason: &ExtractError) -> Notice {
        Notice::error(reason.to_string())
    }

    pub fn clipboard_failed() -> Notice {
        Notice::error("Failed to copy URL to clipboard")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Inline CSS for the banner
pub fn banner_style(kind: NoticeKind) -> String {
    let background = match kind {
        NoticeKind::Success => SUCCESS_COLOR,
        NoticeKind::Error => ERROR_COLOR,
    };

    format!(
        "position: fixed; top: 20px; right: 20px; padding: 16px 24px; background-color: {}; color: white; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.3); z-index: 10000; font-family: Arial, sans-serif; font-size: 14px; transition: opacity 0.3s ease;",
        background
    )
}

/// Clamp a duration to what `setTimeout` accepts
pub fn timeout_ms(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Append a banner to the page body, fade it out and remove it
pub fn show_banner(notice: &Notice, settings: &Settings) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window available")?;
    let document = window.document().ok_or("No document available")?;
    let body = document.body().ok_or("Page has no body")?;

    let banner: HtmlElement = document
        .create_element("div")
        .map_err(|e| format!("Failed to create banner: {:?}", e))?
        .dyn_into()
        .map_err(|e| format!("Banner is not an HTML element: {:?}", e))?;

    banner.set_text_content(Some(&notice.message));
    banner.style().set_css_text(&banner_style(notice.kind));

    body.append_child(&banner)
        .map_err(|e| format!("Failed to attach banner: {:?}", e))?;

    let fade_ms = settings.fade_ms;
    let fade = Closure::once_into_js(move || {
        let _ = banner.style().set_property("opacity", "0");

        let remove = Closure::once_into_js(move || banner.remove());
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref::<Function>(),
                timeout_ms(fade_ms),
            );
        }
    });

    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            fade.unchecked_ref::<Function>(),
            timeout_ms(settings.banner_duration_ms),
        )
        .map_err(|e| format!("Failed to schedule banner removal: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_texts() {
        assert_eq!(Notice::copied().message, "Universal URL copied to clipboard!");
        assert_eq!(Notice::clipboard_failed().message, "Failed to copy URL to clipboard");
        assert_eq!(
            Notice::not_found(&ExtractError::NotGmail).message,
            "Navigate to a Gmail message first"
        );
        assert_eq!(
            Notice::not_found(&ExtractError::NoMessage).message,
            "No Gmail message found in current URL"
        );
    }

    #[test]
    fn test_notice_kinds() {
        assert!(!Notice::copied().is_error());
        assert!(Notice::clipboard_failed().is_error());
        assert!(Notice::not_found(&ExtractError::NoLegacyMessage).is_error());
        assert_eq!(Notice::copied().title, NOTICE_TITLE);
    }

    #[test]
    fn test_timeout_ms_clamps() {
        assert_eq!(timeout_ms(3000), 3000);
        assert_eq!(timeout_ms(i32::MAX as u32), i32::MAX);
        assert_eq!(timeout_ms(u32::MAX), i32::MAX);
    }

    #[test]
    fn test_banner_colors() {
        assert!(banner_style(NoticeKind::Success).contains("background-color: #2e7d32"));
        assert!(banner_style(NoticeKind::Error).contains("background-color: #d32f2f"));
        assert!(banner_style(NoticeKind::Error).contains("position: fixed"));
    }
}
