/// Command dispatch, independent of the browser runtime
///
/// The background script and content script only decode host events into a
/// [`Command`]; the work happens in [`run`] against the capability traits
/// below, which the `host` module implements with real browser APIs.

use crate::locator::{check_gmail_url, diagnose_url, ExtractError, GmailLocator};
use crate::notification::Notice;
use crate::settings::Settings;
use serde::{Deserialize, Serialize};

pub const COPY_UNIVERSAL_URL_COMMAND: &str = "copy-universal-url";
pub const COPY_LEGACY_URL_COMMAND: &str = "copy-legacy-url";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Read the message id from the page URL
    CopyUniversalUrl,
    /// Read the message id from the `data-legacy-message-id` element
    CopyLegacyUrl,
}

/// Runtime message sent from the background script to the content script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostMessage {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Settings>,
}

impl Command {
    /// Decode a keyboard command name from the manifest
    pub fn from_command_name(name: &str) -> Option<Command> {
        match name {
            COPY_UNIVERSAL_URL_COMMAND => Some(Command::CopyUniversalUrl),
            COPY_LEGACY_URL_COMMAND => Some(Command::CopyLegacyUrl),
            _ => None,
        }
    }

    /// Decode a runtime message action
    pub fn from_action(action: &str) -> Option<Command> {
        match action {
            "extractUrl" => Some(Command::CopyUniversalUrl),
            "extractLegacyUrl" => Some(Command::CopyLegacyUrl),
            _ => None,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Command::CopyUniversalUrl => "extractUrl",
            Command::CopyLegacyUrl => "extractLegacyUrl",
        }
    }

    pub fn message(&self, settings: Option<Settings>) -> HostMessage {
        HostMessage {
            action: self.action().to_string(),
            settings,
        }
    }
}

/// Decide from the background whether a command can reach a content script
///
/// Content scripts only run on Gmail, so any other tab (or no tab URL at
/// all) gets the "navigate to Gmail" notice here instead of a silent drop.
pub fn check_active_tab(tab_url: Option<&str>) -> Result<(), ExtractError> {
    match tab_url {
        Some(url) => check_gmail_url(url).map_err(|_| ExtractError::NotGmail),
        None => Err(ExtractError::NotGmail),
    }
}

/// Where the message locator is read from
pub trait PageSource {
    fn current_url(&self) -> String;
    fn location_path(&self) -> String;
    fn legacy_message_id(&self) -> Option<String>;
}

/// Where the universal URL is written
#[allow(async_fn_in_trait)]
pub trait ClipboardSink {
    async fn write_text(&self, text: &str) -> Result<(), String>;
}

/// Where the outcome is reported
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied(String),
    NotFound(ExtractError),
    ClipboardFailed(String),
}

impl Outcome {
    pub fn notice(&self) -> Notice {
        match self {
            Outcome::Copied(_) => Notice::copied(),
            Outcome::NotFound(reason) => Notice::not_found(reason),
            Outcome::ClipboardFailed(_) => Notice::clipboard_failed(),
        }
    }
}

/// Find the universal URL for the page, or the reason there is none
pub fn resolve<S: PageSource>(command: Command, source: &S) -> Result<String, ExtractError> {
    let locator = match command {
        Command::CopyUniversalUrl => diagnose_url(&source.current_url())?,
        Command::CopyLegacyUrl => GmailLocator::from_legacy_id(
            &source.location_path(),
            source.legacy_message_id().as_deref(),
        )
        .ok_or(ExtractError::NoLegacyMessage)?,
    };

    Ok(locator.universal_url())
}

/// Resolve, copy and report exactly one notice
pub async fn run<S, C, N>(command: Command, source: &S, clipboard: &C, notifier: &N) -> Outcome
where
    S: PageSource,
    C: ClipboardSink,
    N: Notifier,
{
    let outcome = match resolve(command, source) {
        Ok(url) => match clipboard.write_text(&url).await {
            Ok(()) => {
                log::info!("Copied URL: {}", url);
                Outcome::Copied(url)
            }
            Err(e) => {
                log::error!("Failed to copy to clipboard: {}", e);
                Outcome::ClipboardFailed(e)
            }
        },
        Err(reason) => {
            log::warn!("No universal URL for {:?}: {}", command, reason);
            Outcome::NotFound(reason)
        }
    };

    notifier.notify(&outcome.notice());
    outcome
}
