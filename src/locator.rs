/// Gmail message locator: extraction from URLs and DOM attributes, and the universal URL
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const GMAIL_HOST: &str = "mail.google.com";

/// Shortest message id accepted from a URL fragment
pub const MIN_URL_MESSAGE_ID_LEN: usize = 10;

/// Shortest message id accepted from a `data-legacy-message-id` attribute
pub const MIN_LEGACY_MESSAGE_ID_LEN: usize = 1;

const DEFAULT_ACCOUNT: &str = "0";

static URL_ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/mail/u/(\d+)").expect("valid account regex"));

static LOCATION_ACCOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/u/(\d)/").expect("valid account regex"));

/// A message in a signed-in Gmail account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GmailLocator {
    pub account: String,
    pub message_id: String,
}

/// Why no locator could be extracted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("No Gmail message found in current URL")]
    InvalidUrl,
    #[error("Navigate to a Gmail message first")]
    NotGmail,
    #[error("No Gmail message found in current URL")]
    NoMessage,
    #[error("No Gmail message found on this page")]
    NoLegacyMessage,
}

impl GmailLocator {
    pub fn new(account: impl Into<String>, message_id: impl Into<String>) -> GmailLocator {
        GmailLocator {
            account: account.into(),
            message_id: message_id.into(),
        }
    }

    /// Build a locator from a Gmail URL
    pub fn from_url(source_url: &str) -> Option<GmailLocator> {
        diagnose_url(source_url).ok()
    }

    /// Build a locator from the page path and a legacy message id attribute
    pub fn from_legacy_id(location_path: &str, legacy_id: Option<&str>) -> Option<GmailLocator> {
        let message_id = validate_message_id(legacy_id?, MIN_LEGACY_MESSAGE_ID_LEN)?;
        let account = capture_account(&LOCATION_ACCOUNT_RE, location_path);

        Some(GmailLocator::new(account, message_id))
    }

    /// The permanent `#all/<id>` URL for this message
    pub fn universal_url(&self) -> String {
        build_canonical_url(&self.account, &self.message_id)
    }
}

/// Extract account and message id from a Gmail web-client URL
///
/// Accepted fragment shapes all end in the message id:
/// - `#inbox/<id>`
/// - `#label/<name>/<id>`
/// - `#search/<query>/<id>`
/// - `#all/<id>`
///
/// The account comes from `/mail/u/<n>` and defaults to `"0"`.
pub fn extract_locator(source_url: &str) -> Option<GmailLocator> {
    GmailLocator::from_url(source_url)
}

/// Same as [`extract_locator`], keeping the reason a URL was rejected
pub fn diagnose_url(source_url: &str) -> Result<GmailLocator, ExtractError> {
    let url = Url::parse(source_url).map_err(|_| ExtractError::InvalidUrl)?;

    if !is_gmail_host(&url) {
        return Err(ExtractError::NotGmail);
    }

    let account = capture_account(&URL_ACCOUNT_RE, url.path());

    let fragment = url
        .fragment()
        .filter(|fragment| !fragment.is_empty())
        .ok_or(ExtractError::NoMessage)?;

    // rsplit always yields at least one item
    let last_segment = fragment.rsplit('/').next().unwrap_or_default();
    let message_id =
        validate_message_id(last_segment, MIN_URL_MESSAGE_ID_LEN).ok_or(ExtractError::NoMessage)?;

    Ok(GmailLocator::new(account, message_id))
}

/// Whether a URL points at the Gmail web client, without looking for a message
pub fn check_gmail_url(source_url: &str) -> Result<(), ExtractError> {
    let url = Url::parse(source_url).map_err(|_| ExtractError::InvalidUrl)?;

    if is_gmail_host(&url) {
        Ok(())
    } else {
        Err(ExtractError::NotGmail)
    }
}

/// Format the universal URL for a message
pub fn build_canonical_url(account: &str, message_id: &str) -> String {
    format!("https://{}/mail/u/{}/#all/{}", GMAIL_HOST, account, message_id)
}

fn is_gmail_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| host.contains(GMAIL_HOST))
}

fn capture_account(pattern: &Regex, path: &str) -> String {
    pattern
        .captures(path)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_ACCOUNT.to_string(), |m| m.as_str().to_string())
}

fn validate_message_id(candidate: &str, min_len: usize) -> Option<String> {
    if candidate.is_empty() || candidate.len() < min_len {
        None
    } else {
        Some(candidate.to_string())
    }
}
