//! Common utilities shared across PokéAPI tools.
//!
//! This module provides the partial-schema types that several endpoints
//! share, the English-locale selector used by the text-bearing projectors,
//! and the uniform success/failure envelope every tool returns.

use rmcp::model::{CallToolResult, Content};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::client::{ApiError, PokeApiClient};

/// Locale tag selected from multi-language text arrays.
pub const DEFAULT_LOCALE: &str = "en";

/// Prefix added to successful tool output when the debug flag is set.
pub const DEBUG_MARKER: &str = "[DEBUG] ";

// ============================================================================
// Shared upstream schema
// ============================================================================

/// Upstream `{ name, url }` reference; only the name is read.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

/// Upstream reference of which only the URL is read.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

/// Upstream effect entry carrying both long and short text variants.
///
/// Used by the ability and move endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct VerboseEffect {
    pub effect: String,
    pub short_effect: String,
    pub language: NamedResource,
}

// ============================================================================
// Locale selection
// ============================================================================

/// An upstream entry tagged with a language.
pub trait Localized {
    fn language(&self) -> &str;
}

impl Localized for VerboseEffect {
    fn language(&self) -> &str {
        &self.language.name
    }
}

/// Pick the first entry tagged with `locale`, in document order.
///
/// Returns `None` when no entry matches; a missing locale is an absence,
/// not an error.
pub fn first_for_locale<'a, T: Localized>(entries: &'a [T], locale: &str) -> Option<&'a T> {
    entries.iter().find(|entry| entry.language() == locale)
}

// ============================================================================
// Result envelope
// ============================================================================

/// Create an error result with the given text.
pub fn error_result(message: impl Into<String>) -> CallToolResult {
    let message = message.into();
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message)])
}

/// Wrap a projected record as a successful result.
///
/// The record is pretty-printed as JSON and, when the debug flag is set,
/// prefixed with [`DEBUG_MARKER`].
pub fn projection_result<R: Serialize>(value: &R, debug: bool) -> CallToolResult {
    match serde_json::to_string_pretty(value) {
        Ok(text) => {
            let text = if debug {
                format!("{DEBUG_MARKER}{text}")
            } else {
                text
            };
            CallToolResult::success(vec![Content::text(text)])
        }
        Err(err) => error_result(format!("Error: {err}")),
    }
}

/// Convert an upstream failure into the uniform failure envelope.
///
/// The text is `Error: <message>` with the error's own message, or the
/// tool-specific fallback when the error carries no message.
pub fn api_failure(err: &ApiError, fallback: &str) -> CallToolResult {
    let message = err.to_string();
    let message = if message.is_empty() { fallback } else { &message };
    error_result(format!("Error: {message}"))
}

/// Fetch one resource, project it, and wrap the outcome in an envelope.
///
/// This is the shared dispatcher body of every single-fetch tool: one GET
/// against `path`, the pure projector applied to the decoded document, and
/// any failure converted into an `Error:` envelope. Nothing escapes past
/// this boundary.
pub async fn fetch_and_project<T, R, F>(
    client: &PokeApiClient,
    path: &str,
    fallback: &str,
    project: F,
) -> CallToolResult
where
    T: DeserializeOwned,
    R: Serialize,
    F: FnOnce(T) -> R,
{
    match client.get_json::<T>(path).await {
        Ok(doc) => projection_result(&project(doc), client.debug()),
        Err(err) => api_failure(&err, fallback),
    }
}
