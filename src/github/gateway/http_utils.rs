//! Shared HTTP utilities for gateway implementations.

use http::Uri;

use crate::error::BotError;

pub(super) fn parse_route(route: &str) -> Result<Uri, BotError> {
    route
        .parse::<Uri>()
        .map_err(|error| BotError::InvalidUrl(format!("{route}: {error}")))
}

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
