//! HTTP helper functions for Crux Core
//!
//! Builds endpoint URLs and folds raw HTTP results into the tagged
//! [`ToggleOutcome`] the update loop works with.

use crux_http::Response;

use crate::types::{ToggleOutcome, UpdateOndemandResponse};

/// Base URL for console API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2)
/// requires absolute URLs and rejects relative paths
/// (`RelativeUrlWithoutBase` error). The UI shell strips this prefix before
/// sending requests via `fetch()`, making them relative to the page origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use ordering_console_core::http_helpers::build_url;
/// let url = build_url("/console/update-ondemand/on");
/// assert_eq!(url, "https://relative/console/update-ondemand/on");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// The result value the endpoint uses to signal success.
const RESULT_SUCCESS: &str = "success";

/// Fold an update-endpoint result into a [`ToggleOutcome`].
///
/// Transport errors, non-2xx statuses and unparseable bodies all count as
/// transport failures; a well-formed body is success or a server rejection
/// depending on its `result` field.
pub fn classify_update_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> ToggleOutcome {
    let mut response = match result {
        Ok(response) => response,
        Err(e) => {
            return ToggleOutcome::TransportFailed {
                message: e.to_string(),
            }
        }
    };

    if !response.status().is_success() {
        return ToggleOutcome::TransportFailed {
            message: format!("{action} failed: HTTP {}", response.status()),
        };
    }

    let body = match response.take_body() {
        Some(body) if !body.is_empty() => body,
        _ => {
            return ToggleOutcome::TransportFailed {
                message: format!("{action}: Empty response body"),
            }
        }
    };

    match serde_json::from_slice::<UpdateOndemandResponse>(&body) {
        Ok(parsed) if parsed.result == RESULT_SUCCESS => ToggleOutcome::Applied,
        Ok(parsed) => ToggleOutcome::Rejected {
            // The endpoint normally carries a message on failure; fall back
            // to naming the result value when it doesn't.
            message: parsed
                .message
                .unwrap_or_else(|| format!("request returned '{}'", parsed.result)),
        },
        Err(e) => ToggleOutcome::TransportFailed {
            message: format!("{action}: JSON parse error: {e}"),
        },
    }
}

// Note: Unit tests for `classify_update_response` are not included because
// crux_http::Response has a private constructor. The function is exercised
// end-to-end in `tests.rs` by resolving HTTP effects with protocol responses.
