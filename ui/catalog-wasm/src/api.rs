//! HTTP API client.
//!
//! Wraps `fetch` for JSON requests to the catalog backend. Mutating
//! verbs carry the CSRF token from the `csrf_access_token` cookie; the
//! loading spinner is held for the duration of every call and released
//! by `Drop`, so no early return can leave it spinning.

use gloo_console::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, HtmlDocument, Request, RequestInit, Response};

use catalog_core::cookie::cookie_value;
use catalog_core::error::{ApiError, NETWORK_ERROR};

use crate::auth;
use crate::dom;
use crate::feedback::{self, MessageKind};

/// Name of the cookie flask-jwt-extended doubles the CSRF token into.
const CSRF_COOKIE: &str = "csrf_access_token";

const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// Determine the API base URL: an optional `<meta name="api-base">`
/// override, else same-origin relative paths.
pub fn base_url() -> String {
    dom::document()
        .query_selector("meta[name='api-base']")
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|v| v.trim().trim_end_matches('/').to_string())
        .unwrap_or_default()
}

fn csrf_token() -> Option<String> {
    let html_doc: HtmlDocument = dom::document().dyn_into().ok()?;
    let cookies = html_doc.cookie().ok()?;
    cookie_value(&cookies, CSRF_COOKIE)
}

/// Holds the loading spinner visible until dropped.
struct SpinnerGuard;

impl SpinnerGuard {
    fn engage() -> SpinnerGuard {
        feedback::show_spinner();
        SpinnerGuard
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        feedback::hide_spinner();
    }
}

/// Perform a JSON request against the backend.
///
/// Displays at most one banner per failing call (callers may add their
/// own field-scoped feedback on top). A 401/403 clears local auth state
/// and navigates to the login page before returning.
pub async fn request(
    path: &str,
    method: &str,
    body: Option<String>,
) -> Result<serde_json::Value, ApiError> {
    let url = format!("{}{}", base_url(), path);
    let _spinner = SpinnerGuard::engage();

    let opts = RequestInit::new();
    opts.set_method(method);

    let headers = Headers::new().map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;

    if matches!(method, "POST" | "PUT" | "DELETE") {
        match csrf_token() {
            Some(token) => {
                headers
                    .set(CSRF_HEADER, &token)
                    .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
            }
            None => warn!("csrf_access_token cookie missing; sending request without CSRF header"),
        }
    }

    if let Some(ref b) = body {
        opts.set_body(&JsValue::from_str(b));
    }
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;

    let resp_value = match JsFuture::from(dom::window().fetch_with_request(&request)).await {
        Ok(v) => v,
        Err(e) => {
            feedback::show_message(NETWORK_ERROR, MessageKind::Error);
            return Err(ApiError::Network(format!("{e:?}")));
        }
    };

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ApiError::Decode("response is not a Response".to_string()))?;

    if resp.status() == 401 || resp.status() == 403 {
        auth::force_logout();
        return Err(ApiError::SessionExpired);
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?,
    )
    .await
    .map_err(|e| ApiError::Decode(format!("{e:?}")))?
    .as_string()
    .unwrap_or_default();

    if !resp.ok() {
        let parsed = serde_json::from_str(&text).unwrap_or(serde_json::Value::Null);
        let err = ApiError::from_response(resp.status(), &parsed);
        feedback::show_message(&err.to_string(), MessageKind::Error);
        return Err(err);
    }

    match serde_json::from_str(&text) {
        Ok(value) => Ok(value),
        Err(e) => {
            let err = ApiError::Decode(format!("{e} — raw: {text}"));
            feedback::show_message(&err.to_string(), MessageKind::Error);
            Err(err)
        }
    }
}
