//! REST API helpers for the bank-account backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net` against the origin
//! from [`crate::config`]. Native builds get inert stubs so unit tests run
//! on the host without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Every operation collapses transport failures, non-success statuses, and
//! undecodable bodies into the single [`ApiError`]. Callers surface it and
//! let the user retry by hand; nothing is retried automatically.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config;
use crate::net::types::{ApiError, BankAccount, DeleteResponse, MutationResponse};

/// `GET /bank` — every account on record.
pub async fn fetch_accounts() -> Result<Vec<BankAccount>, ApiError> {
    let url = collection_url(&config::get().api_base);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| ApiError::default())?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::default())
    }
}

/// `GET /bank/{id}` — one account by its server-assigned id.
pub async fn fetch_account(id: &str) -> Result<BankAccount, ApiError> {
    let url = item_url(&config::get().api_base, id);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|_| ApiError::default())?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::default())
    }
}

/// `POST /bank` — create a record; the server assigns the id.
pub async fn create_account(record: &BankAccount) -> Result<MutationResponse, ApiError> {
    let url = collection_url(&config::get().api_base);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&url)
            .json(record)
            .map_err(|_| ApiError::default())?
            .send()
            .await
            .map_err(|_| ApiError::default())?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, record);
        Err(ApiError::default())
    }
}

/// `PUT /bank/{id}` — full replace of the record's fields.
pub async fn update_account(id: &str, record: &BankAccount) -> Result<MutationResponse, ApiError> {
    let url = item_url(&config::get().api_base, id);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::put(&url)
            .json(record)
            .map_err(|_| ApiError::default())?
            .send()
            .await
            .map_err(|_| ApiError::default())?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, record);
        Err(ApiError::default())
    }
}

/// `DELETE /bank/{id}`.
pub async fn delete_account(id: &str) -> Result<DeleteResponse, ApiError> {
    let url = item_url(&config::get().api_base, id);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|_| ApiError::default())?;
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ApiError::default())
    }
}

/// Decode a response body, folding any failure into [`ApiError`].
#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let message = resp
            .json::<serde_json::Value>()
            .await
            .ok()
            .as_ref()
            .and_then(failure_message);
        return Err(ApiError { message });
    }
    resp.json::<T>().await.map_err(|_| ApiError::default())
}

/// Pull the human-readable text out of a failure body, if present.
/// The backend uses `error` for failures; `message` is kept as a fallback.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn failure_message(body: &serde_json::Value) -> Option<String> {
    for key in ["error", "message"] {
        if let Some(text) = body.get(key).and_then(serde_json::Value::as_str) {
            if !text.is_empty() {
                return Some(text.to_owned());
            }
        }
    }
    None
}

fn collection_url(base: &str) -> String {
    format!("{base}/bank")
}

fn item_url(base: &str, id: &str) -> String {
    format!("{base}/bank/{id}")
}
