//! Wire types for the bank-account REST backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single bank-account record as the backend serves it.
///
/// `id` is assigned by the server on create and is the key for every by-id
/// operation. It is left out of request bodies while empty, so a create
/// never ships a client-invented id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub holder_name: String,
    #[serde(default)]
    pub phone_no: String,
    #[serde(default)]
    pub account_type: String,
}

/// Envelope returned by create and update.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MutationResponse {
    pub message: String,
    pub bank: BankAccount,
}

/// Envelope returned by delete.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// The one failure the client distinguishes: a transport error, a
/// non-success status, or an undecodable body. Carries the backend's error
/// text when one could be read out of the failure body.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{}", .message.as_deref().unwrap_or("Server Error"))]
pub struct ApiError {
    pub message: Option<String>,
}

impl ApiError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}
