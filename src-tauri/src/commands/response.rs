//! Command Response Envelope
//!
//! Every monkey command answers `{ success, data, error }` instead of
//! rejecting the IPC call, so the frontend sees one flat failure shape.

use serde::{Deserialize, Serialize};
use crate::domain::DomainResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(error.into()) }
    }
}

impl<T> From<DomainResult<T>> for ApiResponse<T> {
    fn from(result: DomainResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                log::warn!("command failed: {}", e);
                Self::failure(e.to_string())
            }
        }
    }
}
