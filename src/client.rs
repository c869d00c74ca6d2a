//! Remote Client
//!
//! The catalog talks to its data source only through `MonkeyClient`.
//! `TauriClient` is the production implementation over IPC.

use async_trait::async_trait;
use crate::commands;
use crate::models::{ApiResponse, Monkey, MonkeyFields};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The call itself failed (rejected promise, missing backend)
    #[error("call rejected: {0}")]
    Rejected(String),
    /// The call answered `success: false`
    #[error("request unsuccessful: {0}")]
    Unsuccessful(String),
    #[error("malformed payload: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<ApiResponse<T>, ClientError>;

impl<T> ApiResponse<T> {
    /// Fold `success: false` (or a missing payload) into an error
    pub fn into_result(self) -> Result<T, ClientError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ClientError::Decode("missing data".to_string())),
            (false, _) => Err(ClientError::Unsuccessful(
                self.error.unwrap_or_else(|| "no details".to_string()),
            )),
        }
    }
}

/// Data source for the catalog: list, create and update
#[async_trait(?Send)]
pub trait MonkeyClient {
    async fn list(&self) -> ClientResult<Vec<Monkey>>;

    async fn create(&self, fields: &MonkeyFields) -> ClientResult<Monkey>;

    async fn update(&self, id: u32, fields: &MonkeyFields) -> ClientResult<Monkey>;
}

/// Client backed by the Tauri commands
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriClient;

#[async_trait(?Send)]
impl MonkeyClient for TauriClient {
    async fn list(&self) -> ClientResult<Vec<Monkey>> {
        commands::list_monkeys().await
    }

    async fn create(&self, fields: &MonkeyFields) -> ClientResult<Monkey> {
        commands::create_monkey(fields).await
    }

    async fn update(&self, id: u32, fields: &MonkeyFields) -> ClientResult<Monkey> {
        commands::update_monkey(id, fields).await
    }
}
