//! Commands Layer
//!
//! Tauri command handlers that bridge frontend to backend services.

mod diagnostics_cmd;
mod monkey_cmd;
mod response;

pub use diagnostics_cmd::*;
pub use monkey_cmd::*;
pub use response::ApiResponse;
