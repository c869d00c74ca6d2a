//! Diagnostics Commands
//!
//! Recent log output for support screens and bug reports.

use super::ApiResponse;

/// Newest log lines held in memory by the rolling logger, oldest first
#[tauri::command]
pub async fn recent_logs() -> Result<ApiResponse<Vec<String>>, String> {
    Ok(ApiResponse::ok(rolling_logger::recent_lines()))
}
