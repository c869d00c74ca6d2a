//! Tauri Commands for Monkey CRUD
//!
//! Exposes catalog operations to the frontend via Tauri IPC.

use tauri::State;
use crate::domain::{DomainError, DomainResult, Monkey, MonkeyFields};
use crate::repository::{MonkeyRepository, Repository};
use crate::AppState;
use super::ApiResponse;

/// List all monkeys in insertion order
#[tauri::command]
pub async fn list_monkeys(state: State<'_, AppState>) -> Result<ApiResponse<Vec<Monkey>>, String> {
    Ok(state.monkey_repo.list().await.into())
}

/// Get monkey by ID
#[tauri::command]
pub async fn get_monkey(state: State<'_, AppState>, id: u32) -> Result<ApiResponse<Monkey>, String> {
    Ok(find(&state.monkey_repo, id).await.into())
}

/// Create a new monkey
#[tauri::command]
pub async fn create_monkey(
    state: State<'_, AppState>,
    fields: MonkeyFields,
) -> Result<ApiResponse<Monkey>, String> {
    Ok(create(&state.monkey_repo, fields).await.into())
}

/// Replace every writable field of a monkey
#[tauri::command]
pub async fn update_monkey(
    state: State<'_, AppState>,
    id: u32,
    fields: MonkeyFields,
) -> Result<ApiResponse<Monkey>, String> {
    Ok(update(&state.monkey_repo, id, fields).await.into())
}

/// Delete a monkey
#[tauri::command]
pub async fn delete_monkey(state: State<'_, AppState>, id: u32) -> Result<ApiResponse<()>, String> {
    log::info!("deleting monkey {}", id);
    Ok(state.monkey_repo.delete(id).await.into())
}

async fn find(repo: &MonkeyRepository, id: u32) -> DomainResult<Monkey> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("Monkey {}", id)))
}

async fn create(repo: &MonkeyRepository, fields: MonkeyFields) -> DomainResult<Monkey> {
    let fields = fields.normalize()?;
    let created = repo.create(&Monkey::from_fields(0, fields)).await?;
    log::info!("created monkey {} ({})", created.id, created.name);
    Ok(created)
}

async fn update(repo: &MonkeyRepository, id: u32, fields: MonkeyFields) -> DomainResult<Monkey> {
    let fields = fields.normalize()?;
    let mut existing = find(repo, id).await?;
    existing.replace_fields(fields);
    let updated = repo.update(&existing).await?;
    log::info!("updated monkey {}", id);
    Ok(updated)
}
