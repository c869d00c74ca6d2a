//! Monkey Repository
//!
//! SQLite-backed implementation of the catalog record store.

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult, Monkey};
use super::traits::Repository;

const SELECT_MONKEY: &str = "SELECT id, name, species, habitat, conservation_status, image_url, fun_fact, is_favorite, created_at, updated_at FROM monkeys";

/// SQLite implementation of Monkey repository
pub struct MonkeyRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MonkeyRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

#[async_trait]
impl Repository<Monkey> for MonkeyRepository {
    async fn create(&self, entity: &Monkey) -> DomainResult<Monkey> {
        let conn = self.conn.lock().await;
        let stamp = now();

        conn.execute(
            "INSERT INTO monkeys (name, species, habitat, conservation_status, image_url, fun_fact, is_favorite, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
            params![
                entity.name,
                entity.species,
                entity.habitat,
                entity.conservation_status,
                entity.image_url,
                entity.fun_fact,
                entity.is_favorite,
                stamp,
            ],
        )?;

        let id = u32::try_from(conn.last_insert_rowid())
            .map_err(|e| DomainError::Internal(format!("Row id out of range: {}", e)))?;

        Ok(Monkey {
            id,
            created_at: Some(stamp),
            updated_at: Some(stamp),
            ..entity.clone()
        })
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<Monkey>> {
        let conn = self.conn.lock().await;
        let found = conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_MONKEY),
                params![id],
                row_to_monkey,
            )
            .optional()?;
        Ok(found)
    }

    async fn list(&self) -> DomainResult<Vec<Monkey>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!("{} ORDER BY id ASC", SELECT_MONKEY))?;
        let monkeys = stmt
            .query_map([], row_to_monkey)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(monkeys)
    }

    async fn update(&self, entity: &Monkey) -> DomainResult<Monkey> {
        let conn = self.conn.lock().await;
        let stamp = now();

        let changed = conn.execute(
            "UPDATE monkeys SET name = ?1, species = ?2, habitat = ?3, conservation_status = ?4, image_url = ?5, fun_fact = ?6, is_favorite = ?7, updated_at = ?8 WHERE id = ?9",
            params![
                entity.name,
                entity.species,
                entity.habitat,
                entity.conservation_status,
                entity.image_url,
                entity.fun_fact,
                entity.is_favorite,
                stamp,
                entity.id,
            ],
        )?;

        if changed == 0 {
            return Err(DomainError::NotFound(format!("Monkey {}", entity.id)));
        }

        Ok(Monkey {
            updated_at: Some(stamp),
            ..entity.clone()
        })
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        let changed = conn.execute("DELETE FROM monkeys WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(DomainError::NotFound(format!("Monkey {}", id)));
        }
        Ok(())
    }
}

/// Convert a database row to Monkey
fn row_to_monkey(row: &Row<'_>) -> rusqlite::Result<Monkey> {
    Ok(Monkey {
        id: row.get(0)?,
        name: row.get(1)?,
        species: row.get(2)?,
        habitat: row.get(3)?,
        conservation_status: row.get(4)?,
        image_url: row.get(5)?,
        fun_fact: row.get(6)?,
        is_favorite: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}
