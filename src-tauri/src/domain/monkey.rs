//! Monkey Entity
//!
//! One catalog record plus the writable field set used by create/update.

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// A catalog record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monkey {
    /// Unique identifier, assigned on insert
    pub id: u32,
    pub name: String,
    pub species: String,
    pub habitat: Option<String>,
    /// Normally one of the conservation categories, stored verbatim
    pub conservation_status: Option<String>,
    pub image_url: Option<String>,
    pub fun_fact: Option<String>,
    pub is_favorite: bool,
    /// Unix seconds
    pub created_at: Option<i64>,
    /// Unix seconds
    pub updated_at: Option<i64>,
}

/// Writable fields of a record. Create and update both take the full set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonkeyFields {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub habitat: Option<String>,
    #[serde(default)]
    pub conservation_status: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub fun_fact: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
}

impl MonkeyFields {
    /// Trim text, drop blank optionals, and require name and species.
    pub fn normalize(self) -> DomainResult<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::InvalidInput("name is required".to_string()));
        }
        let species = self.species.trim().to_string();
        if species.is_empty() {
            return Err(DomainError::InvalidInput("species is required".to_string()));
        }

        Ok(Self {
            name,
            species,
            habitat: non_blank(self.habitat),
            conservation_status: non_blank(self.conservation_status),
            image_url: non_blank(self.image_url),
            fun_fact: non_blank(self.fun_fact),
            is_favorite: self.is_favorite,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Monkey {
    /// Build an unsaved record from fields (id 0 until inserted)
    pub fn from_fields(id: u32, fields: MonkeyFields) -> Self {
        Self {
            id,
            name: fields.name,
            species: fields.species,
            habitat: fields.habitat,
            conservation_status: fields.conservation_status,
            image_url: fields.image_url,
            fun_fact: fields.fun_fact,
            is_favorite: fields.is_favorite,
            created_at: None,
            updated_at: None,
        }
    }

    /// Replace every writable field, keeping id and timestamps
    pub fn replace_fields(&mut self, fields: MonkeyFields) {
        self.name = fields.name;
        self.species = fields.species;
        self.habitat = fields.habitat;
        self.conservation_status = fields.conservation_status;
        self.image_url = fields.image_url;
        self.fun_fact = fields.fun_fact;
        self.is_favorite = fields.is_favorite;
    }
}

impl Entity for Monkey {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
