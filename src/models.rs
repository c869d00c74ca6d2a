//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Monkey record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Monkey {
    pub id: u32,
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
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Writable fields sent to create/update (matches backend)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonkeyFields {
    pub name: String,
    pub species: String,
    pub habitat: Option<String>,
    pub conservation_status: Option<String>,
    pub image_url: Option<String>,
    pub fun_fact: Option<String>,
    pub is_favorite: bool,
}

impl From<&Monkey> for MonkeyFields {
    fn from(monkey: &Monkey) -> Self {
        Self {
            name: monkey.name.clone(),
            species: monkey.species.clone(),
            habitat: monkey.habitat.clone(),
            conservation_status: monkey.conservation_status.clone(),
            image_url: monkey.image_url.clone(),
            fun_fact: monkey.fun_fact.clone(),
            is_favorite: monkey.is_favorite,
        }
    }
}

/// Response envelope returned by every monkey command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
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

/// Conservation categories offered by the form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConservationStatus {
    LeastConcern,
    NearThreatened,
    Vulnerable,
    Endangered,
    CriticallyEndangered,
    Unknown,
}

impl ConservationStatus {
    pub const ALL: [ConservationStatus; 6] = [
        ConservationStatus::LeastConcern,
        ConservationStatus::NearThreatened,
        ConservationStatus::Vulnerable,
        ConservationStatus::Endangered,
        ConservationStatus::CriticallyEndangered,
        ConservationStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConservationStatus::LeastConcern => "Least Concern",
            ConservationStatus::NearThreatened => "Near Threatened",
            ConservationStatus::Vulnerable => "Vulnerable",
            ConservationStatus::Endangered => "Endangered",
            ConservationStatus::CriticallyEndangered => "Critically Endangered",
            ConservationStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn color(&self) -> TagColor {
        match self {
            ConservationStatus::LeastConcern => TagColor::Green,
            ConservationStatus::NearThreatened => TagColor::Orange,
            ConservationStatus::Vulnerable => TagColor::Yellow,
            ConservationStatus::Endangered | ConservationStatus::CriticallyEndangered => TagColor::Red,
            ConservationStatus::Unknown => TagColor::Gray,
        }
    }
}

/// Display color of a conservation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagColor {
    Green,
    Orange,
    Yellow,
    Red,
    Gray,
}

impl TagColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagColor::Green => "green",
            TagColor::Orange => "orange",
            TagColor::Yellow => "yellow",
            TagColor::Red => "red",
            TagColor::Gray => "gray",
        }
    }
}

/// Tag color for any stored status string; unrecognized values are gray
pub fn conservation_color(status: &str) -> TagColor {
    ConservationStatus::parse(status)
        .map(|s| s.color())
        .unwrap_or(TagColor::Gray)
}
