//! Backlog item entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of a backlog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Todo,
    InProgress,
    Done,
}

impl ItemStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            _ => Err(UnknownVariant),
        }
    }
}

/// Priority of a backlog item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(UnknownVariant),
        }
    }
}

/// Error when parsing an enum from its stored string form
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant")]
pub struct UnknownVariant;

/// Backlog item entity
///
/// Sprint membership is a many-to-many association resolved through
/// `SprintRepository`; the item itself only knows its owning backlog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBacklog {
    pub id: i64,
    pub product_backlog_id: i64,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub priority: Priority,
    pub acceptance_criteria: Vec<String>,
    pub effort_estimation: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemBacklog {
    /// Apply the fields of an update in place
    pub fn apply(&mut self, update: NewItemBacklog) {
        self.name = update.name;
        self.description = update.description;
        self.status = update.status;
        self.priority = update.priority;
        self.acceptance_criteria = update.acceptance_criteria;
        self.effort_estimation = update.effort_estimation;
        self.updated_at = Utc::now();
    }

    /// Mark the item inactive (soft delete)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Data for creating or replacing a backlog item; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewItemBacklog {
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub priority: Priority,
    pub acceptance_criteria: Vec<String>,
    pub effort_estimation: String,
}
