//! Sprint entity

use chrono::{DateTime, NaiveDate, Utc};

/// Sprint - a time-boxed iteration over a product backlog.
///
/// Assigned items live in a join table resolved through `SprintRepository`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprint {
    pub id: i64,
    pub product_backlog_id: i64,
    pub goals: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    /// Whether the sprint window contains the given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Apply the fields of an update in place
    pub fn apply(&mut self, update: NewSprint) {
        self.goals = update.goals;
        self.start_date = update.start_date;
        self.end_date = update.end_date;
        self.updated_at = Utc::now();
    }

    /// Mark the sprint inactive (soft delete)
    pub fn deactivate(&mut self) {
        self.active = false;
        self.updated_at = Utc::now();
    }
}

/// Data for creating or replacing a sprint; the id is assigned by storage
#[derive(Debug, Clone)]
pub struct NewSprint {
    pub goals: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
