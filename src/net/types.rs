//! Wire DTOs for the fitness API.
//!
//! DESIGN
//! ======
//! Field names follow Rust conventions; `serde` renames map them onto the
//! backend's JSON (`type`, `summary`, `_id`). Numeric fields accept both
//! integers and floats since the backend does not distinguish them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Training categories the dashboard charts know about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrainingType {
    Cardio,
    Fuerza,
}

impl TrainingType {
    pub const ALL: [Self; 2] = [Self::Cardio, Self::Fuerza];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cardio => "Cardio",
            Self::Fuerza => "Fuerza",
        }
    }

    /// Exact-name lookup; anything else is not a known category.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for TrainingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hours logged for one category within a bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Category name as sent by the server; may be unknown to the client.
    #[serde(rename = "type")]
    pub category: String,
    pub hours: f64,
}

/// One calendar month of summary rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
    #[serde(rename = "summary", default)]
    pub rows: Vec<SummaryRow>,
}

/// One ISO week of summary rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeeklyBucket {
    pub year: i32,
    pub week: u32,
    #[serde(rename = "summary", default)]
    pub rows: Vec<SummaryRow>,
}

/// `GET /metrics/summary-current-month`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurrentSummary {
    pub month: MonthlyBucket,
    pub week: WeeklyBucket,
}

/// `GET /metrics/summary-by-month`, newest month first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthsSummary {
    #[serde(default)]
    pub months: Vec<MonthlyBucket>,
}

/// A stored training session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrainingEntry {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: f64,
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// `GET /metrics`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryList {
    #[serde(default)]
    pub items: Vec<TrainingEntry>,
}

/// Body for creating or replacing a training entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTrainingEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub hours: f64,
    pub date: String,
}

impl NewTrainingEntry {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.kind,
            "hours": self.hours,
            "date": self.date,
        })
    }
}

impl From<&TrainingEntry> for NewTrainingEntry {
    fn from(entry: &TrainingEntry) -> Self {
        Self { kind: entry.kind.clone(), hours: entry.hours, date: entry.date.clone() }
    }
}
