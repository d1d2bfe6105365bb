//! The match list: one comma-delimited CSV row per collected match.
//!
//! Every column is passed through to responses untouched, in CSV column
//! order. Only the three columns the list endpoints filter on get named
//! accessors.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// One row of `matches.csv`, header to raw cell value in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRow(pub IndexMap<String, String>);

impl MatchRow {
    pub fn match_id(&self) -> &str {
        self.field("match_id")
    }

    pub fn competition(&self) -> &str {
        self.field("competition")
    }

    pub fn season(&self) -> &str {
        self.field("season")
    }

    fn field(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Read every row of the match list.
pub async fn read_rows(path: &Path) -> Result<Vec<MatchRow>, AppError> {
    let bytes = tokio::fs::read(path).await?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Rows whose competition column matches, ignoring case.
pub fn filter_by_competition(rows: Vec<MatchRow>, competition: &str) -> Vec<MatchRow> {
    let wanted = competition.to_lowercase();
    rows.into_iter()
        .filter(|row| row.competition().to_lowercase() == wanted)
        .collect()
}

/// Rows matching the competition (case-insensitively) and the exact season.
pub fn filter_by_competition_and_season(
    rows: Vec<MatchRow>,
    competition: &str,
    season: &str,
) -> Vec<MatchRow> {
    filter_by_competition(rows, competition)
        .into_iter()
        .filter(|row| row.season() == season)
        .collect()
}

/// The first row whose match id column equals `match_id`.
pub fn find_by_id(rows: Vec<MatchRow>, match_id: &str) -> Option<MatchRow> {
    rows.into_iter().find(|row| row.match_id() == match_id)
}
