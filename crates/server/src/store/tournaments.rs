//! The tournament workbook: one row per (tournament, season, stage).
//!
//! Cells are addressed by header name so the column order in the workbook
//! does not matter. Each row carries the derived competition key used to
//! match rows of the match list.

use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use calamine::{Data, DataType, Reader, Xlsx};
use serde::Serialize;

use pitch_core::competition::competition_key;

use crate::error::AppError;

/// One workbook row, plus the derived competition key.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRow {
    pub tournament_id: Option<i64>,
    pub season_id: Option<i64>,
    pub stage_id: Option<i64>,
    pub stage_name: Option<String>,
    pub region_id: Option<i64>,
    pub tournament_name: String,
    pub season_name: String,
    pub competition: String,
}

/// Read every row of the tournament workbook.
pub async fn read_rows(path: &Path) -> Result<Vec<TournamentRow>, AppError> {
    let bytes = tokio::fs::read(path).await?;
    parse_workbook(&bytes)
}

/// Parse the first worksheet of an xlsx workbook held in memory.
pub fn parse_workbook(bytes: &[u8]) -> Result<Vec<TournamentRow>, AppError> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes)).map_err(|e| AppError::Xlsx(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Xlsx("workbook has no sheets".into()))?
        .map_err(|e| AppError::Xlsx(e.to_string()))?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(i, cell)| cell.as_string().map(|name| (name.trim().to_string(), i)))
        .collect();

    let mut out = Vec::new();
    for row in rows {
        let cell = |name: &str| columns.get(name).and_then(|&i| row.get(i));
        let int = |name: &str| cell(name).and_then(cell_to_i64);
        let text = |name: &str| {
            cell(name)
                .and_then(|c| c.as_string())
                .map(|s| s.trim().to_string())
                .unwrap_or_default()
        };

        let tournament_name = text("tournamentName");
        let season_name = text("seasonName");
        let competition = competition_key(&text("regionName"), &tournament_name, &season_name);

        out.push(TournamentRow {
            tournament_id: int("tournamentId"),
            season_id: int("seasonId"),
            stage_id: int("stageId"),
            stage_name: cell("stageName")
                .and_then(|c| c.as_string())
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            region_id: int("regionId"),
            tournament_name,
            season_name,
            competition,
        });
    }
    Ok(out)
}

/// Keep only the rows matching the optional id filters.
pub fn filter(
    rows: Vec<TournamentRow>,
    tournament_id: Option<i64>,
    season_id: Option<i64>,
) -> Vec<TournamentRow> {
    rows.into_iter()
        .filter(|row| tournament_id.map_or(true, |id| row.tournament_id == Some(id)))
        .filter(|row| season_id.map_or(true, |id| row.season_id == Some(id)))
        .collect()
}

/// Workbook cells holding ids come back as floats; truncate to an integer.
fn cell_to_i64(cell: &Data) -> Option<i64> {
    cell.as_i64().or_else(|| cell.as_f64().map(|f| f as i64))
}
