use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde::Serialize;

use pitch_core::record::{MatchRecord, TeamSheet};
use pitch_core::roster::{reconstruct_roster, PlayerAppearance};

use crate::auth::middleware::ApiToken;
use crate::error::AppError;
use crate::store::match_index::MatchIndex;

/// Display value for names the document's dictionary does not cover.
const UNKNOWN_NAME: &str = "N/A";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayersResponse {
    pub match_id: Option<i64>,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_players: Vec<NamedPlayer>,
    pub away_players: Vec<NamedPlayer>,
}

/// A reconstructed appearance with the display name resolved in.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedPlayer {
    #[serde(flatten)]
    pub appearance: PlayerAppearance,
    pub player_name: String,
}

/// GET /match/players/{match_id}
///
/// Reconstructs both lineups from the formation snapshot history and
/// resolves display names through the document's id-to-name dictionary.
pub async fn get_match_players(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<MatchPlayersResponse>, AppError> {
    let record = index.load_record(&match_id).await?;

    let (home_team_name, home_players) = team_side(&record, record.home_sheet());
    let (away_team_name, away_players) = team_side(&record, record.away_sheet());

    Ok(Json(MatchPlayersResponse {
        match_id: record.match_id,
        home_team_name,
        away_team_name,
        home_players,
        away_players,
    }))
}

fn team_side(record: &MatchRecord, sheet: Option<&TeamSheet>) -> (String, Vec<NamedPlayer>) {
    let Some(sheet) = sheet else {
        return (UNKNOWN_NAME.to_string(), Vec::new());
    };

    let team_name = sheet
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_NAME.to_string());

    let players = reconstruct_roster(sheet.snapshots(), sheet.team_id)
        .into_iter()
        .map(|appearance| {
            let player_name = record
                .player_name(appearance.player_id)
                .unwrap_or(UNKNOWN_NAME)
                .to_string();
            NamedPlayer {
                appearance,
                player_name,
            }
        })
        .collect();

    (team_name, players)
}
