use axum::{extract::Query, Extension, Json};
use serde::Deserialize;

use crate::auth::middleware::ApiToken;
use crate::config::Config;
use crate::error::AppError;
use crate::store::tournaments::{self, TournamentRow};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionsQuery {
    pub tournament_id: Option<String>,
    pub season_id: Option<String>,
}

/// GET /competitions?tournamentId=4&seasonId=9682
pub async fn get_competitions(
    Extension(config): Extension<Config>,
    Query(params): Query<CompetitionsQuery>,
    _token: ApiToken,
) -> Result<Json<Vec<TournamentRow>>, AppError> {
    let tournament_id = parse_id_filter(params.tournament_id.as_deref(), "tournamentId")?;
    let season_id = parse_id_filter(params.season_id.as_deref(), "seasonId")?;

    let rows = tournaments::read_rows(&config.tournaments_file()).await?;
    let rows = tournaments::filter(rows, tournament_id, season_id);

    if rows.is_empty() {
        return Err(AppError::NotFound(
            "No competitions found for the given parameters".into(),
        ));
    }
    Ok(Json(rows))
}

/// Query values arrive as strings. An empty value counts as absent; a
/// present non-integer value is a 400 naming the parameter.
fn parse_id_filter(raw: Option<&str>, name: &str) -> Result<Option<i64>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("{name} must be an integer"))),
    }
}
