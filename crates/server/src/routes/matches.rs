use axum::{extract::Path, Extension, Json};

use crate::auth::middleware::ApiToken;
use crate::config::Config;
use crate::error::AppError;
use crate::store::matches_csv::{self, MatchRow};

/// GET /matches
pub async fn get_all_matches(
    Extension(config): Extension<Config>,
    _token: ApiToken,
) -> Result<Json<Vec<MatchRow>>, AppError> {
    let rows = matches_csv::read_rows(&config.matches_csv()).await?;
    Ok(Json(rows))
}

/// GET /matches/competition/{competition}
pub async fn get_matches_by_competition(
    Extension(config): Extension<Config>,
    Path(competition): Path<String>,
    _token: ApiToken,
) -> Result<Json<Vec<MatchRow>>, AppError> {
    let rows = matches_csv::read_rows(&config.matches_csv()).await?;
    let rows = matches_csv::filter_by_competition(rows, &competition);

    if rows.is_empty() {
        return Err(AppError::NotFound(format!(
            "No matches found for competition '{competition}'"
        )));
    }
    Ok(Json(rows))
}

/// GET /matches/competition/{competition}/season/{season}
pub async fn get_matches_by_competition_and_season(
    Extension(config): Extension<Config>,
    Path((competition, season)): Path<(String, String)>,
    _token: ApiToken,
) -> Result<Json<Vec<MatchRow>>, AppError> {
    let rows = matches_csv::read_rows(&config.matches_csv()).await?;
    let rows = matches_csv::filter_by_competition_and_season(rows, &competition, &season);

    if rows.is_empty() {
        return Err(AppError::NotFound(format!(
            "No matches found for competition '{competition}' and season '{season}'"
        )));
    }
    Ok(Json(rows))
}

/// GET /matches/id/{match_id}
pub async fn get_match_row(
    Extension(config): Extension<Config>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<MatchRow>, AppError> {
    let rows = matches_csv::read_rows(&config.matches_csv()).await?;
    matches_csv::find_by_id(rows, &match_id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No match found with id '{match_id}'")))
}
