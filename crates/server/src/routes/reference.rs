use axum::{Extension, Json};

use crate::auth::middleware::ApiToken;
use crate::config::Config;
use crate::error::AppError;
use crate::store::tables::{self, TableRow};

/// GET /opta/qualifiers
pub async fn get_opta_qualifiers(
    Extension(config): Extension<Config>,
    _token: ApiToken,
) -> Result<Json<Vec<TableRow>>, AppError> {
    Ok(Json(tables::read_table(&config.qualifiers_csv()).await?))
}

/// GET /opta/typeId
pub async fn get_opta_type_ids(
    Extension(config): Extension<Config>,
    _token: ApiToken,
) -> Result<Json<Vec<TableRow>>, AppError> {
    Ok(Json(tables::read_table(&config.event_types_csv()).await?))
}

/// GET /teams
pub async fn get_teams(
    Extension(config): Extension<Config>,
    _token: ApiToken,
) -> Result<Json<Vec<TableRow>>, AppError> {
    Ok(Json(tables::read_table(&config.teams_csv()).await?))
}
