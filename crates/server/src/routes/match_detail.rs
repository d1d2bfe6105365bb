use std::sync::Arc;

use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value as JsonValue};

use pitch_core::record::{IncidentEvent, TeamSheet};

use crate::auth::middleware::ApiToken;
use crate::error::AppError;
use crate::store::match_index::MatchIndex;

/// GET /match/{match_id}: the stored document, verbatim.
pub async fn get_match_document(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    Ok(Json(index.load_raw(&match_id).await?))
}

/// GET /match/base/{match_id}
///
/// Flat projection of the general match info: root-level counters, the match
/// centre header fields, the home sheet from the match centre and the away
/// sheet from the root slot. Anything absent in the document is null.
pub async fn get_match_base(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;
    let centre = record.match_centre_data.as_ref();
    let referee = centre.and_then(|c| c.referee.as_ref());
    let home = record.home_sheet();
    let away = record.away.as_ref();
    let period_end = |period: &str| {
        record
            .period_end_minutes
            .as_ref()
            .and_then(|m| m.get(period))
            .copied()
    };

    Ok(Json(json!({
        "matchId": record.match_id,
        "timeStamp": centre.and_then(|c| c.time_stamp.as_deref()),
        "attendance": centre.and_then(|c| c.attendance),
        "venueName": centre.and_then(|c| c.venue_name.as_deref()),
        "referee_officialId": referee.and_then(|r| r.official_id),
        "referee_name": referee.and_then(|r| r.name.as_deref()),
        "weatherCode": centre.and_then(|c| c.weather_code.as_deref()),
        "elapsed": centre.and_then(|c| c.elapsed.as_deref()),
        "startTime": centre.and_then(|c| c.start_time.as_deref()),
        "startDate": centre.and_then(|c| c.start_date.as_deref()),
        "score": centre.and_then(|c| c.score.as_deref()),
        "htScore": centre.and_then(|c| c.ht_score.as_deref()),
        "ftScore": centre.and_then(|c| c.ft_score.as_deref()),
        "etScore": centre.and_then(|c| c.et_score.as_deref()),
        "statusCode": centre.and_then(|c| c.status_code),
        "periodCode": centre.and_then(|c| c.period_code),
        "maxMinute": record.max_minute,
        "minuteExpanded": record.minute_expanded,
        "maxPeriod": record.max_period,
        "expandedMaxMinute": record.expanded_max_minute,
        "periodEndMinutes_1": period_end("1"),
        "periodEndMinutes_2": period_end("2"),
        "timeoutInSeconds": record.timeout_in_seconds,
        "home_id": home.and_then(|t| t.team_id),
        "home_name": home.and_then(|t| t.name.as_deref()),
        "home_countryName": home.and_then(|t| t.country_name.as_deref()),
        "home_managerName": home.and_then(|t| t.manager_name.as_deref()),
        "home_averageAge": home.and_then(|t| t.average_age),
        "away_id": away.and_then(|t| t.team_id),
        "away_name": away.and_then(|t| t.name.as_deref()),
        "away_countryName": away.and_then(|t| t.country_name.as_deref()),
        "away_managerName": away.and_then(|t| t.manager_name.as_deref()),
        "away_averageAge": away.and_then(|t| t.average_age),
    })))
}

/// GET /match/stats/{match_id}
pub async fn get_match_stats(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;
    let match_id_val = record.match_id;
    let (home_stats, away_stats) = match record.match_centre_data {
        Some(centre) => (
            centre.home.and_then(|t| t.stats).unwrap_or_else(empty_object),
            centre.away.and_then(|t| t.stats).unwrap_or_else(empty_object),
        ),
        None => (empty_object(), empty_object()),
    };

    Ok(Json(json!({
        "matchId": match_id_val,
        "homeStats": home_stats,
        "awayStats": away_stats,
    })))
}

/// GET /match/incidentEvents/{match_id}
///
/// Splits the root-level incident event list by the team ids on the match
/// centre sheets. Events for a side whose team id is unknown are dropped
/// rather than guessed.
pub async fn get_match_incident_events(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;
    let centre = record.match_centre_data.as_ref();
    let home_team_id = centre.and_then(|c| c.home.as_ref()).and_then(|t| t.team_id);
    let away_team_id = centre.and_then(|c| c.away.as_ref()).and_then(|t| t.team_id);

    let events = record.incident_events.as_deref().unwrap_or_default();
    let for_side = |team_id: Option<i64>| -> Vec<&IncidentEvent> {
        events
            .iter()
            .filter(|event| team_id.is_some() && event.team_id == team_id)
            .collect()
    };

    Ok(Json(json!({
        "matchId": record.match_id,
        "homeIncidentEvents": for_side(home_team_id),
        "awayIncidentEvents": for_side(away_team_id),
    })))
}

/// GET /match/formations/{match_id}
///
/// Both sides' full snapshot history. The away side comes from the root
/// sheet when it has snapshots, otherwise from the match centre.
pub async fn get_match_formations(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;
    let home = record.home_sheet().map(TeamSheet::snapshots).unwrap_or_default();
    let away = record.away_sheet().map(TeamSheet::snapshots).unwrap_or_default();

    Ok(Json(json!({
        "matchId": record.match_id,
        "homeFormations": home,
        "awayFormations": away,
    })))
}

/// GET /match/events/{match_id}
pub async fn get_match_events(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;
    let match_id_val = record.match_id;
    let events = record
        .match_centre_data
        .and_then(|centre| centre.events)
        .unwrap_or_default();

    Ok(Json(json!({
        "matchId": match_id_val,
        "events": events,
    })))
}

/// GET /match/matchCentreEventTypeJson/{match_id}
pub async fn get_match_event_types(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;

    Ok(Json(json!({
        "matchId": record.match_id,
        "matchCentreEventTypeJson": record
            .match_centre_event_type_json
            .unwrap_or_else(empty_object),
    })))
}

/// GET /match/formationIdNameMappings/{match_id}
pub async fn get_formation_id_name_mappings(
    Extension(index): Extension<Arc<MatchIndex>>,
    Path(match_id): Path<String>,
    _token: ApiToken,
) -> Result<Json<JsonValue>, AppError> {
    let record = index.load_record(&match_id).await?;

    Ok(Json(json!({
        "matchId": record.match_id,
        "formationIdNameMappings": record
            .formation_id_name_mappings
            .unwrap_or_else(empty_object),
    })))
}

fn empty_object() -> JsonValue {
    json!({})
}
