pub mod competitions;
pub mod health;
pub mod match_detail;
pub mod matches;
pub mod players;
pub mod reference;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::store::match_index::MatchIndex;

/// Build the application router with its shared state and CORS layer.
pub fn router(config: Config, index: Arc<MatchIndex>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        // Tournament workbook
        .route("/competitions", get(competitions::get_competitions))
        // Match list (CSV)
        .route("/matches", get(matches::get_all_matches))
        .route(
            "/matches/competition/{competition}",
            get(matches::get_matches_by_competition),
        )
        .route(
            "/matches/competition/{competition}/season/{season}",
            get(matches::get_matches_by_competition_and_season),
        )
        .route("/matches/id/{match_id}", get(matches::get_match_row))
        // Per-match documents
        .route("/match/{match_id}", get(match_detail::get_match_document))
        .route("/match/base/{match_id}", get(match_detail::get_match_base))
        .route("/match/stats/{match_id}", get(match_detail::get_match_stats))
        .route(
            "/match/incidentEvents/{match_id}",
            get(match_detail::get_match_incident_events),
        )
        .route("/match/players/{match_id}", get(players::get_match_players))
        .route(
            "/match/formations/{match_id}",
            get(match_detail::get_match_formations),
        )
        .route("/match/events/{match_id}", get(match_detail::get_match_events))
        .route(
            "/match/matchCentreEventTypeJson/{match_id}",
            get(match_detail::get_match_event_types),
        )
        .route(
            "/match/formationIdNameMappings/{match_id}",
            get(match_detail::get_formation_id_name_mappings),
        )
        // Reference tables
        .route("/opta/qualifiers", get(reference::get_opta_qualifiers))
        .route("/opta/typeId", get(reference::get_opta_type_ids))
        .route("/teams", get(reference::get_teams))
        // Shared state
        .layer(Extension(config))
        .layer(Extension(index))
        .layer(cors)
}
