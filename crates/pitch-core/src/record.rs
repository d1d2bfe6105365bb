//! Typed schema for one per-match JSON document.
//!
//! The source documents are large scraped blobs with a stable skeleton and a
//! lot of free-form payload. Only the skeleton the service actually traverses
//! is typed, with every field optional so that a missing node shows up as an
//! explicit `None` at the use site instead of a silently substituted default.
//! Payload subtrees that are only ever passed through (stats, events, id
//! mappings) stay as raw [`serde_json::Value`]s, and unknown keys on typed
//! nodes are kept via `#[serde(flatten)]` so pass-through endpoints reproduce
//! the document faithfully.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Root of a per-match document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub match_id: Option<i64>,
    pub match_centre_data: Option<MatchCentre>,
    /// Root-level away sheet. Some documents carry the away side here
    /// instead of (or as well as) inside `matchCentreData`.
    pub away: Option<TeamSheet>,
    pub incident_events: Option<Vec<IncidentEvent>>,
    pub match_centre_event_type_json: Option<Value>,
    pub formation_id_name_mappings: Option<Value>,
    pub max_minute: Option<i64>,
    pub minute_expanded: Option<i64>,
    pub max_period: Option<i64>,
    pub expanded_max_minute: Option<i64>,
    /// Final minute of each period, keyed by period number as a string.
    pub period_end_minutes: Option<HashMap<String, i64>>,
    pub timeout_in_seconds: Option<i64>,
}

impl MatchRecord {
    /// The home team sheet always lives inside the match centre.
    pub fn home_sheet(&self) -> Option<&TeamSheet> {
        self.match_centre_data.as_ref()?.home.as_ref()
    }

    /// Away sheet for lineup purposes: the root-level sheet when it actually
    /// carries formation snapshots, otherwise the match-centre copy.
    pub fn away_sheet(&self) -> Option<&TeamSheet> {
        match &self.away {
            Some(sheet) if sheet.has_snapshots() => Some(sheet),
            _ => self.match_centre_data.as_ref()?.away.as_ref(),
        }
    }

    /// Display name for a player id, if the document's name dictionary has it.
    pub fn player_name(&self, player_id: i64) -> Option<&str> {
        self.match_centre_data
            .as_ref()?
            .player_id_name_dictionary
            .as_ref()?
            .get(&player_id.to_string())
            .map(String::as_str)
    }
}

/// The `matchCentreData` node: general match info plus both team sheets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCentre {
    pub time_stamp: Option<String>,
    pub attendance: Option<i64>,
    pub venue_name: Option<String>,
    pub referee: Option<Referee>,
    pub weather_code: Option<String>,
    pub elapsed: Option<String>,
    pub start_time: Option<String>,
    pub start_date: Option<String>,
    pub score: Option<String>,
    pub ht_score: Option<String>,
    pub ft_score: Option<String>,
    pub et_score: Option<String>,
    pub status_code: Option<i64>,
    pub period_code: Option<i64>,
    /// Player id (stringified) → display name, covering both teams.
    pub player_id_name_dictionary: Option<HashMap<String, String>>,
    pub events: Option<Vec<Value>>,
    pub home: Option<TeamSheet>,
    pub away: Option<TeamSheet>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    pub official_id: Option<i64>,
    pub name: Option<String>,
}

/// One team's sheet: identity, aggregate stats and formation history.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSheet {
    pub team_id: Option<i64>,
    pub name: Option<String>,
    pub country_name: Option<String>,
    pub manager_name: Option<String>,
    pub average_age: Option<f64>,
    /// Opaque per-minute statistics payload, passed through verbatim.
    pub stats: Option<Value>,
    pub formations: Option<Vec<FormationSnapshot>>,
}

impl TeamSheet {
    /// Formation snapshots in match order; an absent list reads as empty.
    pub fn snapshots(&self) -> &[FormationSnapshot] {
        self.formations.as_deref().unwrap_or_default()
    }

    pub fn has_snapshots(&self) -> bool {
        !self.snapshots().is_empty()
    }
}

/// One recorded lineup configuration: the initial XI or a substitution event.
///
/// The three parallel arrays describe the same player at the same index.
/// Jersey and slot arrays may be shorter than `playerIds`, missing entirely,
/// or contain nulls; anything not present at an index is simply unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormationSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_ids: Option<Vec<Option<i64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_numbers: Option<Vec<Option<u32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formation_slots: Option<Vec<Option<u32>>>,
    /// Everything else in the snapshot (formation id and name, period,
    /// minute bounds, position coordinates…), kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FormationSnapshot {
    /// Players on the sheet with their positional index. Null ids are
    /// skipped; the index still counts them so alignment with the jersey
    /// and slot arrays is preserved.
    pub fn players(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.player_ids
            .as_deref()
            .unwrap_or_default()
            .iter()
            .enumerate()
            .filter_map(|(i, pid)| pid.map(|p| (i, p)))
    }

    /// Jersey number at positional index `i`, if the array reaches it.
    pub fn jersey_at(&self, i: usize) -> Option<u32> {
        self.jersey_numbers
            .as_deref()
            .unwrap_or_default()
            .get(i)
            .copied()
            .flatten()
    }

    /// Formation slot at positional index `i`, if the array reaches it.
    /// Zero comes back as `Some(0)`; the roster pass decides what it means.
    pub fn slot_at(&self, i: usize) -> Option<u32> {
        self.formation_slots
            .as_deref()
            .unwrap_or_default()
            .get(i)
            .copied()
            .flatten()
    }
}

/// A root-level incident event. Only `teamId` is typed, since it drives the
/// home/away split; the rest of the event is carried verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
