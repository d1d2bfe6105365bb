//! Canonical competition keys.
//!
//! Clients address a competition as a single slug derived from the tournament
//! workbook's region, tournament and season names, e.g.
//! `Spain-La-Liga-2023-2024`. Matches in `matches.csv` carry the same key in
//! their `competition` column, so the derivation here and the scraper that
//! produced the CSV must agree.

/// Derive the canonical competition key for a tournament row.
///
/// All three names are trimmed; spaces in the tournament name and slashes in
/// the season name become dashes so the key stays a single path segment.
pub fn competition_key(region: &str, tournament: &str, season: &str) -> String {
    let tournament = tournament.trim().replace(' ', "-");
    let season = season.trim().replace('/', "-");
    format!("{}-{}-{}", region.trim(), tournament, season)
}
