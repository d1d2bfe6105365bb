//! Reconstructs which players appeared in a match from one team's sequence
//! of formation snapshots.
//!
//! The first snapshot names the starting-lineup candidates, but the data
//! source also lists non-playing squad members there with a zero or missing
//! formation slot; a real tactical slot is the signal that a listed player
//! actually started. Every later snapshot is a lineup change, and players
//! seen there for the first time entered as substitutes.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::FormationSnapshot;

/// One player's appearance in a match, tagged starter or substitute.
///
/// `formation_slot` is only carried for starters with a real (nonzero) slot;
/// substitutes and slotless squad members get `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAppearance {
    pub team_id: Option<i64>,
    pub player_id: i64,
    pub jersey_number: Option<u32>,
    pub match_start: bool,
    pub formation_slot: Option<u32>,
}

/// Derive the full set of appearances for one team, in first-seen order,
/// exactly one entry per distinct player id.
///
/// A player's classification is fixed by their first occurrence: a
/// first-snapshot player with a nonzero slot is always a starter, anyone
/// else is a substitute, and slot values in later snapshots are discarded.
/// Missing or short arrays degrade to unknown fields; this never fails.
pub fn reconstruct_roster(
    snapshots: &[FormationSnapshot],
    team_id: Option<i64>,
) -> Vec<PlayerAppearance> {
    let mut roster: Vec<PlayerAppearance> = Vec::new();
    let mut index_by_id: HashMap<i64, usize> = HashMap::new();

    let Some((first, rest)) = snapshots.split_first() else {
        return roster;
    };

    // Starting-lineup candidates. A duplicate id within this snapshot
    // overwrites the earlier entry in place (map-assignment semantics).
    for (i, player_id) in first.players() {
        let appearance = PlayerAppearance {
            team_id,
            player_id,
            jersey_number: first.jersey_at(i),
            match_start: true,
            formation_slot: first.slot_at(i),
        };
        match index_by_id.entry(player_id) {
            Entry::Occupied(at) => roster[*at.get()] = appearance,
            Entry::Vacant(slot) => {
                slot.insert(roster.len());
                roster.push(appearance);
            }
        }
    }

    // Candidates without a real tactical slot did not actually start.
    for appearance in &mut roster {
        if appearance.formation_slot.unwrap_or(0) == 0 {
            appearance.match_start = false;
            appearance.formation_slot = None;
        }
    }

    // Later snapshots only ever add substitutes; first occurrence wins.
    for snapshot in rest {
        for (i, player_id) in snapshot.players() {
            if index_by_id.contains_key(&player_id) {
                continue;
            }
            index_by_id.insert(player_id, roster.len());
            roster.push(PlayerAppearance {
                team_id,
                player_id,
                jersey_number: snapshot.jersey_at(i),
                match_start: false,
                formation_slot: None,
            });
        }
    }

    roster
}
