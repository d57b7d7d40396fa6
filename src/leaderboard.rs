//! Per-team score entries and the derived totals / fastest time.

use crate::team::Team;
use crate::time_label::parse_time_label;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub type EntryId = u64;

/// One committed result. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: EntryId,
    pub points: u32,
    /// Elapsed time as a `MM:SS.CC` label.
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    ledgers: [Vec<ScoreEntry>; Team::COUNT],
    next_id: EntryId,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to `team` and return its id.
    pub fn add_entry(&mut self, team: Team, points: u32, time_label: impl Into<String>) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        let time = time_label.into();
        debug!("Adding entry {} to {}: +{} at {}", id, team, points, time);
        self.ledgers[team.index()].push(ScoreEntry { id, points, time });
        id
    }

    /// Remove the entry with `id` from `team`. Unknown ids are ignored.
    pub fn remove_entry(&mut self, team: Team, id: EntryId) -> bool {
        let ledger = &mut self.ledgers[team.index()];
        match ledger.iter().position(|e| e.id == id) {
            Some(pos) => {
                ledger.remove(pos);
                debug!("Removed entry {} from {}", id, team);
                true
            }
            None => {
                debug!("Entry {} not found in {}, nothing removed", id, team);
                false
            }
        }
    }

    pub fn entries(&self, team: Team) -> &[ScoreEntry] {
        &self.ledgers[team.index()]
    }

    pub fn total_for(&self, team: Team) -> u32 {
        self.entries(team).iter().map(|e| e.points).sum()
    }

    /// Smallest committed time across all teams, in milliseconds.
    ///
    /// Returns `None` when the board is empty. Labels that fail to parse are
    /// skipped; they can only come from outside `format_elapsed`.
    pub fn fastest_time(&self) -> Option<u32> {
        self.ledgers
            .iter()
            .flatten()
            .filter_map(|entry| match parse_time_label(&entry.time) {
                Ok(ms) => Some(ms),
                Err(e) => {
                    warn!("Skipping entry {} with bad time label: {}", entry.id, e);
                    None
                }
            })
            .min()
    }

    /// Whether `time_label` matches the fastest time on the board. Ties all count.
    pub fn is_fastest(&self, time_label: &str) -> bool {
        match (parse_time_label(time_label), self.fastest_time()) {
            (Ok(ms), Some(fastest)) => ms == fastest,
            _ => false,
        }
    }

    /// Clear every team. Ids keep counting from where they were.
    pub fn reset_all(&mut self) {
        info!("Clearing {} leaderboard entries", self.entry_count());
        for ledger in self.ledgers.iter_mut() {
            ledger.clear();
        }
    }

    pub fn entry_count(&self) -> usize {
        self.ledgers.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.ledgers.iter().all(Vec::is_empty)
    }
}
