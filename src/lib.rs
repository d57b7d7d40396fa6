pub mod clock;
pub mod config;
pub mod leaderboard;
pub mod scoring;
pub mod session;
pub mod team;
pub mod time_label;

pub use clock::{Clock, ClockPhase};
pub use leaderboard::{EntryId, Leaderboard, ScoreEntry};
pub use scoring::{apply_modifier, points_for, ScoringPreset};
pub use session::{Action, RaceSession};
pub use team::Team;
pub use time_label::{format_elapsed, parse_time_label, TimeLabelError};
