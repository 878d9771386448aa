use polars::prelude::{DataType, Field, Schema};

pub const PLAYER: &str = "Player";
pub const TEAM: &str = "Team";
pub const OPPOSITION: &str = "Opposition";
pub const VENUE: &str = "Venue";
pub const RUNS: &str = "Runs";
pub const STRIKE_RATE: &str = "S/R";
pub const FOURS: &str = "4s";
pub const SIXES: &str = "6s";
pub const RESULT: &str = "Result";

/// Derived once per pass from `Result`.
pub const MATCH_RESULT: &str = "Match_Result";
/// Count column produced by the group-by views.
pub const CENTURIES: &str = "Centuries";

pub struct CenturyRecord {}

impl CenturyRecord {
    /// Dtype overrides handed to the CSV reader. `Runs` stays text so the
    /// not-out marker survives until normalization.
    pub fn raw_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new(PLAYER, DataType::Utf8),
            Field::new(TEAM, DataType::Utf8),
            Field::new(OPPOSITION, DataType::Utf8),
            Field::new(VENUE, DataType::Utf8),
            Field::new(RUNS, DataType::Utf8),
            Field::new(STRIKE_RATE, DataType::Float64),
            Field::new(FOURS, DataType::Int64),
            Field::new(SIXES, DataType::Int64),
            Field::new(RESULT, DataType::Utf8),
        ])
    }

    pub fn required_columns() -> [&'static str; 9] {
        [
            PLAYER,
            TEAM,
            OPPOSITION,
            VENUE,
            RUNS,
            STRIKE_RATE,
            FOURS,
            SIXES,
            RESULT,
        ]
    }
}
