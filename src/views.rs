//! Data shaping for each section of the report.
//!
//! Every view takes the prepared frame (see [`crate::clean::prepare`]) and
//! returns a new frame; nothing here mutates its input. Ranked views order by
//! their key descending and keep first-encounter order among ties.

use polars::prelude::*;

use crate::clean::MatchResult;
use crate::records::{
    CENTURIES, FOURS, MATCH_RESULT, OPPOSITION, PLAYER, RUNS, SIXES, STRIKE_RATE, TEAM, VENUE,
};

static ENCOUNTER_ORDER: &str = "__encounter_order";

/// Sort descending by `key`, breaking ties by the order rows arrive in.
/// Callers group with `groupby_stable` so that arrival order is encounter order.
fn rank_descending(frame: LazyFrame, key: &str, limit: Option<usize>) -> LazyFrame {
    let ranked = frame
        .with_row_count(ENCOUNTER_ORDER, None)
        .sort_by_exprs([col(key), col(ENCOUNTER_ORDER)], [true, false], false)
        .drop_columns([ENCOUNTER_ORDER]);
    match limit {
        Some(n) => ranked.limit(n as IdxSize),
        None => ranked,
    }
}

/// Centuries per (Team, Opposition) pair, ordered by Team then Opposition.
pub fn team_vs_opposition(data: &DataFrame) -> PolarsResult<DataFrame> {
    data.clone()
        .lazy()
        .groupby_stable([col(TEAM), col(OPPOSITION)])
        .agg([col(PLAYER).count().alias(CENTURIES)])
        .sort_by_exprs([col(TEAM), col(OPPOSITION)], [false, false], false)
        .collect()
}

/// Centuries per team at one venue, most first.
pub fn venue_performance(data: &DataFrame, venue: &str) -> PolarsResult<DataFrame> {
    let per_venue = data
        .clone()
        .lazy()
        .groupby_stable([col(TEAM), col(VENUE)])
        .agg([col(PLAYER).count().alias(CENTURIES)])
        .filter(col(VENUE).eq(lit(venue)));
    rank_descending(per_venue, CENTURIES, None).collect()
}

/// Players with the most innings of at least `threshold` runs.
pub fn top_scorers(data: &DataFrame, threshold: i64, n: usize) -> PolarsResult<DataFrame> {
    let per_player = data
        .clone()
        .lazy()
        .filter(col(RUNS).gt_eq(lit(threshold)))
        .groupby_stable([col(PLAYER)])
        .agg([col(RUNS).count().alias(CENTURIES)]);
    rank_descending(per_player, CENTURIES, Some(n)).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLoss {
    pub won: u64,
    pub lost: u64,
}

impl WinLoss {
    pub fn total(&self) -> u64 {
        self.won + self.lost
    }
}

/// Row counts per `Match_Result` category.
pub fn win_loss(data: &DataFrame) -> PolarsResult<WinLoss> {
    let counts = data
        .clone()
        .lazy()
        .groupby_stable([col(MATCH_RESULT)])
        .agg([col(PLAYER).count().alias(CENTURIES)])
        .collect()?;

    let labels = text_column(&counts, MATCH_RESULT)?;
    let values = count_column(&counts, CENTURIES)?;
    let mut summary = WinLoss::default();
    for (label, value) in labels.iter().zip(values) {
        if label == MatchResult::Won.as_str() {
            summary.won += value;
        } else {
            summary.lost += value;
        }
    }
    Ok(summary)
}

/// Top `n` players by total 4s and, independently, by total 6s.
pub fn boundary_leaders(data: &DataFrame, n: usize) -> PolarsResult<(DataFrame, DataFrame)> {
    let totals = data
        .clone()
        .lazy()
        .groupby_stable([col(PLAYER)])
        .agg([col(FOURS).sum(), col(SIXES).sum()]);

    let fours = rank_descending(
        totals.clone().select([col(PLAYER), col(FOURS)]),
        FOURS,
        Some(n),
    )
    .collect()?;
    let sixes = rank_descending(totals.select([col(PLAYER), col(SIXES)]), SIXES, Some(n)).collect()?;
    Ok((fours, sixes))
}

/// Mean Runs and mean S/R per player at one venue, ordered by mean Runs.
pub fn venue_relationship(data: &DataFrame, venue: &str) -> PolarsResult<DataFrame> {
    data.clone()
        .lazy()
        .filter(col(VENUE).eq(lit(venue)))
        .groupby_stable([col(PLAYER)])
        .agg([col(RUNS).mean(), col(STRIKE_RATE).mean()])
        .sort_by_exprs([col(RUNS)], [false], false)
        .collect()
}

/// Innings of at least `threshold` runs per team, ordered by Team.
pub fn centuries_by_team(data: &DataFrame, threshold: i64) -> PolarsResult<DataFrame> {
    data.clone()
        .lazy()
        .filter(col(RUNS).gt_eq(lit(threshold)))
        .groupby_stable([col(TEAM)])
        .agg([col(PLAYER).count().alias(CENTURIES)])
        .sort_by_exprs([col(TEAM)], [false], false)
        .collect()
}

pub fn text_column(frame: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    Ok(frame
        .column(name)?
        .utf8()?
        .into_iter()
        .map(|val| val.unwrap_or_default().to_string())
        .collect())
}

/// Counts and sums; nulls read as zero.
pub fn count_column(frame: &DataFrame, name: &str) -> PolarsResult<Vec<u64>> {
    let values = frame.column(name)?.cast(&DataType::UInt64)?;
    let out = values.u64()?.into_iter().map(|val| val.unwrap_or(0)).collect();
    Ok(out)
}

pub fn float_column(frame: &DataFrame, name: &str) -> PolarsResult<Vec<f64>> {
    let values = frame.column(name)?.cast(&DataType::Float64)?;
    let out = values
        .f64()?
        .into_iter()
        .map(|val| val.unwrap_or(f64::NAN))
        .collect();
    Ok(out)
}
