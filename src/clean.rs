use polars::prelude::*;

use crate::records::{MATCH_RESULT, RESULT, RUNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Won,
    Lost,
}

impl MatchResult {
    /// "Won" when the result text mentions "won" in any case, otherwise "Lost".
    pub fn from_result_text(text: &str) -> Self {
        if text.to_lowercase().contains("won") {
            MatchResult::Won
        } else {
            MatchResult::Lost
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Won => "Won",
            MatchResult::Lost => "Lost",
        }
    }
}

/// Strip the not-out marker (or any other trailing non-digit suffix) and parse.
pub fn normalize_runs(raw: &str) -> PolarsResult<u32> {
    let digits = raw.trim().trim_end_matches(|c: char| !c.is_ascii_digit());
    digits.parse::<u32>().map_err(|_| {
        PolarsError::ComputeError(format!("cannot coerce Runs value {raw:?} to an integer").into())
    })
}

fn normalize_runs_series(column: Series) -> PolarsResult<Option<Series>> {
    let text = column.cast(&DataType::Utf8)?;
    let mut runs = Vec::with_capacity(text.len());
    for val in text.utf8()? {
        let val = val.ok_or_else(|| PolarsError::ComputeError("missing Runs value".into()))?;
        runs.push(normalize_runs(val)? as i64);
    }
    Ok(Option::from(Series::new(column.name(), runs)))
}

fn match_result_series(column: Series) -> PolarsResult<Option<Series>> {
    let outcomes: Vec<&str> = column
        .utf8()?
        .into_iter()
        .map(|val| MatchResult::from_result_text(val.unwrap_or_default()).as_str())
        .collect();
    Ok(Option::from(Series::new(MATCH_RESULT, outcomes)))
}

/// Normalize `Runs` to Int64 and append `Match_Result`. Computed once per pass;
/// every view except the raw overview reads the frame returned here.
pub fn prepare(raw: &DataFrame) -> PolarsResult<DataFrame> {
    raw.clone()
        .lazy()
        .with_column(
            col(RUNS).map(normalize_runs_series, GetOutput::from_type(DataType::Int64)),
        )
        .with_column(
            col(RESULT)
                .map(match_result_series, GetOutput::from_type(DataType::Utf8))
                .alias(MATCH_RESULT),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_not_out_marker() {
        assert_eq!(normalize_runs("100*").unwrap(), 100);
        assert_eq!(normalize_runs("120").unwrap(), 120);
        assert_eq!(normalize_runs(" 237* ").unwrap(), 237);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        for raw in ["100*", "183", "0"] {
            let once = normalize_runs(raw).unwrap();
            let twice = normalize_runs(&once.to_string()).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn rejects_non_numeric_runs() {
        assert!(normalize_runs("DNB").is_err());
        assert!(normalize_runs("").is_err());
        assert!(normalize_runs("-5").is_err());
    }

    #[test]
    fn match_result_from_text() {
        assert_eq!(
            MatchResult::from_result_text("India won by 5 wickets"),
            MatchResult::Won
        );
        assert_eq!(MatchResult::from_result_text("Australia lost"), MatchResult::Lost);
        assert_eq!(MatchResult::from_result_text("WON"), MatchResult::Won);
        assert_eq!(MatchResult::from_result_text("No result"), MatchResult::Lost);
    }

    #[test]
    fn prepare_normalizes_and_derives() {
        let raw = df!(
            "Player" => &["A", "A"],
            "Runs" => &["100*", "120"],
            "Result" => &["India won by 5 wickets", "Australia lost"],
        )
        .unwrap();
        let prepared = prepare(&raw).unwrap();

        let runs: Vec<i64> = prepared
            .column(RUNS)
            .unwrap()
            .i64()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(runs, vec![100, 120]);

        let outcomes: Vec<&str> = prepared
            .column(MATCH_RESULT)
            .unwrap()
            .utf8()
            .unwrap()
            .into_no_null_iter()
            .collect();
        assert_eq!(outcomes, vec!["Won", "Lost"]);
    }

    #[test]
    fn prepare_is_idempotent_on_runs() {
        let raw = df!(
            "Runs" => &["101*", "150"],
            "Result" => &["won", "lost"],
        )
        .unwrap();
        let once = prepare(&raw).unwrap();
        let twice = prepare(&once).unwrap();
        assert!(once.column(RUNS).unwrap().series_equal(twice.column(RUNS).unwrap()));
    }

    #[test]
    fn prepare_fails_on_bad_runs() {
        let raw = df!(
            "Runs" => &["abc"],
            "Result" => &["won"],
        )
        .unwrap();
        assert!(prepare(&raw).is_err());
    }
}
