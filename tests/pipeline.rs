//! End-to-end tests: fixture CSV in, HTML page out.

use std::path::{Path, PathBuf};

use cwc_centuries::io::read_csv;
use cwc_centuries::records::{CENTURIES, PLAYER, RUNS, TEAM};
use cwc_centuries::views::{self, count_column, text_column};
use cwc_centuries::{build_report, clean, run, ReportConfig, ReportError, TableStyle};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/centuries.csv")
}

fn config_for(output: PathBuf) -> ReportConfig {
    ReportConfig {
        input: fixture(),
        output,
        ..ReportConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[tokio::test]
async fn loads_runs_as_text() {
    let raw = read_csv(fixture()).await.unwrap();
    assert_eq!(raw.height(), 13);
    let runs = text_column(&raw, RUNS).unwrap();
    assert_eq!(runs[2], "140*");
}

#[tokio::test]
async fn missing_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.csv");
    std::fs::write(&path, "Player,Runs\nA,100\n").unwrap();

    let err = read_csv(&path).await.unwrap_err();
    assert!(matches!(err, ReportError::MissingColumn(_)));
}

#[tokio::test]
async fn bad_runs_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    std::fs::write(
        &path,
        "Player,Runs,4s,6s,S/R,Team,Opposition,Venue,Result\n\
         A,DNB,1,1,90.0,India,Kenya,Lord's,India won\n",
    )
    .unwrap();

    let raw = read_csv(&path).await.unwrap();
    let err = build_report(&raw, &ReportConfig::default()).err().unwrap();
    assert!(matches!(err, ReportError::Polars(_)));
}

// ---------------------------------------------------------------------------
// Views over the fixture
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fixture_views_agree_with_hand_counts() {
    let raw = read_csv(fixture()).await.unwrap();
    let data = clean::prepare(&raw).unwrap();

    let top = views::top_scorers(&data, 100, 5).unwrap();
    assert_eq!(
        text_column(&top, PLAYER).unwrap(),
        vec![
            "Sachin Tendulkar",
            "Mark Waugh",
            "Saeed Anwar",
            "Ajay Jadeja",
            "Sourav Ganguly"
        ]
    );
    assert_eq!(count_column(&top, CENTURIES).unwrap(), vec![2, 2, 2, 2, 1]);

    let summary = views::win_loss(&data).unwrap();
    assert_eq!(summary.won, 10);
    assert_eq!(summary.lost, 3);
    assert_eq!(summary.total(), raw.height() as u64);

    let venue = views::venue_performance(&data, "Old Trafford Cricket Ground, Manchester").unwrap();
    assert_eq!(text_column(&venue, TEAM).unwrap(), vec!["Pakistan", "India"]);
}

// ---------------------------------------------------------------------------
// Full run
// ---------------------------------------------------------------------------

#[tokio::test]
async fn run_writes_every_section_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("report.html");
    run(&config_for(output.clone())).await.unwrap();

    let page = std::fs::read_to_string(&output).unwrap();
    let headings = [
        "Dataset Overview",
        "Comparison of Centuries Scored by Teams against Different Oppositions",
        "Team Performance in Old Trafford Cricket Ground, Manchester",
        "Top 5 Players with the Highest Number of Centuries",
        "Impact of Centuries on Match Results",
        "Players with Most 4s and 6s in Their Centuries",
        "Relationship between Batting Average and Strike Rate in The Oval, London",
        "Centuries Scored by Players from Different Teams",
    ];
    let mut last = 0;
    for heading in headings {
        let at = page[last..]
            .find(&format!("<h2>{heading}</h2>"))
            .unwrap_or_else(|| panic!("{heading} missing or out of order"));
        last += at;
    }
}

#[tokio::test]
async fn plain_style_drops_inline_table_styling() {
    let raw = read_csv(fixture()).await.unwrap();

    let styled = build_report(&raw, &ReportConfig::default()).unwrap().render();
    let plain_config = ReportConfig {
        table_style: TableStyle::Plain,
        ..ReportConfig::default()
    };
    let plain = build_report(&raw, &plain_config).unwrap().render();

    assert!(styled.contains("background-color: #f5f5f5"));
    assert!(!plain.contains("background-color: #f5f5f5"));
}
