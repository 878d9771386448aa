use log::{debug, info};
use maud::html;
use polars::prelude::DataFrame;

use crate::clean::prepare;
use crate::config::{ReportConfig, TableStyle};
use crate::error::ReportError;
use crate::io::{ensure_columns, read_csv, write_report};
use crate::plots;
use crate::records::{CENTURIES, FOURS, PLAYER, RUNS, SIXES, STRIKE_RATE, TEAM};
use crate::report::{DataTable, Report, ReportSection};
use crate::views::{self, count_column, float_column, text_column};

pub static REPORT_TITLE: &str = "Cricket World Cup Centuries Analysis";

/// Load the dataset, build every section and write the page.
pub async fn run(config: &ReportConfig) -> Result<(), ReportError> {
    let raw = read_csv(&config.input).await?;
    let report = build_report(&raw, config)?;
    write_report(&config.output, &report.render()).await?;
    Ok(())
}

/// Sections appear in a fixed order; each one reads the same prepared frame.
pub fn build_report(raw: &DataFrame, config: &ReportConfig) -> Result<Report, ReportError> {
    ensure_columns(raw)?;
    let data = prepare(raw)?;
    let style = config.table_style;

    let mut report = Report::new(REPORT_TITLE);
    report.add_section(dataset_overview(raw)?);
    report.add_section(team_vs_opposition(&data, style)?);
    report.add_section(venue_performance(&data, &config.performance_venue)?);
    report.add_section(top_scorers(&data, config)?);
    report.add_section(win_loss(&data)?);
    report.add_section(boundary_leaders(&data, config.top_boundary_hitters, style)?);
    report.add_section(venue_relationship(&data, &config.relationship_venue)?);
    report.add_section(centuries_by_team(&data, config.century_threshold)?);

    info!("Built {} report sections", report.sections().len());
    Ok(report)
}

fn dataset_overview(raw: &DataFrame) -> Result<ReportSection, ReportError> {
    let mut section = ReportSection::new("Dataset Overview");
    section.add_content(html! {
        p { (raw.height()) " centuries, " (raw.width()) " columns." }
    });
    section.add_table(&DataTable::from_frame(raw)?, TableStyle::Plain);
    Ok(section)
}

fn team_vs_opposition(data: &DataFrame, style: TableStyle) -> Result<ReportSection, ReportError> {
    let view = views::team_vs_opposition(data)?;
    debug!("Team x Opposition: {} combinations", view.height());

    let mut section =
        ReportSection::new("Comparison of Centuries Scored by Teams against Different Oppositions");
    section.add_table(&DataTable::from_frame(&view)?, style);
    Ok(section)
}

fn venue_performance(data: &DataFrame, venue: &str) -> Result<ReportSection, ReportError> {
    let view = views::venue_performance(data, venue)?;
    debug!("{} teams scored centuries at {}", view.height(), venue);

    let mut section = ReportSection::new(&format!("Team Performance in {venue}"));
    section.add_plot(plots::plot_venue_performance(
        text_column(&view, TEAM)?,
        count_column(&view, CENTURIES)?,
        venue,
    ));
    Ok(section)
}

fn top_scorers(data: &DataFrame, config: &ReportConfig) -> Result<ReportSection, ReportError> {
    let view = views::top_scorers(data, config.century_threshold, config.top_scorers)?;
    debug!("Top scorers: {:?}", text_column(&view, PLAYER)?);

    let mut section = ReportSection::new(&format!(
        "Top {} Players with the Highest Number of Centuries",
        config.top_scorers
    ));
    section.add_plot(plots::plot_top_scorers(
        text_column(&view, PLAYER)?,
        count_column(&view, CENTURIES)?,
    ));
    Ok(section)
}

fn win_loss(data: &DataFrame) -> Result<ReportSection, ReportError> {
    let summary = views::win_loss(data)?;
    debug!("Centuries in wins: {}, in losses: {}", summary.won, summary.lost);

    let mut section = ReportSection::new("Impact of Centuries on Match Results");
    section.add_plot(plots::plot_win_loss(&summary));
    Ok(section)
}

fn boundary_leaders(
    data: &DataFrame,
    n: usize,
    style: TableStyle,
) -> Result<ReportSection, ReportError> {
    let (fours, sixes) = views::boundary_leaders(data, n)?;

    let mut section = ReportSection::new("Players with Most 4s and 6s in Their Centuries");
    section.add_content(html! { h3 { "Players with the Most " (FOURS) } });
    section.add_table(&DataTable::from_frame(&fours)?, style);
    section.add_content(html! { h3 { "Players with the Most " (SIXES) } });
    section.add_table(&DataTable::from_frame(&sixes)?, style);
    Ok(section)
}

fn venue_relationship(data: &DataFrame, venue: &str) -> Result<ReportSection, ReportError> {
    let view = views::venue_relationship(data, venue)?;
    debug!("{} players batted at {}", view.height(), venue);

    let mut section = ReportSection::new(&format!(
        "Relationship between Batting Average and Strike Rate in {venue}"
    ));
    section.add_plot(plots::plot_runs_vs_strike_rate(
        text_column(&view, PLAYER)?,
        float_column(&view, RUNS)?,
        float_column(&view, STRIKE_RATE)?,
        venue,
    ));
    Ok(section)
}

fn centuries_by_team(data: &DataFrame, threshold: i64) -> Result<ReportSection, ReportError> {
    let view = views::centuries_by_team(data, threshold)?;
    debug!("Centuries recorded for {} teams", view.height());

    let mut section = ReportSection::new("Centuries Scored by Players from Different Teams");
    section.add_plot(plots::plot_centuries_by_team(
        text_column(&view, TEAM)?,
        count_column(&view, CENTURIES)?,
    ));
    Ok(section)
}
