//! Single-page HTML report: sections of text, tables and inline plotly charts.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;
use polars::prelude::{DataFrame, DataType, PolarsResult};

use crate::config::TableStyle;

const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

const PAGE_CSS: &str = r#"
body { background-color: #121212; color: #e0e0e0; font-family: Arial, sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem 2rem; }
h1 { color: #f0a500; font-size: 3rem; font-weight: bold; text-align: center; }
h2 { color: #ff6347; font-size: 2rem; font-weight: bold; }
h3 { color: #e0e0e0; }
section { margin-bottom: 3rem; }
.scroll { max-height: 420px; overflow: auto; border-radius: 10px; border: 1px solid #333; }
table.frame { border-collapse: collapse; width: 100%; background-color: #1e1e1e; color: #e0e0e0; }
table.frame th, table.frame td { border: 1px solid #333; padding: 6px 10px; text-align: left; }
table.frame th { position: sticky; top: 0; background-color: #333; }
.plot { border: 2px solid #333; border-radius: 10px; background-color: #fff; margin: auto; max-width: 90%; }
"#;

const STYLED_TABLE: &str = "width:100%; border-collapse: collapse; text-align: center; font-family: Arial, sans-serif;";
const STYLED_HEADER: &str = "border: 1px solid #ddd; padding: 10px; background-color: #333; color: #fff;";
const STYLED_CELL: &str = "border: 1px solid #ddd; padding: 8px; background-color: #f5f5f5; color: #333;";

/// Column names plus row-major cell text.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn from_frame(df: &DataFrame) -> PolarsResult<Self> {
        let columns = df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();

        let mut rows = vec![Vec::with_capacity(df.width()); df.height()];
        for series in df.get_columns() {
            let text = series.cast(&DataType::Utf8)?;
            for (row, val) in rows.iter_mut().zip(text.utf8()?) {
                row.push(val.unwrap_or_default().to_string());
            }
        }
        Ok(Self { columns, rows })
    }

    pub fn render(&self, style: TableStyle) -> Markup {
        match style {
            TableStyle::Styled => html! {
                table style=(STYLED_TABLE) {
                    tr {
                        @for column in &self.columns {
                            th style=(STYLED_HEADER) { (column) }
                        }
                    }
                    @for row in &self.rows {
                        tr {
                            @for cell in row {
                                td style=(STYLED_CELL) { (cell) }
                            }
                        }
                    }
                }
            },
            TableStyle::Plain => html! {
                div.scroll {
                    table.frame {
                        thead {
                            tr {
                                @for column in &self.columns {
                                    th { (column) }
                                }
                            }
                        }
                        tbody {
                            @for row in &self.rows {
                                tr {
                                    @for cell in row {
                                        td { (cell) }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}

pub struct ReportSection {
    title: String,
    blocks: Vec<Markup>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            blocks: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(content);
    }

    pub fn add_table(&mut self, table: &DataTable, style: TableStyle) {
        self.blocks.push(table.render(style));
    }

    /// Plot div ids must be unique within the page: section titles are
    /// distinct, so title plus block position is enough.
    pub fn add_plot(&mut self, plot: Plot) {
        let id = format!("plot-{}-{}", slug(&self.title), self.blocks.len());
        let inline = plot.to_inline_html(Some(id.as_str()));
        self.blocks.push(html! {
            div.plot { (PreEscaped(inline)) }
        });
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn render(&self) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for block in &self.blocks {
                    (block)
                }
            }
        }
    }
}

pub struct Report {
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> String {
        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.title) }
                    script src=(PLOTLY_JS) {}
                    style { (PreEscaped(PAGE_CSS)) }
                }
                body {
                    h1 { (self.title) }
                    @for section in &self.sections {
                        (section.render())
                    }
                }
            }
        };
        page.into_string()
    }
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn table() -> DataTable {
        DataTable {
            columns: vec!["Player".to_string(), "4s".to_string()],
            rows: vec![
                vec!["A <b>".to_string(), "18".to_string()],
                vec!["B".to_string(), "17".to_string()],
            ],
        }
    }

    #[test]
    fn table_from_frame_stringifies_cells() {
        let df = df!(
            "Player" => &["A", "B"],
            "Runs" => &[100i64, 120],
            "S/R" => &[95.5, 110.0],
        )
        .unwrap();
        let table = DataTable::from_frame(&df).unwrap();
        assert_eq!(table.columns, vec!["Player", "Runs", "S/R"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][0], "A");
        assert_eq!(table.rows[1][1], "120");
        assert_eq!(table.rows[0][2], "95.5");
    }

    #[test]
    fn styled_tables_carry_inline_styles() {
        let html = table().render(TableStyle::Styled).into_string();
        assert!(html.contains(STYLED_HEADER));
        assert!(html.contains(STYLED_CELL));
        assert!(!html.contains("class=\"frame\""));
    }

    #[test]
    fn plain_tables_use_the_stylesheet() {
        let html = table().render(TableStyle::Plain).into_string();
        assert!(html.contains("class=\"frame\""));
        assert!(!html.contains(STYLED_CELL));
    }

    #[test]
    fn cells_are_escaped() {
        let html = table().render(TableStyle::Plain).into_string();
        assert!(html.contains("A &lt;b&gt;"));
    }

    #[test]
    fn sections_render_in_insertion_order() {
        let mut report = Report::new("Centuries");
        report.add_section(ReportSection::new("First"));
        report.add_section(ReportSection::new("Second"));
        let page = report.render();
        let first = page.find("<h2>First</h2>").unwrap();
        let second = page.find("<h2>Second</h2>").unwrap();
        assert!(first < second);
        assert!(page.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn plots_get_distinct_div_ids() {
        let mut section = ReportSection::new("Runs vs S/R");
        section.add_plot(Plot::new());
        section.add_plot(Plot::new());
        let page = section.render().into_string();
        assert!(page.contains("plot-runs-vs-s-r-0"));
        assert!(page.contains("plot-runs-vs-s-r-1"));
    }
}
