use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use log::info;
use polars::prelude::*;

use crate::error::ReportError;
use crate::records::CenturyRecord;

fn open<P: AsRef<Path>>(path: P) -> Result<File, ReportError> {
    let path = path.as_ref();
    File::open(path).map_err(|source| ReportError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })
}

/// Column names from the header row, in file order.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ReportError> {
    let mut reader = ::csv::Reader::from_reader(open(path)?);
    Ok(reader.headers()?.iter().map(|name| name.to_string()).collect())
}

/// The header is checked before polars sees the dtype overrides, so a missing
/// column surfaces by name.
pub async fn read_csv<P: AsRef<Path>>(path: P) -> Result<DataFrame, ReportError> {
    let path = path.as_ref();
    check_columns(&read_header(path)?)?;

    let df = CsvReader::new(open(path)?)
        .has_header(true)
        .with_dtypes(Option::from(Arc::new(CenturyRecord::raw_schema())))
        .finish()?;

    info!("Loaded {:?}: {} rows x {} columns", path, df.height(), df.width());
    Ok(df)
}

fn check_columns<S: AsRef<str>>(present: &[S]) -> Result<(), ReportError> {
    for name in CenturyRecord::required_columns() {
        if !present.iter().any(|column| column.as_ref() == name) {
            return Err(ReportError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}

pub fn ensure_columns(df: &DataFrame) -> Result<(), ReportError> {
    check_columns(&df.get_column_names())
}

pub async fn write_report<P: AsRef<Path>>(path: P, page: &str) -> Result<(), ReportError> {
    let path = path.as_ref();
    tokio::fs::write(path, page)
        .await
        .map_err(|source| ReportError::WriteReport {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Report written to {:?} ({} bytes)", path, page.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_columns_names_the_missing_one() {
        let df = df!(
            "Player" => &["A"],
            "Team" => &["India"],
        )
        .unwrap();
        match ensure_columns(&df) {
            Err(ReportError::MissingColumn(name)) => assert_eq!(name, "Opposition"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn header_check_accepts_extra_columns() {
        let mut header: Vec<String> = CenturyRecord::required_columns()
            .iter()
            .map(|name| name.to_string())
            .collect();
        header.push("Date".to_string());
        assert!(check_columns(&header).is_ok());
    }

    #[tokio::test]
    async fn read_csv_missing_file_errors() {
        let err = read_csv("/nonexistent/centuries.csv").await.unwrap_err();
        assert!(matches!(err, ReportError::OpenDataset { .. }));
    }

    #[tokio::test]
    async fn write_report_into_missing_dir_errors() {
        let err = write_report("/nonexistent/dir/page.html", "<html></html>")
            .await
            .unwrap_err();
        assert!(matches!(err, ReportError::WriteReport { .. }));
    }
}
