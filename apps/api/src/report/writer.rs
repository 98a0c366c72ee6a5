//! CSV export of the batch report.
//!
//! The output is meant to open cleanly in spreadsheets; multi-line Result
//! cells rely on the writer's standard quoting.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::report::ReportRow;

/// Writes the report rows to a CSV file at `path`.
pub fn write_report_csv(path: &Path, rows: &[ReportRow]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_report(file, rows)?;
    info!("Report with {} rows written to {}", rows.len(), path.display());
    Ok(())
}

/// Writes report rows to any sink; tests capture a `Vec<u8>`.
pub fn write_report<W: Write>(sink: W, rows: &[ReportRow]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(sink);
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ReportRow> {
        vec![ReportRow {
            user_id: 1,
            user_name: "Alice".to_string(),
            job_role: "Data Analyst".to_string(),
            result: "Missing Skills (with Priority):\n- sql (Required Proficiency: 3, Priority: High Priority)".to_string(),
        }]
    }

    #[test]
    fn test_header_row_matches_contract() {
        let mut buf = Vec::new();
        write_report(&mut buf, &rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("User ID,User Name,Job Role,Result"));
    }

    #[test]
    fn test_multiline_result_is_quoted() {
        let mut buf = Vec::new();
        write_report(&mut buf, &rows()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"Missing Skills (with Priority):\n"));
    }

    #[test]
    fn test_roundtrips_through_csv_reader() {
        let mut buf = Vec::new();
        write_report(&mut buf, &rows()).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let records: Vec<csv::StringRecord> =
            reader.records().collect::<Result<_, _>>().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "1");
        assert_eq!(&records[0][1], "Alice");
        assert!(records[0][3].contains("High Priority"));
    }
}
