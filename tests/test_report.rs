use calamine::{open_workbook, Data, Reader, Xlsx};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use libtabcompare::command;
use libtabcompare::error::TabCompareError;
use libtabcompare::opts::CompareOpts;
use libtabcompare::test;

fn text(s: &str) -> Data {
    Data::String(s.to_string())
}

/// Raw xml of one part of the saved workbook, quotes unescaped.
fn read_xlsx_part(path: &Path, name: &str) -> Result<String, TabCompareError> {
    let mut archive = zip::ZipArchive::new(File::open(path)?)
        .map_err(|err| TabCompareError::basic_str(err.to_string()))?;
    let mut part = archive
        .by_name(name)
        .map_err(|err| TabCompareError::basic_str(format!("{name}: {err}")))?;
    let mut xml = String::new();
    part.read_to_string(&mut xml)?;
    Ok(xml.replace("&quot;", "\""))
}

#[test]
fn test_report_players() -> Result<(), TabCompareError> {
    test::run_empty_dir_test(|dir| {
        let (before, after) = test::write_players_csv_pair(dir)?;
        let opts =
            CompareOpts::new(before, after, "player_id").with_output_dir(dir.join("reports"));
        let report = command::compare(&opts)?;

        let mut workbook: Xlsx<_> = open_workbook(&report.output_path)?;
        assert_eq!(
            workbook.sheet_names(),
            vec!["SUMMARY", "DETAILED_MISMATCHES", "MISSING_KEYS"]
        );

        let summary = workbook.worksheet_range("SUMMARY")?;
        let rows: Vec<&[Data]> = summary.rows().collect();
        assert_eq!(
            rows[0].to_vec(),
            vec![
                text("key"),
                text("total_columns"),
                text("matched_columns"),
                text("mismatched_columns"),
                text("match_percentage"),
                text("status"),
            ]
        );
        // worst match first, ties keep key order
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1][0], Data::Float(2.0));
        assert_eq!(rows[1][4], Data::Float(25.0));
        assert_eq!(rows[1][5], text("MISMATCH"));
        assert_eq!(rows[2][0], Data::Float(1.0));
        assert_eq!(rows[3][0], Data::Float(3.0));
        assert_eq!(rows[3][5], text("MATCH"));

        let detail = workbook.worksheet_range("DETAILED_MISMATCHES")?;
        let rows: Vec<&[Data]> = detail.rows().collect();
        assert_eq!(
            rows[0].to_vec(),
            vec![
                text("key"),
                text("column_name"),
                text("players_before"),
                text("players_after"),
                text("difference"),
            ]
        );
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[2][1], text("runs"));
        assert_eq!(rows[2][2], Data::Float(80.0));
        assert_eq!(rows[2][3], Data::Float(95.0));
        assert_eq!(rows[2][4], Data::Float(15.0));
        // text columns have no difference
        assert_eq!(rows[3][1], text("team"));
        assert_eq!(rows[3][2], text("blue"));
        assert_eq!(rows[3][4], Data::Empty);

        let missing = workbook.worksheet_range("MISSING_KEYS")?;
        let rows: Vec<&[Data]> = missing.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].to_vec(), vec![Data::Float(4.0), text("players_before_only")]);
        assert_eq!(rows[2].to_vec(), vec![Data::Float(5.0), text("players_after_only")]);
        Ok(())
    })
}

#[test]
fn test_report_identical_files_has_empty_sheets() -> Result<(), TabCompareError> {
    test::run_empty_dir_test(|dir| {
        let (before, _) = test::write_players_csv_pair(dir)?;
        let copy = test::write_txt_file_to_path(dir.join("copy.csv"), test::PLAYERS_BEFORE_CSV)?;
        let opts = CompareOpts::new(before, copy, "player_id").with_output_dir(dir);
        let report = command::compare(&opts)?;

        let mut workbook: Xlsx<_> = open_workbook(&report.output_path)?;
        let detail = workbook.worksheet_range("DETAILED_MISMATCHES")?;
        assert_eq!(detail.rows().count(), 1);
        let missing = workbook.worksheet_range("MISSING_KEYS")?;
        assert_eq!(missing.rows().count(), 1);

        let summary = workbook.worksheet_range("SUMMARY")?;
        let statuses: Vec<Data> = summary.rows().skip(1).map(|row| row[5].clone()).collect();
        assert_eq!(statuses, vec![text("MATCH"); 4]);
        Ok(())
    })
}

#[test]
fn test_report_formatting() -> Result<(), TabCompareError> {
    test::run_empty_dir_test(|dir| {
        let (before, after) = test::write_players_csv_pair(dir)?;
        let opts = CompareOpts::new(before, after, "player_id").with_output_dir(dir);
        let report = command::compare(&opts)?;
        let path = report.output_path.as_path();

        // SUMMARY: frozen header, width 18, one fill rule per status
        let summary = read_xlsx_part(path, "xl/worksheets/sheet1.xml")?;
        assert!(summary.contains("ySplit=\"1\""));
        assert!(summary.contains("state=\"frozen\""));
        assert!(summary.contains("width=\"18.7109375\""));
        assert_eq!(summary.matches("type=\"expression\"").count(), 2);
        assert!(summary.contains("<formula>$F2=\"MATCH\"</formula>"));
        assert!(summary.contains("<formula>$F2=\"MISMATCH\"</formula>"));

        // DETAILED_MISMATCHES and MISSING_KEYS: frozen header, width 25
        for name in ["xl/worksheets/sheet2.xml", "xl/worksheets/sheet3.xml"] {
            let sheet = read_xlsx_part(path, name)?;
            assert!(sheet.contains("ySplit=\"1\""), "{name}");
            assert!(sheet.contains("state=\"frozen\""), "{name}");
            assert!(sheet.contains("width=\"25.7109375\""), "{name}");
            assert!(!sheet.contains("<cfRule"), "{name}");
        }

        // green and red fills, bold bordered centred header
        let styles = read_xlsx_part(path, "xl/styles.xml")?;
        assert!(styles.contains("FFC6EFCE"));
        assert!(styles.contains("FFFFC7CE"));
        assert!(styles.contains("<b/>"));
        assert!(styles.contains("style=\"thin\""));
        assert!(styles.contains("horizontal=\"center\""));
        Ok(())
    })
}
