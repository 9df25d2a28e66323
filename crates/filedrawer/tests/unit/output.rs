//! Tests for the CSV, JSON and terminal sinks.

use filedrawer::output::{
    format_report, format_row_table, to_json, write_json_file, write_rows_csv_file, ROW_HEADER,
};
use filedrawer::{simulate, AggregateReport, SimulationConfig};

fn small_run() -> filedrawer::Simulation {
    simulate(&SimulationConfig::new().with_trials(40).with_seed(3).with_rows(true)).unwrap()
}

#[test]
fn csv_file_has_one_line_per_trial() {
    let run = small_run();
    let rows = run.rows.unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.csv");

    write_rows_csv_file(&path, &rows).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), rows.len() + 1);
    assert_eq!(lines[0], ROW_HEADER);
    for (line, row) in lines[1..].iter().zip(&rows) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].parse::<usize>().unwrap(), row.index);
        assert_eq!(fields[4].parse::<bool>().unwrap(), row.detected);
    }
}

#[test]
fn json_file_round_trips() {
    let run = small_run();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");

    write_json_file(&path, &run.report).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let parsed: AggregateReport = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, run.report);
}

#[test]
fn json_names_tail() {
    let run = small_run();
    let json = to_json(&run.report).unwrap();
    assert!(json.contains("\"tail\":\"right\""));
}

#[test]
fn terminal_report_sections() {
    let run = small_run();
    let text = format_report(&run.report);
    assert!(text.contains("Detection"));
    assert!(text.contains("Coverage"));

    let table = format_row_table(run.rows.as_deref().unwrap_or(&[]), 0.3, 5);
    assert!(table.contains("35 more rows"));
}
