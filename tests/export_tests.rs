use fwlogger::export::{ExportFormat, export_events, write_csv, write_json};
use fwlogger::models::event_type::EventType;
use std::fs;

mod common;
use common::{created, make_event, temp_out};

fn sample_events() -> Vec<fwlogger::models::file_event::FileEvent> {
    vec![
        created("report.txt", "2025-01-02 09:00:00"),
        make_event(
            "b.txt",
            "2025-01-01 09:00:00",
            ".txt",
            "/home/user/new",
            EventType::Moved,
            "/home/user/old/a.txt",
            Some("/home/user/new/b.txt"),
        ),
    ]
}

#[test]
fn test_csv_header_and_row_count() {
    let out = temp_out("export_csv", "csv");
    write_csv(&out, &sample_events()).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "file_name,event_time,ext,dir,event_type,src_path,dest_path"
    );
    assert!(lines[1].starts_with("report.txt,2025-01-02 09:00:00,.txt"));
    // empty dest column for non-move events
    assert!(lines[1].ends_with(","));
    assert!(lines[2].contains("moved"));
    assert!(lines[2].ends_with("/home/user/new/b.txt"));
}

#[test]
fn test_csv_of_empty_log_is_header_only() {
    let out = temp_out("export_csv_empty", "csv");
    write_csv(&out, &[]).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[test]
fn test_json_roundtrips_fields() {
    let out = temp_out("export_json", "json");
    write_json(&out, &sample_events()).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["file_name"], "report.txt");
    assert_eq!(rows[0]["event_type"], "Created");
    assert_eq!(rows[0]["dest_path"], serde_json::Value::Null);
    assert_eq!(rows[1]["dest_path"], "/home/user/new/b.txt");
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let out = temp_out("export_force", "csv");
    fs::write(&out, "existing").unwrap();

    let err = export_events(&ExportFormat::Csv, &out, &sample_events(), false);
    assert!(err.is_err());
    assert_eq!(fs::read_to_string(&out).unwrap(), "existing");

    export_events(&ExportFormat::Csv, &out, &sample_events(), true).unwrap();
    assert!(fs::read_to_string(&out).unwrap().starts_with("file_name"));
}
