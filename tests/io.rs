use qscore::io::{emit, rows, write_console_lines, write_csv_rows, Destination, OutputRow};
use std::fs;

#[test]
fn console_lines() {
    let mut buffer = Vec::new();
    write_console_lines(&[1.5, 2.25], &mut buffer).unwrap();
    assert_eq!("0: 1.5\n1: 2.25\n", String::from_utf8(buffer).unwrap());
}

#[test]
fn csv_rows() {
    let mut buffer = Vec::new();
    write_csv_rows(&[1.5, 2.25], &mut buffer).unwrap();
    assert_eq!("0,1.5\n1,2.25\n", String::from_utf8(buffer).unwrap());
}

#[test]
fn whole_scores_keep_decimal_point() {
    let mut buffer = Vec::new();
    write_csv_rows(&[0.0, 40.0], &mut buffer).unwrap();
    assert_eq!("0,0.0\n1,40.0\n", String::from_utf8(buffer).unwrap());
}

#[test]
fn rows_in_position_order() {
    let collected = rows(&[3.0, 1.0]).collect::<Vec<OutputRow>>();
    assert_eq!(
        vec![
            OutputRow {
                position: 0,
                score: 3.0
            },
            OutputRow {
                position: 1,
                score: 1.0
            }
        ],
        collected
    );
}

#[test]
fn emit_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.csv");

    emit(&[1.5, 2.25], &Destination::File(path.clone())).unwrap();
    assert_eq!("0,1.5\n1,2.25\n", fs::read_to_string(path).unwrap());
}

#[test]
fn emit_to_unwritable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("scores.csv");

    assert!(emit(&[1.5], &Destination::File(path)).is_err());
}
