use qscore::error::Error;
use qscore::fastq::{extract_quality_lines, read_quality_lines};
use std::io::Write;

const TWO_RECORDS: [&str; 8] = [
    "@read1", "ACGT", "+", "III!", "@read2", "TTGA", "+", "#5?I",
];

#[test]
fn single_record() {
    let lines = ["@read1", "ACGT", "+", "III!"];
    assert_eq!(vec!["III!"], extract_quality_lines(&lines).unwrap());
}

#[test]
fn one_quality_line_per_record_in_order() {
    let quality = extract_quality_lines(&TWO_RECORDS).unwrap();
    assert_eq!(TWO_RECORDS.len() / 4, quality.len());
    assert_eq!(vec!["III!", "#5?I"], quality);
}

#[test]
fn trailing_whitespace_is_stripped() {
    let lines = ["@r", "AC", "+", "II \r\n"];
    assert_eq!(vec!["II"], extract_quality_lines(&lines).unwrap());
}

#[test]
fn other_lines_are_not_inspected() {
    let lines = ["not a header", "", "also not +", "!!"];
    assert_eq!(vec!["!!"], extract_quality_lines(&lines).unwrap());
}

#[test]
fn empty_source_has_no_quality_lines() {
    let lines: [&str; 0] = [];
    assert!(extract_quality_lines(&lines).unwrap().is_empty());
}

#[test]
fn line_count_not_multiple_of_four() {
    for line_count in [1, 2, 3, 5, 6, 7, 9] {
        let lines = vec!["!"; line_count];
        match extract_quality_lines(&lines) {
            Err(Error::StructuralFormat { line_count: found }) => assert_eq!(line_count, found),
            other => panic!("expected a structural error, got {:?}", other),
        }
    }
}

#[test]
fn reads_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}\n", TWO_RECORDS.join("\n")).unwrap();
    file.flush().unwrap();

    assert_eq!(vec!["III!", "#5?I"], read_quality_lines(file.path()).unwrap());
}

#[test]
fn malformed_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "@r\nACGT\n+\nIIII\n@r2\n").unwrap();
    file.flush().unwrap();

    assert!(matches!(
        read_quality_lines(file.path()),
        Err(Error::StructuralFormat { line_count: 5 })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_quality_lines(&dir.path().join("absent.fastq")),
        Err(Error::Io(_))
    ));
}
