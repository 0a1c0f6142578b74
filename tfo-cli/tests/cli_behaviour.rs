mod common;

use std::fs;
use tempfile::NamedTempFile;

use crate::common::{fixture, run_tfo, tfo_command};

#[test]
fn single_sequence_json() {
    let out = run_tfo(&[
        "-s",
        "CUUCUCUCUUUUCCU",
        "--ph",
        "7.2",
        "--tfo-conc",
        "5",
        "--dup-conc",
        "10",
        "-f",
        "json",
    ]);
    assert!(
        out.contains(r#""prediction":{"DH":"-88.3","DG":"-7.3","Tm":"22.5","C50":"11.762"}"#),
        "unexpected output: {out}"
    );
    assert_eq!(out.lines().count(), 1);
}

#[test]
fn sample_conditions_can_be_overridden() {
    let out = run_tfo(&["--sample", "--ph", "5.6", "-f", "tsv"]);
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("TFO_Seq_1\tCUUCUCUCUUUUCCU\t5.6\t5\t10\t-88.3\t"));
}

#[test]
fn ph_bounds_are_inclusive() {
    for ph in ["4.5", "8"] {
        tfo_command(&[
            "-s",
            "CCU",
            "--ph",
            ph,
            "--tfo-conc",
            "5",
            "--dup-conc",
            "10",
        ])
        .assert()
        .success();
    }
}

#[test]
fn ph_out_of_range_fails() {
    for ph in ["4.49", "8.01"] {
        let output = tfo_command(&[
            "-s",
            "CCU",
            "--ph",
            ph,
            "--tfo-conc",
            "5",
            "--dup-conc",
            "10",
        ])
        .assert()
        .failure()
        .get_output()
        .clone();
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(stderr.contains("pH out of range"), "stderr: {stderr}");
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn non_numeric_concentration_fails() {
    tfo_command(&["-s", "CCU", "--ph", "7", "--tfo-conc", "abc", "--dup-conc", "10"])
        .assert()
        .failure();
}

#[test]
fn invalid_sequence_reports_error_and_fails() {
    let output = tfo_command(&[
        "-s",
        "cuuc",
        "--ph",
        "7",
        "--tfo-conc",
        "5",
        "--dup-conc",
        "10",
    ])
    .assert()
    .failure()
    .get_output()
    .clone();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Error: Invalid sequence"), "stdout: {stdout}");
}

#[test]
fn batch_with_invalid_record_keeps_other_results() {
    let input = fixture("with_invalid.fasta");
    let output = tfo_command(&[
        "-i",
        &input,
        "--ph",
        "7.2",
        "--tfo-conc",
        "5",
        "--dup-conc",
        "10",
        "-f",
        "tsv",
    ])
    .assert()
    .failure()
    .get_output()
    .clone();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("good\t"));
    assert!(lines[1].ends_with("\t11.762\tNA"));
    assert!(lines[2].starts_with("dna\tCTTCTCTC\t"));
    assert!(lines[2].contains("Invalid sequence"));
    assert!(lines[3].starts_with("also_good\t"));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("1 of 3 records could not be predicted"));
}

#[test]
fn writes_to_output_file() {
    let out_tmp = NamedTempFile::new().unwrap();
    let out_path = out_tmp.path().to_str().unwrap();

    let stdout = run_tfo(&["--sample", "-f", "json", "-o", out_path, "-t", "2"]);
    assert!(stdout.is_empty());

    let written = fs::read_to_string(out_tmp.path()).unwrap();
    assert_eq!(written.lines().count(), 1);
    assert!(written.starts_with(r#"{"id":"TFO_Seq_1","sequence":"CUUCUCUCUUUUCCU""#));
}

#[test]
fn missing_input_file_fails() {
    tfo_command(&[
        "-i",
        "tests/data/does_not_exist.fasta",
        "--ph",
        "7",
        "--tfo-conc",
        "5",
        "--dup-conc",
        "10",
    ])
    .assert()
    .failure();
}

#[test]
fn source_is_required() {
    tfo_command(&["--ph", "7"]).assert().failure();
}

#[test]
fn unknown_format_fails() {
    tfo_command(&["--sample", "-f", "gff"]).assert().failure();
}
