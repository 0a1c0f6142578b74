mod common;

use insta::assert_snapshot;

use crate::common::{fixture, run_tfo};

// The canonical sample is the primary regression fixture
#[test]
fn sample_text_report_snapshot() {
    let text = run_tfo(&["--sample"]);
    assert_snapshot!("sample_text_report", text);
}

#[test]
fn fasta_tsv_snapshot() {
    let input = fixture("oligos.fasta");
    let text = run_tfo(&[
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
    ]);
    assert_snapshot!("oligos_tsv", text);
}
