use std::io::Write;

use crate::{results::TfoResults, types::TfoError};

const HEADER: &str = "id\tsequence\tpH\ttfo_conc\tdup_conc\tDH\tDG\tTm\tC50\terror";
const MISSING: &str = "NA";

/// Write results as a tab-separated table
pub fn write_tsv_format<W: Write>(
    writer: &mut W,
    results: &[TfoResults],
) -> Result<(), TfoError> {
    writeln!(writer, "{HEADER}")?;
    for result in results {
        write!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t",
            result.record.header,
            result.record.sequence,
            result.conditions.ph(),
            result.conditions.tfo_conc(),
            result.conditions.dup_conc()
        )?;
        match &result.prediction {
            Ok(prediction) => {
                let p = prediction.formatted();
                writeln!(writer, "{}\t{}\t{}\t{}\t{MISSING}", p.dh, p.dg, p.tm, p.c50)?;
            }
            Err(e) => {
                writeln!(writer, "{MISSING}\t{MISSING}\t{MISSING}\t{MISSING}\t{e}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        results::RecordInfo,
        types::{Conditions, PredictionResult},
    };

    #[test]
    fn test_write_tsv_format_rows() {
        let conditions = Conditions::new(6.5, 2.0, 4.0).unwrap();
        let results = vec![
            TfoResults {
                record: RecordInfo {
                    header: "a".to_string(),
                    description: None,
                    sequence: "CCUU".to_string(),
                },
                conditions,
                prediction: Ok(PredictionResult {
                    dh: -28.1,
                    dg: -2.5,
                    tm: -40.2,
                    c50: 2.017,
                }),
            },
            TfoResults {
                record: RecordInfo {
                    header: "b".to_string(),
                    description: None,
                    sequence: "".to_string(),
                },
                conditions,
                prediction: Err(TfoError::InvalidSequence("sequence is empty".to_string())),
            },
        ];

        let mut buffer = Vec::new();
        write_tsv_format(&mut buffer, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert_eq!(lines[1], "a\tCCUU\t6.5\t2\t4\t-28.1\t-2.5\t-40.2\t2.017\tNA");
        assert_eq!(
            lines[2],
            "b\t\t6.5\t2\t4\tNA\tNA\tNA\tNA\tInvalid sequence: sequence is empty"
        );
    }

    #[test]
    fn test_write_tsv_format_header_only() {
        let mut buffer = Vec::new();
        write_tsv_format(&mut buffer, &[]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{HEADER}\n"));
    }
}
