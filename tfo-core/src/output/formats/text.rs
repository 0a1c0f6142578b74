use std::io::Write;

use crate::{results::TfoResults, types::TfoError};

/// Write results as the human-readable report
pub fn write_text_format<W: Write>(
    writer: &mut W,
    results: &[TfoResults],
) -> Result<(), TfoError> {
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "Record: {}", result.record.header)?;

        let prediction = match &result.prediction {
            Ok(prediction) => prediction.formatted(),
            Err(e) => {
                writeln!(writer, "Error: {e}")?;
                continue;
            }
        };

        writeln!(writer, "Estimated thermodynamic properties")?;
        writeln!(writer, "Sequence: {}", result.record.sequence)?;
        writeln!(writer, "pH: {}", result.conditions.ph())?;
        writeln!(writer, "TFO conc.: {} uM", result.conditions.tfo_conc())?;
        writeln!(writer, "Duplex conc.: {} uM", result.conditions.dup_conc())?;
        writeln!(writer, "DG: {} kcal/mol", prediction.dg)?;
        writeln!(writer, "DH: {} kcal/mol", prediction.dh)?;
        writeln!(writer, "Tm: {} C", prediction.tm)?;
        writeln!(writer, "C50: {} uM", prediction.c50)?;
    }
    Ok(())
}
