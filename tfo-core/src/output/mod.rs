//! Output formatting for prediction results.
//!
//! ## Supported Formats
//!
//! - **Text**: the report shown by the calculator page, one block per record
//! - **JSON**: one object per line, predictions as `{DH, DG, Tm, C50}` strings
//! - **TSV**: tabular, one row per record
//!
//! ## Examples
//!
//! ```rust
//! use tfo_core::{TfoAnalyzer, config::{OutputFormat, TfoConfig}, types::Conditions};
//! use tfo_core::output::write_results;
//!
//! let analyzer = TfoAnalyzer::new(TfoConfig::default());
//! let conditions = Conditions::new(7.2, 5.0, 10.0)?;
//! let results = vec![analyzer.analyze_sequence("CUUCUCUCUUUUCCU", conditions, None)];
//!
//! let mut buffer = Vec::new();
//! write_results(&mut buffer, &results, OutputFormat::Json)?;
//! assert!(String::from_utf8_lossy(&buffer).contains(r#""DG":"-7.3""#));
//! # Ok::<(), tfo_core::types::TfoError>(())
//! ```

use std::io::Write;

use crate::{config::OutputFormat, results::TfoResults, types::TfoError};

mod formats {
    pub mod json;
    pub mod text;
    pub mod tsv;
}

use formats::{json::write_json_format, text::write_text_format, tsv::write_tsv_format};

/// Writes prediction results in the specified format.
///
/// # Errors
///
/// Returns [`TfoError`] if writing or JSON encoding fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &[TfoResults],
    format: OutputFormat,
) -> Result<(), TfoError> {
    match format {
        OutputFormat::Text => write_text_format(writer, results),
        OutputFormat::Json => write_json_format(writer, results),
        OutputFormat::Tsv => write_tsv_format(writer, results),
    }
}
