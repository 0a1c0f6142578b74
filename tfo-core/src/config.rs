use std::str::FromStr;

use crate::types::TfoError;

/// Output format options for prediction results.
///
/// # Formats
///
/// - **Text**: Human-readable report, one block per record
/// - **Json**: One JSON object per record per line
/// - **Tsv**: Tab-separated table with a header row
///
/// # Examples
///
/// ```rust
/// use tfo_core::config::{OutputFormat, TfoConfig};
///
/// let config = TfoConfig {
///     output_format: "tsv".parse()?,
///     ..Default::default()
/// };
/// assert_eq!(config.output_format, OutputFormat::Tsv);
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Report with sequence, conditions, and DG/DH/Tm/C50 with units.
    #[default]
    Text,

    /// JSON lines; predictions use the `{DH, DG, Tm, C50}` string object.
    Json,

    /// Tab-separated values, `NA` for records that failed.
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = TfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "tsv" => Ok(Self::Tsv),
            other => Err(TfoError::ParseError(format!(
                "Invalid output format: {other} (expected text, json or tsv)"
            ))),
        }
    }
}

/// Configuration settings for a TFO analysis run.
///
/// # Examples
///
/// ```rust
/// use tfo_core::config::TfoConfig;
///
/// let config = TfoConfig {
///     num_threads: Some(4),
///     quiet: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct TfoConfig {
    /// Format used when writing results.
    ///
    /// **Default**: [`OutputFormat::Text`]
    pub output_format: OutputFormat,

    /// Number of threads for batch analysis.
    ///
    /// When set, configures the global Rayon thread pool. Set to `None` for
    /// automatic detection.
    ///
    /// **Default**: `None` (use all available cores)
    pub num_threads: Option<usize>,

    /// Suppress informational logging.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}
