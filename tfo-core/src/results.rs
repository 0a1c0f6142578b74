use crate::types::{Conditions, PredictionResult, TfoError};

/// Prediction outcome for one record of an analysis.
///
/// A record whose sequence fails validation, or whose derived quantities are
/// undefined, keeps its error here; the remaining records of a batch are
/// unaffected.
///
/// # Examples
///
/// ```rust
/// use tfo_core::{TfoAnalyzer, config::TfoConfig, types::Conditions};
///
/// let analyzer = TfoAnalyzer::new(TfoConfig::default());
/// let conditions = Conditions::new(7.2, 5.0, 10.0)?;
/// let results = analyzer.analyze_sequence("CUUCUCUCUUUUCCU", conditions, None);
///
/// let prediction = results.prediction.as_ref().expect("valid sample");
/// println!("{}: DG = {} kcal/mol", results.record.header, prediction.dg);
/// # Ok::<(), tfo_core::types::TfoError>(())
/// ```
#[derive(Debug)]
pub struct TfoResults {
    /// Identity of the analyzed record.
    pub record: RecordInfo,

    /// Conditions shared by the analysis.
    pub conditions: Conditions,

    /// Rounded prediction, or the reason none could be made.
    pub prediction: Result<PredictionResult, TfoError>,
}

impl TfoResults {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.prediction.is_ok()
    }
}

/// Information about an analyzed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordInfo {
    /// Sequence identifier from the FASTA header.
    pub header: String,

    /// Everything after the first word in the FASTA header line.
    pub description: Option<String>,

    /// The sequence exactly as supplied, valid or not.
    pub sequence: String,
}
