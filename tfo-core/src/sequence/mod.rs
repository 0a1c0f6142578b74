//! Oligo sequences and substring occurrence counting.
//!
//! A [`TfoSequence`] is the only way a sequence enters the model: it is
//! non-empty and made exclusively of uppercase `C` and `U`. Counting is done
//! with [`count_occurrences`], a forward scan whose step after each match is
//! chosen by [`MatchStep`].

pub mod io;

use std::fmt;

use crate::types::TfoError;

pub use io::{FastaRecord, parse_fasta_str, read_fasta_sequences};

/// How far the scan advances after a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStep {
    /// Advance one position, so matches may share characters
    Overlapping,
    /// Advance past the whole match
    NonOverlapping,
}

/// Counts the occurrences of `needle` in `haystack`.
///
/// An empty needle matches at every boundary and yields
/// `haystack.len() + 1`.
///
/// # Examples
///
/// ```rust
/// use tfo_core::sequence::{count_occurrences, MatchStep};
///
/// assert_eq!(count_occurrences(b"CCC", b"CC", MatchStep::Overlapping), 2);
/// assert_eq!(count_occurrences(b"CCC", b"CC", MatchStep::NonOverlapping), 1);
/// ```
#[must_use]
pub fn count_occurrences(haystack: &[u8], needle: &[u8], step: MatchStep) -> usize {
    if needle.is_empty() {
        return haystack.len() + 1;
    }

    let advance = match step {
        MatchStep::Overlapping => 1,
        MatchStep::NonOverlapping => needle.len(),
    };

    let mut count = 0;
    let mut pos = 0;
    while pos + needle.len() <= haystack.len() {
        if &haystack[pos..pos + needle.len()] == needle {
            count += 1;
            pos += advance;
        } else {
            pos += 1;
        }
    }
    count
}

/// A validated (C,U) oligo sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TfoSequence(Vec<u8>);

impl TfoSequence {
    /// Validates raw bytes as an oligo sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TfoError::InvalidSequence`] if the input is empty or holds
    /// anything other than uppercase `C` and `U`.
    pub fn new(bytes: &[u8]) -> Result<Self, TfoError> {
        if bytes.is_empty() {
            return Err(TfoError::InvalidSequence("sequence is empty".to_string()));
        }
        if let Some(pos) = bytes.iter().position(|b| !matches!(b, b'C' | b'U')) {
            return Err(TfoError::InvalidSequence(format!(
                "sequence should only contain Us or Cs (capital letters); found {:?} at position {}",
                char::from(bytes[pos]),
                pos + 1
            )));
        }
        Ok(Self(bytes.to_vec()))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Overlapping count of `pattern` in this sequence.
    #[must_use]
    pub fn occurrences(&self, pattern: &str) -> usize {
        count_occurrences(&self.0, pattern.as_bytes(), MatchStep::Overlapping)
    }
}

impl std::str::FromStr for TfoSequence {
    type Err = TfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for TfoSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only C and U survive validation
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
