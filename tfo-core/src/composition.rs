//! Sequence composition vectors for the nearest-neighbour model.
//!
//! The enthalpy model reads dinucleotide steps while the free-energy model
//! reads single nucleotides plus the CC step and a constant bias. Each has
//! its own counting function and fixed-shape vector. All counts are
//! overlapping occurrences.

use crate::sequence::TfoSequence;

/// Dinucleotide composition `[CC, UC + CU, UU]` used for DH.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnthalpyComposition {
    pub cc: usize,
    /// UC and CU steps pooled together
    pub mixed: usize,
    pub uu: usize,
}

impl EnthalpyComposition {
    #[must_use]
    pub fn as_vector(&self) -> [f64; 3] {
        [self.cc as f64, self.mixed as f64, self.uu as f64]
    }
}

/// Composition `[C, U, CC, 1]` used for DG; the last entry is the bias term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FreeEnergyComposition {
    pub c: usize,
    pub u: usize,
    pub cc: usize,
}

impl FreeEnergyComposition {
    #[must_use]
    pub fn as_vector(&self) -> [f64; 4] {
        [self.c as f64, self.u as f64, self.cc as f64, 1.0]
    }
}

/// Counts the dinucleotide steps feeding the enthalpy model.
#[must_use]
pub fn count_for_enthalpy(sequence: &TfoSequence) -> EnthalpyComposition {
    EnthalpyComposition {
        cc: sequence.occurrences("CC"),
        mixed: sequence.occurrences("UC") + sequence.occurrences("CU"),
        uu: sequence.occurrences("UU"),
    }
}

/// Counts the nucleotides and CC steps feeding the free-energy model.
#[must_use]
pub fn count_for_free_energy(sequence: &TfoSequence) -> FreeEnergyComposition {
    FreeEnergyComposition {
        c: sequence.occurrences("C"),
        u: sequence.occurrences("U"),
        cc: sequence.occurrences("CC"),
    }
}
