use crate::composition::FreeEnergyComposition;
use crate::constants::{PH_CORRECTION, PH_NEUTRAL_POINT};
use crate::types::Conditions;

/// Applies the cytosine-protonation correction to a raw DG.
///
/// `DG = DG_raw + C * (pH - 5.6) * (a + b * CC)`, with `C` and `CC` taken
/// from the free-energy composition. Sequences without cytosine are left
/// untouched.
#[must_use]
pub fn correct_dg(
    dg_raw: f64,
    composition: &FreeEnergyComposition,
    conditions: &Conditions,
) -> f64 {
    let [a, b] = PH_CORRECTION;
    let c = composition.c as f64;
    let cc = composition.cc as f64;

    dg_raw + c * (conditions.ph() - PH_NEUTRAL_POINT) * (a + b * cc)
}
