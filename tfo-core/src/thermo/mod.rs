//! Thermodynamic model: nearest-neighbour energies, the pH correction of DG,
//! and the quantities derived from them (Tm and C50).

pub mod derived;
pub mod nearest_neighbor;
pub mod ph;

pub use derived::{compute_c50, compute_tm, kelvin_to_celsius};
pub use nearest_neighbor::{predict_dg, predict_dh};
pub use ph::correct_dg;
