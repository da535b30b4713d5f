//! The tax engine: slab ladders, the two regime calculators, and the
//! comparator that derives savings, effective rates and the better regime.
//!
//! Everything here is pure and synchronous.

pub mod comparison;
pub mod regimes;
pub mod saturating;
pub mod slabs;

pub use comparison::{better_regime, compare, compute_tax, effective_rate};
pub use regimes::{CESS_RATE, apply_cess, compute_legacy_regime, compute_simplified_regime};
pub use slabs::{LEGACY_SLABS, SIMPLIFIED_SLABS, SlabSchedule};
