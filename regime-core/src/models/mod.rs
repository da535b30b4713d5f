mod question;
mod regime;
mod regime_result;
mod tax_comparison;
mod tax_inputs;
mod tax_slab;

pub use question::{NewQuestionLogEntry, QuestionLogEntry};
pub use regime::Regime;
pub use regime_result::RegimeResult;
pub use tax_comparison::TaxComparison;
pub use tax_inputs::{InputError, SECTION_80C_CAP, TaxInputs};
pub use tax_slab::TaxSlab;
