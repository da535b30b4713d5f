use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rung of a progressive slab ladder.
///
/// Tax for income inside the slab is `base_tax + (income - lower_bound) * rate`.
/// `upper_bound` is inclusive; `None` marks the open-ended top slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    pub const fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate: Decimal,
        base_tax: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate,
            base_tax,
        }
    }

    pub fn contains(
        &self,
        income: Decimal,
    ) -> bool {
        self.upper_bound.is_none_or(|upper| income <= upper)
    }
}
