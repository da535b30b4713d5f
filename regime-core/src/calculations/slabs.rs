//! Progressive slab ladders for both regimes.
//!
//! | Legacy taxable income | Tax |
//! |---|---|
//! | up to 2,50,000 | 0 |
//! | up to 5,00,000 | 5% of the excess over 2,50,000 |
//! | up to 10,00,000 | 12,500 + 20% of the excess over 5,00,000 |
//! | above 10,00,000 | 1,12,500 + 30% of the excess over 10,00,000 |
//!
//! | Simplified taxable income | Tax |
//! |---|---|
//! | up to 3,00,000 | 0 |
//! | up to 6,00,000 | 5% of the excess over 3,00,000 |
//! | up to 9,00,000 | 15,000 + 10% of the excess over 6,00,000 |
//! | up to 12,00,000 | 45,000 + 15% of the excess over 9,00,000 |
//! | up to 15,00,000 | 90,000 + 20% of the excess over 12,00,000 |
//! | above 15,00,000 | 1,50,000 + 30% of the excess over 15,00,000 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::TaxSlab;
use crate::calculations::saturating;

pub const LEGACY_SLABS: [TaxSlab; 4] = [
    TaxSlab::new(dec!(0), Some(dec!(250000)), dec!(0), dec!(0)),
    TaxSlab::new(dec!(250000), Some(dec!(500000)), dec!(0.05), dec!(0)),
    TaxSlab::new(dec!(500000), Some(dec!(1000000)), dec!(0.20), dec!(12500)),
    TaxSlab::new(dec!(1000000), None, dec!(0.30), dec!(112500)),
];

pub const SIMPLIFIED_SLABS: [TaxSlab; 6] = [
    TaxSlab::new(dec!(0), Some(dec!(300000)), dec!(0), dec!(0)),
    TaxSlab::new(dec!(300000), Some(dec!(600000)), dec!(0.05), dec!(0)),
    TaxSlab::new(dec!(600000), Some(dec!(900000)), dec!(0.10), dec!(15000)),
    TaxSlab::new(dec!(900000), Some(dec!(1200000)), dec!(0.15), dec!(45000)),
    TaxSlab::new(dec!(1200000), Some(dec!(1500000)), dec!(0.20), dec!(90000)),
    TaxSlab::new(dec!(1500000), None, dec!(0.30), dec!(150000)),
];

/// An ordered slab ladder.
///
/// Slabs must be sorted by `upper_bound` ascending with the open-ended slab
/// last. Income is matched against the first slab whose inclusive upper
/// bound it does not exceed, so anything at or below the first bound
/// (negative income included) lands in the first slab.
#[derive(Debug, Clone, Copy)]
pub struct SlabSchedule<'a> {
    slabs: &'a [TaxSlab],
}

impl<'a> SlabSchedule<'a> {
    pub fn new(slabs: &'a [TaxSlab]) -> Self {
        Self { slabs }
    }

    pub fn legacy() -> SlabSchedule<'static> {
        SlabSchedule::new(&LEGACY_SLABS)
    }

    pub fn simplified() -> SlabSchedule<'static> {
        SlabSchedule::new(&SIMPLIFIED_SLABS)
    }

    pub fn slabs(&self) -> &'a [TaxSlab] {
        self.slabs
    }

    /// Tax owed on `income` before cess.
    ///
    /// An empty schedule taxes nothing; income above a closed top slab is
    /// taxed at that slab's rate.
    pub fn tax_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        let Some(slab) = self
            .slabs
            .iter()
            .find(|slab| slab.contains(income))
            .or_else(|| self.slabs.last())
        else {
            return Decimal::ZERO;
        };

        if slab.rate.is_zero() {
            return slab.base_tax;
        }

        let excess = saturating::sub(income, slab.lower_bound);
        saturating::add(slab.base_tax, saturating::mul(excess, slab.rate))
    }
}
