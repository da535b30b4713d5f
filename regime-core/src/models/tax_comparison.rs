use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Regime, RegimeResult};

/// Side-by-side result of both regimes for one set of inputs.
///
/// Built by [`crate::calculations::compare`]; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub legacy: RegimeResult,
    pub simplified: RegimeResult,

    /// Absolute difference between the two liabilities.
    pub savings: Decimal,

    /// Regime with the strictly lower liability; legacy on a tie.
    pub better_regime: Regime,

    /// Legacy tax as a percentage of gross salary.
    pub legacy_effective_rate: Decimal,

    /// Simplified tax as a percentage of gross salary.
    pub simplified_effective_rate: Decimal,
}

impl TaxComparison {
    pub fn result(
        &self,
        regime: Regime,
    ) -> &RegimeResult {
        match regime {
            Regime::Legacy => &self.legacy,
            Regime::Simplified => &self.simplified,
        }
    }

    pub fn effective_rate(
        &self,
        regime: Regime,
    ) -> Decimal {
        match regime {
            Regime::Legacy => self.legacy_effective_rate,
            Regime::Simplified => self.simplified_effective_rate,
        }
    }

    pub fn better(&self) -> &RegimeResult {
        self.result(self.better_regime)
    }
}
