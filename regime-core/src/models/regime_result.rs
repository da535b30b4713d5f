use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Outcome of running one regime's calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeResult {
    pub regime: Regime,

    /// Income the slabs were applied to. Negative when deductions exceed
    /// salary; the calculators do not floor it.
    pub taxable_income: Decimal,

    /// Final liability, cess included.
    pub tax_payable: Decimal,
}

impl RegimeResult {
    /// Salary left after paying this regime's tax.
    pub fn take_home(
        &self,
        salary: Decimal,
    ) -> Decimal {
        crate::calculations::saturating::sub(salary, self.tax_payable)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn take_home_subtracts_tax_from_salary() {
        let result = RegimeResult {
            regime: Regime::Legacy,
            taxable_income: dec!(550000),
            tax_payable: dec!(23400.00),
        };

        assert_eq!(result.take_home(dec!(800000)), dec!(776600.00));
    }
}
