use std::fmt;

use serde::{Deserialize, Serialize};

/// The two taxation schemes being compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Deduction-based scheme (80C, HRA, standard deduction, ...).
    Legacy,
    /// Flat-bracket scheme that taxes gross salary.
    Simplified,
}

impl Regime {
    pub fn all() -> &'static [Regime] {
        &[Regime::Legacy, Regime::Simplified]
    }

    /// Short label used in tables and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Legacy => "Old",
            Self::Simplified => "New",
        }
    }

    pub fn long_label(&self) -> &'static str {
        match self {
            Self::Legacy => "Old Regime",
            Self::Simplified => "New Regime",
        }
    }

    pub fn other(&self) -> Regime {
        match self {
            Self::Legacy => Self::Simplified,
            Self::Simplified => Self::Legacy,
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.long_label())
    }
}
