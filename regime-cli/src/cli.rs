use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;
use crate::form::IncomeForm;
use crate::report::OutputFormat;

/// Compare income tax under the Old and New Indian tax regimes.
///
/// Amounts accept thousands separators in either grouping
/// (`1,500,000` or `15,00,000`).
#[derive(Debug, Parser)]
#[command(name = "regime-compare", version)]
pub struct Cli {
    /// TOML config file. Defaults to `regime.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Question-log backend.
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// Question-log connection string, e.g. `questions.db` or `:memory:`.
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Log level or filter directive; `RUST_LOG` overrides it.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare both regimes for one taxpayer.
    Compare {
        #[command(flatten)]
        income: IncomeArgs,

        /// Ask the advisor to explain the result.
        #[arg(long)]
        explain: bool,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare every row of a CSV file.
    Batch {
        /// CSV with an `annual_salary` column and optional deduction columns.
        #[arg(long)]
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Ask a tax question in the context of your comparison.
    Ask {
        question: String,

        #[command(flatten)]
        income: IncomeArgs,
    },

    /// Show previously asked questions, newest first.
    History {
        #[arg(long)]
        limit: Option<u32>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct IncomeArgs {
    /// Gross annual salary.
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub salary: String,

    /// Section 80C investments (Old Regime, capped at 1,50,000).
    #[arg(long = "investment-80c", default_value = "0", allow_hyphen_values = true)]
    pub investment_80c: String,

    /// HRA exemption (Old Regime).
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub hra: String,

    /// Standard deduction (Old Regime).
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub standard_deduction: String,

    /// Other deductions (Old Regime).
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub other_deductions: String,
}

impl IncomeArgs {
    pub fn to_form(&self) -> IncomeForm {
        IncomeForm {
            annual_salary: self.salary.clone(),
            section_80c_investment: self.investment_80c.clone(),
            hra_exemption: self.hra.clone(),
            standard_deduction: self.standard_deduction.clone(),
            other_deductions: self.other_deductions.clone(),
        }
    }
}

impl Cli {
    /// Applies the global flags on top of the file configuration.
    pub fn apply_overrides(
        &self,
        config: &mut AppConfig,
    ) {
        if let Some(backend) = &self.backend {
            config.database.backend = backend.clone();
        }
        if let Some(db) = &self.db {
            config.database.connection_string = db.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if let Some(file) = &self.log_file {
            config.logging.file = Some(file.clone());
        }
    }
}
