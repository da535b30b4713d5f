use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use regime_core::{TaxComparison, TaxInputs, compute_tax};

use crate::csv_loader;
use crate::report::{ComparisonReport, OutputFormat, render_json, render_text};

/// Compares every row of the CSV at `path`.
pub fn run(
    path: &Path,
    format: OutputFormat,
) -> Result<String> {
    let rows = csv_loader::load_from_file(path)
        .with_context(|| format!("failed to load batch file '{}'", path.display()))?;
    info!(rows = rows.len(), file = %path.display(), "running batch comparison");
    render(&rows, format)
}

pub fn render(
    rows: &[TaxInputs],
    format: OutputFormat,
) -> Result<String> {
    let comparisons: Vec<TaxComparison> = rows.iter().map(compute_tax).collect();

    let output = match format {
        OutputFormat::Json => {
            let reports: Vec<ComparisonReport<'_>> = rows
                .iter()
                .zip(&comparisons)
                .map(|(inputs, comparison)| ComparisonReport::new(inputs, comparison, None))
                .collect();
            render_json(&reports)?
        }
        OutputFormat::Text => rows
            .iter()
            .zip(&comparisons)
            .enumerate()
            .map(|(idx, (inputs, comparison))| {
                format!("Row {}\n{}", idx + 1, render_text(inputs, comparison))
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
    };
    Ok(output)
}
