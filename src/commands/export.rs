use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use feeding_plan::model::DatasetExport;

use crate::cli::ExportArgs;
use crate::commands::load_dataset;
use crate::util::{now_utc_string, write_json_pretty};

const EXPORT_MANIFEST_VERSION: u32 = 1;

pub fn run(args: ExportArgs) -> Result<()> {
    let loaded = load_dataset(&args.source)?;
    let dataset = &loaded.dataset;

    let export = DatasetExport {
        manifest_version: EXPORT_MANIFEST_VERSION,
        generated_at: now_utc_string(),
        source: loaded.source.clone(),
        source_sha256: loaded.source_sha256.clone(),
        month_count: dataset.months().len(),
        feeding_months: dataset.months(),
        quick_rules: dataset.rules(),
        diagnostics: args.with_diagnostics.then(|| dataset.diagnostics()),
    };

    match &args.output {
        Some(path) => {
            write_json_pretty(path, &export)?;
            info!(path = %path.display(), months = export.month_count, "wrote feeding plan export");
        }
        None => {
            let mut output = io::BufWriter::new(io::stdout().lock());
            serde_json::to_writer_pretty(&mut output, &export)
                .context("failed to serialize feeding plan export")?;
            writeln!(output)?;
            output.flush()?;
        }
    }

    Ok(())
}
