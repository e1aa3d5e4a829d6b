use anyhow::Result;
use tracing::{info, warn};

use crate::cli::SummaryArgs;
use crate::commands::load_dataset;

pub fn run(args: SummaryArgs) -> Result<()> {
    let loaded = load_dataset(&args.source)?;
    let dataset = &loaded.dataset;

    info!(source = %loaded.source, sha256 = %loaded.source_sha256, "summary requested");

    for record in dataset.months() {
        info!(
            month = record.month,
            subtitle = %record.subtitle,
            time_slots = %record.time_headers.join(" "),
            plans = record.plans.len(),
            highlights = record.highlights.len(),
            has_goal = !record.goal.is_empty(),
            "month plan"
        );
    }

    let diagnostics = dataset.diagnostics();
    info!(
        preamble_removed = diagnostics.preamble_removed,
        page_markers_removed = diagnostics.page_markers_removed,
        blocks_seen = diagnostics.blocks_seen,
        months_parsed = diagnostics.months_parsed,
        day_rows_parsed = diagnostics.day_rows_parsed,
        day_rows_skipped = diagnostics.day_rows_skipped,
        patched_slots = diagnostics.patched_slots,
        "parse diagnostics"
    );

    if diagnostics.blocks_skipped() > 0 {
        warn!(
            invalid_title = diagnostics.blocks_skipped_invalid_title,
            missing_header = diagnostics.blocks_skipped_missing_header,
            "month blocks skipped"
        );
    }
    if dataset.months().is_empty() {
        warn!("document produced no month plans");
    }

    Ok(())
}
