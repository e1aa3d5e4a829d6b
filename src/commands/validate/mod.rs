use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::{info, warn};

use feeding_plan::MonthRecord;

use crate::cli::ValidateArgs;
use crate::commands::load_dataset;

mod structural_invariants;

use self::structural_invariants::*;

pub fn run(args: ValidateArgs) -> Result<()> {
    let loaded = load_dataset(&args.source)?;
    let months = loaded.dataset.months();

    let day_label = Regex::new(r"^[0-9]{1,2}\+[0-9]{1,2}$")
        .context("failed to compile day label regex")?;
    let summary = collect_structural_invariants(months, &day_label);

    info!(
        source = %loaded.source,
        months = months.len(),
        unordered_months = summary.unordered_month_count,
        duplicate_months = summary.duplicate_month_count,
        misaligned_plans = summary.misaligned_plan_count,
        malformed_day_labels = summary.malformed_day_label_count,
        duplicate_day_labels = summary.duplicate_day_label_count,
        empty_time_headers = summary.empty_time_header_count,
        "structural invariants checked"
    );

    for detail in &summary.details {
        warn!(detail = %detail, "structural finding");
    }

    if summary.violation_count() > 0 {
        bail!(
            "feeding plan failed validation with {} violation(s)",
            summary.violation_count()
        );
    }

    if months.is_empty() {
        warn!("document produced no month plans");
    }

    info!("feeding plan validation passed");
    Ok(())
}

fn month_label(record: &MonthRecord) -> String {
    format!("month {}", record.month)
}
