use std::collections::HashSet;

use regex::Regex;

use feeding_plan::MonthRecord;

use super::month_label;

#[derive(Debug, Default)]
pub struct StructuralInvariantSummary {
    pub unordered_month_count: usize,
    pub duplicate_month_count: usize,
    pub misaligned_plan_count: usize,
    pub malformed_day_label_count: usize,
    pub duplicate_day_label_count: usize,
    pub empty_time_header_count: usize,
    pub details: Vec<String>,
}

impl StructuralInvariantSummary {
    /// Repeated day labels are reported but do not fail validation.
    pub fn violation_count(&self) -> usize {
        self.unordered_month_count
            + self.duplicate_month_count
            + self.misaligned_plan_count
            + self.malformed_day_label_count
            + self.empty_time_header_count
    }
}

pub fn collect_structural_invariants(
    months: &[MonthRecord],
    day_label: &Regex,
) -> StructuralInvariantSummary {
    let mut summary = StructuralInvariantSummary::default();

    for pair in months.windows(2) {
        let (previous, current) = (&pair[0], &pair[1]);
        if previous.month == current.month {
            summary.duplicate_month_count += 1;
            summary
                .details
                .push(format!("{} appears more than once", month_label(current)));
        } else if previous.month > current.month {
            summary.unordered_month_count += 1;
            summary.details.push(format!(
                "{} follows month {}",
                month_label(current),
                previous.month
            ));
        }
    }

    for record in months {
        if record.time_headers.is_empty() {
            summary.empty_time_header_count += 1;
            summary
                .details
                .push(format!("{} has no time slots", month_label(record)));
        }

        let mut seen_labels = HashSet::<&str>::new();
        for plan in &record.plans {
            if plan.slots.len() != record.time_headers.len() {
                summary.misaligned_plan_count += 1;
                summary.details.push(format!(
                    "{} day {} has {} slots for {} time slots",
                    month_label(record),
                    plan.day_label,
                    plan.slots.len(),
                    record.time_headers.len()
                ));
            }

            if !day_label.is_match(&plan.day_label) {
                summary.malformed_day_label_count += 1;
                summary.details.push(format!(
                    "{} has malformed day label '{}'",
                    month_label(record),
                    plan.day_label
                ));
            }

            if !seen_labels.insert(plan.day_label.as_str()) {
                summary.duplicate_day_label_count += 1;
                summary.details.push(format!(
                    "{} repeats day {}",
                    month_label(record),
                    plan.day_label
                ));
            }
        }
    }

    summary
}
