use anyhow::Result;
use tracing::info;

use crate::model::{MonthRecord, ParseDiagnostics};
use crate::parser::FeedingPlanParser;
use crate::rules::quick_rules;

/// Feeding plan document bundled with the crate.
pub const EMBEDDED_DOCUMENT: &str = include_str!("../data/feeding_plan.txt");

/// The parsed monthly plans and the quick rules, built once at startup and
/// handed to consumers by reference.
#[derive(Debug, Clone)]
pub struct FeedingDataset {
    months: Vec<MonthRecord>,
    rules: &'static [&'static str],
    diagnostics: ParseDiagnostics,
}

impl FeedingDataset {
    pub fn build(raw: &str) -> Result<Self> {
        let parser = FeedingPlanParser::new()?;
        let outcome = parser.parse_document(raw);

        info!(
            months = outcome.months.len(),
            blocks_seen = outcome.diagnostics.blocks_seen,
            blocks_skipped = outcome.diagnostics.blocks_skipped(),
            day_rows = outcome.diagnostics.day_rows_parsed,
            patched_slots = outcome.diagnostics.patched_slots,
            "feeding dataset built"
        );

        Ok(Self {
            months: outcome.months,
            rules: quick_rules(),
            diagnostics: outcome.diagnostics,
        })
    }

    pub fn embedded() -> Result<Self> {
        Self::build(EMBEDDED_DOCUMENT)
    }

    pub fn months(&self) -> &[MonthRecord] {
        &self.months
    }

    pub fn month(&self, month: u32) -> Option<&MonthRecord> {
        self.months.iter().find(|record| record.month == month)
    }

    pub fn rules(&self) -> &'static [&'static str] {
        self.rules
    }

    pub fn diagnostics(&self) -> &ParseDiagnostics {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_document_builds_every_month() {
        let dataset = FeedingDataset::embedded().expect("embedded dataset builds");

        let months = dataset
            .months()
            .iter()
            .map(|record| record.month)
            .collect::<Vec<u32>>();
        assert_eq!(months, vec![6, 7, 8, 9]);
        assert_eq!(dataset.rules().len(), 5);

        let diagnostics = dataset.diagnostics();
        assert!(diagnostics.preamble_removed);
        assert_eq!(diagnostics.page_markers_removed, 3);
        assert_eq!(diagnostics.blocks_skipped(), 0);
        assert_eq!(diagnostics.day_rows_parsed, 22);
        assert_eq!(diagnostics.day_rows_skipped, 0);
        assert_eq!(diagnostics.patched_slots, 9);
    }

    #[test]
    fn embedded_month_seven_gains_evening_slot() {
        let dataset = FeedingDataset::embedded().expect("embedded dataset builds");
        let record = dataset.month(7).expect("month 7 present");

        assert_eq!(record.time_headers.last().map(String::as_str), Some("17:30"));
        let day = record
            .plans
            .iter()
            .find(|plan| plan.day_label == "7+18")
            .expect("7+18 present");
        assert_eq!(day.slots.len(), 6);
        assert_eq!(day.slots[5], "米粉+蔬菜泥");
    }

    #[test]
    fn embedded_rows_are_padded_and_merged() {
        let dataset = FeedingDataset::embedded().expect("embedded dataset builds");

        let six = dataset.month(6).expect("month 6 present");
        assert_eq!(six.plans[5].day_label, "6+6");
        assert_eq!(six.plans[5].slots[4], "");
        assert_eq!(six.highlights.len(), 3);
        assert_eq!(six.texture, "稀糊状，可流动");

        let eight = dataset.month(8).expect("month 8 present");
        assert_eq!(eight.plans[1].slots[5], "母乳/配方奶 可加 少量 温水");
        assert_eq!(eight.plans[3].slots[3..], ["", "", ""]);
    }

    #[test]
    fn build_without_blocks_is_empty_not_error() {
        let dataset = FeedingDataset::build("以下是说明\n\n暂无计划").expect("dataset builds");

        assert!(dataset.months().is_empty());
        assert!(dataset.month(7).is_none());
    }
}
