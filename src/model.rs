use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day_label: String,
    pub slots: Vec<String>,
}

/// One month-of-age feeding plan.
///
/// Every plan in `plans` carries exactly `time_headers.len()` slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRecord {
    pub month: u32,
    pub title: String,
    pub subtitle: String,
    pub time_headers: Vec<String>,
    pub plans: Vec<DayPlan>,
    pub goal: String,
    pub feeding_amount: String,
    pub texture: String,
    pub highlights: Vec<String>,
}

impl MonthRecord {
    pub fn title_for(month: u32) -> String {
        format!("{month}月龄宝宝辅食")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InvalidTitle,
    MissingHeader,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::InvalidTitle => "invalid_title",
            SkipReason::MissingHeader => "missing_header",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseDiagnostics {
    pub preamble_removed: bool,
    pub page_markers_removed: usize,
    pub blocks_seen: usize,
    pub months_parsed: usize,
    pub blocks_skipped_invalid_title: usize,
    pub blocks_skipped_missing_header: usize,
    pub day_rows_parsed: usize,
    pub day_rows_skipped: usize,
    pub patched_slots: usize,
}

impl ParseDiagnostics {
    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::InvalidTitle => self.blocks_skipped_invalid_title += 1,
            SkipReason::MissingHeader => self.blocks_skipped_missing_header += 1,
        }
    }

    pub fn blocks_skipped(&self) -> usize {
        self.blocks_skipped_invalid_title + self.blocks_skipped_missing_header
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetExport<'a> {
    pub manifest_version: u32,
    pub generated_at: String,
    pub source: String,
    pub source_sha256: String,
    pub month_count: usize,
    pub feeding_months: &'a [MonthRecord],
    pub quick_rules: &'a [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<&'a ParseDiagnostics>,
}
