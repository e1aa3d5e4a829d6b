use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::model::{MonthRecord, ParseDiagnostics};

mod block;
mod day_row;
mod normalize;
mod patch;
mod segment;

pub use block::ParsedMonth;
pub use normalize::NormalizedText;
pub use patch::{PATCH_MONTH, PATCH_TIME_SLOT, patch, patch_counted, patch_meal_for};
pub use segment::RawBlock;

const HEADER_PREFIX: &str = "月份 ";
const GOAL_PREFIX: &str = "目标：";
const FEEDING_AMOUNT_PREFIX: &str = "喂养量：";
const TEXTURE_PREFIX: &str = "辅食性状：";
const HIGHLIGHT_MARKER: &str = "喂养重点";

/// Compiled patterns for the feeding plan document format.
#[derive(Debug)]
pub struct FeedingPlanParser {
    preamble: Regex,
    page_marker: Regex,
    title_line: Regex,
    title: Regex,
    day_row: Regex,
    highlight_item: Regex,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub months: Vec<MonthRecord>,
    pub diagnostics: ParseDiagnostics,
}

impl FeedingPlanParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            preamble: Regex::new(r"^以下是.*?\n+").context("failed to compile preamble regex")?,
            page_marker: Regex::new(r"(?m)^=====\s*Page\s*[0-9]+\s*=====\s*\n?")
                .context("failed to compile page marker regex")?,
            title_line: Regex::new(r"^[0-9]{1,2}月龄宝宝辅食：")
                .context("failed to compile title line regex")?,
            title: Regex::new(r"^([0-9]{1,2})月龄宝宝辅食：(.+)$")
                .context("failed to compile month title regex")?,
            day_row: Regex::new(r"^([0-9]{1,2}\+[0-9]{1,2})\s+(.+)$")
                .context("failed to compile day row regex")?,
            highlight_item: Regex::new(r"^[0-9]+、")
                .context("failed to compile highlight item regex")?,
        })
    }

    /// Runs the whole pipeline: normalize, segment, parse every block, sort by
    /// month, then apply the month 7 patch.
    pub fn parse_document(&self, raw: &str) -> ParseOutcome {
        let normalized = self.normalize_counted(raw);
        let mut diagnostics = ParseDiagnostics {
            preamble_removed: normalized.preamble_removed,
            page_markers_removed: normalized.page_markers_removed,
            ..ParseDiagnostics::default()
        };

        let mut months = Vec::new();
        for block in self.segment(&normalized.text) {
            diagnostics.blocks_seen += 1;
            match self.parse_block(block.title_line, block.body) {
                Ok(parsed) => {
                    diagnostics.day_rows_parsed += parsed.record.plans.len();
                    diagnostics.day_rows_skipped += parsed.skipped_rows;
                    months.push(parsed.record);
                }
                Err(reason) => {
                    debug!(
                        title = block.title_line,
                        reason = reason.as_str(),
                        "skipped month block"
                    );
                    diagnostics.record_skip(reason);
                }
            }
        }

        months.sort_by_key(|record| record.month);
        let (months, patched_slots) = patch_counted(months);
        diagnostics.months_parsed = months.len();
        diagnostics.patched_slots = patched_slots;

        ParseOutcome {
            months,
            diagnostics,
        }
    }
}
