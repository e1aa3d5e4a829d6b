use tracing::debug;

use super::{
    FEEDING_AMOUNT_PREFIX, FeedingPlanParser, GOAL_PREFIX, HEADER_PREFIX, HIGHLIGHT_MARKER,
    TEXTURE_PREFIX,
};
use crate::model::{MonthRecord, SkipReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMonth {
    pub record: MonthRecord,
    /// Lines between the header and the goal line that were not day rows.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState {
    InHeader,
    InDayRows,
    InMetadata,
}

#[derive(Debug, Default)]
struct MetadataFields {
    goal: Option<String>,
    feeding_amount: Option<String>,
    texture: Option<String>,
    highlights_started: bool,
    highlights: Vec<String>,
}

impl FeedingPlanParser {
    pub fn parse_block(&self, title_line: &str, body: &str) -> Result<ParsedMonth, SkipReason> {
        let captures = self
            .title
            .captures(title_line.trim())
            .ok_or(SkipReason::InvalidTitle)?;
        let month = captures
            .get(1)
            .and_then(|value| value.as_str().parse::<u32>().ok())
            .ok_or(SkipReason::InvalidTitle)?;
        let subtitle = captures
            .get(2)
            .map(|value| value.as_str().trim().to_string())
            .unwrap_or_default();

        let mut state = BlockState::InHeader;
        let mut time_headers: Option<Vec<String>> = None;
        let mut plans = Vec::new();
        let mut skipped_rows = 0usize;
        let mut metadata = MetadataFields::default();

        for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
            match state {
                BlockState::InHeader => {
                    if let Some(labels) = line.strip_prefix(HEADER_PREFIX) {
                        time_headers = Some(labels.split_whitespace().map(str::to_string).collect());
                        // A goal line seen before the header closes the day-row window.
                        state = if metadata.goal.is_some() {
                            BlockState::InMetadata
                        } else {
                            BlockState::InDayRows
                        };
                    }
                }
                BlockState::InDayRows => {
                    if line.starts_with(GOAL_PREFIX) {
                        state = BlockState::InMetadata;
                    } else {
                        let header_length = time_headers.as_ref().map_or(0, Vec::len);
                        match self.parse_day_row(line, header_length) {
                            Some(plan) => plans.push(plan),
                            None => {
                                debug!(month, line, "skipped non day-row line");
                                skipped_rows += 1;
                            }
                        }
                    }
                }
                BlockState::InMetadata => {}
            }

            self.capture_metadata(line, &mut metadata);
        }

        let time_headers = time_headers.ok_or(SkipReason::MissingHeader)?;

        Ok(ParsedMonth {
            record: MonthRecord {
                month,
                title: MonthRecord::title_for(month),
                subtitle,
                time_headers,
                plans,
                goal: metadata.goal.unwrap_or_default(),
                feeding_amount: metadata.feeding_amount.unwrap_or_default(),
                texture: metadata.texture.unwrap_or_default(),
                highlights: metadata.highlights,
            },
            skipped_rows,
        })
    }

    fn capture_metadata(&self, line: &str, metadata: &mut MetadataFields) {
        capture_first(&mut metadata.goal, line, GOAL_PREFIX);
        capture_first(&mut metadata.feeding_amount, line, FEEDING_AMOUNT_PREFIX);
        capture_first(&mut metadata.texture, line, TEXTURE_PREFIX);

        if metadata.highlights_started {
            if self.highlight_item.is_match(line) {
                metadata.highlights.push(line.to_string());
            }
        } else if line.contains(HIGHLIGHT_MARKER) {
            metadata.highlights_started = true;
        }
    }
}

fn capture_first(slot: &mut Option<String>, line: &str, prefix: &str) {
    if slot.is_none()
        && let Some(value) = line.strip_prefix(prefix)
    {
        *slot = Some(value.to_string());
    }
}
