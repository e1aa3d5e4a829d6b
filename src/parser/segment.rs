use super::FeedingPlanParser;

/// A month block as found in the text: the title line and everything up to
/// the next title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawBlock<'a> {
    pub title_line: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Clone, Copy)]
enum SegmentState<'a> {
    SeekingTitle,
    InBlock { title_line: &'a str, body_start: usize },
}

impl FeedingPlanParser {
    pub fn segment<'a>(&self, text: &'a str) -> Vec<RawBlock<'a>> {
        let mut blocks = Vec::new();
        let mut state = SegmentState::SeekingTitle;
        let mut offset = 0usize;

        for raw_line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += raw_line.len();

            let line = raw_line.strip_suffix('\n').unwrap_or(raw_line);
            if !self.title_line.is_match(line) {
                continue;
            }

            if let SegmentState::InBlock {
                title_line,
                body_start,
            } = state
            {
                blocks.push(RawBlock {
                    title_line,
                    body: text[body_start..line_start].trim(),
                });
            }

            state = SegmentState::InBlock {
                title_line: line.trim(),
                body_start: offset,
            };
        }

        if let SegmentState::InBlock {
            title_line,
            body_start,
        } = state
        {
            blocks.push(RawBlock {
                title_line,
                body: text[body_start..].trim(),
            });
        }

        blocks
    }
}
