use super::FeedingPlanParser;
use crate::model::DayPlan;

impl FeedingPlanParser {
    /// Parses a `M+D cell cell ...` row and aligns its cells to
    /// `header_length` columns.
    ///
    /// Cells are whitespace separated without quoting, so a short row is
    /// padded with empty cells and a long row has its overflow joined into the
    /// last column. Multi-word text in any other column will misalign.
    pub fn parse_day_row(&self, line: &str, header_length: usize) -> Option<DayPlan> {
        let captures = self.day_row.captures(line)?;
        let day_label = captures.get(1)?.as_str().to_string();
        let rest = captures.get(2)?.as_str();

        let tokens = rest.split_whitespace().collect::<Vec<&str>>();

        Some(DayPlan {
            day_label,
            slots: reconcile_slots(&tokens, header_length),
        })
    }
}

fn reconcile_slots(tokens: &[&str], header_length: usize) -> Vec<String> {
    let header_length = header_length.max(1);

    if tokens.len() <= header_length {
        let mut slots = tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<String>>();
        slots.resize(header_length, String::new());
        return slots;
    }

    let keep = header_length - 1;
    let mut slots = tokens[..keep]
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<String>>();
    slots.push(tokens[keep..].join(" "));
    slots
}
