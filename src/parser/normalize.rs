use super::FeedingPlanParser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub text: String,
    pub preamble_removed: bool,
    pub page_markers_removed: usize,
}

impl FeedingPlanParser {
    /// Strips carriage returns, the leading `以下是...` sentence and
    /// `===== Page N =====` lines, then trims whitespace and byte order marks
    /// from both ends of the document.
    pub fn normalize(&self, raw: &str) -> String {
        self.normalize_counted(raw).text
    }

    pub fn normalize_counted(&self, raw: &str) -> NormalizedText {
        let unified = raw.replace('\r', "");

        let preamble_removed = self.preamble.is_match(&unified);
        let without_preamble = self.preamble.replacen(&unified, 1, "");

        let page_markers_removed = self.page_marker.find_iter(&without_preamble).count();
        let without_markers = self.page_marker.replace_all(&without_preamble, "");

        NormalizedText {
            text: without_markers
                .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
                .to_string(),
            preamble_removed,
            page_markers_removed,
        }
    }
}
