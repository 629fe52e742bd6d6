/// Strong (bold) inline type with owned delimiter.
///
/// Only the double-asterisk form is recognised, and a run never crosses a
/// line boundary. `__bold__` and single `*` emphasis stay plain text.
pub struct Strong;

impl Strong {
    pub const DELIMITER: &'static str = "**";

    /// Non-greedy match for a delimited run, delimiters included.
    pub const PATTERN: &'static str = r"\*\*.*?\*\*";

    /// True when a segment both starts and ends with the delimiter. The two
    /// may overlap, so `**` and `***` count as wrapped.
    pub fn is_wrapped(segment: &str) -> bool {
        segment.starts_with(Self::DELIMITER) && segment.ends_with(Self::DELIMITER)
    }

    /// Drops one delimiter from each end. Segments too short to hold both
    /// delimiters give an empty string.
    pub fn inner(segment: &str) -> &str {
        let width = Self::DELIMITER.len();
        segment
            .get(width..segment.len().saturating_sub(width))
            .unwrap_or("")
    }
}
