use std::sync::OnceLock;

use regex::Regex;

/// Flat bullet and ordinal list items. Nesting is not tracked.
pub struct ListItem;

impl ListItem {
    pub const BULLET_MARKERS: [&'static str; 2] = ["- ", "* "];

    /// Text after a `- ` or `* ` marker, trimmed.
    pub fn bullet(trimmed: &str) -> Option<&str> {
        Self::BULLET_MARKERS
            .iter()
            .find_map(|marker| trimmed.strip_prefix(marker))
            .map(str::trim)
    }

    /// Text after a `<digits>.` marker and any whitespace following it.
    ///
    /// The number itself is discarded; the document renumbers items.
    pub fn numbered(trimmed: &str) -> Option<&str> {
        static ORDINAL_REGEX: OnceLock<Regex> = OnceLock::new();
        let ordinal =
            ORDINAL_REGEX.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("Invalid ordinal regex"));

        ordinal.find(trimmed).map(|m| &trimmed[m.end()..])
    }
}
