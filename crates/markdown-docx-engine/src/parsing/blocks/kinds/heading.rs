use crate::parsing::blocks::types::HeadingLevel;

/// ATX-style `#` headings.
///
/// No space is required after the marker run: `#title` is a heading too.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';

    /// Returns the level and title text if `trimmed` opens with `#`.
    pub fn parse(trimmed: &str) -> Option<(HeadingLevel, &str)> {
        let rest = trimmed.trim_start_matches(Self::MARKER);
        let count = trimmed.len() - rest.len();
        if count == 0 {
            return None;
        }
        Some((HeadingLevel::from_marker_count(count), rest.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("## Section", 2, "Section")]
    #[case("### Sub", 3, "Sub")]
    #[case("#### Deep", 4, "Deep")]
    #[case("###### Deeper", 4, "Deeper")]
    #[case("#NoSpace", 1, "NoSpace")]
    #[case("#", 1, "")]
    #[case("##   padded   ", 2, "padded")]
    fn parses_levels_and_text(#[case] line: &str, #[case] level: u8, #[case] text: &str) {
        let (got_level, got_text) = Heading::parse(line).unwrap();
        assert_eq!(got_level.get(), level);
        assert_eq!(got_text, text);
    }

    #[test]
    fn not_a_heading() {
        assert!(Heading::parse("Title #1").is_none());
    }
}
