use std::sync::OnceLock;

use regex::Regex;

use super::{kinds::Strong, types::Span};

/// Splits a paragraph line into plain and bold [`Span`]s.
///
/// The line is cut around every non-greedy `**...**` match, keeping empty
/// pieces, so the output always has `2 * matches + 1` entries. Each piece
/// that starts and ends with `**` becomes bold with the delimiters dropped.
/// That includes leftovers between matches such as `**` or `***`, which
/// come out as empty bold spans.
pub fn parse_inline(s: &str) -> Vec<Span> {
    static STRONG_REGEX: OnceLock<Regex> = OnceLock::new();
    let strong =
        STRONG_REGEX.get_or_init(|| Regex::new(Strong::PATTERN).expect("Invalid strong regex"));

    let mut out = vec![];
    let mut text_start = 0;

    for m in strong.find_iter(s) {
        out.push(segment(&s[text_start..m.start()]));
        out.push(segment(m.as_str()));
        text_start = m.end();
    }

    out.push(segment(&s[text_start..]));
    out
}

fn segment(text: &str) -> Span {
    if Strong::is_wrapped(text) {
        Span::bold(Strong::inner(text))
    } else {
        Span::plain(text)
    }
}
