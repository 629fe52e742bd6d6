/// Backtick code fences.
///
/// Only the opening three backticks matter: anything after them (an info
/// string like `rust`) is ignored, and a closing fence is any line whose
/// trimmed form starts with three backticks.
pub struct CodeFence;

/// Lines captured between an opening fence and its closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedRegion {
    /// Captured lines, verbatim apart from a trailing `\r`.
    pub lines: Vec<String>,
    /// Number of input lines consumed, including the closing fence if found.
    pub consumed: usize,
}

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }

    /// Scans `rest` (the lines following an opening fence) up to the closing
    /// fence. An unclosed fence captures everything to the end of input.
    pub fn scan(rest: &[&str]) -> FencedRegion {
        let close = rest.iter().position(|line| Self::is_fence(line.trim()));
        let body = &rest[..close.unwrap_or(rest.len())];

        FencedRegion {
            lines: body
                .iter()
                .map(|line| line.trim_end_matches('\r').to_string())
                .collect(),
            consumed: close.map_or(rest.len(), |idx| idx + 1),
        }
    }
}
