use super::kinds::{CodeFence, Heading, ListItem, RowKind, TableRow};
use super::types::HeadingLevel;

/// Classification of a single trimmed line, from local facts only.
///
/// Phase 1 of translation: the line is looked at in isolation. Fence
/// openers are reported but not consumed; that needs the following lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    Blank,
    Heading { level: HeadingLevel, text: &'a str },
    Bullet(&'a str),
    Numbered(&'a str),
    FenceOpen,
    TableRow(Vec<String>),
    TableSeparator,
    /// Fallback for anything else, with inline bold still to be split out.
    Paragraph(&'a str),
}

/// Classifies individual lines. First matching rule wins.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Heading { level, text };
        }
        if let Some(text) = ListItem::bullet(trimmed) {
            return LineClass::Bullet(text);
        }
        if let Some(text) = ListItem::numbered(trimmed) {
            return LineClass::Numbered(text);
        }
        if CodeFence::is_fence(trimmed) {
            return LineClass::FenceOpen;
        }
        if TableRow::is_candidate(trimmed) {
            return match TableRow::split(trimmed) {
                RowKind::Cells(cells) => LineClass::TableRow(cells),
                RowKind::Separator => LineClass::TableSeparator,
            };
        }
        LineClass::Paragraph(trimmed)
    }
}
