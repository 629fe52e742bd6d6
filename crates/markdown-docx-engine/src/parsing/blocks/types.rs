use crate::parsing::inline::Span;

/// Heading depth as rendered in the output document.
///
/// Markdown allows up to six `#`, but the document only distinguishes four
/// heading styles: anything deeper than `###` collapses into level 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MAX: u8 = 4;

    /// Builds a level from the number of leading `#` characters.
    pub fn from_marker_count(count: usize) -> Self {
        Self(count.clamp(1, Self::MAX as usize) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// A classified unit of output, produced per line or per fenced region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    BulletItem { text: String },
    NumberedItem { text: String },
    /// Verbatim lines between a pair of fences (fence lines excluded).
    CodeBlock { lines: Vec<String> },
    /// A single table row. Only the row on the triggering line is
    /// materialised; consecutive rows are never merged into one table.
    TableRow { cells: Vec<String> },
    Paragraph { spans: Vec<Span> },
    BlankLine,
}

impl Block {
    /// Short label used in render trace logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::BulletItem { .. } => "bullet",
            Block::NumberedItem { .. } => "numbered",
            Block::CodeBlock { .. } => "code",
            Block::TableRow { .. } => "table",
            Block::Paragraph { .. } => "paragraph",
            Block::BlankLine => "blank",
        }
    }
}
