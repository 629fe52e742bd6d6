//! # Rendering
//!
//! Maps translated [`Block`]s onto a [`DocumentSink`], the rich-document
//! builder that owns the actual output format.
//!
//! The renderer only ever writes to the sink. It keeps no state between
//! blocks, so each block is handed over and dropped straight away.

use crate::parsing::{
    blocks::{Block, HeadingLevel},
    inline::Span,
};

/// Paragraph styles for list items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
    Bullet,
    Numbered,
}

/// Font override for a run. Runs without one inherit the paragraph style.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub name: String,
    pub size_pt: f32,
}

/// A run of text inside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub font: Option<Font>,
    /// Start a new line before this run (soft break, same paragraph).
    pub break_before: bool,
}

impl From<Span> for TextRun {
    fn from(span: Span) -> Self {
        Self {
            text: span.text,
            bold: span.bold,
            font: None,
            break_before: false,
        }
    }
}

/// Left indentation in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indent(pub f32);

impl Indent {
    pub const TWIPS_PER_INCH: f32 = 1440.0;

    pub fn twips(self) -> i32 {
        (self.0 * Self::TWIPS_PER_INCH).round() as i32
    }
}

/// The document-building collaborator.
///
/// Calls arrive in block order. Implementations only need to append.
pub trait DocumentSink {
    fn add_heading(&mut self, level: HeadingLevel, text: &str);
    fn add_list_item(&mut self, style: ListStyle, text: &str);
    fn add_paragraph(&mut self, runs: &[TextRun], indent: Option<Indent>);
    fn add_blank_paragraph(&mut self);
    /// Appends a table skeleton of `rows` x `cols` with `header` in row 0.
    fn add_table(&mut self, rows: usize, cols: usize, header: &[String]);
}

/// How code blocks are set.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeStyle {
    pub font: Font,
    pub indent: Indent,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            font: Font {
                name: "Courier New".to_string(),
                size_pt: 9.0,
            },
            indent: Indent(0.5),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    pub code: CodeStyle,
}

/// Renders every block into `sink`, in order. Returns the number of blocks seen.
pub fn render<I, S>(blocks: I, sink: &mut S, options: &RenderOptions) -> usize
where
    I: IntoIterator<Item = Block>,
    S: DocumentSink + ?Sized,
{
    let mut count = 0;
    for block in blocks {
        log::trace!("Rendering {} block", block.kind_name());
        render_block(block, sink, options);
        count += 1;
    }
    count
}

fn render_block<S: DocumentSink + ?Sized>(block: Block, sink: &mut S, options: &RenderOptions) {
    match block {
        Block::Heading { level, text } => sink.add_heading(level, &text),
        Block::BulletItem { text } => sink.add_list_item(ListStyle::Bullet, &text),
        Block::NumberedItem { text } => sink.add_list_item(ListStyle::Numbered, &text),
        Block::CodeBlock { lines } => {
            // An empty fence leaves no trace in the document.
            if lines.is_empty() {
                return;
            }
            let runs = code_runs(lines, &options.code);
            sink.add_paragraph(&runs, Some(options.code.indent));
        }
        Block::TableRow { cells } => sink.add_table(1, cells.len(), &cells),
        Block::Paragraph { spans } => {
            let runs: Vec<TextRun> = spans.into_iter().map(TextRun::from).collect();
            sink.add_paragraph(&runs, None);
        }
        Block::BlankLine => sink.add_blank_paragraph(),
    }
}

fn code_runs(lines: Vec<String>, style: &CodeStyle) -> Vec<TextRun> {
    lines
        .into_iter()
        .enumerate()
        .map(|(idx, text)| TextRun {
            text,
            bold: false,
            font: Some(style.font.clone()),
            break_before: idx > 0,
        })
        .collect()
}
