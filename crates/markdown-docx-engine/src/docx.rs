//! DOCX (Microsoft Word) document writer
//!
//! # Architecture
//!
//! [`DocxSink`] collects body elements as `docx-rs` values while blocks are
//! rendered, then assembles the package (styles, numbering, body) once on
//! [`DocxSink::write_to`] / [`DocxSink::save`].
//!
//! DOCX files are ZIP archives; `docx-rs` owns the XML and the packaging:
//! - `word/document.xml`: paragraphs and tables
//! - `word/styles.xml`: `Heading1`..`Heading4`, `ListBullet`, `ListNumber`
//! - `word/numbering.xml`: bullet and decimal list definitions

use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use docx_rs::{
    AbstractNumbering, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText, NumberFormat,
    Numbering, NumberingId, Paragraph, Run, RunFonts, SpecialIndentType, Start, Style, StyleType,
    Table, TableCell, TableRow,
};

use crate::parsing::blocks::HeadingLevel;
use crate::render::{DocumentSink, Indent, ListStyle, TextRun};

#[derive(Debug, thiserror::Error)]
pub enum DocxError {
    #[error("Failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write document package: {0}")]
    Pack(String),
}

/// Heading sizes in points, indexed by level - 1.
const HEADING_SIZES_PT: [usize; HeadingLevel::MAX as usize] = [18, 16, 14, 12];

const BULLET_STYLE: &str = "ListBullet";
const NUMBER_STYLE: &str = "ListNumber";
const BULLET_NUMBERING: usize = 1;
const DECIMAL_NUMBERING: usize = 2;

/// Usable page width (A4/Letter minus default margins) in twips, split
/// evenly across table columns.
const TABLE_WIDTH_TWIPS: usize = 9000;

enum BodyItem {
    Paragraph(Box<Paragraph>),
    Table(Box<Table>),
}

/// [`DocumentSink`] that produces a Word document.
#[derive(Default)]
pub struct DocxSink {
    body: Vec<BodyItem>,
}

impl DocxSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of body elements (paragraphs and tables) appended so far.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Packs the document into `writer`.
    pub fn write_to<W: Write + Seek>(self, writer: W) -> Result<(), DocxError> {
        self.into_docx()
            .build()
            .pack(writer)
            .map_err(|e| DocxError::Pack(e.to_string()))
    }

    /// Packs the document into a new file at `path`, replacing any existing one.
    pub fn save(self, path: &Path) -> Result<(), DocxError> {
        let file = File::create(path).map_err(|source| DocxError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(file)
    }

    fn into_docx(self) -> Docx {
        let docx = with_numbering(with_styles(Docx::new()));
        self.body.into_iter().fold(docx, |docx, item| match item {
            BodyItem::Paragraph(p) => docx.add_paragraph(*p),
            BodyItem::Table(t) => docx.add_table(*t),
        })
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(BodyItem::Paragraph(Box::new(paragraph)));
    }
}

impl DocumentSink for DocxSink {
    fn add_heading(&mut self, level: HeadingLevel, text: &str) {
        let paragraph = Paragraph::new()
            .style(&heading_style_id(level))
            .add_run(Run::new().add_text(text));
        self.push_paragraph(paragraph);
    }

    fn add_list_item(&mut self, style: ListStyle, text: &str) {
        let (style_id, numbering) = match style {
            ListStyle::Bullet => (BULLET_STYLE, BULLET_NUMBERING),
            ListStyle::Numbered => (NUMBER_STYLE, DECIMAL_NUMBERING),
        };
        let paragraph = Paragraph::new()
            .style(style_id)
            .numbering(NumberingId::new(numbering), IndentLevel::new(0))
            .add_run(Run::new().add_text(text));
        self.push_paragraph(paragraph);
    }

    fn add_paragraph(&mut self, runs: &[TextRun], indent: Option<Indent>) {
        let mut paragraph = runs
            .iter()
            .fold(Paragraph::new(), |p, run| p.add_run(to_run(run)));
        if let Some(indent) = indent {
            paragraph = paragraph.indent(Some(indent.twips()), None, None, None);
        }
        self.push_paragraph(paragraph);
    }

    fn add_blank_paragraph(&mut self) {
        self.push_paragraph(Paragraph::new());
    }

    fn add_table(&mut self, rows: usize, cols: usize, header: &[String]) {
        let cols = cols.max(1);
        let table_rows = (0..rows.max(1))
            .map(|row| {
                let cells = (0..cols)
                    .map(|col| {
                        let text = match row {
                            0 => header.get(col).map(String::as_str).unwrap_or_default(),
                            _ => "",
                        };
                        TableCell::new()
                            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
                    })
                    .collect();
                TableRow::new(cells)
            })
            .collect();

        let table = Table::new(table_rows).set_grid(vec![TABLE_WIDTH_TWIPS / cols; cols]);
        self.body.push(BodyItem::Table(Box::new(table)));
    }
}

fn heading_style_id(level: HeadingLevel) -> String {
    format!("Heading{}", level.get())
}

fn to_run(run: &TextRun) -> Run {
    let mut out = Run::new();
    if run.break_before {
        out = out.add_break(BreakType::TextWrapping);
    }
    out = out.add_text(&run.text);
    if run.bold {
        out = out.bold();
    }
    if let Some(font) = &run.font {
        out = out
            .fonts(
                RunFonts::new()
                    .ascii(&font.name)
                    .hi_ansi(&font.name)
                    .cs(&font.name),
            )
            .size(half_points(font.size_pt));
    }
    out
}

/// Word measures font sizes in half-points.
fn half_points(size_pt: f32) -> usize {
    (size_pt * 2.0).round().max(1.0) as usize
}

fn with_styles(docx: Docx) -> Docx {
    let docx = HEADING_SIZES_PT
        .iter()
        .enumerate()
        .fold(docx, |docx, (idx, size_pt)| {
            let level = idx + 1;
            docx.add_style(
                Style::new(format!("Heading{level}"), StyleType::Paragraph)
                    .name(format!("Heading {level}"))
                    .size(size_pt * 2)
                    .bold(),
            )
        });

    docx.add_style(Style::new(BULLET_STYLE, StyleType::Paragraph).name("List Bullet"))
        .add_style(Style::new(NUMBER_STYLE, StyleType::Paragraph).name("List Number"))
}

fn with_numbering(docx: Docx) -> Docx {
    let bullet = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new("•"),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

    let decimal = Level::new(
        0,
        Start::new(1),
        NumberFormat::new("decimal"),
        LevelText::new("%1."),
        LevelJc::new("left"),
    )
    .indent(Some(720), Some(SpecialIndentType::Hanging(360)), None, None);

    docx.add_abstract_numbering(AbstractNumbering::new(BULLET_NUMBERING).add_level(bullet))
        .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
        .add_abstract_numbering(AbstractNumbering::new(DECIMAL_NUMBERING).add_level(decimal))
        .add_numbering(Numbering::new(DECIMAL_NUMBERING, DECIMAL_NUMBERING))
}
