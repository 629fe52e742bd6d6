use std::fs;
use std::io::{Cursor, Read};
use std::path::PathBuf;
use tempfile::TempDir;

use crate::parsing::blocks::HeadingLevel;
use crate::render::{DocumentSink, Indent, ListStyle, TextRun};

/// Create a temporary working directory
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test markdown file with content
pub fn create_test_file(dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// Read one part (e.g. `word/document.xml`) out of a packed document
pub fn read_docx_part(bytes: &[u8], part: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(part).unwrap();
    let mut xml = String::new();
    file.read_to_string(&mut xml).unwrap();
    xml
}

/// One call received by a [`RecordingSink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkCall {
    Heading(u8, String),
    ListItem(ListStyle, String),
    Paragraph(Vec<TextRun>, Option<Indent>),
    Blank,
    Table(usize, usize, Vec<String>),
}

/// Sink that records every call, for asserting on render order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
}

impl DocumentSink for RecordingSink {
    fn add_heading(&mut self, level: HeadingLevel, text: &str) {
        self.calls.push(SinkCall::Heading(level.get(), text.to_string()));
    }

    fn add_list_item(&mut self, style: ListStyle, text: &str) {
        self.calls.push(SinkCall::ListItem(style, text.to_string()));
    }

    fn add_paragraph(&mut self, runs: &[TextRun], indent: Option<Indent>) {
        self.calls.push(SinkCall::Paragraph(runs.to_vec(), indent));
    }

    fn add_blank_paragraph(&mut self) {
        self.calls.push(SinkCall::Blank);
    }

    fn add_table(&mut self, rows: usize, cols: usize, header: &[String]) {
        self.calls.push(SinkCall::Table(rows, cols, header.to_vec()));
    }
}
