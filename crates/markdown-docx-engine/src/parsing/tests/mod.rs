//! Integration tests for the parsing module.
//!
//! Fixtures (.md) are co-located in `fixtures/`; expected block sequences
//! are spelled out next to each test.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    blocks::{Block, HeadingLevel},
    inline::Span,
    translate,
};

fn heading(level: usize, text: &str) -> Block {
    Block::Heading {
        level: HeadingLevel::from_marker_count(level),
        text: text.to_string(),
    }
}

fn bullet(text: &str) -> Block {
    Block::BulletItem {
        text: text.to_string(),
    }
}

fn numbered(text: &str) -> Block {
    Block::NumberedItem {
        text: text.to_string(),
    }
}

fn code(lines: &[&str]) -> Block {
    Block::CodeBlock {
        lines: lines.iter().map(|l| l.to_string()).collect(),
    }
}

fn row(cells: &[&str]) -> Block {
    Block::TableRow {
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

fn para(spans: &[(&str, bool)]) -> Block {
    Block::Paragraph {
        spans: spans
            .iter()
            .map(|&(text, bold)| Span {
                text: text.to_string(),
                bold,
            })
            .collect(),
    }
}

fn blocks(md: &str) -> Vec<Block> {
    translate(md).collect()
}

fn read_fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

// End-to-end scenarios

#[test]
fn mixed_document_scenario() {
    let md = "# Title\n\nSome **bold** text\n- item1\n1. first\n```\ncode\n```\n| h1 | h2 |\n|---|---|\n";

    assert_eq!(
        blocks(md),
        vec![
            heading(1, "Title"),
            Block::BlankLine,
            para(&[("Some ", false), ("bold", true), (" text", false)]),
            bullet("item1"),
            numbered("first"),
            code(&["code"]),
            row(&["h1", "h2"]),
        ]
    );
}

#[test]
fn fixture_install_guide() {
    let md = read_fixture("install_guide");

    assert_eq!(
        blocks(&md),
        vec![
            heading(1, "Installation Guide"),
            Block::BlankLine,
            para(&[
                ("Read this ", false),
                ("before", true),
                (" you start.", false)
            ]),
            Block::BlankLine,
            heading(2, "Requirements"),
            Block::BlankLine,
            bullet("Node 18"),
            bullet("PostgreSQL 15"),
            Block::BlankLine,
            heading(3, "Steps"),
            Block::BlankLine,
            numbered("Clone the repository"),
            numbered("Install dependencies"),
            Block::BlankLine,
            code(&["npm install", "  npm run build"]),
            Block::BlankLine,
            heading(4, "Ports"),
            Block::BlankLine,
            row(&["Service", "Port"]),
            row(&["api", "3000"]),
            row(&["web", "5173"]),
            Block::BlankLine,
            heading(4, "Notes"),
            para(&[("Trailing paragraph.", false)]),
        ]
    );
}

// Rule properties

#[rstest]
#[case("# T", 1)]
#[case("## T", 2)]
#[case("### T", 3)]
#[case("#### T", 4)]
#[case("##### T", 4)]
#[case("###### T", 4)]
fn heading_levels(#[case] line: &str, #[case] level: usize) {
    assert_eq!(blocks(line), vec![heading(level, "T")]);
}

#[rstest]
#[case("- X")]
#[case("* X")]
#[case("-    X   ")]
fn bullet_items(#[case] line: &str) {
    assert_eq!(blocks(line), vec![bullet("X")]);
}

#[rstest]
#[case("1. X")]
#[case("99. X")]
#[case("3.X")]
fn numbered_items_drop_the_number(#[case] line: &str) {
    assert_eq!(blocks(line), vec![numbered("X")]);
}

#[test]
fn fenced_block_consumes_both_fences() {
    assert_eq!(
        blocks("```\nA\nB\n```\nafter"),
        vec![code(&["A", "B"]), para(&[("after", false)])]
    );
}

#[test]
fn fence_body_is_raw() {
    assert_eq!(
        blocks("```md\n# not a heading\n- not a bullet\n| a | b |\n```"),
        vec![code(&["# not a heading", "- not a bullet", "| a | b |"])]
    );
}

#[test]
fn unclosed_fence_runs_to_end_of_document() {
    assert_eq!(
        blocks("intro\n```\nfn main() {}\n\n# still code"),
        vec![
            para(&[("intro", false)]),
            code(&["fn main() {}", "", "# still code"])
        ]
    );
}

#[test]
fn empty_fence_yields_empty_code_block() {
    assert_eq!(blocks("```\n```"), vec![code(&[])]);
}

#[test]
fn table_row_and_separator() {
    assert_eq!(blocks("| a | b |"), vec![row(&["a", "b"])]);
    assert_eq!(blocks("|---|---|"), Vec::<Block>::new());
}

#[test]
fn bold_is_literal_outside_paragraphs() {
    assert_eq!(
        blocks("# **Title**\n- **item**"),
        vec![heading(1, "**Title**"), bullet("**item**")]
    );
}

#[rstest]
#[case("**", vec![("", true)])]
#[case("***", vec![("", true)])]
#[case("**a*****", vec![("", false), ("a", true), ("", true)])]
fn stray_bold_delimiters_become_empty_bold_runs(
    #[case] line: &str,
    #[case] spans: Vec<(&str, bool)>,
) {
    assert_eq!(blocks(line), vec![para(&spans)]);
}

#[test]
fn crlf_line_endings() {
    assert_eq!(
        blocks("# Title\r\n\r\n- item\r\n"),
        vec![heading(1, "Title"), Block::BlankLine, bullet("item")]
    );
}

#[test]
fn empty_input_yields_nothing() {
    assert_eq!(blocks(""), Vec::<Block>::new());
}

#[test]
fn translation_is_repeatable() {
    let md = read_fixture("install_guide");
    assert_eq!(blocks(&md), blocks(&md));
}

#[test]
fn iterator_is_lazy() {
    let mut it = translate("# one\n```\nunterminated");
    assert_eq!(it.next(), Some(heading(1, "one")));
    assert_eq!(it.next(), Some(code(&["unterminated"])));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}
