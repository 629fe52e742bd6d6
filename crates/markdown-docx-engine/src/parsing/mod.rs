pub mod blocks;
pub mod inline;

use blocks::{Block, LineClass, MarkdownLineClassifier, kinds::CodeFence};

/// Translates Markdown text into a lazy sequence of [`Block`]s.
///
/// Never fails: every line lands in exactly one block, except separator
/// rows and fence lines which produce none.
pub fn translate(source: &str) -> Blocks<'_> {
    Blocks {
        lines: source.lines().collect(),
        cursor: 0,
        classifier: MarkdownLineClassifier,
    }
}

/// Iterator returned by [`translate`]. Single-pass; re-run `translate` to
/// start over.
pub struct Blocks<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    classifier: MarkdownLineClassifier,
}

impl Iterator for Blocks<'_> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        while let Some(&line) = self.lines.get(self.cursor) {
            self.cursor += 1;

            let block = match self.classifier.classify(line) {
                LineClass::Blank => Block::BlankLine,
                LineClass::Heading { level, text } => Block::Heading {
                    level,
                    text: text.to_string(),
                },
                LineClass::Bullet(text) => Block::BulletItem {
                    text: text.to_string(),
                },
                LineClass::Numbered(text) => Block::NumberedItem {
                    text: text.to_string(),
                },
                LineClass::FenceOpen => {
                    let region = CodeFence::scan(&self.lines[self.cursor..]);
                    self.cursor += region.consumed;
                    Block::CodeBlock {
                        lines: region.lines,
                    }
                }
                LineClass::TableRow(cells) => Block::TableRow { cells },
                LineClass::TableSeparator => continue,
                LineClass::Paragraph(text) => Block::Paragraph {
                    spans: inline::parse_inline(text),
                },
            };
            return Some(block);
        }
        None
    }
}

#[cfg(test)]
mod tests;
