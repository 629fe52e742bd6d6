//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each trimmed line is classified
//!    into a `LineClass` from local facts only (blank, heading, list marker,
//!    fence opener, table row, paragraph)
//!
//! 2. **Block Construction** (`crate::parsing::Blocks`): an iterator walks the
//!    classified lines, swallows fenced regions in one step and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `HeadingLevel`)
//! - **`kinds`**: Block-specific helpers with owned delimiters (CodeFence, Heading, ListItem, TableRow)
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//!
//! ## Key Invariants
//!
//! - Rule order is fixed: blank, heading, bullet, ordinal, fence, table, paragraph
//! - Markers are only recognised as the first token of the trimmed line
//! - Fenced code blocks are raw zones: no block/inline parsing inside

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{Block, HeadingLevel};
