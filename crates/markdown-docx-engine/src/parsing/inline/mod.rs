//! # Inline Parsing
//!
//! Splits paragraph text into styled spans.
//!
//! ## Modules
//!
//! - **`types`**: `Span` (text plus bold flag)
//! - **`kinds`**: Inline-specific types with owned delimiters (Strong)
//! - **`parser`**: `parse_inline()` main entry point
//!
//! Only paragraphs get inline parsing. Headings, list items, table cells
//! and code lines keep `**` as literal text.

pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::Span;
