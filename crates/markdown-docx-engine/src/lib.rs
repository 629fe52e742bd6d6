pub mod batch;
pub mod convert;
pub mod docx;
pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use batch::*;
pub use convert::*;
pub use docx::{DocxError, DocxSink};
pub use io::IoError;
pub use parsing::{
    Blocks,
    blocks::{Block, HeadingLevel},
    inline::Span,
    translate,
};
pub use render::*;
