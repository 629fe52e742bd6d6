pub mod code_fence;
pub mod heading;
pub mod list_item;
pub mod table;

pub use code_fence::{CodeFence, FencedRegion};
pub use heading::Heading;
pub use list_item::ListItem;
pub use table::{RowKind, TableRow};
