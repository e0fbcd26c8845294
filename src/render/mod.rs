pub mod escape;
pub mod page;
pub mod resources;
pub mod tag;

pub use escape::{escape_html, escape_script_embed};
pub use page::Page;
pub use resources::{ResourceKind, ResourceRequest};
pub use tag::{Node, Tag};
