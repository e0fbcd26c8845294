pub mod graph;
pub mod icon;
pub mod stat_box;

pub use graph::{Graph, GraphBehavior};
pub use icon::Icon;
pub use stat_box::StatBox;

use crate::error::RenderResult;
use crate::render::Page;

/// A renderable dashboard component.
///
/// Rendering is a pure, synchronous pass over an immutable descriptor: it
/// either appends the complete fragment to the page or fails before
/// producing any output.
pub trait Widget {
    fn render(&self, page: &mut Page) -> RenderResult<()>;
}
