//! dashkit: server-side HTML dashboard components.
//!
//! Typed widget descriptors (icons, chart graphs, stat boxes) render into a
//! [`render::Page`] sink as deterministic HTML/CSS/JS fragments, registering
//! the CDN resources the host page must load as a side channel.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod widgets;

pub use error::{RenderError, RenderResult};
pub use render::Page;
pub use widgets::Widget;
