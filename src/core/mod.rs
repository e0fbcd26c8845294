pub mod glyph;
pub mod icon_class;
pub mod pivot;

pub use glyph::{Glyph, normalize_glyph_name};
pub use icon_class::{
    ClassTokens, IconOptions, container_tokens, icon_tokens, layout_tokens, rotation_token,
    size_token,
};
pub use pivot::{DataTable, PivotedSeries, pivot_series};
