use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::glyph::Glyph;

/// Short, stack-allocated list of CSS class tokens.
pub type ClassTokens = SmallVec<[String; 8]>;

/// Independent display options for a single glyph layer.
///
/// All fields default to off. `size` 1–5 selects a scale step (`lg` through
/// `5x`); 0 keeps the natural size. `rotate` emits a token only for 90, 180
/// or 270; every other value is silently dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconOptions {
    pub size: u8,
    pub fixed_width: bool,
    pub border: bool,
    pub pull_left: bool,
    pub pull_right: bool,
    pub spin: bool,
    pub pulse: bool,
    pub rotate: i32,
    pub flip_horizontal: bool,
    pub flip_vertical: bool,
    pub inverse: bool,
}

impl IconOptions {
    #[must_use]
    pub fn sized(size: u8) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

const SIZE_TOKENS: [&str; 5] = ["lg", "2x", "3x", "4x", "5x"];

/// Maps size steps 1–5 to their scale suffix. 0 and out-of-range steps
/// produce no token.
#[must_use]
pub fn size_token(size: u8) -> Option<&'static str> {
    match size {
        1..=5 => Some(SIZE_TOKENS[usize::from(size) - 1]),
        _ => None,
    }
}

/// Maps a rotation angle to its suffix. Only 90, 180 and 270 produce a
/// token; every other value (0 included) is dropped.
#[must_use]
pub fn rotation_token(rotate: i32) -> Option<&'static str> {
    match rotate {
        90 => Some("rotate-90"),
        180 => Some("rotate-180"),
        270 => Some("rotate-270"),
        _ => None,
    }
}

/// Layout modifier tokens, in fixed order: size, fixed-width, border,
/// pull-left, pull-right.
///
/// `pull_right` contributes only `fa-pull-right`; spin and pulse tokens are
/// driven exclusively by their own flags (see `icon_tokens`).
#[must_use]
pub fn layout_tokens(options: &IconOptions) -> ClassTokens {
    let mut tokens = ClassTokens::new();
    if let Some(size) = size_token(options.size) {
        tokens.push(format!("fa-{size}"));
    }
    if options.fixed_width {
        tokens.push("fa-fw".to_owned());
    }
    if options.border {
        tokens.push("fa-border".to_owned());
    }
    if options.pull_left {
        tokens.push("fa-pull-left".to_owned());
    }
    if options.pull_right {
        tokens.push("fa-pull-right".to_owned());
    }
    tokens
}

/// Container-level tokens: the base glyph classes followed by the layout
/// modifiers.
#[must_use]
pub fn container_tokens(glyph: Glyph, options: &IconOptions) -> ClassTokens {
    let mut tokens = ClassTokens::new();
    tokens.push("fa".to_owned());
    tokens.push(format!("fa-{}", glyph.css_name()));
    tokens.extend(layout_tokens(options));
    tokens
}

/// Icon-level tokens, in fixed order: spin, pulse, rotation, flips, inverse.
///
/// These apply to an individual glyph layer and stay with it when two glyphs
/// are stacked.
#[must_use]
pub fn icon_tokens(options: &IconOptions) -> ClassTokens {
    let mut tokens = ClassTokens::new();
    if options.spin {
        tokens.push("fa-spin".to_owned());
    }
    if options.pulse {
        tokens.push("fa-pulse".to_owned());
    }
    if let Some(rotation) = rotation_token(options.rotate) {
        tokens.push(format!("fa-{rotation}"));
    }
    if options.flip_horizontal {
        tokens.push("fa-flip-horizontal".to_owned());
    }
    if options.flip_vertical {
        tokens.push("fa-flip-vertical".to_owned());
    }
    if options.inverse {
        tokens.push("fa-inverse".to_owned());
    }
    tokens
}
