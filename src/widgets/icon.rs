use tracing::trace;

use crate::core::glyph::Glyph;
use crate::core::icon_class::{IconOptions, container_tokens, icon_tokens, layout_tokens};
use crate::error::{RenderError, RenderResult};
use crate::render::page::Page;
use crate::render::resources::ResourceKind;
use crate::render::tag::Tag;
use crate::widgets::Widget;

pub const FONT_AWESOME_CSS: &str =
    "https://maxcdn.bootstrapcdn.com/font-awesome/4.5.0/css/font-awesome.min.css";

/// A Font Awesome glyph widget, optionally stacked on a second glyph.
///
/// When a secondary glyph is set, the primary renders as the small
/// (`stack-1x`) layer and the secondary as the large (`stack-2x`) layer
/// inside an `fa-stack` wrapper. `stacked_on_top` controls which layer is
/// emitted first and therefore which paints on top.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    glyph: Glyph,
    options: IconOptions,
    stacked_on: Option<Box<Icon>>,
    stacked_on_top: bool,
}

impl Icon {
    #[must_use]
    pub fn new(glyph: Glyph) -> Self {
        Self {
            glyph,
            options: IconOptions::default(),
            stacked_on: None,
            stacked_on_top: false,
        }
    }

    /// Builds an icon from a catalog name, failing fast on unknown names.
    pub fn named(name: &str) -> RenderResult<Self> {
        Ok(Self::new(Glyph::named(name)?))
    }

    #[must_use]
    pub fn with_options(mut self, options: IconOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: u8) -> Self {
        self.options.size = size;
        self
    }

    /// Layers this icon on `secondary`. A bare [`Glyph`] is promoted to a
    /// default-options icon.
    #[must_use]
    pub fn stacked_on(mut self, secondary: impl Into<Icon>) -> Self {
        self.stacked_on = Some(Box::new(secondary.into()));
        self
    }

    /// Emits the small layer before the large one, so the small glyph paints
    /// on top. Useful for overlays like `ban`.
    #[must_use]
    pub fn stacked_on_top(mut self, on_top: bool) -> Self {
        self.stacked_on_top = on_top;
        self
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    #[must_use]
    pub fn options(&self) -> &IconOptions {
        &self.options
    }

    /// Builds the markup tree without touching a page. Used directly by
    /// widgets that embed icons inside their own trees.
    #[must_use]
    pub fn to_tag(&self) -> Tag {
        match &self.stacked_on {
            None => self.single_tag(),
            Some(secondary) => self.stack_tag(secondary),
        }
    }

    fn single_tag(&self) -> Tag {
        let mut tokens = container_tokens(self.glyph, &self.options);
        tokens.extend(icon_tokens(&self.options));
        Tag::new("span").classes(&tokens)
    }

    fn stack_tag(&self, secondary: &Icon) -> Tag {
        let mut wrapper_tokens = vec!["fa-stack".to_owned()];
        wrapper_tokens.extend(layout_tokens(&self.options));

        let small = Self::layer_tag(self.glyph, "fa-stack-1x", &self.options);
        let large = Self::layer_tag(secondary.glyph, "fa-stack-2x", &secondary.options);

        let wrapper = Tag::new("span").classes(&wrapper_tokens);
        if self.stacked_on_top {
            wrapper.child(small).child(large)
        } else {
            wrapper.child(large).child(small)
        }
    }

    fn layer_tag(glyph: Glyph, stack_token: &str, options: &IconOptions) -> Tag {
        let mut tokens = vec![
            "fa".to_owned(),
            stack_token.to_owned(),
            format!("fa-{}", glyph.css_name()),
        ];
        tokens.extend(icon_tokens(options));
        Tag::new("span").classes(&tokens)
    }
}

impl From<Glyph> for Icon {
    fn from(glyph: Glyph) -> Self {
        Icon::new(glyph)
    }
}

impl TryFrom<&str> for Icon {
    type Error = RenderError;

    fn try_from(name: &str) -> RenderResult<Self> {
        Icon::named(name)
    }
}

impl Widget for Icon {
    fn render(&self, page: &mut Page) -> RenderResult<()> {
        page.add_resource(FONT_AWESOME_CSS, ResourceKind::Css, "font-awesome", "main");
        trace!(
            glyph = self.glyph.raw_name(),
            stacked = self.stacked_on.is_some(),
            "render icon"
        );
        page.append_tag(&self.to_tag());
        Ok(())
    }
}
