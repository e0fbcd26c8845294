use tracing::trace;

use crate::core::glyph::Glyph;
use crate::error::RenderResult;
use crate::render::page::Page;
use crate::render::resources::ResourceKind;
use crate::render::tag::Tag;
use crate::widgets::Widget;
use crate::widgets::icon::{FONT_AWESOME_CSS, Icon};

/// Dashboard stat panel: a large figure, its label, an icon and an optional
/// "view more" footer link.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBox {
    stat: String,
    label: String,
    icon: Option<Icon>,
    view_more: Option<ViewMoreLink>,
}

#[derive(Debug, Clone, PartialEq)]
struct ViewMoreLink {
    label: String,
    href: String,
}

impl StatBox {
    #[must_use]
    pub fn new(stat: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            stat: stat.into(),
            label: label.into(),
            icon: None,
            view_more: None,
        }
    }

    /// Sets the panel icon. Size 5 fills the heading nicely.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Adds the footer link under the stat.
    #[must_use]
    pub fn with_view_more(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.view_more = Some(ViewMoreLink {
            label: label.into(),
            href: href.into(),
        });
        self
    }

    fn heading_tag(&self) -> Tag {
        let mut icon_cell = Tag::new("div").attr("class", "col-xs-3");
        if let Some(icon) = &self.icon {
            icon_cell = icon_cell.child(icon.to_tag());
        }

        let stat_cell = Tag::new("div")
            .attr("class", "col-xs-9 text-right")
            .child(
                Tag::new("div")
                    .attr("style", "font-size:40px;")
                    .text(self.stat.clone()),
            )
            .child(Tag::new("div").text(self.label.clone()));

        Tag::new("div").attr("class", "panel-heading").child(
            Tag::new("div")
                .attr("class", "row")
                .child(icon_cell)
                .child(stat_cell),
        )
    }

    fn footer_tag(&self, link: &ViewMoreLink) -> Tag {
        let arrow = Icon::new(Glyph::ARROW_CIRCLE_RIGHT).to_tag();
        Tag::new("a").attr("href", link.href.clone()).child(
            Tag::new("div")
                .attr("class", "panel-footer")
                .child(
                    Tag::new("span")
                        .attr("class", "pull-left")
                        .text(link.label.clone()),
                )
                .child(Tag::new("span").attr("class", "pull-right").child(arrow))
                .child(Tag::new("div").attr("class", "clearfix")),
        )
    }
}

impl Widget for StatBox {
    fn render(&self, page: &mut Page) -> RenderResult<()> {
        // The footer arrow is a Font Awesome glyph, so the stylesheet is
        // needed even when no panel icon is set.
        page.add_resource(FONT_AWESOME_CSS, ResourceKind::Css, "font-awesome", "main");
        trace!(stat = %self.stat, "render stat box");

        let mut panel = Tag::new("div")
            .attr("class", "panel panel-primary")
            .child(self.heading_tag());
        if let Some(link) = &self.view_more {
            panel = panel.child(self.footer_tag(link));
        }

        page.append_tag(&panel);
        Ok(())
    }
}
