use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::pivot::{DataTable, pivot_series};
use crate::error::RenderResult;
use crate::render::escape::escape_script_embed;
use crate::render::page::Page;
use crate::render::resources::ResourceKind;
use crate::render::tag::Tag;
use crate::widgets::Widget;

pub const RAPHAEL_JS: &str = "//cdnjs.cloudflare.com/ajax/libs/raphael/2.1.0/raphael-min.js";
pub const MORRIS_JS: &str = "//cdnjs.cloudflare.com/ajax/libs/morris.js/0.5.1/morris.min.js";
pub const MORRIS_CSS: &str = "//cdnjs.cloudflare.com/ajax/libs/morris.js/0.5.1/morris.css";

/// Client-side plotting options forwarded to the Morris line call.
///
/// Serializable so hosts can persist graph setup alongside their own config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphBehavior {
    pub point_size: u32,
    pub smooth: bool,
    pub hide_hover: bool,
    pub x_label_angle: u32,
    pub axes: bool,
    pub grid: bool,
}

impl Default for GraphBehavior {
    fn default() -> Self {
        Self {
            point_size: 0,
            smooth: true,
            hide_hover: true,
            x_label_angle: 45,
            axes: true,
            grid: true,
        }
    }
}

/// Line graph widget backed by the Morris client-side library.
///
/// Renders a sized placeholder `div` plus a script block that pivots the
/// dataset into per-row records keyed by synthetic series identifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    table: DataTable,
    x_column: String,
    y_columns: Vec<String>,
    width: String,
    height: String,
    behavior: GraphBehavior,
}

impl Graph {
    #[must_use]
    pub fn new(table: DataTable, x_column: impl Into<String>, y_columns: Vec<String>) -> Self {
        Self {
            table,
            x_column: x_column.into(),
            y_columns,
            width: "100%".to_owned(),
            height: "250px".to_owned(),
            behavior: GraphBehavior::default(),
        }
    }

    /// Overrides the placeholder's CSS width and height.
    #[must_use]
    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: GraphBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl Widget for Graph {
    fn render(&self, page: &mut Page) -> RenderResult<()> {
        // Pivot first: a bad column selector must fail before anything is
        // appended or registered.
        let pivoted = pivot_series(&self.table, &self.x_column, &self.y_columns)?;

        page.add_resource(RAPHAEL_JS, ResourceKind::Js, "morris", "raphael");
        page.add_resource(MORRIS_JS, ResourceKind::Js, "morris", "main");
        page.add_resource(MORRIS_CSS, ResourceKind::Css, "morris", "main");
        let element_id = page.claim_id("graph");
        debug!(
            element = %element_id,
            rows = pivoted.records().len(),
            series = pivoted.series_keys().len(),
            "render graph"
        );

        let placeholder = Tag::new("div").attr("id", element_id.clone()).attr(
            "style",
            format!("height:{};width:{};", self.height, self.width),
        );
        page.append_tag(&placeholder);

        // serde_json does the string escaping; escape_script_embed keeps a
        // literal "</script>" in cell data from terminating the block.
        let element_json = escape_script_embed(&serde_json::to_string(&element_id)?);
        let data_json = escape_script_embed(&serde_json::to_string(pivoted.records())?);
        let keys_json = escape_script_embed(&serde_json::to_string(pivoted.series_keys())?);
        let labels_json = escape_script_embed(&serde_json::to_string(pivoted.series_labels())?);

        let behavior = &self.behavior;
        page.append_script(format!(
            "Morris.Line({{\n    element: {element_json},\n    data: {data_json},\n    xkey: \"x\",\n    ykeys: {keys_json},\n    labels: {labels_json},\n    pointSize: {},\n    smooth: {},\n    hideHover: {},\n    xLabelAngle: {},\n    axes: {},\n    grid: {}\n}});",
            behavior.point_size,
            behavior.smooth,
            behavior.hide_hover,
            behavior.x_label_angle,
            behavior.axes,
            behavior.grid
        ));

        Ok(())
    }
}
