use serde_json::json;

use dashkit::core::DataTable;
use dashkit::error::RenderError;
use dashkit::render::{Page, ResourceKind};
use dashkit::widgets::{Graph, GraphBehavior, Widget};

fn harvest_table() -> DataTable {
    DataTable::new(
        vec!["year".to_owned(), "wheat".to_owned(), "corn".to_owned()],
        vec![
            vec![json!(2011), json!(10.4), json!(14.2)],
            vec![json!(2012), json!(8.2), json!(12.4)],
        ],
    )
    .expect("well-formed table")
}

fn harvest_graph() -> Graph {
    Graph::new(
        harvest_table(),
        "year",
        vec!["wheat".to_owned(), "corn".to_owned()],
    )
}

#[test]
fn graph_emits_sized_placeholder_div() {
    let mut page = Page::new();
    harvest_graph().render(&mut page).expect("render graph");

    assert_eq!(
        page.body(),
        "<div id=\"graph-1\" style=\"height:250px;width:100%;\"></div>\n"
    );
}

#[test]
fn graph_script_carries_pivoted_data_and_labels() {
    let mut page = Page::new();
    harvest_graph().render(&mut page).expect("render graph");

    assert_eq!(page.scripts().len(), 1);
    let script = &page.scripts()[0];
    assert!(script.starts_with("Morris.Line({"));
    assert!(script.contains("element: \"graph-1\""));
    assert!(script.contains("{\"x\":\"2011\",\"a\":\"10.4\",\"b\":\"14.2\"}"));
    assert!(script.contains("{\"x\":\"2012\",\"a\":\"8.2\",\"b\":\"12.4\"}"));
    assert!(script.contains("ykeys: [\"a\",\"b\"]"));
    assert!(script.contains("labels: [\"a\",\"b\"]"));
}

#[test]
fn graph_script_applies_default_behavior() {
    let mut page = Page::new();
    harvest_graph().render(&mut page).expect("render graph");

    let script = &page.scripts()[0];
    assert!(script.contains("pointSize: 0"));
    assert!(script.contains("smooth: true"));
    assert!(script.contains("hideHover: true"));
    assert!(script.contains("xLabelAngle: 45"));
    assert!(script.contains("axes: true"));
    assert!(script.contains("grid: true"));
}

#[test]
fn graph_behavior_overrides_reach_the_script() {
    let graph = harvest_graph().with_behavior(GraphBehavior {
        point_size: 3,
        smooth: false,
        ..GraphBehavior::default()
    });

    let mut page = Page::new();
    graph.render(&mut page).expect("render graph");

    let script = &page.scripts()[0];
    assert!(script.contains("pointSize: 3"));
    assert!(script.contains("smooth: false"));
}

#[test]
fn graph_registers_charting_resources_in_order() {
    let mut page = Page::new();
    harvest_graph().render(&mut page).expect("render graph");

    let resources = page.resources();
    assert_eq!(resources.len(), 3);
    assert_eq!(resources[0].bucket, "raphael");
    assert_eq!(resources[0].kind, ResourceKind::Js);
    assert_eq!(resources[1].group, "morris");
    assert_eq!(resources[1].kind, ResourceKind::Js);
    assert_eq!(resources[2].kind, ResourceKind::Css);
}

#[test]
fn graph_size_override_lands_in_the_style_attribute() {
    let graph = harvest_graph().with_size("480px", "320px");
    let mut page = Page::new();
    graph.render(&mut page).expect("render graph");

    assert!(page.body().contains("style=\"height:320px;width:480px;\""));
}

#[test]
fn hostile_cell_data_cannot_break_out_of_the_script_block() {
    let table = DataTable::new(
        vec!["x".to_owned(), "y".to_owned()],
        vec![vec![json!("</script><script>alert(1)</script>"), json!(1)]],
    )
    .expect("well-formed table");
    let graph = Graph::new(table, "x", vec!["y".to_owned()]);

    let mut page = Page::new();
    graph.render(&mut page).expect("render graph");

    let script = &page.scripts()[0];
    assert!(!script.contains("</script>"));
    assert!(script.contains("<\\/script>"));
}

#[test]
fn missing_column_fails_before_any_markup_is_appended() {
    let graph = Graph::new(harvest_table(), "year", vec!["barley".to_owned()]);
    let mut page = Page::new();

    let result = graph.render(&mut page);
    assert!(matches!(result, Err(RenderError::UnknownColumn { .. })));
    assert!(page.body().is_empty());
    assert!(page.scripts().is_empty());
    assert!(page.resources().is_empty());
}

#[test]
fn each_graph_on_a_page_gets_its_own_element_id() {
    let mut page = Page::new();
    harvest_graph().render(&mut page).expect("first graph");
    harvest_graph().render(&mut page).expect("second graph");

    assert!(page.body().contains("id=\"graph-1\""));
    assert!(page.body().contains("id=\"graph-2\""));
}
