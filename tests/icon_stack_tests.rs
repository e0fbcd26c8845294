use dashkit::core::{Glyph, IconOptions};
use dashkit::render::Page;
use dashkit::widgets::{Icon, Widget};

#[test]
fn single_icon_renders_one_span_with_all_tokens() {
    let icon = Icon::named("rocket")
        .expect("known glyph")
        .with_options(IconOptions {
            size: 1,
            spin: true,
            fixed_width: true,
            ..IconOptions::default()
        });

    let mut page = Page::new();
    icon.render(&mut page).expect("render icon");

    assert_eq!(
        page.body(),
        "<span class=\"fa fa-rocket fa-lg fa-fw fa-spin\"></span>\n"
    );
}

#[test]
fn stacked_icon_wraps_layers_in_fa_stack() {
    let icon = Icon::named("flag")
        .expect("known glyph")
        .with_options(IconOptions {
            inverse: true,
            ..IconOptions::default()
        })
        .stacked_on(Glyph::CIRCLE);

    let html = icon.to_tag().to_html();
    assert!(html.starts_with("<span class=\"fa-stack\">"));
    assert!(html.contains("fa fa-stack-1x fa-flag fa-inverse"));
    assert!(html.contains("fa fa-stack-2x fa-circle"));
}

#[test]
fn stacked_on_top_puts_small_layer_first() {
    let icon = Icon::named("camera")
        .expect("known glyph")
        .stacked_on(Icon::new(Glyph::BAN))
        .stacked_on_top(true);

    let html = icon.to_tag().to_html();
    let small = html.find("fa-stack-1x").expect("small layer present");
    let large = html.find("fa-stack-2x").expect("large layer present");
    assert!(small < large);
}

#[test]
fn default_stacking_puts_large_layer_first() {
    let icon = Icon::named("camera")
        .expect("known glyph")
        .stacked_on(Icon::new(Glyph::BAN));

    let html = icon.to_tag().to_html();
    let small = html.find("fa-stack-1x").expect("small layer present");
    let large = html.find("fa-stack-2x").expect("large layer present");
    assert!(large < small);
}

#[test]
fn primary_layout_tokens_move_to_the_wrapper() {
    let icon = Icon::named("terminal")
        .expect("known glyph")
        .with_size(2)
        .stacked_on(Glyph::SQUARE);

    let html = icon.to_tag().to_html();
    assert!(html.starts_with("<span class=\"fa-stack fa-2x\">"));
    // The size modifier belongs to the wrapper, not the layers.
    assert!(!html.contains("fa-stack-1x fa-terminal fa-2x"));
}

#[test]
fn secondary_icon_keeps_its_own_icon_level_tokens() {
    let secondary = Icon::new(Glyph::SQUARE).with_options(IconOptions {
        rotate: 90,
        ..IconOptions::default()
    });
    let icon = Icon::named("wrench")
        .expect("known glyph")
        .stacked_on(secondary);

    let html = icon.to_tag().to_html();
    assert!(html.contains("fa fa-stack-2x fa-square fa-rotate-90"));
}

#[test]
fn unknown_secondary_name_fails_fast() {
    let result = Icon::try_from("definitely-not-a-glyph");
    assert!(result.is_err());
}

#[test]
fn icon_registers_the_stylesheet_resource() {
    let icon = Icon::new(Glyph::COMMENTS);
    let mut page = Page::new();
    icon.render(&mut page).expect("render icon");

    let resources = page.resources();
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].group, "font-awesome");
    assert_eq!(resources[0].bucket, "main");
    assert!(resources[0].url.contains("font-awesome"));
}
