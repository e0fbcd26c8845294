use dashkit::core::{
    Glyph, IconOptions, container_tokens, icon_tokens, normalize_glyph_name, rotation_token,
    size_token,
};

#[test]
fn example_icon_produces_documented_container_tokens() {
    let glyph = Glyph::named("comments").expect("known glyph");
    let options = IconOptions {
        size: 1,
        fixed_width: true,
        ..IconOptions::default()
    };

    let tokens = container_tokens(glyph, &options);
    assert_eq!(tokens.as_slice(), ["fa", "fa-comments", "fa-lg", "fa-fw"]);
    assert!(icon_tokens(&options).is_empty());
}

#[test]
fn size_steps_map_bijectively() {
    assert_eq!(size_token(0), None);
    assert_eq!(size_token(1), Some("lg"));
    assert_eq!(size_token(2), Some("2x"));
    assert_eq!(size_token(3), Some("3x"));
    assert_eq!(size_token(4), Some("4x"));
    assert_eq!(size_token(5), Some("5x"));
    assert_eq!(size_token(6), None);
}

#[test]
fn only_quarter_turns_emit_rotation_tokens() {
    assert_eq!(rotation_token(90), Some("rotate-90"));
    assert_eq!(rotation_token(180), Some("rotate-180"));
    assert_eq!(rotation_token(270), Some("rotate-270"));
    assert_eq!(rotation_token(0), None);
    assert_eq!(rotation_token(45), None);
    assert_eq!(rotation_token(-90), None);
    assert_eq!(rotation_token(360), None);
}

#[test]
fn icon_tokens_follow_fixed_order() {
    let options = IconOptions {
        spin: true,
        pulse: true,
        rotate: 180,
        flip_horizontal: true,
        flip_vertical: true,
        inverse: true,
        ..IconOptions::default()
    };

    assert_eq!(
        icon_tokens(&options).as_slice(),
        [
            "fa-spin",
            "fa-pulse",
            "fa-rotate-180",
            "fa-flip-horizontal",
            "fa-flip-vertical",
            "fa-inverse"
        ]
    );
}

#[test]
fn container_tokens_follow_fixed_order() {
    let glyph = Glyph::named("rocket").expect("known glyph");
    let options = IconOptions {
        size: 3,
        fixed_width: true,
        border: true,
        pull_left: true,
        pull_right: true,
        ..IconOptions::default()
    };

    assert_eq!(
        container_tokens(glyph, &options).as_slice(),
        [
            "fa",
            "fa-rocket",
            "fa-3x",
            "fa-fw",
            "fa-border",
            "fa-pull-left",
            "fa-pull-right"
        ]
    );
}

// Locks the corrected behavior: pull_right must not smuggle in spin/pulse
// tokens the way one legacy code path did.
#[test]
fn pull_right_does_not_imply_spin_or_pulse() {
    let glyph = Glyph::named("quote_left").expect("known glyph");
    let options = IconOptions {
        pull_right: true,
        ..IconOptions::default()
    };

    let container = container_tokens(glyph, &options);
    assert!(container.iter().any(|token| token == "fa-pull-right"));

    let icon = icon_tokens(&options);
    assert!(!icon.iter().any(|token| token == "fa-spin"));
    assert!(!icon.iter().any(|token| token == "fa-pulse"));
    assert!(icon.is_empty());
}

#[test]
fn reserved_word_padding_is_stripped_from_css_names() {
    assert_eq!(Glyph::TRY_.css_name(), "try");
    assert_eq!(Glyph::_500PX.css_name(), "500px");
    assert_eq!(Glyph::HAND_PAPER_O.css_name(), "hand-paper-o");
}

#[test]
fn normalization_is_idempotent() {
    let once = normalize_glyph_name("hand_paper_o");
    assert_eq!(once, "hand-paper-o");
    assert_eq!(normalize_glyph_name(&once), once);
}
