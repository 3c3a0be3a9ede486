// File: crates/plot-core/tests/theme.rs
// Purpose: Theme presets, lookup by name, and JSON configuration.

use plot_core::theme::{self, Theme};
use plot_core::{PlotError, Rgba};

#[test]
fn presets_and_lookup() {
    let names: Vec<_> = theme::presets().into_iter().map(|t| t.name).collect();
    assert_eq!(names, ["default", "presentation", "paper", "dark", "minimal"]);

    assert_eq!(theme::find("DARK").colors.background, Rgba::rgb(30, 30, 30));
    assert_eq!(theme::find("no-such-theme"), Theme::default());
    assert!(!theme::find("minimal").grid.show_major);
    assert_eq!(theme::find("paper").fonts.family, "Serif");
}

#[test]
fn partial_json_keeps_defaults() {
    let t = Theme::from_json_str(r##"{ "name": "custom", "margins": { "left": 10 }, "colors": { "background": "#1e1e1e" } }"##)
        .expect("parse theme");
    assert_eq!(t.name, "custom");
    assert_eq!(t.margins.left, 10);
    assert_eq!(t.margins.right, 160);
    assert_eq!(t.colors.background, Rgba::rgb(30, 30, 30));
    assert_eq!(t.colors.palette, Theme::default().colors.palette);
    assert_eq!(t.axis_format, Theme::default().axis_format);
}

#[test]
fn json_round_trip() {
    let dark = Theme::dark();
    let json = dark.to_json_string().expect("serialize");
    assert!(json.contains("\"#1e1e1e\""));
    assert_eq!(Theme::from_json_str(&json).expect("parse"), dark);
}

#[test]
fn json_file_and_errors() {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("theme_tests");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("slides.json");
    std::fs::write(&path, Theme::presentation().to_json_string().unwrap()).unwrap();
    assert_eq!(Theme::from_json_file(&path).unwrap(), Theme::presentation());

    let bad_color = Theme::from_json_str(r#"{ "colors": { "background": "red" } }"#).unwrap_err();
    assert!(matches!(bad_color, PlotError::Theme(_)));
    let missing = Theme::from_json_file(dir.join("missing.json")).unwrap_err();
    assert!(matches!(missing, PlotError::Io(_)));
}

#[test]
fn rgba_hex_parsing() {
    assert_eq!(Rgba::parse_hex("#ff8000"), Some(Rgba::rgb(255, 128, 0)));
    assert_eq!(Rgba::parse_hex("#ff000080"), Some(Rgba::rgba(255, 0, 0, 128)));
    assert_eq!(Rgba::parse_hex("ff8000"), None);
    assert_eq!(Rgba::parse_hex("#fff"), None);
    assert_eq!(Rgba::rgba(1, 2, 3, 4).to_string(), "#01020304");
    assert_eq!(Rgba::rgb(10, 20, 30).to_css(), "rgb(10,20,30)");
}

#[test]
fn palette_wraps() {
    let colors = Theme::default().colors;
    let n = colors.palette.len();
    assert_eq!(colors.series_color(n + 1), colors.palette[1]);
}
