// File: crates/plot-core/tests/svg.rs
// Purpose: SVG document structure, escaping, z-order, and the degenerate layout.

use plot_core::svg::escape_xml;
use plot_core::theme::Theme;
use plot_core::types::Insets;
use plot_core::{Chart, RenderOptions, Rgba, Series, Style};

fn parse(svg: &str) -> roxmltree::Document<'_> {
    roxmltree::Document::parse(svg).expect("well-formed SVG")
}

fn elements<'a>(doc: &'a roxmltree::Document<'a>, tag: &str) -> Vec<roxmltree::Node<'a, 'a>> {
    doc.descendants().filter(|n| n.has_tag_name(tag)).collect()
}

#[test]
fn two_point_line_emits_single_path_and_escaped_legend() {
    let name = "a<b & \"c\" 'd'";
    let mut chart = Chart::new("Vector").with_labels("x", "y");
    chart.add_series(Series::new(name, vec![0.0, 1.0], vec![0.0, 1.0]).unwrap());

    let svg = chart.render_to_svg_string(&RenderOptions::default());
    assert!(svg.contains("a&lt;b &amp; &quot;c&quot; &apos;d&apos;"));
    assert!(!svg.contains(name));

    let doc = parse(&svg);
    let paths = elements(&doc, "path");
    assert_eq!(paths.len(), 1, "exactly one path element");
    let d = paths[0].attribute("d").expect("path data");
    let commands: Vec<&str> = d.split_whitespace().filter(|t| t.chars().all(|c| c.is_ascii_alphabetic())).collect();
    assert_eq!(commands, vec!["M", "L"]);

    let texts: Vec<String> = elements(&doc, "text").iter().filter_map(|t| t.text().map(str::to_string)).collect();
    assert!(texts.iter().any(|t| t == name), "legend entry with the series name");
    assert!(texts.iter().any(|t| t == "Legend"));
}

#[test]
fn document_header_matches_requested_size() {
    let chart = Chart::new("size");
    let svg = chart.render_to_svg_string(&RenderOptions::sized(640, 480));
    let doc = parse(&svg);
    let root = doc.root_element();
    assert!(root.has_tag_name(("http://www.w3.org/2000/svg", "svg")));
    assert_eq!(root.attribute("width"), Some("640"));
    assert_eq!(root.attribute("height"), Some("480"));
    assert_eq!(root.attribute("viewBox"), Some("0 0 640 480"));

    let clip = elements(&doc, "clipPath");
    assert_eq!(clip.len(), 1);
    assert_eq!(clip[0].attribute("id"), Some("plotClip"));
    let clip_rect = clip[0].children().find(|n| n.has_tag_name("rect")).expect("clip rect");
    // Default margins 80/160/60/60.
    assert_eq!(clip_rect.attribute("x"), Some("80"));
    assert_eq!(clip_rect.attribute("y"), Some("60"));
    assert_eq!(clip_rect.attribute("width"), Some("400"));
    assert_eq!(clip_rect.attribute("height"), Some("360"));
}

#[test]
fn user_text_is_escaped_everywhere() {
    let mut chart = Chart::new("<T>").with_labels("x & y", "\"q\"");
    chart.add_xy("it's", vec![0.0, 1.0], vec![1.0, 2.0], None).unwrap();
    let svg = chart.render_to_svg_string(&RenderOptions::default());
    assert!(svg.contains(">&lt;T&gt;</text>"));
    assert!(svg.contains(">x &amp; y</text>"));
    assert!(svg.contains(">&quot;q&quot;</text>"));
    assert!(svg.contains(">it&apos;s</text>"));
    parse(&svg);
}

#[test]
fn escape_covers_five_characters() {
    assert_eq!(escape_xml(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&apos;");
    assert_eq!(escape_xml("plain"), "plain");
}

#[test]
fn error_band_is_clipped_and_drawn_before_line_and_points() {
    let mut chart = Chart::new("band");
    let series = Series::with_bounds(
        "fit",
        vec![0.0, 1.0, 2.0],
        vec![0.0, 1.0, 4.0],
        vec![-1.0, -1.0, -1.0],
        vec![1.0, 1.0, 1.0],
    )
    .unwrap()
    .with_style(Style::default().with_color(Rgba::rgb(214, 39, 40)).with_points(4));
    chart.add_series(series);

    let svg = chart.render_to_svg_string(&RenderOptions::default());
    let doc = parse(&svg);
    let paths = elements(&doc, "path");
    assert_eq!(paths.len(), 2);

    let band = paths[0];
    assert_eq!(band.attribute("clip-path"), Some("url(#plotClip)"));
    assert_eq!(band.attribute("fill"), Some("rgb(214,39,40)"));
    assert_eq!(band.attribute("fill-opacity"), Some("0.235"));
    let d = band.attribute("d").unwrap();
    assert!(d.ends_with('Z'));
    assert_eq!(d.matches('L').count(), 5, "3 upper + 3 lower vertices");

    let line = paths[1];
    assert_eq!(line.attribute("fill"), Some("none"));
    assert_eq!(line.attribute("stroke"), Some("rgb(214,39,40)"));
    assert!(line.attribute("clip-path").is_none());

    // Data points (3) plus the legend sample (1), after both paths.
    let circles = elements(&doc, "circle");
    assert_eq!(circles.len(), 4);
    assert_eq!(circles[0].attribute("r"), Some("4"));
    assert!(band.range().start < line.range().start);
    assert!(line.range().start < circles[0].range().start);
}

#[test]
fn zero_width_line_is_not_stroked() {
    let mut chart = Chart::new("scatter");
    chart.add_series(
        Series::new("pts", vec![0.0, 1.0, 2.0], vec![2.0, 1.0, 0.0]).unwrap().with_style(Style::scatter(2)),
    );
    let svg = chart.render_to_svg_string(&RenderOptions::default());
    let doc = parse(&svg);
    assert!(elements(&doc, "path").is_empty());
    assert_eq!(elements(&doc, "circle").len(), 4);
}

#[test]
fn oversized_margins_emit_background_only() {
    let mut chart = Chart::new("degenerate");
    chart.add_xy("s", vec![0.0, 1.0], vec![0.0, 1.0], None).unwrap();
    chart.theme.margins = Insets::new(300, 300, 10, 10);

    let svg = chart.render_to_svg_string(&RenderOptions::sized(500, 400));
    let doc = parse(&svg);
    let children: Vec<_> = doc.root_element().children().filter(|n| n.is_element()).collect();
    assert_eq!(children.len(), 1);
    assert!(children[0].has_tag_name("rect"));
    assert_eq!(children[0].attribute("fill"), Some("rgb(255,255,255)"));
}

#[test]
fn empty_series_skips_drawing_but_keeps_legend_row() {
    let mut chart = Chart::new("empty");
    chart.add_xy("nothing", vec![], vec![], None).unwrap();
    chart.add_xy("line", vec![0.0, 1.0], vec![0.0, 1.0], None).unwrap();
    let svg = chart.render_to_svg_string(&RenderOptions::default());
    let doc = parse(&svg);
    assert_eq!(elements(&doc, "path").len(), 1);
    let texts: Vec<_> = elements(&doc, "text").iter().filter_map(|t| t.text()).map(str::to_string).collect();
    assert!(texts.contains(&"nothing".to_string()));
}

#[test]
fn theme_colors_reach_the_document() {
    let chart = Chart::new("dark").with_theme(Theme::dark());
    let svg = chart.render_to_svg_string(&RenderOptions::default());
    let doc = parse(&svg);
    let bg = doc.root_element().children().filter(|n| n.is_element()).find(|n| n.has_tag_name("rect")).unwrap();
    assert_eq!(bg.attribute("fill"), Some("rgb(30,30,30)"));
}

#[test]
fn labels_can_be_suppressed() {
    let mut chart = Chart::new("quiet");
    chart.add_xy("s", vec![0.0, 1.0], vec![0.0, 1.0], None).unwrap();
    let opts = RenderOptions { draw_labels: false, ..RenderOptions::default() };
    let svg = chart.render_to_svg_string(&opts);
    assert!(!svg.contains("<text"));
}
