// File: crates/plot-core/tests/chart.rs
// Purpose: Chart model: palette assignment, incremental and full axis ranges, save dispatch.

use plot_core::theme::Theme;
use plot_core::{Chart, PlotError, Rgba, Series};

fn out_dir(name: &str) -> std::path::PathBuf {
    let dir = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("chart_tests").join(name);
    std::fs::create_dir_all(&dir).expect("create test dir");
    dir
}

#[test]
fn add_series_round_trip() {
    let mut chart = Chart::new("T");
    chart.add_series(Series::new("s", vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap());

    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 2.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 4.0));
    assert_eq!(chart.series().len(), 1);
    assert_eq!(chart.series()[0].style.color, Some(chart.theme.colors.palette[0]));
    assert_eq!(chart.palette_cursor(), 1);
}

#[test]
fn explicit_color_is_kept_and_does_not_advance_palette() {
    let mut chart = Chart::new("T");
    // Same blue a caller might pick on purpose; it must not be treated as "unset".
    chart.add_series(Series::new("blue", vec![0.0], vec![0.0]).unwrap().with_color(Rgba::BLUE));
    chart.add_series(Series::new("auto", vec![1.0], vec![1.0]).unwrap());

    assert_eq!(chart.series()[0].style.color, Some(Rgba::BLUE));
    assert_eq!(chart.series()[1].style.color, Some(chart.theme.colors.palette[0]));
    assert_eq!(chart.palette_cursor(), 1);
}

#[test]
fn palette_cycles_per_chart() {
    let mut chart = Chart::new("cycle").with_theme(Theme::paper());
    for i in 0..5 {
        chart.add_xy(format!("s{i}"), vec![0.0], vec![i as f64], None).unwrap();
    }
    let palette = &chart.theme.colors.palette;
    let colors: Vec<_> = chart.series().iter().map(|s| s.style.color.unwrap()).collect();
    assert_eq!(colors, vec![palette[0], palette[1], palette[2], palette[0], palette[1]]);

    // A second chart starts from the beginning of its own palette.
    let mut other = Chart::new("other").with_theme(Theme::paper());
    other.add_xy("first", vec![0.0], vec![0.0], None).unwrap();
    assert_eq!(other.series()[0].style.color, Some(other.theme.colors.palette[0]));
    assert_eq!(chart.palette_cursor(), 5);
}

#[test]
fn add_xy_validates_lengths() {
    let mut chart = Chart::new("T");
    let err = chart.add_xy("bad", vec![0.0, 1.0], vec![0.0], Some(Rgba::BLACK)).unwrap_err();
    assert!(matches!(err, PlotError::LengthMismatch { .. }));
    assert!(chart.series().is_empty());
}

#[test]
fn incremental_ranges_widen_across_series() {
    let mut chart = Chart::new("T");
    chart.add_xy("a", vec![2.0, 3.0], vec![10.0, 20.0], None).unwrap();
    chart.add_xy("b", vec![-1.0, 0.0], vec![15.0, 16.0], None).unwrap();
    chart.add_xy("empty", vec![], vec![], None).unwrap();
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (-1.0, 3.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (10.0, 20.0));
}

#[test]
fn update_axes_ranges_can_shrink() {
    let mut chart = Chart::new("anim");
    chart.add_xy("wave", vec![0.0, 1.0, 2.0], vec![-5.0, 0.0, 5.0], None).unwrap();

    let s = &mut chart.series_mut()[0];
    s.y_mut().copy_from_slice(&[-1.0, 0.0, 1.0]);
    // Incremental ranges are stale until an explicit recompute.
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-5.0, 5.0));

    chart.update_axes_ranges();
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (-1.0, 1.0));
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 2.0));
}

#[test]
fn update_axes_ranges_without_data_falls_back_to_unit_range() {
    let mut chart = Chart::new("nothing");
    chart.x_axis.min = 3.0;
    chart.x_axis.max = 9.0;
    chart.update_axes_ranges();
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 1.0));
}

#[test]
fn series_view_is_live() {
    let mut chart = Chart::new("live");
    chart.add_xy("s", vec![0.0, 1.0], vec![0.0, 1.0], None).unwrap();
    chart.series_named_mut("s").unwrap().y_mut()[0] = 42.0;
    assert_eq!(chart.series()[0].y()[0], 42.0);
    assert!(chart.series_named("missing").is_none());
}

#[test]
fn labels_propagate_to_axes() {
    let chart = Chart::new("T").with_labels("time", "value");
    assert_eq!(chart.xlabel, "time");
    assert_eq!(chart.x_axis.label, "time");
    assert_eq!(chart.y_axis.label, "value");
}

#[test]
fn save_picks_backend_from_extension() {
    let mut chart = Chart::new("save");
    chart.add_xy("s", vec![0.0, 1.0], vec![0.0, 1.0], None).unwrap();
    let dir = out_dir("save");

    let svg = dir.join("chart.SVG");
    chart.save(&svg, 400, 300).expect("save svg");
    let text = std::fs::read_to_string(&svg).expect("read svg");
    assert!(text.starts_with("<?xml"));

    let png = dir.join("chart.png");
    chart.save(&png, 400, 300).expect("save png");
    let bytes = std::fs::read(&png).expect("read png");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let forced = dir.join("forced.png");
    chart.save_svg(&forced, 400, 300).expect("save_svg");
    assert!(std::fs::read_to_string(&forced).expect("read forced").contains("<svg"));
}

#[test]
fn io_failures_propagate() {
    let chart = Chart::new("io");
    let dir = out_dir("io");
    let blocker = dir.join("blocker");
    std::fs::write(&blocker, b"not a directory").expect("write blocker");

    let err = chart.save(blocker.join("out.svg"), 200, 200).unwrap_err();
    assert!(matches!(err, PlotError::Io(_)), "got {err:?}");
}
