// File: crates/plot-core/src/theme.rs
// Summary: Theme configuration (fonts, colors, margins, grid, tick formatting) and built-in presets.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::types::{Insets, Rgba};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontTheme {
    pub family: String,
    pub title_size: f32,
    pub title_bold: bool,
    pub label_size: f32,
    pub label_bold: bool,
    pub tick_size: f32,
    pub tick_bold: bool,
    pub legend_size: f32,
    pub legend_bold: bool,
}

impl Default for FontTheme {
    fn default() -> Self {
        Self {
            family: "SansSerif".to_string(),
            title_size: 16.0,
            title_bold: true,
            label_size: 14.0,
            label_bold: true,
            tick_size: 12.0,
            tick_bold: false,
            legend_size: 12.0,
            legend_bold: false,
        }
    }
}

impl FontTheme {
    fn sized(title: f32, label: f32, tick: f32, legend: f32) -> Self {
        Self { title_size: title, label_size: label, tick_size: tick, legend_size: legend, ..Self::default() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorTheme {
    pub background: Rgba,
    pub foreground: Rgba,
    pub grid_major: Rgba,
    pub grid_minor: Rgba,
    pub axis_border: Rgba,
    /// Auto-assigned series colors, cycled by index.
    pub palette: Vec<Rgba>,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            foreground: Rgba::BLACK,
            grid_major: Rgba::rgb(200, 200, 200),
            grid_minor: Rgba::rgb(230, 230, 230),
            axis_border: Rgba::BLACK,
            palette: vec![
                Rgba::rgb(31, 119, 180),  // blue
                Rgba::rgb(255, 127, 14),  // orange
                Rgba::rgb(44, 160, 44),   // green
                Rgba::rgb(214, 39, 40),   // red
                Rgba::rgb(148, 103, 189), // purple
                Rgba::rgb(140, 86, 75),   // brown
                Rgba::rgb(227, 119, 194), // pink
                Rgba::rgb(127, 127, 127), // gray
            ],
        }
    }
}

impl ColorTheme {
    /// Palette color at `index`, wrapping around. An empty palette yields the foreground.
    pub fn series_color(&self, index: usize) -> Rgba {
        if self.palette.is_empty() {
            return self.foreground;
        }
        self.palette[index % self.palette.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridTheme {
    pub show_major: bool,
    pub show_minor: bool,
    pub major_line_width: f32,
    pub minor_line_width: f32,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self { show_major: true, show_minor: false, major_line_width: 1.0, minor_line_width: 0.5 }
    }
}

/// Number formatting policy for tick labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisFormat {
    pub auto_clean: bool,
    pub max_decimals: u32,
    pub scientific_threshold: f64,
    pub show_trailing_zeros: bool,
}

impl Default for AxisFormat {
    fn default() -> Self {
        Self { auto_clean: true, max_decimals: 2, scientific_threshold: 1e6, show_trailing_zeros: false }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub fonts: FontTheme,
    pub colors: ColorTheme,
    pub margins: Insets,
    pub grid: GridTheme,
    pub axis_format: AxisFormat,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            fonts: FontTheme::default(),
            colors: ColorTheme::default(),
            margins: Insets::default(),
            grid: GridTheme::default(),
            axis_format: AxisFormat::default(),
        }
    }
}

impl Theme {
    /// Larger fonts and wider margins for slides.
    pub fn presentation() -> Self {
        Self {
            name: "presentation".to_string(),
            fonts: FontTheme::sized(20.0, 18.0, 14.0, 14.0),
            margins: Insets::new(100, 180, 80, 80),
            ..Self::default()
        }
    }

    /// Serif, grayscale and compact, for publications.
    pub fn paper() -> Self {
        Self {
            name: "paper".to_string(),
            fonts: FontTheme { family: "Serif".to_string(), ..FontTheme::sized(14.0, 12.0, 10.0, 10.0) },
            colors: ColorTheme {
                palette: vec![Rgba::BLACK, Rgba::rgb(100, 100, 100), Rgba::rgb(150, 150, 150)],
                ..ColorTheme::default()
            },
            margins: Insets::new(70, 140, 50, 50),
            ..Self::default()
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            colors: ColorTheme {
                background: Rgba::rgb(30, 30, 30),
                foreground: Rgba::rgb(224, 224, 224),
                grid_major: Rgba::rgb(80, 80, 80),
                grid_minor: Rgba::rgb(50, 50, 50),
                axis_border: Rgba::rgb(150, 150, 150),
                palette: vec![
                    Rgba::rgb(102, 194, 255),
                    Rgba::rgb(255, 170, 102),
                    Rgba::rgb(102, 255, 153),
                    Rgba::rgb(255, 102, 102),
                    Rgba::rgb(186, 153, 255),
                    Rgba::rgb(255, 204, 153),
                    Rgba::rgb(255, 153, 204),
                    Rgba::rgb(170, 170, 170),
                ],
            },
            ..Self::default()
        }
    }

    /// No grid, tighter margins.
    pub fn minimal() -> Self {
        Self {
            name: "minimal".to_string(),
            margins: Insets::new(60, 120, 40, 50),
            grid: GridTheme { show_major: false, show_minor: false, ..GridTheme::default() },
            ..Self::default()
        }
    }

    /// Parse a theme from JSON. Missing fields keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::default(),
        Theme::presentation(),
        Theme::paper(),
        Theme::dark(),
        Theme::minimal(),
    ]
}

/// Find a theme by its `name`, falling back to the default theme.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
