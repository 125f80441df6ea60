// Library exports for barscape

pub mod csv_reader;
pub mod data;
pub mod error;
pub mod palette;

// Pipeline phases
pub mod ir;
pub mod resolve;
pub mod transform;
pub mod scale;
pub mod compiler;
pub mod ticks;

pub use compiler::compile_scene;
pub use data::{Dataset, Value};
pub use error::{ChartError, Result};
pub use ir::Scene;

use serde::Deserialize;

/// Demo dataset: GDP of nine major economies, 2010-2024.
#[cfg(feature = "builtin-data")]
pub const DEMO_CSV: &str = include_str!("../data/g7_gdp.csv");

/// Scene configuration.
///
/// Numeric ranges are the calling UI's contract and are not re-validated
/// here; the theme name is the one value checked at compile time.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneOptions {
    #[serde(default = "default_spacing")]
    pub ordinal_spacing: f64,
    #[serde(default = "default_spacing")]
    pub category_spacing: f64,
    #[serde(default = "default_bar_thickness")]
    pub bar_thickness: f64,
    #[serde(default = "default_height_scale")]
    pub height_scale: f64,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_dark_mode")]
    pub dark_mode: bool,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_show_grid")]
    pub show_grid: bool,
    #[serde(default)]
    pub title: Option<String>,
}

fn default_spacing() -> f64 { 2.0 }
fn default_bar_thickness() -> f64 { 0.6 }
fn default_height_scale() -> f64 { 1.0 }
fn default_theme() -> String { "Playful".to_string() }
fn default_dark_mode() -> bool { true }
fn default_tick_count() -> usize { 5 }
fn default_show_grid() -> bool { true }

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            ordinal_spacing: 2.0,
            category_spacing: 2.0,
            bar_thickness: 0.6,
            height_scale: 1.0,
            theme: "Playful".to_string(),
            dark_mode: true,
            tick_count: 5,
            show_grid: true,
            title: None,
        }
    }
}
