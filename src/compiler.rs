use crate::data::{Dataset, Value};
use crate::error::Result;
use crate::ir::{AxisEntry, BarSpec, GridBounds, GridRing, ProcessedItem, Scene};
use crate::palette::{color_for, theme_palette};
use crate::resolve::resolve_columns;
use crate::scale::Normalizer;
use crate::ticks::{build_ticks, format_grouped, grid_ring};
use crate::transform::{build_axes, process_rows};
use crate::SceneOptions;

/// Minimum visible bar height, so zero rows do not vanish entirely.
const HEIGHT_FLOOR: f64 = 0.1;
/// Padding beyond the outermost bar anchors on both ground axes.
const BOUNDS_PADDING: f64 = 2.0;
/// Extra span given to the floor grid beyond the bar field.
const FLOOR_MARGIN: f64 = 5.0;

// =============================================================================
// Layout helpers
// =============================================================================

/// Centered offset of slot `index` on an axis of `count` slots: the whole
/// axis is symmetric around 0 for any count, including a single slot.
fn centered_offset(index: usize, count: usize, spacing: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * spacing
}

/// World anchor of one bar. Ordinals run along X, categories along Z; bars
/// rise from the ground plane, so Y is always 0.
pub fn bar_position(
    item: &ProcessedItem,
    ordinal_count: usize,
    category_count: usize,
    ordinal_spacing: f64,
    category_spacing: f64,
) -> [f64; 3] {
    [
        centered_offset(item.ordinal_index, ordinal_count, ordinal_spacing),
        0.0,
        centered_offset(item.category_index, category_count, category_spacing),
    ]
}

/// Chart extremes: outermost anchor on each axis plus fixed padding, and the
/// floor-grid span covering the longer of the two axes.
pub fn grid_bounds(
    ordinal_count: usize,
    category_count: usize,
    ordinal_spacing: f64,
    category_spacing: f64,
) -> GridBounds {
    let x_extent = ordinal_count.saturating_sub(1) as f64 / 2.0 * ordinal_spacing;
    let z_extent = category_count.saturating_sub(1) as f64 / 2.0 * category_spacing;
    let floor_span = (ordinal_count as f64 * ordinal_spacing)
        .max(category_count as f64 * category_spacing)
        + FLOOR_MARGIN;
    GridBounds {
        x_start: -x_extent - BOUNDS_PADDING,
        x_end: x_extent + BOUNDS_PADDING,
        z_start: -z_extent - BOUNDS_PADDING,
        z_end: z_extent + BOUNDS_PADDING,
        floor_span,
    }
}

fn axis_entries(values: &[Value], spacing: f64) -> Vec<AxisEntry> {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, v)| AxisEntry {
            value: v.clone(),
            offset: centered_offset(i, count, spacing),
        })
        .collect()
}

// =============================================================================
// Scene assembly
// =============================================================================

/// Run the full pipeline: resolve column roles, build axes, normalize, lay
/// out bars, and assemble the scene for an external renderer.
///
/// A dataset with zero rows compiles to an empty scene rather than an error;
/// the CSV front door is where empty input gets rejected. Theme resolution
/// happens before any layout, so a bad theme never yields a partial scene.
pub fn compile_scene(data: &Dataset, options: &SceneOptions) -> Result<Scene> {
    let palette = theme_palette(&options.theme, options.dark_mode)?;
    let roles = resolve_columns(data)?;
    let (categories, ordinals) = build_axes(data, &roles);
    let items = process_rows(data, &roles, &categories, &ordinals);
    let normalizer = Normalizer::from_items(&items);

    let ordinal_count = ordinals.len();
    let category_count = categories.len();

    let mut bars = Vec::with_capacity(items.len());
    for (id, item) in items.iter().enumerate() {
        let position = bar_position(
            item,
            ordinal_count,
            category_count,
            options.ordinal_spacing,
            options.category_spacing,
        );
        let height = (normalizer.height_of(item.measure) * options.height_scale).max(HEIGHT_FLOOR);
        bars.push(BarSpec {
            id,
            position,
            height,
            color: color_for(palette, item.category_index).to_string(),
            label: format!("{} ({})", item.category, item.ordinal),
            display_value: format_grouped(item.measure),
        });
    }

    let category_axis = axis_entries(categories.values(), options.category_spacing);
    let ordinal_axis = axis_entries(ordinals.values(), options.ordinal_spacing);

    let ticks = build_ticks(normalizer.max, options.height_scale, options.tick_count);
    let bounds = grid_bounds(
        ordinal_count,
        category_count,
        options.ordinal_spacing,
        options.category_spacing,
    );
    let grid_rings: Vec<GridRing> = if options.show_grid {
        ticks.iter().map(|t| grid_ring(&bounds, t.height)).collect()
    } else {
        Vec::new()
    };

    let mut colors = serde_json::Map::new();
    for (i, value) in categories.values().iter().enumerate() {
        colors.insert(
            value.to_string(),
            serde_json::Value::String(color_for(palette, i).to_string()),
        );
    }

    Ok(Scene {
        title: options.title.clone(),
        items,
        bars,
        category_axis,
        ordinal_axis,
        ticks,
        grid_rings,
        bounds,
        colors,
        bar_thickness: options.bar_thickness,
        max_value: normalizer.max,
        min_value: normalizer.min,
    })
}
