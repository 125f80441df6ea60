use std::collections::HashMap;

use serde::Serialize;

use crate::data::Value;

// =============================================================================
// Phase 1: Resolution
// =============================================================================

/// Result of resolving the three chart roles against the CSV headers
/// (but not data values yet).
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRoles {
    pub category: usize,
    pub ordinal: usize,
    pub measure: usize,
    pub category_name: String,
    pub ordinal_name: String,
    pub measure_name: String,
}

// =============================================================================
// Phase 2: Transformation
// =============================================================================

/// A bijection between distinct axis values and their zero-based positions.
/// `order` is the index -> value direction; the map answers value -> index.
#[derive(Debug, Clone)]
pub struct AxisIndex {
    order: Vec<Value>,
    index: HashMap<Value, usize>,
}

impl AxisIndex {
    /// Build from an already-ordered, already-deduplicated value list.
    pub fn new(order: Vec<Value>) -> Self {
        let index = order
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        AxisIndex { order, index }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn offset_of(&self, value: &Value) -> Option<usize> {
        self.index.get(value).copied()
    }

    pub fn values(&self) -> &[Value] {
        &self.order
    }
}

/// One dataset row bound to its axis positions, measure already coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedItem {
    pub category: Value,
    pub ordinal: Value,
    pub measure: f64,
    pub category_index: usize,
    pub ordinal_index: usize,
}

// =============================================================================
// Phase 3: Layout
// =============================================================================

/// Everything the renderer needs to draw one bar.
/// `position[1]` is always 0: bars rise from the ground plane, so height is
/// an extent rather than a translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSpec {
    pub id: usize,
    pub position: [f64; 3],
    pub height: f64,
    pub color: String,
    pub label: String,
    pub display_value: String,
}

/// One measure-axis tick: the rounded real value, its normalized height, and
/// a thousands-grouped label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub height: f64,
    pub label: String,
}

/// Chart extremes with fixed padding, plus the floor-grid span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridBounds {
    pub x_start: f64,
    pub x_end: f64,
    pub z_start: f64,
    pub z_end: f64,
    pub floor_span: f64,
}

/// An axis label and its centered coordinate along its own axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisEntry {
    pub value: Value,
    pub offset: f64,
}

/// Closed rectangle loop drawn at one tick height: four corners plus the
/// repeated starting point.
pub type GridRing = [[f64; 3]; 5];

// =============================================================================
// Phase 4: Scene
// =============================================================================

/// The full scene description an external renderer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: Option<String>,
    pub items: Vec<ProcessedItem>,
    pub bars: Vec<BarSpec>,
    pub category_axis: Vec<AxisEntry>,
    pub ordinal_axis: Vec<AxisEntry>,
    pub ticks: Vec<Tick>,
    pub grid_rings: Vec<GridRing>,
    pub bounds: GridBounds,
    pub colors: serde_json::Map<String, serde_json::Value>,
    pub bar_thickness: f64,
    pub max_value: f64,
    pub min_value: f64,
}
