use std::cmp::Ordering;
use std::collections::HashSet;

use crate::data::{Dataset, Value};
use crate::ir::{AxisIndex, ColumnRoles, ProcessedItem};

/// Build the category and ordinal axis indexes from the dataset.
///
/// Categories keep first-occurrence order. Ordinals are deduplicated and then
/// sorted ascending: numerically when every distinct value is a number,
/// lexicographically over display strings otherwise.
pub fn build_axes(data: &Dataset, roles: &ColumnRoles) -> (AxisIndex, AxisIndex) {
    let categories = distinct_in_order(data, roles.category);
    let mut ordinals = distinct_in_order(data, roles.ordinal);
    sort_ordinals(&mut ordinals);
    (AxisIndex::new(categories), AxisIndex::new(ordinals))
}

/// Pair each dataset row with its axis positions.
///
/// The measure cell is coerced to a number; non-numeric text becomes 0.
/// One item per row: duplicate category/ordinal pairs are kept, not
/// aggregated.
pub fn process_rows(
    data: &Dataset,
    roles: &ColumnRoles,
    categories: &AxisIndex,
    ordinals: &AxisIndex,
) -> Vec<ProcessedItem> {
    let mut items = Vec::with_capacity(data.rows.len());
    for row in &data.rows {
        let category = cell(row, roles.category);
        let ordinal = cell(row, roles.ordinal);
        let measure = row.get(roles.measure).map(|v| v.coerce_number()).unwrap_or(0.0);
        // Both values were just indexed from the same column, so the lookups
        // cannot miss; 0 is a safe fallback rather than a panic path.
        let category_index = categories.offset_of(&category).unwrap_or(0);
        let ordinal_index = ordinals.offset_of(&ordinal).unwrap_or(0);
        items.push(ProcessedItem {
            category,
            ordinal,
            measure,
            category_index,
            ordinal_index,
        });
    }
    items
}

fn cell(row: &[Value], col: usize) -> Value {
    row.get(col).cloned().unwrap_or_else(|| Value::Text(String::new()))
}

/// Distinct values of one column, in first-occurrence order.
fn distinct_in_order(data: &Dataset, col: usize) -> Vec<Value> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    for row in &data.rows {
        if let Some(v) = row.get(col) {
            if seen.insert(v.clone()) {
                order.push(v.clone());
            }
        }
    }
    order
}

fn sort_ordinals(values: &mut Vec<Value>) {
    let all_numeric = values.iter().all(|v| matches!(v, Value::Number(_)));
    if all_numeric {
        values.sort_by(|a, b| {
            let fa = a.as_number().unwrap_or(0.0);
            let fb = b.as_number().unwrap_or(0.0);
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal)
        });
    } else {
        values.sort_by_cached_key(|v| v.to_string());
    }
}
