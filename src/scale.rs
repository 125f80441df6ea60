use crate::ir::ProcessedItem;

/// Visual height of the tallest bar in world units, before the user's
/// height-scale factor is applied.
pub const H_UNIT: f64 = 10.0;

/// Global measure extremes for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    pub min: f64,
    pub max: f64,
}

impl Normalizer {
    /// Scan the items once; empty input collapses both extremes to 0.
    pub fn from_items(items: &[ProcessedItem]) -> Self {
        if items.is_empty() {
            return Normalizer { min: 0.0, max: 0.0 };
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for item in items {
            min = min.min(item.measure);
            max = max.max(item.measure);
        }
        Normalizer { min, max }
    }

    /// Map a measure to its normalized world height.
    ///
    /// The tallest measure maps to exactly `H_UNIT`. When the maximum is not
    /// positive the chart is flat and every value maps to 0; the layout step
    /// applies its own visibility floor.
    pub fn height_of(&self, value: f64) -> f64 {
        if self.max > 0.0 {
            value / self.max * H_UNIT
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Value;

    fn make_items(measures: &[f64]) -> Vec<ProcessedItem> {
        measures
            .iter()
            .enumerate()
            .map(|(i, &m)| ProcessedItem {
                category: Value::Text("X".to_string()),
                ordinal: Value::Number(i as f64),
                measure: m,
                category_index: 0,
                ordinal_index: i,
            })
            .collect()
    }

    #[test]
    fn test_extremes() {
        let n = Normalizer::from_items(&make_items(&[50.0, 200.0, 75.0]));
        assert_eq!(n.min, 50.0);
        assert_eq!(n.max, 200.0);
    }

    #[test]
    fn test_empty_input_collapses_to_zero() {
        let n = Normalizer::from_items(&[]);
        assert_eq!(n.min, 0.0);
        assert_eq!(n.max, 0.0);
    }

    #[test]
    fn test_max_maps_to_unit_height() {
        let n = Normalizer::from_items(&make_items(&[50.0, 200.0]));
        assert_eq!(n.height_of(200.0), H_UNIT);
        assert_eq!(n.height_of(50.0), 2.5);
    }

    #[test]
    fn test_zero_max_is_flat() {
        let n = Normalizer::from_items(&make_items(&[0.0, 0.0]));
        assert_eq!(n.height_of(0.0), 0.0);
        assert_eq!(n.height_of(123.0), 0.0);
    }

    #[test]
    fn test_negative_max_is_flat() {
        let n = Normalizer::from_items(&make_items(&[-5.0, -1.0]));
        assert_eq!(n.max, -1.0);
        assert_eq!(n.height_of(-1.0), 0.0);
    }

    #[test]
    fn test_negative_values_under_positive_max() {
        let n = Normalizer::from_items(&make_items(&[-50.0, 200.0]));
        assert_eq!(n.height_of(-50.0), -2.5);
    }
}
