use crate::ir::{GridBounds, GridRing, Tick};
use crate::scale::H_UNIT;

/// Evenly spaced measure-axis ticks between 0 and `max`, inclusive.
///
/// Produces `count + 1` entries; the real value is rounded to the nearest
/// integer and the normalized height is derived from that rounded value.
/// A non-positive maximum (or a zero count) yields no ticks at all.
pub fn build_ticks(max: f64, height_scale: f64, count: usize) -> Vec<Tick> {
    if max <= 0.0 || count == 0 {
        return Vec::new();
    }
    let mut ticks = Vec::with_capacity(count + 1);
    for i in 0..=count {
        let value = ((max / count as f64) * i as f64).round();
        let height = value / max * H_UNIT * height_scale;
        ticks.push(Tick {
            value,
            height,
            label: format_grouped(value),
        });
    }
    ticks
}

/// The closed rectangle loop drawn at one tick height: four corners plus the
/// repeated start so a renderer can draw it as a single line strip.
pub fn grid_ring(bounds: &GridBounds, y: f64) -> GridRing {
    [
        [bounds.x_start, y, bounds.z_start],
        [bounds.x_end, y, bounds.z_start],
        [bounds.x_end, y, bounds.z_end],
        [bounds.x_start, y, bounds.z_end],
        [bounds.x_start, y, bounds.z_start],
    ]
}

/// Render a number with comma thousands grouping, at most three fractional
/// digits, and trailing fractional zeros trimmed.
pub fn format_grouped(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let (sign, rest) = match formatted.strip_prefix('-') {
        Some(r) => ("-", r),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (rest, ""),
    };
    let grouped = group_thousands(int_part);
    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
