//! Named theme definitions for bar colors.
//!
//! Each theme carries a dark-mode and a light-mode variant of eight hex
//! colors; categories beyond the eighth reuse colors cyclically.

use crate::error::{ChartError, Result};

// =============================================================================
// Dark-mode palettes
// =============================================================================

/// Vibrant yellow, orange, red, green, cyan, purple, magenta, indigo.
pub const PLAYFUL_DARK: &[&str] = &[
    "#FFEA00", "#FF9100", "#FF3D00", "#00E676",
    "#00B0FF", "#651FFF", "#D500F9", "#3D5AFE",
];

pub const OCEAN_DARK: &[&str] = &[
    "#48dbfb", "#0abde3", "#54a0ff", "#5f27cd",
    "#48dbfb", "#0abde3", "#54a0ff", "#5f27cd",
];

pub const NATURE_DARK: &[&str] = &[
    "#55efc4", "#00b894", "#81ecec", "#00cec9",
    "#55efc4", "#00b894", "#81ecec", "#00cec9",
];

pub const SUNSET_DARK: &[&str] = &[
    "#f1c40f", "#f39c12", "#e67e22", "#d35400",
    "#f1c40f", "#f39c12", "#e67e22", "#d35400",
];

pub const BERRY_DARK: &[&str] = &[
    "#fd79a8", "#e84393", "#a29bfe", "#6c5ce7",
    "#fd79a8", "#e84393", "#a29bfe", "#6c5ce7",
];

pub const MONO_DARK: &[&str] = &[
    "#b2bec3", "#dfe6e9", "#636e72", "#b2bec3",
    "#dfe6e9", "#636e72", "#b2bec3", "#dfe6e9",
];

// =============================================================================
// Light-mode palettes
// =============================================================================

/// The playful colors stay vibrant in light mode too.
pub const PLAYFUL_LIGHT: &[&str] = PLAYFUL_DARK;

/// Deeper blues.
pub const OCEAN_LIGHT: &[&str] = &[
    "#00a8ff", "#0097e6", "#273c75", "#192a56",
    "#00a8ff", "#0097e6", "#273c75", "#192a56",
];

/// Stronger greens and teals.
pub const NATURE_LIGHT: &[&str] = &[
    "#00b894", "#00cec9", "#0984e3", "#6c5ce7",
    "#00b894", "#00cec9", "#0984e3", "#6c5ce7",
];

/// Darker warm tones.
pub const SUNSET_LIGHT: &[&str] = &[
    "#e1b12c", "#e67e22", "#d35400", "#c0392b",
    "#e1b12c", "#e67e22", "#d35400", "#c0392b",
];

/// Deep pink and purple.
pub const BERRY_LIGHT: &[&str] = &[
    "#e84393", "#d63031", "#6c5ce7", "#2d3436",
    "#e84393", "#d63031", "#6c5ce7", "#2d3436",
];

/// Darker mono.
pub const MONO_LIGHT: &[&str] = &[
    "#2d3436", "#636e72", "#b2bec3", "#dfe6e9",
    "#2d3436", "#636e72", "#b2bec3", "#dfe6e9",
];

// =============================================================================
// Lookup
// =============================================================================

/// Theme names in display form, for error messages and CLI help.
pub const THEME_NAMES: &[&str] = &["Playful", "Ocean", "Nature", "Sunset", "Berry", "Mono"];

/// Look up a theme palette by name (case-insensitive).
///
/// Unknown names are a configuration error; layout must not start with a
/// half-resolved theme.
pub fn theme_palette(name: &str, dark_mode: bool) -> Result<&'static [&'static str]> {
    let palette = match name.to_lowercase().as_str() {
        "playful" => {
            if dark_mode {
                PLAYFUL_DARK
            } else {
                PLAYFUL_LIGHT
            }
        }
        "ocean" => {
            if dark_mode {
                OCEAN_DARK
            } else {
                OCEAN_LIGHT
            }
        }
        "nature" => {
            if dark_mode {
                NATURE_DARK
            } else {
                NATURE_LIGHT
            }
        }
        "sunset" => {
            if dark_mode {
                SUNSET_DARK
            } else {
                SUNSET_LIGHT
            }
        }
        "berry" => {
            if dark_mode {
                BERRY_DARK
            } else {
                BERRY_LIGHT
            }
        }
        "mono" => {
            if dark_mode {
                MONO_DARK
            } else {
                MONO_LIGHT
            }
        }
        _ => {
            return Err(ChartError::Config(format!(
                "unknown theme '{}' (expected one of: {})",
                name,
                THEME_NAMES.join(", "),
            )))
        }
    };
    Ok(palette)
}

/// Color for one category position; positions past the palette end wrap
/// around.
pub fn color_for(palette: &'static [&'static str], category_index: usize) -> &'static str {
    palette[category_index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_lookup() {
        assert_eq!(theme_palette("Playful", true).unwrap(), PLAYFUL_DARK);
        assert_eq!(theme_palette("ocean", true).unwrap(), OCEAN_DARK);
        assert_eq!(theme_palette("OCEAN", false).unwrap(), OCEAN_LIGHT);
        assert!(theme_palette("neon", true).is_err());
    }

    #[test]
    fn test_unknown_theme_is_config_error() {
        let err = theme_palette("neon", true).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
        assert!(err.to_string().contains("neon"));
        assert!(err.to_string().contains("Playful"));
    }

    #[test]
    fn test_every_theme_has_eight_colors() {
        for name in THEME_NAMES {
            for dark in [true, false] {
                let palette = theme_palette(name, dark).unwrap();
                assert_eq!(palette.len(), 8, "{} dark={}", name, dark);
            }
        }
    }

    #[test]
    fn test_dark_and_light_differ_except_playful() {
        assert_eq!(theme_palette("Playful", true).unwrap(), theme_palette("Playful", false).unwrap());
        assert_ne!(theme_palette("Mono", true).unwrap(), theme_palette("Mono", false).unwrap());
    }

    #[test]
    fn test_color_for_cycles() {
        let palette = theme_palette("Playful", true).unwrap();
        assert_eq!(color_for(palette, 0), "#FFEA00");
        assert_eq!(color_for(palette, 7), "#3D5AFE");
        assert_eq!(color_for(palette, 8), color_for(palette, 0));
        assert_eq!(color_for(palette, 19), color_for(palette, 3));
    }
}
