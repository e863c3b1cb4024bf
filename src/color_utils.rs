/// Colour parsing and wheel slice colouring
use crate::errors::ConfigError;
use palette::Srgb;
use std::str::FromStr;

/// Slice colours of the wheel, cycled in order
pub const DEFAULT_WHEEL_COLOURS: [&str; 5] = ["#eeeee4", "#1e81b0", "#e28743", "#76b5c5", "#ffe1d5"];

/// Parse a hex colour string into sRGB components
/// Accepts #RRGGBB, RRGGBB, #RGB and RGB
pub fn parse_colour(colour_str: &str) -> Result<Srgb<u8>, ConfigError> {
    Srgb::<u8>::from_str(colour_str.trim()).map_err(|e| ConfigError::InvalidColour {
        value: colour_str.to_string(),
        reason: e.to_string(),
    })
}

/// Format a colour as #rrggbb for SVG attributes
pub fn to_hex(colour: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", colour.red, colour.green, colour.blue)
}

/// Normalize every colour string in a palette to #rrggbb
pub fn normalize_palette(colours: &[String]) -> Result<Vec<String>, ConfigError> {
    colours
        .iter()
        .map(|c| parse_colour(c).map(to_hex))
        .collect()
}

/// Colour of slice `index` when cycling through `palette`
pub fn slice_colour(palette: &[String], index: usize) -> Option<&str> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[index % palette.len()].as_str())
}

/// Slice count adjusted so the last slice never shares a colour with the first.
/// With `n % palette_len == 1` the cycle would wrap onto the first colour right
/// next to slice 0, so one more slice is added.
pub fn slice_count_for(requested: usize, palette_len: usize) -> usize {
    if palette_len > 1 && requested % palette_len == 1 {
        requested + 1
    } else {
        requested
    }
}
