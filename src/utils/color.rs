use ratatui::style::Color;

/// Fallback when a colour string cannot be parsed
pub const DEFAULT_COLOR: Color = Color::Rgb(65, 128, 255);

/// Convert a `#RRGGBB` (or `RRGGBB`) hex string to a terminal colour
#[must_use]
pub fn convert_hex_color(color: &str) -> Color {
    parse_hex(color).unwrap_or(DEFAULT_COLOR)
}

fn parse_hex(color: &str) -> Option<Color> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
