//! Border color parsing: hex (#RGB, #RRGGBB, #RRGGBBAA) and named colors.

use image::Rgba;

use crate::error::SheetError;

/// Named colors accepted by `--border_color`, sorted for binary search.
/// Values follow the CSS3 definitions (note: `green` is 0,128,0).
const NAMED_COLORS: &[(&str, [u8; 4])] = &[
    ("black", [0, 0, 0, 255]),
    ("blue", [0, 0, 255, 255]),
    ("brown", [165, 42, 42, 255]),
    ("cyan", [0, 255, 255, 255]),
    ("gray", [128, 128, 128, 255]),
    ("green", [0, 128, 0, 255]),
    ("grey", [128, 128, 128, 255]),
    ("lime", [0, 255, 0, 255]),
    ("magenta", [255, 0, 255, 255]),
    ("maroon", [128, 0, 0, 255]),
    ("navy", [0, 0, 128, 255]),
    ("olive", [128, 128, 0, 255]),
    ("orange", [255, 165, 0, 255]),
    ("pink", [255, 192, 203, 255]),
    ("purple", [128, 0, 128, 255]),
    ("red", [255, 0, 0, 255]),
    ("silver", [192, 192, 192, 255]),
    ("teal", [0, 128, 128, 255]),
    ("transparent", [0, 0, 0, 0]),
    ("white", [255, 255, 255, 255]),
    ("yellow", [255, 255, 0, 255]),
];

/// Parse a color string into an RGBA pixel.
///
/// Accepts a named color (case-insensitive) or hex with an optional leading
/// `#`: `RGB`, `RRGGBB`, or `RRGGBBAA`. Three- and six-digit forms get a
/// fully opaque alpha.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, SheetError> {
    let trimmed = s.trim();

    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if let Some(color) = parse_hex(hex) {
        return Ok(color);
    }

    let lower = trimmed.to_ascii_lowercase();
    NAMED_COLORS
        .binary_search_by_key(&lower.as_str(), |&(name, _)| name)
        .ok()
        .map(|idx| Rgba(NAMED_COLORS[idx].1))
        .ok_or_else(|| SheetError::UnknownColor(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let r = expand_nibble(hex.as_bytes()[0])?;
            let g = expand_nibble(hex.as_bytes()[1])?;
            let b = expand_nibble(hex.as_bytes()[2])?;
            Some(Rgba([r, g, b, 255]))
        }
        6 => {
            let r = parse_byte(&hex[0..2])?;
            let g = parse_byte(&hex[2..4])?;
            let b = parse_byte(&hex[4..6])?;
            Some(Rgba([r, g, b, 255]))
        }
        8 => {
            let r = parse_byte(&hex[0..2])?;
            let g = parse_byte(&hex[2..4])?;
            let b = parse_byte(&hex[4..6])?;
            let a = parse_byte(&hex[6..8])?;
            Some(Rgba([r, g, b, a]))
        }
        _ => None,
    }
}

/// Expand a single hex digit: 'f' -> 0xFF, 'a' -> 0xAA
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(s: &str) -> Option<u8> {
    let hi = hex_val(s.as_bytes()[0])?;
    let lo = hex_val(s.as_bytes()[1])?;
    Some(hi << 4 | lo)
}
