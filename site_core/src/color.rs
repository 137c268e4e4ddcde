//! Accent color derivation.
//!
//! Each specialty carries an author-chosen hex accent; the renderer derives
//! a lightened tile background (blend toward white at a fixed ratio) and a
//! translucent variant (alpha channel) from it. Both are pure numeric
//! transforms; an unparseable color falls back to a neutral grey so
//! rendering never fails on bad input.

/// Blend ratio kept from the original design: 15% accent, 85% white.
const SOFTEN_RATIO: f32 = 0.15;

/// Used when the stored color is not a 6-digit hex triplet.
const FALLBACK_RGB: (u8, u8, u8) = (0x99, 0x99, 0x99);

/// Parses `#RRGGBB` (leading `#` optional) into an RGB triplet.
pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Lightened tile background: the accent blended toward white.
///
/// `#FF0000` -> `rgb(255, 217, 217)`, deterministically.
pub fn soft_color(hex: &str) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or(FALLBACK_RGB);
    let soften = |c: u8| (f32::from(c) * SOFTEN_RATIO + 255.0 * (1.0 - SOFTEN_RATIO)).round() as u8;
    format!("rgb({}, {}, {})", soften(r), soften(g), soften(b))
}

/// Translucent variant of the accent, for borders and icon tiles.
pub fn with_alpha(hex: &str, alpha: f32) -> String {
    let (r, g, b) = parse_hex(hex).unwrap_or(FALLBACK_RGB);
    format!("rgba({r}, {g}, {b}, {alpha})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn soft_color_is_deterministic() {
        assert_eq!(soft_color("#FF0000"), "rgb(255, 217, 217)");
        assert_eq!(soft_color("#FF0000"), soft_color("#FF0000"));
    }

    #[test]
    fn soft_color_of_white_stays_white() {
        assert_eq!(soft_color("#FFFFFF"), "rgb(255, 255, 255)");
    }

    #[test]
    fn soft_color_of_black_is_the_fixed_grey_point() {
        // 0 * 0.15 + 255 * 0.85, rounded
        assert_eq!(soft_color("#000000"), "rgb(217, 217, 217)");
    }

    #[test]
    fn alpha_variant_keeps_the_raw_triplet() {
        assert_eq!(with_alpha("#8B5CF6", 0.08), "rgba(139, 92, 246, 0.08)");
        assert_eq!(with_alpha("8B5CF6", 0.2), "rgba(139, 92, 246, 0.2)");
    }

    #[test]
    fn invalid_hex_falls_back_instead_of_failing() {
        assert_eq!(soft_color("rebeccapurple"), soft_color("#999999"));
        assert_eq!(with_alpha("#12", 0.1), "rgba(153, 153, 153, 0.1)");
        assert_eq!(parse_hex("#GGGGGG"), None);
        assert_eq!(parse_hex("#éééééé"), None);
    }

    #[test]
    fn parse_accepts_bare_and_prefixed_forms() {
        assert_eq!(parse_hex("#FF8800"), Some((255, 136, 0)));
        assert_eq!(parse_hex("ff8800"), Some((255, 136, 0)));
    }
}
