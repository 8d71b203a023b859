//! Color string handling.
//!
//! Color fields travel through the editor as raw strings because sliders,
//! text inputs, and pickers all produce slightly different spellings of
//! the same color (`#ABCDEF`, `#abcdef `, ...). The document keeps the
//! spelling the user typed; comparisons normalize first so a re-spelled
//! color never counts as a change.

/// Canonical form of a color string: trimmed and lowercased.
pub fn normalize_color(color: &str) -> String {
    color.trim().to_lowercase()
}

/// Whether two color strings name the same color after normalization.
/// Allocation-free equivalent of comparing `normalize_color` outputs.
pub fn colors_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parse a hex color string (`#RGB` or `#RRGGBB`, leading `#` optional)
/// into 8-bit RGB channels.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    let bytes = hex.as_bytes();

    match bytes.len() {
        3 => {
            let r = hex_val(bytes[0])?;
            let g = hex_val(bytes[1])?;
            let b = hex_val(bytes[2])?;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = hex_val(bytes[0])? * 16 + hex_val(bytes[1])?;
            let g = hex_val(bytes[2])? * 16 + hex_val(bytes[3])?;
            let b = hex_val(bytes[4])? * 16 + hex_val(bytes[5])?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Pick a readable foreground for the given background color.
///
/// Uses the Rec. 709 luma weights with a fixed threshold; anything that
/// fails to parse is treated as dark, giving the light foreground.
pub fn contrast_color(background: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex(background) else {
        return "#ffffff";
    };

    let luminance = 0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b);
    if luminance > 150.0 { "#111827" } else { "#ffffff" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_color("  #ABCDEF "), "#abcdef");
    }

    #[test]
    fn match_ignores_case_and_whitespace() {
        assert!(colors_match("#ABCDEF", "#abcdef "));
        assert!(colors_match(" #FFF", "#fff"));
        assert!(!colors_match("#abcdef", "#abcdee"));
    }

    #[test]
    fn parse_shorthand_expands_digits() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#abc"), Some((170, 187, 204)));
    }

    #[test]
    fn parse_full_form() {
        assert_eq!(parse_hex("#1d4ed8"), Some((0x1d, 0x4e, 0xd8)));
        assert_eq!(parse_hex("1D4ED8"), Some((0x1d, 0x4e, 0xd8)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("oklch(0.5 0.1 200)"), None);
    }

    #[test]
    fn contrast_flips_on_luminance() {
        assert_eq!(contrast_color("#000000"), "#ffffff");
        assert_eq!(contrast_color("#ffffff"), "#111827");
        // Orange preset background is bright enough for dark text.
        assert_eq!(contrast_color("#ea580c"), "#ffffff");
        assert_eq!(contrast_color("#fff7ed"), "#111827");
    }

    #[test]
    fn contrast_falls_back_to_light_on_garbage() {
        assert_eq!(contrast_color("not-a-color"), "#ffffff");
    }
}
