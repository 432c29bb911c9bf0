//! Hex color parsing and darkening for shape rendering.
//!
//! Shapes carry CSS hex colors (`"#007BFF"` or the short `"#07F"` form).
//! Outline cells are drawn with a darkened variant of the base color, so the
//! parsed channels need to survive a round trip back to a CSS `rgba()`
//! string.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An 8-bit RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse a `#RGB` or `#RRGGBB` hex string (leading `#` optional).
    ///
    /// Returns `None` for any other length or for non-hex digits.
    #[must_use]
    pub fn parse(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let expanded: String;
        let hex = if hex.len() == 3 {
            expanded = hex.chars().flat_map(|c| [c, c]).collect();
            &expanded
        } else {
            hex
        };
        if hex.len() != 6 {
            return None;
        }
        let value = match u32::from_str_radix(hex, 16) {
            Ok(value) => value,
            Err(_) => return None,
        };
        Some(Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }

    /// Darken each channel by `fraction` (0.0 = unchanged, 1.0 = black).
    #[must_use]
    pub fn darken(self, fraction: f64) -> Self {
        let scale = |channel: u8| -> u8 {
            let scaled = (f64::from(channel) * (1.0 - fraction)).floor();
            scaled.clamp(0.0, 255.0) as u8
        };
        Self { r: scale(self.r), g: scale(self.g), b: scale(self.b) }
    }

    /// Format as a CSS `rgba()` string with the given alpha.
    #[must_use]
    pub fn to_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}
