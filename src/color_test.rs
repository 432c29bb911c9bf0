use super::*;

// --- parse ---

#[test]
fn parse_six_digit_hex() {
    let c = Rgb::parse("#007BFF").unwrap();
    assert_eq!(c, Rgb { r: 0x00, g: 0x7B, b: 0xFF });
}

#[test]
fn parse_without_hash() {
    assert_eq!(Rgb::parse("FF0000").unwrap(), Rgb { r: 255, g: 0, b: 0 });
}

#[test]
fn parse_short_hex_expands_digits() {
    // #07F == #0077FF
    assert_eq!(Rgb::parse("#07F").unwrap(), Rgb { r: 0x00, g: 0x77, b: 0xFF });
}

#[test]
fn parse_lowercase() {
    assert_eq!(Rgb::parse("#aabbcc").unwrap(), Rgb { r: 0xAA, g: 0xBB, b: 0xCC });
}

#[test]
fn parse_rejects_wrong_length() {
    assert!(Rgb::parse("#12345").is_none());
    assert!(Rgb::parse("#1234567").is_none());
    assert!(Rgb::parse("").is_none());
}

#[test]
fn parse_rejects_non_hex_digits() {
    assert!(Rgb::parse("#GGGGGG").is_none());
    assert!(Rgb::parse("not-a-color").is_none());
}

// --- darken ---

#[test]
fn darken_scales_each_channel() {
    let c = Rgb { r: 0, g: 123, b: 255 }.darken(0.3);
    // floor(0 * 0.7) = 0, floor(123 * 0.7) = 86, floor(255 * 0.7) = 178
    assert_eq!(c, Rgb { r: 0, g: 86, b: 178 });
}

#[test]
fn darken_zero_fraction_is_identity() {
    let c = Rgb { r: 10, g: 20, b: 30 };
    assert_eq!(c.darken(0.0), c);
}

#[test]
fn darken_full_fraction_is_black() {
    assert_eq!(Rgb { r: 255, g: 255, b: 255 }.darken(1.0), Rgb { r: 0, g: 0, b: 0 });
}

// --- to_rgba ---

#[test]
fn to_rgba_formats_channels_and_alpha() {
    let s = Rgb { r: 1, g: 2, b: 3 }.to_rgba(0.5);
    assert_eq!(s, "rgba(1,2,3,0.5)");
}

#[test]
fn to_rgba_full_alpha() {
    let s = Rgb { r: 0, g: 123, b: 255 }.to_rgba(1.0);
    assert_eq!(s, "rgba(0,123,255,1)");
}
