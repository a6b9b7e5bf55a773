//! sRGB color values for widget decoration.
//!
//! The primary type is [`Color`], an sRGB triple with an opacity channel.
//! Colors can be written as component values, as compile-time hex literals
//! via [`Color::srgb_hex`], or parsed at runtime with [`Color::try_srgb_hex`].

mod parse;

pub use parse::ColorParseError;

/// An sRGB color with an opacity channel.
///
/// Opacity ranges from `0.0` (fully transparent) to `1.0` (fully opaque).
///
/// # Examples
///
/// ```
/// use adorn_color::Color;
///
/// let coral = Color::srgb(0xff, 0x7f, 0x50);
/// let translucent = coral.with_opacity(0.5);
/// assert_eq!(Color::srgb_hex("#ff7f50"), coral);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red component.
    pub red: u8,
    /// The green component.
    pub green: u8,
    /// The blue component.
    pub blue: u8,
    /// The opacity, from `0.0` to `1.0`.
    pub opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Creates a fully opaque color from sRGB components.
    #[must_use]
    pub const fn srgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// Creates a color from sRGB components and an opacity value.
    #[must_use]
    pub const fn srgb_with_opacity(red: u8, green: u8, blue: u8, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Creates a color from a six-digit hex string such as `"#1a2b3c"`,
    /// `"0x1a2b3c"` or `"1a2b3c"`.
    ///
    /// Usable in const contexts.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid six-digit hex color. Use
    /// [`Color::try_srgb_hex`] for untrusted input.
    #[must_use]
    pub const fn srgb_hex(hex: &str) -> Self {
        let (red, green, blue) = parse::parse_hex(hex);
        Self::srgb(red, green, blue)
    }

    /// Parses a six-digit hex string into a color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] if the string is not exactly six hex
    /// digits after an optional `#` or `0x` prefix.
    pub fn try_srgb_hex(hex: &str) -> Result<Self, ColorParseError> {
        let (red, green, blue) = parse::try_parse_hex(hex)?;
        Ok(Self::srgb(red, green, blue))
    }

    /// Returns this color with the given opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns `true` if the color is fully transparent.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.opacity <= 0.0
    }
}

macro_rules! named_colors {
    ($(($name:ident, $red:literal, $green:literal, $blue:literal, $opacity:literal)),+ $(,)?) => {
        impl Color {
            $(
                #[doc = concat!("The named color `", stringify!($name), "`.")]
                pub const $name: Self =
                    Self::srgb_with_opacity($red, $green, $blue, $opacity);
            )+
        }
    };
}

named_colors!(
    (BLACK, 0, 0, 0, 1.0),
    (WHITE, 255, 255, 255, 1.0),
    (RED, 255, 59, 48, 1.0),
    (GREEN, 52, 199, 89, 1.0),
    (BLUE, 0, 122, 255, 1.0),
    (ORANGE, 255, 149, 0, 1.0),
    (YELLOW, 255, 204, 0, 1.0),
    (GRAY, 142, 142, 147, 1.0),
    (CLEAR, 0, 0, 0, 0.0),
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_accepts_common_prefixes() {
        let expected = Color::srgb(0x1a, 0x2b, 0x3c);
        assert_eq!(Color::srgb_hex("#1a2b3c"), expected);
        assert_eq!(Color::srgb_hex("0x1A2B3C"), expected);
        assert_eq!(Color::srgb_hex("1a2b3c"), expected);
    }

    #[test]
    fn runtime_hex_parsing_reports_errors() {
        assert_eq!(
            Color::try_srgb_hex("#12345"),
            Err(ColorParseError::InvalidLength)
        );
        assert_eq!(
            Color::try_srgb_hex("#12g45f"),
            Err(ColorParseError::InvalidDigit(3))
        );
        assert_eq!(
            Color::try_srgb_hex("ff7f50"),
            Ok(Color::srgb(0xff, 0x7f, 0x50))
        );
    }

    #[test]
    fn opacity_controls_visibility() {
        assert!(Color::CLEAR.is_clear());
        assert!(!Color::RED.is_clear());
        assert!(Color::RED.with_opacity(0.0).is_clear());
    }
}
