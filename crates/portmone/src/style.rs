//! Styling surface of the payment screens.
//!
//! [`StyleOptions`](crate::types::StyleOptions) is the loose wire record:
//! color fields are hex strings, fonts are family names. [`Theme`] is the
//! resolved form the screens consume, with every slot filled: supplied
//! values that parse override the defaults, everything else keeps them.

use crate::types::StyleOptions;

/// An RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Pure black, the default text color.
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Pure white, the default background color.
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// Mid gray, used for placeholder and info text.
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    /// Error red.
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// The platform accent blue used on action buttons.
    pub const ACCENT_BLUE: Color = Color::rgb(0.0, 0.478, 1.0);

    /// An opaque color from components in `0.0..=1.0`.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Color {
        Color { r, g, b, a: 1.0 }
    }

    /// A color with explicit alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
        Color { r, g, b, a }
    }

    /// Parses `#RRGGBB` (opaque) or `#RRGGBBAA`. Anything else, including
    /// a missing `#` or a short form, is `None`.
    pub fn from_hex(hex: &str) -> Option<Color> {
        let digits = hex.strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |shift: u32, n: u32| f64::from((n >> shift) & 0xff) / 255.0;
        match digits.len() {
            6 => {
                let n = u32::from_str_radix(digits, 16).ok()?;
                Some(Color::rgb(byte(16, n), byte(8, n), byte(0, n)))
            }
            8 => {
                let n = u32::from_str_radix(digits, 16).ok()?;
                Some(Color::rgba(byte(24, n), byte(16, n), byte(8, n), byte(0, n)))
            }
            _ => None,
        }
    }
}

/// Weight of a system font slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Medium,
}

/// A font request: the system font at a slot's size, or a named family.
///
/// Each screen slot has a fixed point size; supplying a family name via
/// [`StyleOptions`](crate::types::StyleOptions) replaces the family but
/// keeps the slot size.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    /// Family name; `None` means the platform system font
    pub name: Option<String>,
    /// Point size
    pub size: f64,
    /// Weight, only meaningful for the system font
    pub weight: FontWeight,
}

impl Font {
    fn system(size: f64, weight: FontWeight) -> Font {
        Font {
            name: None,
            size,
            weight,
        }
    }

    fn named(name: &str, size: f64) -> Font {
        Font {
            name: Some(name.to_string()),
            size,
            weight: FontWeight::Regular,
        }
    }
}

/// Fully resolved styling for the payment screens.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title_font: Font,
    pub title_color: Color,
    pub title_background_color: Color,

    pub headers_font: Font,
    pub headers_color: Color,
    pub headers_background_color: Color,

    pub placeholders_font: Font,
    pub placeholders_color: Color,

    pub texts_font: Font,
    pub texts_color: Color,

    pub errors_font: Font,
    pub errors_color: Color,

    pub background_color: Color,

    pub result_message_font: Font,
    pub result_message_color: Color,
    pub result_save_receipt_color: Color,

    pub info_texts_font: Font,
    pub info_texts_color: Color,

    pub button_title_font: Font,
    pub button_title_color: Color,
    pub button_color: Color,
    pub button_corner_radius: f64,
    pub biometric_button_color: Color,

    pub success_result_image: Option<String>,
    pub failure_result_image: Option<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title_font: Font::system(16.0, FontWeight::Medium),
            title_color: Color::BLACK,
            title_background_color: Color::WHITE,

            headers_font: Font::system(14.0, FontWeight::Medium),
            headers_color: Color::BLACK,
            headers_background_color: Color::rgb(0.96, 0.96, 0.96),

            placeholders_font: Font::system(16.0, FontWeight::Regular),
            placeholders_color: Color::GRAY,

            texts_font: Font::system(16.0, FontWeight::Regular),
            texts_color: Color::BLACK,

            errors_font: Font::system(12.0, FontWeight::Regular),
            errors_color: Color::RED,

            background_color: Color::WHITE,

            result_message_font: Font::system(18.0, FontWeight::Regular),
            result_message_color: Color::BLACK,
            result_save_receipt_color: Color::BLACK,

            info_texts_font: Font::system(14.0, FontWeight::Regular),
            info_texts_color: Color::GRAY,

            button_title_font: Font::system(18.0, FontWeight::Medium),
            button_title_color: Color::WHITE,
            button_color: Color::ACCENT_BLUE,
            button_corner_radius: 8.0,
            biometric_button_color: Color::GRAY,

            success_result_image: None,
            failure_result_image: None,
        }
    }
}

impl Theme {
    /// Resolves styling options against the defaults. Colors that fail to
    /// parse and empty font names keep the default slot value.
    pub fn from_options(options: &StyleOptions) -> Theme {
        let mut theme = Theme::default();

        apply_font(&mut theme.title_font, &options.title_font_name);
        apply_color(&mut theme.title_color, &options.title_color);
        apply_color(
            &mut theme.title_background_color,
            &options.title_background_color,
        );

        apply_font(&mut theme.headers_font, &options.headers_font_name);
        apply_color(&mut theme.headers_color, &options.headers_color);
        apply_color(
            &mut theme.headers_background_color,
            &options.headers_background_color,
        );

        apply_font(&mut theme.placeholders_font, &options.placeholders_font_name);
        apply_color(&mut theme.placeholders_color, &options.placeholders_color);

        apply_font(&mut theme.texts_font, &options.texts_font_name);
        apply_color(&mut theme.texts_color, &options.texts_color);

        apply_font(&mut theme.errors_font, &options.errors_font_name);
        apply_color(&mut theme.errors_color, &options.errors_color);

        apply_color(&mut theme.background_color, &options.background_color);

        apply_font(
            &mut theme.result_message_font,
            &options.result_message_font_name,
        );
        apply_color(&mut theme.result_message_color, &options.result_message_color);
        apply_color(
            &mut theme.result_save_receipt_color,
            &options.result_save_receipt_color,
        );

        apply_font(&mut theme.info_texts_font, &options.info_texts_font);
        apply_color(&mut theme.info_texts_color, &options.info_texts_color);

        apply_font(&mut theme.button_title_font, &options.button_title_font_name);
        apply_color(&mut theme.button_title_color, &options.button_title_color);
        apply_color(&mut theme.button_color, &options.button_color);
        if let Some(radius) = options.button_corner_radius {
            theme.button_corner_radius = radius;
        }
        apply_color(
            &mut theme.biometric_button_color,
            &options.biometric_button_color,
        );

        theme.success_result_image = options.success_result_image.clone();
        theme.failure_result_image = options.failure_result_image.clone();

        theme
    }
}

fn apply_color(slot: &mut Color, hex: &Option<String>) {
    if let Some(color) = hex.as_deref().and_then(Color::from_hex) {
        *slot = color;
    }
}

fn apply_font(slot: &mut Font, name: &Option<String>) {
    if let Some(name) = name.as_deref().filter(|n| !n.is_empty()) {
        *slot = Font::named(name, slot.size);
    }
}
