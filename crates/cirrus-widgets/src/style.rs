//! Color styles and stylesheet generation
//!
//! The external toolkit consumes a CSS-like stylesheet string; this
//! module derives one from a small palette.

use cirrus_core::types::Color;

/// Palette feeding stylesheet generation
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStyle {
    pub name: String,
    /// Window and dialog background
    pub window: Color,
    /// Input and view background
    pub base: Color,
    /// Foreground text
    pub text: Color,
    /// Interactive accent (buttons, toolbar hover)
    pub accent: Color,
    /// Selection highlight
    pub highlight: Color,
}

impl ColorStyle {
    /// Built-in light palette
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            window: Color::rgb(0.96, 0.96, 0.97),
            base: Color::rgb(1.0, 1.0, 1.0),
            text: Color::rgb(0.12, 0.12, 0.13),
            accent: Color::rgb(0.25, 0.47, 0.85),
            highlight: Color::rgb(0.68, 0.80, 0.98),
        }
    }

    /// Built-in dark palette
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            window: Color::rgb(0.12, 0.12, 0.13),
            base: Color::rgb(0.17, 0.17, 0.19),
            text: Color::rgb(0.92, 0.92, 0.93),
            accent: Color::rgb(0.35, 0.55, 0.90),
            highlight: Color::rgb(0.20, 0.33, 0.55),
        }
    }

    /// Generate the toolkit stylesheet for this palette.
    ///
    /// Hover and pressed shades are derived from the accent color so a
    /// palette only has to pin five colors.
    pub fn stylesheet(&self) -> String {
        let hover = self.accent.lighten(0.15);
        let pressed = self.accent.darken(0.15);
        format!(
            "window, dialog {{\n\
             \x20   background-color: {window};\n\
             \x20   color: {text};\n\
             }}\n\
             label {{\n\
             \x20   color: {text};\n\
             \x20   background-color: transparent;\n\
             }}\n\
             view {{\n\
             \x20   background-color: {base};\n\
             \x20   selection-background-color: {highlight};\n\
             }}\n\
             toolbar {{\n\
             \x20   background-color: {window};\n\
             \x20   border: none;\n\
             }}\n\
             toolbar item {{\n\
             \x20   background-color: {accent};\n\
             \x20   color: {text};\n\
             }}\n\
             toolbar item:hover {{\n\
             \x20   background-color: {hover};\n\
             }}\n\
             toolbar item:pressed {{\n\
             \x20   background-color: {pressed};\n\
             }}\n",
            window = self.window.to_hex(),
            base = self.base.to_hex(),
            text = self.text.to_hex(),
            accent = self.accent.to_hex(),
            highlight = self.highlight.to_hex(),
            hover = hover.to_hex(),
            pressed = pressed.to_hex(),
        )
    }
}

impl Default for ColorStyle {
    fn default() -> Self {
        Self::light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_contains_the_palette_colors() {
        let style = ColorStyle::dark();
        let sheet = style.stylesheet();
        assert!(sheet.contains(&style.window.to_hex()));
        assert!(sheet.contains(&style.base.to_hex()));
        assert!(sheet.contains(&style.text.to_hex()));
        assert!(sheet.contains(&style.accent.to_hex()));
        assert!(sheet.contains(&style.highlight.to_hex()));
    }

    #[test]
    fn hover_and_pressed_shades_differ_from_the_accent() {
        let style = ColorStyle::light();
        let sheet = style.stylesheet();
        let hover = style.accent.lighten(0.15).to_hex();
        let pressed = style.accent.darken(0.15).to_hex();
        assert!(sheet.contains(&hover));
        assert!(sheet.contains(&pressed));
        assert_ne!(hover, style.accent.to_hex());
        assert_ne!(pressed, style.accent.to_hex());
    }

    #[test]
    fn light_and_dark_are_distinct() {
        assert_ne!(ColorStyle::light(), ColorStyle::dark());
    }
}
