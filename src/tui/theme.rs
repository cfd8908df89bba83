use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{ThemeMode, UiConfig};

/// Resolved colors for one display theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    /// Text of completed items
    pub done: Color,
    /// Check mark of completed items
    pub check: Color,
    pub selection_bg: Color,
    pub border: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Theme {
            mode: ThemeMode::Dark,
            background: Color::Rgb(0x16, 0x17, 0x22),
            text: Color::Rgb(0xC8, 0xCB, 0xE7),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x3A, 0x7B, 0xFD),
            dim: Color::Rgb(0x5B, 0x5E, 0x7E),
            done: Color::Rgb(0x4D, 0x50, 0x67),
            check: Color::Rgb(0xC0, 0x58, 0xF3),
            selection_bg: Color::Rgb(0x25, 0x27, 0x3D),
            border: Color::Rgb(0x39, 0x3A, 0x4B),
        }
    }

    pub fn light() -> Self {
        Theme {
            mode: ThemeMode::Light,
            background: Color::Rgb(0xFA, 0xFA, 0xFA),
            text: Color::Rgb(0x49, 0x4C, 0x6B),
            text_bright: Color::Rgb(0x16, 0x17, 0x22),
            highlight: Color::Rgb(0x3A, 0x7B, 0xFD),
            dim: Color::Rgb(0x9E, 0x9B, 0xAF),
            done: Color::Rgb(0xD1, 0xD2, 0xDA),
            check: Color::Rgb(0x57, 0xDD, 0xFF),
            selection_bg: Color::Rgb(0xE3, 0xE4, 0xF1),
            border: Color::Rgb(0xE3, 0xE4, 0xF1),
        }
    }

    /// Built-in palette for `mode` with the config's overrides for that mode
    pub fn from_config(mode: ThemeMode, ui: &UiConfig) -> Self {
        let mut theme = match mode {
            ThemeMode::Dark => Theme::dark(),
            ThemeMode::Light => Theme::light(),
        };
        theme.apply_overrides(ui.colors.for_mode(mode));
        theme
    }

    fn apply_overrides(&mut self, colors: &HashMap<String, String>) {
        for (key, value) in colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            let slot = match key.as_str() {
                "background" => &mut self.background,
                "text" => &mut self.text,
                "text_bright" => &mut self.text_bright,
                "highlight" => &mut self.highlight,
                "dim" => &mut self.dim,
                "done" => &mut self.done,
                "check" => &mut self.check,
                "selection_bg" => &mut self.selection_bg,
                "border" => &mut self.border,
                _ => {
                    tracing::warn!(key = %key, "ignoring unknown color slot");
                    continue;
                }
            };
            *slot = color;
        }
    }
}

/// Parse `#RRGGBB`
fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}
