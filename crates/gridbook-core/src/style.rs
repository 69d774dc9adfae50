//! Cell styling types
//!
//! A cell carries a fixed-shape [`CellStyle`] record. The default style
//! (all flags off, no color) renders as plain text, so an unstyled cell
//! and a cell whose style was toggled back off are indistinguishable.

use std::fmt;

/// Text color as an RGB triple
///
/// Parsed from and formatted as `#RRGGBB` hex, the form color pickers emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parse from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Format as a `#RRGGBB` hex string
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Per-cell text formatting
///
/// The default value is the absence of formatting; structural and
/// value-level operations never touch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellStyle {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Text color (None = default/automatic)
    pub color: Option<Color>,
}

impl CellStyle {
    /// Create a new default style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Check whether this is the default (unformatted) style
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A single style mutation applied to the focused cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleEdit {
    /// Flip bold on/off
    ToggleBold,
    /// Flip italic on/off
    ToggleItalic,
    /// Flip underline on/off
    ToggleUnderline,
    /// Assign a text color
    SetColor(Color),
}

impl StyleEdit {
    /// Apply this edit to a style record
    pub fn apply(&self, style: &mut CellStyle) {
        match self {
            StyleEdit::ToggleBold => style.bold = !style.bold,
            StyleEdit::ToggleItalic => style.italic = !style.italic,
            StyleEdit::ToggleUnderline => style.underline = !style.underline,
            StyleEdit::SetColor(color) => style.color = Some(*color),
        }
    }
}
