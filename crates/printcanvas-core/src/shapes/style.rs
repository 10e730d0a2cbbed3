//! Style properties shared by all shapes.

use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    pub fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Parse a CSS-style hex color (`#rgb`, `#rrggbb`, `#rrggbbaa`).
    /// Unparseable input falls back to black.
    pub fn from_hex(color: &str) -> Self {
        if color == "transparent" {
            return Self::transparent();
        }

        let hex = color.strip_prefix('#').unwrap_or(color).trim();
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).unwrap_or(0) * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).unwrap_or(0) * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).unwrap_or(0) * 17;
                Self::new(r, g, b, 255)
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                Self::new(r, g, b, 255)
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
                let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
                let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
                let a = u8::from_str_radix(&hex[6..8], 16).unwrap_or(255);
                Self::new(r, g, b, a)
            }
            _ => Self::black(),
        }
    }

    /// Format as `#rrggbb` (alpha omitted when opaque).
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Drop-shadow parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub color: SerializableColor,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Style properties for shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Fill color (None = no fill).
    pub fill: Option<SerializableColor>,
    /// Stroke color (None = no stroke).
    pub stroke: Option<SerializableColor>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Dash pattern for the stroke (None = solid).
    #[serde(default)]
    pub dash: Option<Vec<f64>>,
    /// Drop shadow (None = no shadow).
    #[serde(default)]
    pub shadow: Option<Shadow>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            fill: Some(SerializableColor::black()),
            stroke: None,
            stroke_width: 1.0,
            dash: None,
            shadow: None,
        }
    }
}
