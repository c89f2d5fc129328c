use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON boundary form of a scene document, before any color is resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDef {
    /// Figures in draw order.
    #[serde(rename = "Figures")]
    pub figures: Vec<FigureDef>,
    /// Canvas size and default colors.
    #[serde(rename = "Screen")]
    pub screen: ScreenDef,
    /// Named literal colors.
    #[serde(rename = "Palette")]
    pub palette: BTreeMap<String, String>,
}

/// JSON boundary form of the `Screen` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenDef {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Background color token.
    pub bg_color: String,
    /// Foreground (default figure) color token.
    pub fg_color: String,
}

/// JSON boundary form of one figure, discriminated by its `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FigureDef {
    /// A single pixel.
    Point {
        /// Pixel column.
        x: i64,
        /// Pixel row.
        y: i64,
        /// Optional color token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// A box centered on `(x, y)`.
    Rectangle {
        /// Center column.
        x: i64,
        /// Center row.
        y: i64,
        /// Box width.
        width: u32,
        /// Box height.
        height: u32,
        /// Optional color token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// A square box centered on `(x, y)`.
    Square {
        /// Center column.
        x: i64,
        /// Center row.
        y: i64,
        /// Side length.
        size: u32,
        /// Optional color token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// An ellipse inscribed in a box centered on `(x, y)`.
    Circle {
        /// Center column.
        x: i64,
        /// Center row.
        y: i64,
        /// Declared radius (the drawn box half-extent is `radius / 2`).
        radius: u32,
        /// Optional color token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// A filled polygon over ordered vertices.
    Polygon {
        /// `[x, y]` vertex pairs.
        points: Vec<[i64; 2]>,
        /// Optional color token.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// Any other `type` tag. Schema validation rejects these before decoding.
    #[serde(other, skip_serializing)]
    Unknown,
}

impl FigureDef {
    /// Lower-case `type` tag of this figure.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Point { .. } => "point",
            Self::Rectangle { .. } => "rectangle",
            Self::Square { .. } => "square",
            Self::Circle { .. } => "circle",
            Self::Polygon { .. } => "polygon",
            Self::Unknown => "unknown",
        }
    }
}
