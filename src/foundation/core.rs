pub use kurbo::{Point, Rect};

/// Packed 24-bit RGB color: `(R << 16) | (G << 8) | B`.
///
/// Decimal-triple literals are packed without clamping, so a channel above 255 spills into the
/// neighbouring bits or above bit 24. The packed value is kept modulo 2^64. Drawing surfaces only
/// ever see the low byte of each channel, see [`Color::channels`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(pub u64);

impl Color {
    /// Black (`0x000000`).
    pub const BLACK: Self = Self(0);
    /// White (`0xFFFFFF`).
    pub const WHITE: Self = Self(0xFF_FF_FF);

    /// Pack three channels as `(r << 16) | (g << 8) | b`.
    pub fn pack(r: u64, g: u64, b: u64) -> Self {
        Self((r << 16) | (g << 8) | b)
    }

    /// Build a color from in-range 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::pack(u64::from(r), u64::from(g), u64::from(b))
    }

    /// Raw packed value.
    pub fn value(self) -> u64 {
        self.0
    }

    /// Byte channels `[r, g, b]` taken from bits 16..24, 8..16 and 0..8.
    pub fn channels(self) -> [u8; 3] {
        let [.., r, g, b] = self.0.to_be_bytes();
        [r, g, b]
    }

    /// Format the low 24 bits as an upper-case `#RRGGBB` literal.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.channels();
        format!("#{r:02X}{g:02X}{b:02X}")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Snap a derived coordinate onto the pixel grid.
///
/// Geometry derivation halves integer extents, so `x - w / 2` can land on `.5`. Every coordinate
/// handed to a drawing surface goes through this single rule: round half to even.
pub fn snap(v: f64) -> f64 {
    v.round_ties_even()
}

/// Snap both corners of a box with [`snap`].
pub fn snap_rect(r: Rect) -> Rect {
    Rect::new(snap(r.x0), snap(r.y0), snap(r.x1), snap(r.y1))
}

/// Snap a point with [`snap`].
pub fn snap_point(p: Point) -> Point {
    Point::new(snap(p.x), snap(p.y))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
