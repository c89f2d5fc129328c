use crate::foundation::core::{Color, Point, Rect};
use crate::foundation::error::FiguraResult;

/// Geometry of one draw call, in unsnapped scene coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Set a single pixel.
    Pixel(Point),
    /// Fill an axis-aligned box; both corners are inclusive.
    Box(Rect),
    /// Fill the ellipse inscribed in a box; both corners are inclusive.
    Ellipse(Rect),
    /// Fill a polygon over ordered vertices.
    Polygon(Vec<Point>),
}

/// A primitive paired with its fill color.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    /// What to fill.
    pub primitive: Primitive,
    /// Fill color.
    pub color: Color,
}

impl DrawOp {
    /// Issue this operation against `surface`.
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> FiguraResult<()> {
        match &self.primitive {
            Primitive::Pixel(p) => surface.fill_pixel(*p, self.color),
            Primitive::Box(r) => surface.fill_box(*r, self.color),
            Primitive::Ellipse(r) => surface.fill_ellipse(*r, self.color),
            Primitive::Polygon(pts) => surface.fill_polygon(pts, self.color),
        }
    }
}

/// Boundary contract of a 2D drawing surface.
///
/// Coordinates arrive exactly as derived from the scene: possibly fractional, possibly outside the
/// canvas. Each implementation owns rounding and clipping. Later calls paint over earlier ones.
pub trait DrawSurface {
    /// Set the pixel at `at`.
    fn fill_pixel(&mut self, at: Point, color: Color) -> FiguraResult<()>;

    /// Fill the box `(x0, y0)-(x1, y1)`, corners inclusive.
    fn fill_box(&mut self, rect: Rect, color: Color) -> FiguraResult<()>;

    /// Fill the ellipse inscribed in `rect`, corners inclusive.
    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> FiguraResult<()>;

    /// Fill the polygon through `points`; the last vertex joins the first.
    fn fill_polygon(&mut self, points: &[Point], color: Color) -> FiguraResult<()>;
}
