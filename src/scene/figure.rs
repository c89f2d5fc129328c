use crate::foundation::core::{Color, Point, Rect};
use crate::render::surface::{DrawOp, Primitive};

/// Paint attributes shared by every figure kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Resolved fill color.
    pub color: Color,
}

/// A single-pixel figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointFigure {
    /// Fill style.
    pub style: Style,
    /// Pixel position.
    pub at: Point,
}

/// A box centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleFigure {
    /// Fill style.
    pub style: Style,
    /// Box center.
    pub center: Point,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

/// A square box centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareFigure {
    /// Fill style.
    pub style: Style,
    /// Box center.
    pub center: Point,
    /// Side length.
    pub size: f64,
}

/// A filled ellipse centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFigure {
    /// Fill style.
    pub style: Style,
    /// Ellipse center.
    pub center: Point,
    /// Declared radius.
    pub radius: f64,
}

/// A filled polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFigure {
    /// Fill style.
    pub style: Style,
    /// Vertices in input order. Closure is implied by the fill.
    pub points: Vec<Point>,
}

/// Closed set of drawable figures.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    /// Single pixel.
    Point(PointFigure),
    /// Centered box.
    Rectangle(RectangleFigure),
    /// Centered square box.
    Square(SquareFigure),
    /// Centered ellipse.
    Circle(CircleFigure),
    /// Polygon over ordered vertices.
    Polygon(PolygonFigure),
}

/// Box of extent `width x height` centered on `center`.
fn centered_box(center: Point, width: f64, height: f64) -> Rect {
    Rect::new(
        center.x - width / 2.0,
        center.y - height / 2.0,
        center.x + width / 2.0,
        center.y + height / 2.0,
    )
}

impl CircleFigure {
    /// Bounding box of the drawn ellipse.
    ///
    /// The half-extent is `radius / 2`, not `radius`: a circle declared with radius 10 is drawn
    /// 10 pixels across. Existing scene files are drawn this way; keep it unless the document
    /// format changes.
    pub fn bounding_box(&self) -> Rect {
        centered_box(self.center, self.radius, self.radius)
    }
}

impl Figure {
    /// Paint attributes of this figure.
    pub fn style(&self) -> Style {
        match self {
            Figure::Point(f) => f.style,
            Figure::Rectangle(f) => f.style,
            Figure::Square(f) => f.style,
            Figure::Circle(f) => f.style,
            Figure::Polygon(f) => f.style,
        }
    }

    /// Resolved fill color.
    pub fn color(&self) -> Color {
        self.style().color
    }

    /// Lower-case kind name, matching the document `type` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Point(_) => "point",
            Figure::Rectangle(_) => "rectangle",
            Figure::Square(_) => "square",
            Figure::Circle(_) => "circle",
            Figure::Polygon(_) => "polygon",
        }
    }

    /// Derived axis-aligned bounding box, before pixel snapping.
    ///
    /// Points yield a degenerate box; polygons yield the box spanning their vertices.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Figure::Point(f) => Rect::from_points(f.at, f.at),
            Figure::Rectangle(f) => centered_box(f.center, f.width, f.height),
            Figure::Square(f) => centered_box(f.center, f.size, f.size),
            Figure::Circle(f) => f.bounding_box(),
            Figure::Polygon(f) => {
                let mut pts = f.points.iter().copied();
                match pts.next() {
                    Some(first) => pts.fold(Rect::from_points(first, first), |acc, p| {
                        acc.union_pt(p)
                    }),
                    None => Rect::ZERO,
                }
            }
        }
    }

    /// Lower this figure into the primitive the drawing surface executes.
    pub fn draw_op(&self) -> DrawOp {
        let primitive = match self {
            Figure::Point(f) => Primitive::Pixel(f.at),
            Figure::Rectangle(_) | Figure::Square(_) => Primitive::Box(self.bounding_box()),
            Figure::Circle(f) => Primitive::Ellipse(f.bounding_box()),
            Figure::Polygon(f) => Primitive::Polygon(f.points.clone()),
        };
        DrawOp {
            primitive,
            color: self.color(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/figure.rs"]
mod tests;
