use crate::foundation::core::{Color, Point, Rect, snap_point, snap_rect};
use crate::foundation::error::{FiguraError, FiguraResult};
use crate::render::surface::DrawSurface;
use kurbo::Shape;

/// Coverage (out of 255) at or above which a pixel takes the fill color outright.
const ALIASING_THRESHOLD: u8 = 128;

/// RGB8 raster produced by rendering a scene.
pub type RasterImage = image::RgbImage;

/// CPU drawing surface powered by `vello_cpu`.
///
/// Coordinates are snapped with round-half-to-even before drawing. Every primitive includes its
/// boundary pixels: boxes and ellipses cover both corner pixels, and a polygon covers the pixels
/// its edges pass through. Anti-aliasing is off, so each pixel holds exactly one declared color.
/// Shapes reaching past the canvas are clipped by the rasterizer.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for CpuSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuSurface {
    /// Create a `width x height` surface filled with `background`.
    pub fn new(width: u32, height: u32, background: Color) -> FiguraResult<Self> {
        let w: u16 = width
            .try_into()
            .map_err(|_| FiguraError::render(format!("canvas width {width} exceeds u16")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| FiguraError::render(format!("canvas height {height} exceeds u16")))?;
        if w == 0 || h == 0 {
            return Err(FiguraError::render("canvas width/height must be > 0"));
        }

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_aliasing_threshold(Some(ALIASING_THRESHOLD));
        ctx.set_paint(paint(background));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(w), f64::from(h)));

        Ok(Self {
            width: w,
            height: h,
            ctx,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn so far and read it back as RGB8.
    pub fn finish(mut self) -> FiguraResult<RasterImage> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        // All paints are opaque, so premultiplied RGBA equals straight RGB plus a 255 alpha.
        let rgb: Vec<u8> = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();

        RasterImage::from_raw(self.width(), self.height(), rgb)
            .ok_or_else(|| FiguraError::render("pixmap byte len mismatch"))
    }

    fn fill_inclusive(&mut self, rect: Rect, color: Color) {
        let r = snap_rect(rect);
        self.ctx.set_paint(paint(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            r.x0,
            r.y0,
            r.x1 + 1.0,
            r.y1 + 1.0,
        ));
    }
}

impl DrawSurface for CpuSurface {
    fn fill_pixel(&mut self, at: Point, color: Color) -> FiguraResult<()> {
        self.fill_inclusive(Rect::from_points(at, at), color);
        Ok(())
    }

    fn fill_box(&mut self, rect: Rect, color: Color) -> FiguraResult<()> {
        self.fill_inclusive(rect, color);
        Ok(())
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) -> FiguraResult<()> {
        let r = snap_rect(rect);
        let e = kurbo::Ellipse::from_rect(Rect::new(r.x0, r.y0, r.x1 + 1.0, r.y1 + 1.0));
        let mut p = vello_cpu::kurbo::BezPath::new();
        for el in e.path_elements(0.1) {
            p.push(el);
        }
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&p);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) -> FiguraResult<()> {
        // Vertices address pixel centers; a unit-width outline over the same path pulls the
        // boundary pixels in, matching the inclusive corners of `fill_box`.
        let center = |p: &Point| {
            let s = snap_point(*p);
            vello_cpu::kurbo::Point::new(s.x + 0.5, s.y + 0.5)
        };
        let mut pts = points.iter().map(center);
        let Some(first) = pts.next() else {
            return Ok(());
        };
        let mut p = vello_cpu::kurbo::BezPath::new();
        p.move_to(first);
        for pt in pts {
            p.line_to(pt);
        }
        p.close_path();
        self.ctx.set_paint(paint(color));
        self.ctx.fill_path(&p);
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(1.0).with_join(vello_cpu::kurbo::Join::Miter));
        self.ctx.stroke_path(&p);
        Ok(())
    }
}

fn paint(color: Color) -> vello_cpu::peniko::Color {
    let [r, g, b] = color.channels();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, 255)
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
