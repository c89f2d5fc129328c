//! Figura renders declarative JSON scenes into RGB raster images.
//!
//! A scene document has three sections: a `Palette` of named literal colors, a `Screen` with the
//! canvas size and background/foreground colors, and an ordered list of `Figures` (points,
//! rectangles, squares, circles and polygons).
//!
//! # Pipeline overview
//!
//! 1. **Validate**: the raw JSON document is checked structurally, with every violation reported
//!    against a JSON path.
//! 2. **Construct**: `Palette -> Screen -> Figures`, resolving each color token into a packed
//!    24-bit [`Color`]. The result is an immutable [`Scene`].
//! 3. **Render**: the canvas is filled with the background and every figure is lowered into a
//!    [`DrawOp`] and issued against a [`DrawSurface`], in order. [`CpuSurface`] is the built-in
//!    surface.
//! 4. **Encode** (optional): [`save_png`].
//!
//! # Color tokens
//!
//! `#RRGGBB`, `(R,G,B)`, or a palette key. Palette values must themselves be literals; a palette
//! entry cannot refer to another entry.
//!
//! ```no_run
//! let scene = figura::Scene::from_path("scene.json")?;
//! let image = figura::render(&scene)?;
//! figura::save_png(&image, "scene.png")?;
//! # Ok::<(), figura::FiguraError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod color;
mod foundation;
mod render;
mod scene;
mod schema;

pub use color::resolve::{Palette, parse_literal, resolve};
pub use foundation::core::{Color, Point, Rect, snap, snap_point, snap_rect};
pub use foundation::error::{FiguraError, FiguraResult};
pub use render::cpu::{CpuSurface, RasterImage};
pub use render::pipeline::{RunConfig, render, render_with, run, save_png, write_document};
pub use render::surface::{DrawOp, DrawSurface, Primitive};
pub use scene::figure::{
    CircleFigure, Figure, PointFigure, PolygonFigure, RectangleFigure, SquareFigure, Style,
};
pub use scene::graphic::{Scene, Screen, load_document, read_document};
pub use scene::model::{FigureDef, SceneDef, ScreenDef};
