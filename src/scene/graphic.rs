use crate::color::resolve::{Palette, resolve};
use crate::foundation::core::{Color, Point};
use crate::foundation::error::{FiguraError, FiguraResult};
use crate::scene::figure::{
    CircleFigure, Figure, PointFigure, PolygonFigure, RectangleFigure, SquareFigure, Style,
};
use crate::scene::model::{FigureDef, SceneDef};
use crate::schema::validate::validate_document;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Canvas size and default colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Canvas fill color.
    pub background: Color,
    /// Color of figures that do not name one.
    pub foreground: Color,
}

/// A fully resolved scene, ready to render.
///
/// Built once from a document; palette, screen and figures never change afterwards.
#[derive(Debug, Clone)]
pub struct Scene {
    palette: Palette,
    screen: Screen,
    figures: Vec<Figure>,
}

impl Scene {
    /// Parse, validate and build a scene from JSON text.
    pub fn from_json_str(s: &str) -> FiguraResult<Self> {
        let doc: serde_json::Value = serde_json::from_str(s)
            .map_err(|e| FiguraError::malformed(format!("parse scene JSON: {e}")))?;
        Self::from_value(&doc)
    }

    /// Parse, validate and build a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FiguraResult<Self> {
        let doc = read_document(r)?;
        Self::from_value(&doc)
    }

    /// Parse, validate and build a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FiguraResult<Self> {
        let doc = load_document(path)?;
        Self::from_value(&doc)
    }

    /// Validate a raw document against the scene schema, then build it.
    pub fn from_value(doc: &serde_json::Value) -> FiguraResult<Self> {
        validate_document(doc)
            .map_err(|e| FiguraError::schema(format!("scene validation failed:\n{e}")))?;
        let def = SceneDef::deserialize(doc)
            .map_err(|e| FiguraError::schema(format!("decode scene: {e}")))?;
        Self::from_def(&def)
    }

    /// Build a scene from its decoded boundary form.
    ///
    /// Order matters: the palette is built first, then the screen colors are resolved against
    /// it, then every figure is decoded in input order with the resolved foreground as its
    /// default color. The first failure aborts construction.
    #[tracing::instrument(skip(def), fields(figures = def.figures.len()))]
    pub fn from_def(def: &SceneDef) -> FiguraResult<Self> {
        let palette = Palette::from_literals(&def.palette)?;
        tracing::debug!(entries = palette.len(), "palette built");

        let screen = Screen {
            width: def.screen.width,
            height: def.screen.height,
            background: resolve(&def.screen.bg_color, &palette)?,
            foreground: resolve(&def.screen.fg_color, &palette)?,
        };
        tracing::debug!(
            width = screen.width,
            height = screen.height,
            background = %screen.background,
            foreground = %screen.foreground,
            "screen resolved"
        );

        let figures = def
            .figures
            .iter()
            .enumerate()
            .map(|(i, f)| decode_figure(i, f, &palette, screen.foreground))
            .collect::<FiguraResult<Vec<_>>>()?;

        Ok(Self {
            palette,
            screen,
            figures,
        })
    }

    /// Resolved palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Canvas size and default colors.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Figures in draw order.
    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}

/// Parse a JSON document from a reader without validating it.
pub fn read_document<R: std::io::Read>(r: R) -> FiguraResult<serde_json::Value> {
    serde_json::from_reader(r).map_err(|e| {
        if e.is_io() {
            FiguraError::input_read(format!("read scene JSON: {e}"))
        } else {
            FiguraError::malformed(format!("parse scene JSON: {e}"))
        }
    })
}

/// Open and parse a JSON document from disk without validating it.
pub fn load_document(path: impl AsRef<Path>) -> FiguraResult<serde_json::Value> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        FiguraError::input_read(format!("open scene JSON '{}': {e}", path.display()))
    })?;
    read_document(BufReader::new(f))
}

fn decode_figure(
    index: usize,
    def: &FigureDef,
    palette: &Palette,
    foreground: Color,
) -> FiguraResult<Figure> {
    let style = |color: &Option<String>| -> FiguraResult<Style> {
        let color = match color {
            Some(token) => resolve(token, palette)?,
            None => foreground,
        };
        Ok(Style { color })
    };
    let at = |x: i64, y: i64| Point::new(x as f64, y as f64);

    let figure = match def {
        FigureDef::Point { x, y, color } => Figure::Point(PointFigure {
            style: style(color)?,
            at: at(*x, *y),
        }),
        FigureDef::Rectangle {
            x,
            y,
            width,
            height,
            color,
        } => Figure::Rectangle(RectangleFigure {
            style: style(color)?,
            center: at(*x, *y),
            width: f64::from(*width),
            height: f64::from(*height),
        }),
        FigureDef::Square { x, y, size, color } => Figure::Square(SquareFigure {
            style: style(color)?,
            center: at(*x, *y),
            size: f64::from(*size),
        }),
        FigureDef::Circle {
            x,
            y,
            radius,
            color,
        } => Figure::Circle(CircleFigure {
            style: style(color)?,
            center: at(*x, *y),
            radius: f64::from(*radius),
        }),
        FigureDef::Polygon { points, color } => Figure::Polygon(PolygonFigure {
            style: style(color)?,
            points: points.iter().map(|[x, y]| at(*x, *y)).collect(),
        }),
        FigureDef::Unknown => {
            return Err(FiguraError::unknown_figure(format!(
                "figure {index} has an unrecognized type"
            )));
        }
    };
    tracing::trace!(index, kind = figure.kind(), color = %figure.color(), "figure decoded");
    Ok(figure)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/graphic.rs"]
mod tests;
