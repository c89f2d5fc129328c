use crate::foundation::error::{FiguraError, FiguraResult};
use crate::render::cpu::{CpuSurface, RasterImage};
use crate::render::surface::DrawSurface;
use crate::scene::graphic::{Scene, load_document};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Render a scene into a fresh RGB image of the screen size.
///
/// The canvas is filled with the background color, then figures are painted in order so later
/// figures cover earlier ones.
#[tracing::instrument(skip(scene), fields(
    width = scene.screen().width,
    height = scene.screen().height,
    figures = scene.figures().len(),
))]
pub fn render(scene: &Scene) -> FiguraResult<RasterImage> {
    let screen = scene.screen();
    let mut surface = CpuSurface::new(screen.width, screen.height, screen.background)?;
    render_with(scene, &mut surface)?;
    surface.finish()
}

/// Issue every figure of `scene`, in draw order, against an arbitrary surface.
///
/// The surface is expected to already hold the background.
pub fn render_with<S: DrawSurface + ?Sized>(scene: &Scene, surface: &mut S) -> FiguraResult<()> {
    for figure in scene.figures() {
        figure.draw_op().apply(surface)?;
    }
    Ok(())
}

/// Write `image` as a PNG file, creating parent directories as needed.
pub fn save_png(image: &RasterImage, path: impl AsRef<Path>) -> FiguraResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            FiguraError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }
    image
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| FiguraError::encode(format!("write png '{}': {e}", path.display())))
}

/// Pretty-print a document with sorted keys and four-space indentation.
pub fn write_document<W: Write>(doc: &serde_json::Value, mut w: W) -> FiguraResult<()> {
    let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut w, fmt);
    doc.serialize(&mut ser)
        .map_err(|e| FiguraError::Other(anyhow::Error::new(e)))?;
    writeln!(w).map_err(|e| FiguraError::Other(anyhow::Error::new(e)))
}

/// Inputs of one end-to-end invocation.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Scene document to read.
    pub input: PathBuf,
    /// Where to write the PNG, if anywhere.
    pub output: Option<PathBuf>,
    /// Echo the parsed document before building the scene.
    pub print_document: bool,
}

impl RunConfig {
    /// Config reading `input` and writing nothing.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    /// Return the config with a PNG output path.
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    /// Return the config with document echoing switched on or off.
    pub fn with_print_document(mut self, print: bool) -> Self {
        self.print_document = print;
        self
    }
}

/// Read, validate, build, render and optionally save one scene.
///
/// The document echo (when enabled) goes to `echo`. Returns the rendered image so a caller can
/// hand it to a viewer.
pub fn run<W: Write>(config: &RunConfig, echo: W) -> FiguraResult<RasterImage> {
    let doc = load_document(&config.input)?;
    if config.print_document {
        write_document(&doc, echo)?;
    }

    let scene = Scene::from_value(&doc)?;
    let image = render(&scene)?;

    if let Some(out) = &config.output {
        save_png(&image, out)?;
        tracing::info!(path = %out.display(), "wrote png");
    }
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
