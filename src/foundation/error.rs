/// Convenience result type used across Figura.
pub type FiguraResult<T> = Result<T, FiguraError>;

/// Top-level error taxonomy used by every pipeline stage.
///
/// Every stage fails fast: the first error aborts the invocation and no partial scene or image is
/// exposed.
#[derive(thiserror::Error, Debug)]
pub enum FiguraError {
    /// The input document could not be opened or read.
    #[error("input read error: {0}")]
    InputRead(String),

    /// The input is not valid JSON.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// The document failed structural validation (shape, required fields, enum membership).
    #[error("schema violation: {0}")]
    SchemaViolation(String),

    /// A color token is neither a literal nor a known palette key.
    #[error("{0}")]
    ColorNotFound(String),

    /// A figure carried a `type` tag outside the closed set of figure kinds.
    #[error("unknown figure type: {0}")]
    UnknownFigureType(String),

    /// The drawing surface could not be created for the requested canvas.
    #[error("render error: {0}")]
    Render(String),

    /// The raster image could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FiguraError {
    /// Build a [`FiguraError::InputRead`] value.
    pub fn input_read(msg: impl Into<String>) -> Self {
        Self::InputRead(msg.into())
    }

    /// Build a [`FiguraError::MalformedDocument`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    /// Build a [`FiguraError::SchemaViolation`] value.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::SchemaViolation(msg.into())
    }

    /// Build a [`FiguraError::ColorNotFound`] value for `token`.
    pub fn color_not_found(token: &str) -> Self {
        Self::ColorNotFound(format!("Not found color '{token}'"))
    }

    /// Build a [`FiguraError::UnknownFigureType`] value.
    pub fn unknown_figure(msg: impl Into<String>) -> Self {
        Self::UnknownFigureType(msg.into())
    }

    /// Build a [`FiguraError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`FiguraError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
