use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown glyph name: {0:?}")]
    UnknownGlyph(String),

    #[error("unknown glyph id: {0}")]
    UnknownGlyphId(u16),

    #[error("column {name:?} not present in dataset header")]
    UnknownColumn { name: String },

    #[error("invalid widget configuration: {0}")]
    InvalidConfig(String),

    #[error("script data could not be serialized: {0}")]
    ScriptData(#[from] serde_json::Error),
}
