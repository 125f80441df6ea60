use thiserror::Error;

/// Errors surfaced by the scene pipeline and its front door.
///
/// Everything fallible is detected before layout begins: role inference and
/// theme lookup fail fast, so a caller never receives a partial scene.
#[derive(Debug, Error)]
pub enum ChartError {
    /// Dataset shape cannot yield the category/ordinal/measure roles.
    #[error("schema error: {0}")]
    Schema(String),

    /// An enumerated configuration value (theme name) was not recognized.
    #[error("config error: {0}")]
    Config(String),

    /// Input contained headers but no data rows.
    #[error("CSV must contain at least one data row")]
    EmptyDataset,

    /// Malformed structured input (JSON array-of-objects front door).
    #[error("data error: {0}")]
    Data(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
