use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("Incomplete bundle for {language}: field `{field}` is empty")]
    IncompleteBundle {
        language: &'static str,
        field: &'static str,
    },

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
