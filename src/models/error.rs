#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
