use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
    #[error("Internal error")]
    Internal,
}

impl AppError {
    /// Message surfaced inline next to the offending field or form.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Template(e) => format!("Could not render document: {}", e),
            AppError::Internal => "Internal error".to_string(),
        }
    }
}
