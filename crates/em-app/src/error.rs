//! Error types for the em-app service layer.

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Hardware fault: {0}")]
    Hardware(#[from] em_io::IoError),

    #[error("Log write failed: {0}")]
    Log(#[from] em_results::ResultsError),

    #[error("Runtime setup failed: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Result type for em-app operations.
pub type AppResult<T> = Result<T, AppError>;
