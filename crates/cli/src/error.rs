use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] unixize_engine::error::EngineError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] unixize_engine::config::ConfigBuilderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
