use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecoraiError {
    #[error("preference store error: {message}")]
    Config { message: String },

    #[error("export error: {message}")]
    Export { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DecoraiError {
    pub fn config_error(message: impl Into<String>) -> Self {
        DecoraiError::Config {
            message: message.into(),
        }
    }

    pub fn export_error(message: impl Into<String>) -> Self {
        DecoraiError::Export {
            message: message.into(),
        }
    }
}

pub type DecoraiResult<T> = Result<T, DecoraiError>;
