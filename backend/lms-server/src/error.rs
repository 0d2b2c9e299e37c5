use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Environment error: {message}")]
    EnvVar { message: String },

    #[error("Failed to read JWT key file {path}: {source}")]
    JwtKeyFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
