use thiserror::Error;

/// Failure of a transport round trip, as reported by the session transport.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Endpoint error: {0}")]
    Endpoint(String),
}

pub type Result<T> = std::result::Result<T, TransportError>;
