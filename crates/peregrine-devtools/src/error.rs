use peregrine_core::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The remote command was dispatched but came back with a non-zero status.
    #[error("Command '{command}' failed with status {status}: {value}")]
    CommandFailed {
        command: String,
        status: i64,
        value: serde_json::Value,
    },

    /// The remote command succeeded but carried no response value.
    #[error("Empty response value to command '{command}'")]
    EmptyResponse { command: String },

    /// The transport round trip itself failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// A successfully relayed response did not have the expected shape.
    #[error("Command '{command}' response missing '{path}'")]
    MissingField { command: String, path: String },

    #[error("Invalid image payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
