//! Narrow interfaces to an existing remote WebDriver session: the transport
//! seam, the wire response model, and the accessor for untyped response trees.

pub mod error;
pub mod path;
pub mod transport;

pub use error::{Result, TransportError};
pub use transport::{SessionId, SessionTransport, WireResponse};
