//! Chrome DevTools Protocol commands relayed over an existing WebDriver
//! session.
//!
//! Chromedriver accepts a `sendCommandWithResult` extension command that
//! forwards an arbitrary DevTools command through the WebDriver wire
//! protocol. This crate wraps that mechanism:
//!
//! - [`DevToolsRelay`] wraps a named DevTools command and its parameters
//!   into the extension envelope, submits it through the session transport,
//!   and validates the response before unwrapping the payload.
//! - [`ChromeDevTools`] binds a transport and session identifier and exposes
//!   the public operations: arbitrary DevTools commands, script evaluation,
//!   Chrome app launch, and a full-page screenshot that exceeds the
//!   viewport-clipped capture WebDriver normally offers.
//! - [`OutputTarget`] adapts captured PNG bytes to the representation the
//!   caller wants: raw bytes, base64 text, or a file on disk.
//!
//! Embedders supply the transport by implementing
//! [`peregrine_core::SessionTransport`] over their WebDriver client.
//!
//! # Example (conceptual)
//!
//! ```ignore
//! use peregrine_devtools::{output, ChromeDevTools};
//!
//! let devtools = ChromeDevTools::new(transport, session);
//! if let Some(png) = devtools.full_page_screenshot(&output::Bytes).await? {
//!     std::fs::write("page.png", png)?;
//! }
//! ```

pub mod chrome;
pub mod commands;
pub mod error;
pub mod output;
pub mod relay;
mod screenshot;

pub use chrome::ChromeDevTools;
pub use error::{Error, Result};
pub use output::OutputTarget;
pub use relay::{CommandEnvelope, DevToolsRelay};
