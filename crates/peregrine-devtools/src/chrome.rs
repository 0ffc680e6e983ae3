use std::sync::Arc;

use peregrine_core::{SessionId, SessionTransport};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::commands;
use crate::error::Result;
use crate::relay::{check_status, DevToolsRelay};

/// Chrome DevTools access bound to one active WebDriver session.
///
/// Owns the command relay and the capture gate for that session. Construct
/// one facade per session: callers sharing a facade have their capture
/// sequences serialized, while multiple facades over the same session give
/// no such guarantee and must be serialized externally.
pub struct ChromeDevTools {
    transport: Arc<dyn SessionTransport>,
    session: SessionId,
    pub(crate) relay: DevToolsRelay,
    // Held across a whole capture sequence; emulation and viewport state are
    // global to the session.
    pub(crate) capture_gate: Mutex<()>,
}

impl ChromeDevTools {
    pub fn new(transport: Arc<dyn SessionTransport>, session: SessionId) -> Self {
        let relay = DevToolsRelay::new(Arc::clone(&transport), session.clone());
        Self {
            transport,
            session,
            relay,
            capture_gate: Mutex::new(()),
        }
    }

    /// Relay an arbitrary DevTools command and return its result payload.
    pub async fn send_command(&self, command: &str, params: Value) -> Result<Value> {
        self.relay.send(command, params).await
    }

    /// Evaluate a script expression in the page.
    pub async fn evaluate(&self, expression: &str) -> Result<Value> {
        self.relay.evaluate(expression).await
    }

    /// Launch the Chrome app with the given id.
    ///
    /// Submitted as a plain extension command, not through the DevTools
    /// envelope. The response status is verified; the response value is
    /// ignored since the command reports nothing on success.
    pub async fn launch_app(&self, id: &str) -> Result<()> {
        tracing::debug!(session = %self.session, id, "launching Chrome app");

        let response = self
            .transport
            .execute(
                &self.session,
                commands::LAUNCH_APP,
                commands::launch_app_params(id),
            )
            .await?;
        check_status(commands::LAUNCH_APP, response)?;
        Ok(())
    }

    /// Borrow the underlying relay, for embedders composing their own
    /// command flows.
    pub fn relay(&self) -> &DevToolsRelay {
        &self.relay
    }
}
