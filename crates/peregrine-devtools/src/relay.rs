use std::sync::Arc;

use peregrine_core::{SessionId, SessionTransport, WireResponse};
use serde_json::{json, Value};

use crate::commands;
use crate::error::{Error, Result};

/// Generic extension-command envelope carrying a DevTools command through
/// the WebDriver wire protocol.
///
/// Immutable once constructed; serialized exactly as
/// `{"cmd": <name>, "params": <mapping>}`. Chromedriver unwraps the envelope
/// on the far side and dispatches the named DevTools method.
#[derive(Debug, Clone)]
pub struct CommandEnvelope {
    cmd: String,
    params: Value,
}

impl CommandEnvelope {
    pub fn new(cmd: impl Into<String>, params: Value) -> Self {
        Self {
            cmd: cmd.into(),
            params,
        }
    }

    /// Wire form submitted as the extension-command payload.
    pub fn into_value(self) -> Value {
        json!({ "cmd": self.cmd, "params": self.params })
    }
}

/// Forwards DevTools commands through the session transport and validates
/// the wire response before handing back the payload.
pub struct DevToolsRelay {
    transport: Arc<dyn SessionTransport>,
    session: SessionId,
}

impl DevToolsRelay {
    pub fn new(transport: Arc<dyn SessionTransport>, session: SessionId) -> Self {
        Self { transport, session }
    }

    /// Relay one DevTools command and unwrap its result payload.
    ///
    /// Fails with [`Error::CommandFailed`] on a non-zero response status and
    /// with [`Error::EmptyResponse`] when a successful response carries no
    /// value. The command may mutate browser-side state (device emulation,
    /// visible size); the relay does not track or undo such effects.
    pub async fn send(&self, command: &str, params: Value) -> Result<Value> {
        tracing::debug!(session = %self.session, command, "relaying DevTools command");

        let envelope = CommandEnvelope::new(command, params);
        let response = self
            .transport
            .execute(
                &self.session,
                commands::SEND_COMMAND_WITH_RESULT,
                envelope.into_value(),
            )
            .await?;

        match check_status(command, response)? {
            Some(value) => Ok(value),
            None => Err(Error::EmptyResponse {
                command: command.to_string(),
            }),
        }
    }

    /// Evaluate a script expression in the page, returning the untyped
    /// result tree.
    pub async fn evaluate(&self, expression: &str) -> Result<Value> {
        self.send(
            commands::RUNTIME_EVALUATE,
            commands::evaluate_params(expression),
        )
        .await
    }
}

/// Fail with [`Error::CommandFailed`] when the response carries a non-zero
/// status; otherwise hand back the (possibly absent) value. An absent status
/// counts as success, which is what the W3C wire dialect reports.
pub(crate) fn check_status(command: &str, response: WireResponse) -> Result<Option<Value>> {
    if let Some(status) = response.status {
        if status != 0 {
            return Err(Error::CommandFailed {
                command: command.to_string(),
                status,
                value: response.value.unwrap_or(Value::Null),
            });
        }
    }
    Ok(response.value)
}
