//! Shared scripted transport for the integration tests.
//!
//! `RecordingTransport` answers each `execute` call with the next scripted
//! reply and records what was submitted, so tests can assert on the exact
//! commands, envelopes, and ordering a scenario produced.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use peregrine_core::{SessionId, SessionTransport, TransportError, WireResponse};
use serde_json::{json, Value};

/// One `execute` call as the transport saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub session: String,
    pub command: String,
    pub params: Value,
}

/// Scripted answer to a single `execute` call.
#[derive(Debug, Clone)]
pub enum Reply {
    Respond(WireResponse),
    Disconnect(String),
}

pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    replies: Mutex<VecDeque<Reply>>,
    yield_before_reply: bool,
}

impl RecordingTransport {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.into()),
            yield_before_reply: false,
        }
    }

    /// Like [`RecordingTransport::new`], but each call yields back to the
    /// scheduler before answering so interleaved callers get a chance to
    /// run mid-sequence.
    pub fn with_yields(replies: Vec<Reply>) -> Self {
        Self {
            yield_before_reply: true,
            ..Self::new(replies)
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionTransport for RecordingTransport {
    async fn execute(
        &self,
        session: &SessionId,
        command: &str,
        params: Value,
    ) -> peregrine_core::Result<WireResponse> {
        self.calls.lock().unwrap().push(RecordedCall {
            session: session.to_string(),
            command: command.to_string(),
            params,
        });

        if self.yield_before_reply {
            tokio::task::yield_now().await;
        }

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted reply left for command '{command}'"));
        match reply {
            Reply::Respond(response) => Ok(response),
            Reply::Disconnect(message) => Err(TransportError::Endpoint(message)),
        }
    }
}

/// Successful legacy-wire reply carrying `value`.
pub fn ok(value: Value) -> Reply {
    Reply::Respond(WireResponse {
        status: Some(0),
        value: Some(value),
    })
}

/// Successful reply with no result value at all.
pub fn ok_empty() -> Reply {
    Reply::Respond(WireResponse {
        status: Some(0),
        value: None,
    })
}

/// Endpoint-rejected reply with a non-zero status and diagnostic value.
pub fn failed(status: i64, value: Value) -> Reply {
    Reply::Respond(WireResponse {
        status: Some(status),
        value: Some(value),
    })
}

/// Connection-level failure in place of a reply.
pub fn disconnect(message: &str) -> Reply {
    Reply::Disconnect(message.to_string())
}

/// The `sendCommandWithResult` envelope as it crosses the transport.
pub fn envelope(cmd: &str, params: Value) -> Value {
    json!({"cmd": cmd, "params": params})
}

/// Replies for one complete full-page capture: viewport probe, layout
/// metrics, metrics override, visible-size grow, capture, visible-size
/// restore.
pub fn capture_replies(
    viewport: (u64, u64),
    content: (u64, u64),
    payload: &str,
) -> Vec<Reply> {
    vec![
        ok(json!({
            "result": {
                "type": "object",
                "value": {"x": 0, "y": 0, "width": viewport.0, "height": viewport.1},
            }
        })),
        ok(json!({
            "layoutViewport": {"clientWidth": viewport.0, "clientHeight": viewport.1},
            "contentSize": {"x": 0, "y": 0, "width": content.0, "height": content.1},
        })),
        ok(json!({})),
        ok(json!({})),
        ok(json!({"data": payload})),
        ok(json!({})),
    ]
}
