//! Full-page screenshot sequencing for [`ChromeDevTools`].

use peregrine_core::path::{lookup, lookup_str};
use serde_json::{json, Value};

use crate::chrome::ChromeDevTools;
use crate::commands;
use crate::error::{Error, Result};
use crate::output::{self, OutputTarget};

/// Reads the visible viewport rectangle as a compact object literal.
const VISIBLE_VIEWPORT_SCRIPT: &str =
    "({x:0,y:0,width:window.innerWidth,height:window.innerHeight})";

/// Currently visible rendering area of the page, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    width: u64,
    height: u64,
}

/// Full scrollable content extent, independent of the visible area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ContentSize {
    width: u64,
    height: u64,
}

impl ChromeDevTools {
    /// Capture a screenshot of the full scrollable page rather than the
    /// visible viewport WebDriver's own screenshot endpoint clips to.
    ///
    /// The sequence measures the visible viewport and the full content
    /// extent, then issues, strictly in order:
    /// `Emulation.setDeviceMetricsOverride` sized to the content (scale
    /// factor 1, desktop), `Emulation.setVisibleSize` to the content size,
    /// `Page.captureScreenshot` (PNG, from the rendering surface), and a
    /// final `Emulation.setVisibleSize` back to the original viewport.
    ///
    /// The device metrics override is left in place after the capture; the
    /// `Emulation.resetViewport` call that once reverted it was removed in
    /// Chrome 61 and has no replacement here. Callers that need pristine
    /// emulation state must clear the override themselves before reusing
    /// the session.
    ///
    /// Best effort: a transport failure at any step is logged at error
    /// level and yields `Ok(None)` with no image, and may leave the visible
    /// size un-restored. Protocol failures, malformed responses, and output
    /// failures are hard errors. No step is retried.
    pub async fn full_page_screenshot<T: OutputTarget>(
        &self,
        target: &T,
    ) -> Result<Option<T::Output>> {
        let _gate = self.capture_gate.lock().await;

        let payload = match self.capture_sequence().await {
            Ok(payload) => payload,
            Err(Error::Transport(err)) => {
                tracing::error!(error = %err, "could not take full-page screenshot");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        let png = output::decode_payload(&payload)?;
        Ok(Some(target.assemble(png)?))
    }

    /// Issue the measure, override, capture, and restore round trips in
    /// order and return the base64 image payload.
    async fn capture_sequence(&self) -> Result<String> {
        let visible = self.visible_viewport().await?;
        let content = self.content_size().await?;

        self.relay
            .send(
                commands::EMULATION_SET_DEVICE_METRICS_OVERRIDE,
                commands::device_metrics_override_params(content.width, content.height),
            )
            .await?;
        self.relay
            .send(
                commands::EMULATION_SET_VISIBLE_SIZE,
                commands::visible_size_params(content.width, content.height),
            )
            .await?;

        let capture = self
            .relay
            .send(
                commands::PAGE_CAPTURE_SCREENSHOT,
                commands::capture_screenshot_params(),
            )
            .await?;

        self.relay
            .send(
                commands::EMULATION_SET_VISIBLE_SIZE,
                commands::visible_size_params(visible.width, visible.height),
            )
            .await?;

        let data = lookup_str(&capture, "data")
            .ok_or_else(|| missing_field(commands::PAGE_CAPTURE_SCREENSHOT, "data"))?;
        Ok(data.to_string())
    }

    async fn visible_viewport(&self) -> Result<Viewport> {
        let tree = self.relay.evaluate(VISIBLE_VIEWPORT_SCRIPT).await?;

        Ok(Viewport {
            width: dimension(&tree, commands::RUNTIME_EVALUATE, "result.value.width")?,
            height: dimension(&tree, commands::RUNTIME_EVALUATE, "result.value.height")?,
        })
    }

    async fn content_size(&self) -> Result<ContentSize> {
        let tree = self
            .relay
            .send(commands::PAGE_GET_LAYOUT_METRICS, json!({}))
            .await?;

        Ok(ContentSize {
            width: dimension(&tree, commands::PAGE_GET_LAYOUT_METRICS, "contentSize.width")?,
            height: dimension(&tree, commands::PAGE_GET_LAYOUT_METRICS, "contentSize.height")?,
        })
    }
}

/// Read a non-negative pixel dimension at `path`, rounding a fractional
/// measurement up so no content row or column is lost.
fn dimension(tree: &Value, command: &str, path: &str) -> Result<u64> {
    let node = lookup(tree, path).ok_or_else(|| missing_field(command, path))?;

    if let Some(exact) = node.as_u64() {
        return Ok(exact);
    }
    match node.as_f64() {
        Some(measured) if measured >= 0.0 => Ok(measured.ceil() as u64),
        _ => Err(missing_field(command, path)),
    }
}

fn missing_field(command: &str, path: &str) -> Error {
    Error::MissingField {
        command: command.to_string(),
        path: path.to_string(),
    }
}
