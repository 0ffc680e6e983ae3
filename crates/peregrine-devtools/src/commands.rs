//! Fixed command names and parameter builders for the DevTools methods this
//! crate issues.
//!
//! Command names and parameter schemas are wire contracts; chromedriver and
//! the browser match them literally.

use serde_json::{json, Value};

/// Extension command that forwards a DevTools envelope and returns its result.
pub const SEND_COMMAND_WITH_RESULT: &str = "sendCommandWithResult";

/// Extension command that launches a Chrome app by id.
pub const LAUNCH_APP: &str = "launchApp";

/// Evaluates a script expression in the page.
pub const RUNTIME_EVALUATE: &str = "Runtime.evaluate";

/// Reads layout metrics, including the full scrollable content size.
pub const PAGE_GET_LAYOUT_METRICS: &str = "Page.getLayoutMetrics";

/// Overrides device emulation metrics for the session.
pub const EMULATION_SET_DEVICE_METRICS_OVERRIDE: &str = "Emulation.setDeviceMetricsOverride";

/// Resizes the visible capture area.
pub const EMULATION_SET_VISIBLE_SIZE: &str = "Emulation.setVisibleSize";

/// Captures the current rendering as an image.
pub const PAGE_CAPTURE_SCREENSHOT: &str = "Page.captureScreenshot";

/// Build `Runtime.evaluate` parameters for an expression returned by value.
pub fn evaluate_params(expression: &str) -> Value {
    json!({
        "expression": expression,
        "returnByValue": true,
    })
}

/// Build `Emulation.setDeviceMetricsOverride` parameters that make the
/// renderer treat `width` by `height` CSS pixels as the effective screen,
/// at scale factor 1 with desktop emulation.
pub fn device_metrics_override_params(width: u64, height: u64) -> Value {
    json!({
        "width": width,
        "height": height,
        "deviceScaleFactor": 1,
        "mobile": false,
        "fitWindow": false,
    })
}

/// Build `Emulation.setVisibleSize` parameters.
pub fn visible_size_params(width: u64, height: u64) -> Value {
    json!({
        "width": width,
        "height": height,
    })
}

/// Build `Page.captureScreenshot` parameters: lossless PNG, captured from
/// the rendering surface rather than the window compositor.
pub fn capture_screenshot_params() -> Value {
    json!({
        "format": "png",
        "fromSurface": true,
    })
}

/// Build `launchApp` parameters.
pub fn launch_app_params(id: &str) -> Value {
    json!({ "id": id })
}
