use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser host. None of these are fatal for the
/// page; callers log them and fall back to a static rendering.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no browser window available")]
    NoWindow,
    #[error("window.performance is not available")]
    NoPerformance,
    #[error("host call failed: {0}")]
    Host(String),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Host(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
