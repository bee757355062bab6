//! Error types for backdrop setup.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures that can occur while wiring the engine to the page.
///
/// All of these are construction-time conditions; the per-frame simulation
/// itself has no fallible operations.
#[derive(Debug, Error)]
pub enum BackdropError {
    #[error("canvas element not found: #{0}")]
    CanvasNotFound(String),

    #[error("2d canvas context unavailable")]
    ContextUnavailable,

    #[error("no window object")]
    WindowUnavailable,

    #[error("no document object")]
    DocumentUnavailable,
}

/// Result type alias for backdrop operations.
pub type Result<T> = std::result::Result<T, BackdropError>;

impl From<BackdropError> for JsValue {
    fn from(err: BackdropError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
