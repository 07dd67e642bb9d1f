use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("no window object available")]
    NoWindow,
    #[error("no document available")]
    NoDocument,
    #[error("required element missing: {0}")]
    MissingElement(String),
    #[error("element {0} has an unexpected type")]
    WrongElementType(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        BehaviorError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Rejected `page-behaviors-config` override.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fadeSections must list at least one non-empty selector")]
    EmptyFadeSelector,
    #[error("fadeThreshold {0} is outside 0..=1")]
    ThresholdOutOfRange(f64),
    #[error("root margin {0:?} needs px or % units")]
    InvalidRootMargin(String),
}
