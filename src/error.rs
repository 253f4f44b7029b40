use thiserror::Error;

/// Reasons the globe could not be mounted onto the page.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingCanvas(String),
    #[error("#{0} is not a canvas element")]
    NotACanvas(String),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("dom error: {0}")]
    Dom(String),
}

impl MountError {
    pub fn dom(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{:?}", value))
    }
}
