use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors surfaced to the presentation layer.
///
/// Vendor errors carry the SDK's `(code, message)` pair unchanged; this layer
/// never reinterprets the vendor taxonomy (a declined card and a transient
/// outage are indistinguishable here).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("network error: {0}")]
    Network(String),
    #[error("vendor error {code}: {message}")]
    Vendor { code: String, message: String },
    #[error("another vendor call is already in flight")]
    Busy,
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl FlowError {
    pub fn vendor(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Vendor {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The vendor error code, if this is a vendor error.
    pub fn vendor_code(&self) -> Option<&str> {
        match self {
            Self::Vendor { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlowError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
