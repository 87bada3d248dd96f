use std::borrow::Cow;

use serde::Serialize;

use crate::error::{CodecError, ErrorKind};

pub const NO_ERROR: &str = "No Error";

/// A serializable view of the model: both fields plus the error, if any.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub code: ErrorKind,
    pub encoded: Cow<'a, str>,
    pub decoded: Cow<'a, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Cow<'a, str>>,
}

impl<'a> Snapshot<'a> {
    pub fn new(encoded: &'a str, decoded: &'a str, error: Option<&CodecError>) -> Self {
        Snapshot {
            code: error.map(CodecError::kind).unwrap_or_default(),
            encoded: Cow::Borrowed(encoded),
            decoded: Cow::Borrowed(decoded),
            error: error.map(|e| Cow::Owned(e.to_string())),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The text an error indicator shows.
    pub fn status_line(&self) -> &str {
        self.error.as_deref().unwrap_or(NO_ERROR)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
