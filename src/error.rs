use serde_repr::{Deserialize_repr, Serialize_repr};
use thiserror::Error;

/// Longest input, in characters, quoted inside an error message.
pub const PREVIEW_CHARS: usize = 32;

/// Quotes `input` for a message, cutting it at [`PREVIEW_CHARS`].
fn preview(input: &str) -> String {
    match input.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{:?}…", &input[..cut]),
        None => format!("{input:?}"),
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid base64 input {}: {source}", preview(.input))]
    InvalidBase64 {
        input: String,
        #[source]
        source: base64::DecodeError,
    },
    #[error("decoded bytes of {} are not valid UTF-8", preview(.input))]
    InvalidUtf8 { input: String },
    #[error("invalid JSON {}: {source}", preview(.input))]
    InvalidJson {
        input: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot encode {}: not representable as UTF-8", preview(.input))]
    Encoding { input: String },
    #[error("JSON input {} is not UTF-8", preview(.input))]
    NotUtf8 { input: String },
}

impl CodecError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CodecError::InvalidBase64 { .. } => ErrorKind::InvalidBase64,
            CodecError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
            CodecError::InvalidJson { .. } => ErrorKind::InvalidJson,
            CodecError::Encoding { .. } => ErrorKind::Encoding,
            CodecError::NotUtf8 { .. } => ErrorKind::NotUtf8,
        }
    }

    /// The offending input. Byte inputs are stored lossily.
    pub fn input(&self) -> &str {
        match self {
            CodecError::InvalidBase64 { input, .. }
            | CodecError::InvalidUtf8 { input }
            | CodecError::InvalidJson { input, .. }
            | CodecError::Encoding { input }
            | CodecError::NotUtf8 { input } => input,
        }
    }
}

/// Stable numeric codes reported alongside every snapshot.
#[repr(i32)]
#[derive(Serialize_repr, Deserialize_repr, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    #[default]
    Success = 0,
    InvalidBase64 = -1,
    InvalidUtf8 = -2,
    InvalidJson = -3,
    Encoding = -4,
    NotUtf8 = -5,
}
