use serde::Deserialize;
use serde::de::{self, IgnoredAny};

use crate::codec::StringCodec;
use crate::error::CodecError;

/// Validates JSON text without reformatting it.
///
/// Both directions are the same check: the value is returned untouched when
/// it parses as a single JSON object or array.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonCodec;

impl JsonCodec {
    /// Accepts a single object or array. Scalars at the top level are
    /// rejected. Nesting depth is not limited.
    pub fn validate(&self, value: &str) -> Result<String, CodecError> {
        log::trace!("Validating JSON input: {value}");
        let invalid = |source| CodecError::InvalidJson {
            input: value.to_string(),
            source,
        };

        let mut deserializer = serde_json::Deserializer::from_str(value);
        deserializer.disable_recursion_limit();
        IgnoredAny::deserialize(&mut deserializer).map_err(invalid)?;
        deserializer.end().map_err(invalid)?;

        let top = value.trim_start_matches([' ', '\t', '\n', '\r']);
        if !top.starts_with(['{', '[']) {
            return Err(invalid(de::Error::custom(
                "top-level value must be an object or array",
            )));
        }
        Ok(value.to_string())
    }

    pub fn validate_bytes(&self, value: &[u8]) -> Result<String, CodecError> {
        let text = std::str::from_utf8(value).map_err(|_| CodecError::NotUtf8 {
            input: String::from_utf8_lossy(value).into_owned(),
        })?;
        self.validate(text)
    }
}

impl StringCodec for JsonCodec {
    fn encode(&self, value: &str) -> Result<String, CodecError> {
        self.validate(value)
    }

    fn decode(&self, value: &str) -> Result<String, CodecError> {
        self.validate(value)
    }
}
