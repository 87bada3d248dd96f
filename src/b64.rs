use base64::{Engine as _, engine::general_purpose};

use crate::codec::StringCodec;
use crate::error::CodecError;

/// Standard, padded Base64 over the UTF-8 bytes of a string.
#[derive(Debug, Default, Clone, Copy)]
pub struct Base64Codec;

impl Base64Codec {
    /// Encodes raw bytes, rejecting anything that is not UTF-8 text.
    pub fn encode_bytes(&self, value: &[u8]) -> Result<String, CodecError> {
        let text = std::str::from_utf8(value).map_err(|_| CodecError::Encoding {
            input: String::from_utf8_lossy(value).into_owned(),
        })?;
        self.encode(text)
    }
}

impl StringCodec for Base64Codec {
    fn encode(&self, value: &str) -> Result<String, CodecError> {
        log::trace!("Encoding base64 input: {value}");
        Ok(general_purpose::STANDARD.encode(value.as_bytes()))
    }

    fn decode(&self, value: &str) -> Result<String, CodecError> {
        log::trace!("Decoding base64 input: {value}");
        let bytes = general_purpose::STANDARD
            .decode(value.as_bytes())
            .map_err(|source| CodecError::InvalidBase64 {
                input: value.to_string(),
                source,
            })?;

        String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8 {
            input: value.to_string(),
        })
    }
}
