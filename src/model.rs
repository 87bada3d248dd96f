use std::fmt;

use crate::b64::Base64Codec;
use crate::codec::{Chain, StringCodec};
use crate::error::CodecError;
use crate::json::JsonCodec;
use crate::notify::{Notifier, Subscription};
use crate::snapshot::Snapshot;

pub const EXAMPLE_ENCODED: &str = "eyJleGFtcGxlIjoidmFsdWUifQ==";
pub const EXAMPLE_DECODED: &str = "{\"example\":\"value\"}";

/// JSON text inside standard Base64.
pub type Json64Codec = Chain<Base64Codec, JsonCodec>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Encoded,
    Decoded,
}

impl Field {
    pub fn opposite(self) -> Field {
        match self {
            Field::Encoded => Field::Decoded,
            Field::Decoded => Field::Encoded,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Encoded => f.write_str("encoded"),
            Field::Decoded => f.write_str("decoded"),
        }
    }
}

/// Two text fields kept in step through a codec.
///
/// Writing one field runs a transition: the other field is derived through
/// the codec, the error slot is set or cleared, and every observer is called
/// once with the updated model. When the derived text already equals the
/// other field, the cross-write is skipped.
///
/// If the conversion fails, the written field keeps the new text, the other
/// field keeps its last good value and [`SyncModel::error`] reports why.
pub struct SyncModel<C = Json64Codec> {
    encoded: String,
    decoded: String,
    error: Option<CodecError>,
    codec: C,
    notifier: Notifier<SyncModel<C>>,
}

impl SyncModel<Json64Codec> {
    /// Seeds both fields as given, without running a transition.
    pub fn new(encoded: impl Into<String>, decoded: impl Into<String>) -> Self {
        Self::with_codec(Json64Codec::default(), encoded, decoded)
    }

    pub fn example() -> Self {
        Self::new(EXAMPLE_ENCODED, EXAMPLE_DECODED)
    }

    /// Writes the example encoding back, deriving the decoded side from it.
    pub fn reset(&mut self) {
        self.set_encoded_text(EXAMPLE_ENCODED);
    }
}

impl Default for SyncModel<Json64Codec> {
    fn default() -> Self {
        Self::example()
    }
}

impl<C: StringCodec + 'static> SyncModel<C> {
    pub fn with_codec(codec: C, encoded: impl Into<String>, decoded: impl Into<String>) -> Self {
        SyncModel {
            encoded: encoded.into(),
            decoded: decoded.into(),
            error: None,
            codec,
            notifier: Notifier::new(),
        }
    }

    pub fn encoded_text(&self) -> &str {
        &self.encoded
    }

    pub fn decoded_text(&self) -> &str {
        &self.decoded
    }

    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Encoded => &self.encoded,
            Field::Decoded => &self.decoded,
        }
    }

    pub fn error(&self) -> Option<&CodecError> {
        self.error.as_ref()
    }

    pub fn set_encoded_text(&mut self, value: impl Into<String>) {
        self.set_text(Field::Encoded, value);
    }

    pub fn set_decoded_text(&mut self, value: impl Into<String>) {
        self.set_text(Field::Decoded, value);
    }

    /// Writes `field` and runs one full transition, even when the value is
    /// unchanged.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        *self.text_mut(field) = value.into();
        self.sync_from(field);
    }

    /// Registers an observer that runs after every transition.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&SyncModel<C>) + 'static,
    {
        self.notifier.subscribe(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.notifier.len()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.encoded, &self.decoded, self.error.as_ref())
    }

    fn text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Encoded => &mut self.encoded,
            Field::Decoded => &mut self.decoded,
        }
    }

    fn sync_from(&mut self, source: Field) {
        let result = match source {
            Field::Encoded => self.codec.decode(&self.encoded),
            Field::Decoded => self.codec.encode(&self.decoded),
        };

        match result {
            Ok(candidate) => {
                self.error = None;
                let target = source.opposite();
                let current = self.text_mut(target);
                if *current != candidate {
                    log::debug!("[{source}] updated {target} text to {candidate:?}");
                    *current = candidate;
                } else {
                    log::debug!("[{source}] {target} text already up to date");
                }
            }
            Err(e) => {
                log::warn!("[{source}] conversion failed: {e}");
                self.error = Some(e);
            }
        }

        self.notifier.notify(self);
    }
}

impl<C> fmt::Debug for SyncModel<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncModel")
            .field("encoded", &self.encoded)
            .field("decoded", &self.decoded)
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}
