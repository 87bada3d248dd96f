//! Keeps a Base64 string and its decoded JSON text in sync.
//!
//! [`SyncModel`] owns both fields. Writing either one re-derives the other
//! through [`Json64Codec`], records the last conversion failure and notifies
//! every subscribed observer once.

pub mod b64;
pub mod codec;
pub mod error;
pub mod frontend;
pub mod json;
pub mod logger;
pub mod model;
pub mod notify;
pub mod snapshot;

pub use b64::Base64Codec;
pub use codec::{Chain, StringCodec};
pub use error::{CodecError, ErrorKind};
pub use json::JsonCodec;
pub use model::{EXAMPLE_DECODED, EXAMPLE_ENCODED, Field, Json64Codec, SyncModel};
pub use notify::{Notifier, Subscription};
pub use snapshot::Snapshot;
