use crate::error::CodecError;

/// A pair of fallible conversions between two string forms.
///
/// `encode` moves text towards the wire form, `decode` back towards the
/// human-editable form.
pub trait StringCodec {
    fn encode(&self, value: &str) -> Result<String, CodecError>;
    fn decode(&self, value: &str) -> Result<String, CodecError>;
}

/// Runs `inner` then `outer` when encoding, and `outer` then `inner` when
/// decoding. The first failure short-circuits the chain.
#[derive(Debug, Default, Clone, Copy)]
pub struct Chain<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Chain<Outer, Inner> {
    pub fn new(outer: Outer, inner: Inner) -> Self {
        Chain { outer, inner }
    }
}

impl<Outer, Inner> StringCodec for Chain<Outer, Inner>
where
    Outer: StringCodec,
    Inner: StringCodec,
{
    fn encode(&self, value: &str) -> Result<String, CodecError> {
        self.inner
            .encode(value)
            .and_then(|text| self.outer.encode(&text))
    }

    fn decode(&self, value: &str) -> Result<String, CodecError> {
        self.outer
            .decode(value)
            .and_then(|text| self.inner.decode(&text))
    }
}
