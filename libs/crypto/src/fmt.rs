//! Traits for text (human readable) and byte encodings for crypto primitives.
use anyhow::Context as _;

/// Utility for parsing human-readable text representations via TextFmt::decode.
/// It keeps the trimmed input, so that parse errors can name it.
pub struct Text<'a>(&'a str);

impl<'a> Text<'a> {
    /// Constructs a new unparsed text. Use other methods of Text
    /// to parse it afterwards. Text is an argument to TextFmt::decode
    /// trait method.
    pub fn new(s: &'a str) -> Self {
        Self(s.trim())
    }

    /// The text to parse.
    pub fn as_str(&self) -> &'a str {
        self.0
    }

    /// Parses the text as a base58-check string carrying the given
    /// version prefix. The payload behind the prefix is converted to T,
    /// using ByteFmt trait.
    pub fn decode_base58<T: ByteFmt>(self, version: &[u8]) -> anyhow::Result<T> {
        let raw = crate::base58::decode(self.0, version).context(self.0.to_owned())?;
        ByteFmt::decode(&raw).context(self.0.to_owned())
    }

    /// Syntax sugar for `TextFmt::decode`:
    /// instead of `<T as TextFmt>::decode(t)`, you can write
    /// `t.decode::<T>()`.
    pub fn decode<T: TextFmt>(self) -> anyhow::Result<T> {
        TextFmt::decode(self)
    }
}

/// Trait converting a type from/to a human-readable text format.
/// It is roughly equivalent to str::FromStr + std::fmt::Display,
/// but has additional requirements:
/// - `x == decode(x.encode())` has to hold.
/// - encoding collision between different types should be unlikely.
///   For example, keys of different roles carry different base58 version
///   prefixes, so a node public key does not parse as an account public key.
/// - the encoding is the one rippled config files expect, so it must stay
///   stable across releases.
pub trait TextFmt: Sized {
    /// Decodes the object from a text representation.
    fn decode(text: Text) -> anyhow::Result<Self>;
    /// Encodes the object to a text representation.
    fn encode(&self) -> String;
}

/// Decodes an optional field from text representation.
pub fn read_optional_text<T: TextFmt>(field: &Option<String>) -> anyhow::Result<Option<T>> {
    let Some(field) = field else { return Ok(None) };
    Text::new(field).decode().map(Some)
}

/// Trait converting a type from/to a fixed byte format.
/// The byte encoding is the raw key material as the XRP Ledger defines it,
/// so that it can be wrapped into base58 or hex text encodings.
pub trait ByteFmt: Sized {
    /// Decodes the object from the byte representation.
    fn decode(bytes: &[u8]) -> anyhow::Result<Self>;
    /// Encodes the object to the byte representation.
    fn encode(&self) -> Vec<u8>;
}
