//! # Single / Batch Dispatch Types

use crate::types::TokenId;

/// Text input to [`UniTokenizer::encode_input`](crate::UniTokenizer::encode_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextInput<'a, S: AsRef<str> = &'a str> {
    /// A single text.
    Single(&'a str),

    /// A batch of texts.
    Batch(&'a [S]),
}

impl<'a> From<&'a str> for TextInput<'a> {
    fn from(text: &'a str) -> Self {
        TextInput::Single(text)
    }
}

impl<'a> From<&'a String> for TextInput<'a> {
    fn from(text: &'a String) -> Self {
        TextInput::Single(text.as_str())
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for TextInput<'a, S> {
    fn from(texts: &'a [S]) -> Self {
        TextInput::Batch(texts)
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for TextInput<'a, S> {
    fn from(texts: &'a [S; N]) -> Self {
        TextInput::Batch(texts.as_slice())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for TextInput<'a, S> {
    fn from(texts: &'a Vec<S>) -> Self {
        TextInput::Batch(texts.as_slice())
    }
}

/// Output of [`UniTokenizer::encode_input`](crate::UniTokenizer::encode_input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoding {
    /// The ids of a single text.
    Single(Vec<TokenId>),

    /// The ids of each text of a batch.
    Batch(Vec<Vec<TokenId>>),
}

impl Encoding {
    /// Flatten into a batch; a single sequence becomes a batch of one.
    pub fn into_batch(self) -> Vec<Vec<TokenId>> {
        match self {
            Encoding::Single(ids) => vec![ids],
            Encoding::Batch(batch) => batch,
        }
    }
}

/// Id input to [`UniTokenizer::decode_input`](crate::UniTokenizer::decode_input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeInput<'a> {
    /// A single id; decodes to a single token.
    Id(TokenId),

    /// A sequence of ids; decodes to one string.
    Ids(&'a [TokenId]),

    /// A batch of sequences; decodes to one string per sequence.
    Batch(&'a [Vec<TokenId>]),
}

impl From<TokenId> for DecodeInput<'_> {
    fn from(id: TokenId) -> Self {
        DecodeInput::Id(id)
    }
}

impl<'a> From<&'a [TokenId]> for DecodeInput<'a> {
    fn from(ids: &'a [TokenId]) -> Self {
        DecodeInput::Ids(ids)
    }
}

impl<'a> From<&'a Vec<TokenId>> for DecodeInput<'a> {
    fn from(ids: &'a Vec<TokenId>) -> Self {
        DecodeInput::Ids(ids.as_slice())
    }
}

impl<'a> From<&'a [Vec<TokenId>]> for DecodeInput<'a> {
    fn from(batch: &'a [Vec<TokenId>]) -> Self {
        DecodeInput::Batch(batch)
    }
}

impl<'a> From<&'a Vec<Vec<TokenId>>> for DecodeInput<'a> {
    fn from(batch: &'a Vec<Vec<TokenId>>) -> Self {
        DecodeInput::Batch(batch.as_slice())
    }
}

/// Output of [`UniTokenizer::decode_input`](crate::UniTokenizer::decode_input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoding {
    /// A single decoded string.
    Single(String),

    /// One decoded string per input sequence.
    Batch(Vec<String>),
}
