//! # Unicode Tokenizer

use std::borrow::Cow;

use crate::codec::UnicodeCodec;
use crate::concurrency::try_map_batch;
use crate::config::TokenizerOptions;
use crate::errors::UTResult;
use crate::shaping::{
    EncodeOptions,
    SequenceShaper,
    TruncationSide,
    build_inputs_with_special_tokens,
    special_tokens_mask,
};
use crate::specials::{NUM_SPECIAL_TOKENS, SpecialToken};
use crate::tokenizer::inputs::{DecodeInput, Decoding, Encoding, TextInput};
use crate::types::TokenId;

/// Unicode code point tokenizer.
///
/// Combines the [`UnicodeCodec`] with a [`SequenceShaper`].
/// All state is fixed at construction; the tokenizer is `Send + Sync`
/// and can be shared across threads without locking.
///
/// ```rust
/// use unitokenizer::{BOS_ID, EOS_ID, EncodeOptions, UniTokenizer};
///
/// let tokenizer = UniTokenizer::default();
/// let ids = tokenizer.encode("ab", &EncodeOptions::default()).unwrap();
/// assert_eq!(ids, vec![BOS_ID, 97, 98, EOS_ID]);
/// assert_eq!(tokenizer.decode(&ids).unwrap(), "<s>ab</s>");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UniTokenizer {
    codec: UnicodeCodec,
    shaper: SequenceShaper,
}

impl UniTokenizer {
    /// Create a new tokenizer.
    ///
    /// ## Arguments
    /// * `truncation_side` - which end loses ids under truncation.
    /// * `model_max_length` - fallback max length when a call supplies none.
    pub fn new(
        truncation_side: TruncationSide,
        model_max_length: Option<usize>,
    ) -> Self {
        log::debug!(
            "UniTokenizer: truncation_side={truncation_side}, model_max_length={model_max_length:?}"
        );
        Self {
            codec: UnicodeCodec,
            shaper: SequenceShaper::new(truncation_side, model_max_length),
        }
    }

    /// Create a tokenizer from options, resolving unset fields from the environment.
    ///
    /// See [`TokenizerOptions::resolve`].
    pub fn from_options(options: TokenizerOptions) -> UTResult<Self> {
        let options = options.resolve()?;
        Ok(Self::new(
            options.truncation_side.unwrap_or_default(),
            options.model_max_length,
        ))
    }

    /// The options this tokenizer was built with.
    pub fn options(&self) -> TokenizerOptions {
        TokenizerOptions {
            truncation_side: Some(self.shaper.truncation_side),
            model_max_length: self.shaper.model_max_length,
        }
    }

    /// The token / id codec.
    pub fn codec(&self) -> &UnicodeCodec {
        &self.codec
    }

    /// The sequence shaper.
    pub fn shaper(&self) -> &SequenceShaper {
        &self.shaper
    }

    /// Which end loses ids under truncation.
    pub fn truncation_side(&self) -> TruncationSide {
        self.shaper.truncation_side
    }

    /// The fallback max length.
    pub fn model_max_length(&self) -> Option<usize> {
        self.shaper.model_max_length
    }

    /// The vocabulary size; always `1_114_112`.
    pub fn vocab_size(&self) -> usize {
        self.codec.vocab_size()
    }

    /// The number of reserved special tokens.
    pub fn num_special_tokens(&self) -> usize {
        NUM_SPECIAL_TOKENS
    }

    /// The reserved ids, in table order.
    pub fn all_special_ids(&self) -> Vec<TokenId> {
        SpecialToken::all().map(SpecialToken::id).collect()
    }

    /// The reserved marker strings, in table order.
    pub fn all_special_tokens(&self) -> Vec<&'static str> {
        SpecialToken::all().map(SpecialToken::marker).collect()
    }

    /// Split text into single-character tokens.
    pub fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        self.codec.tokenize(text)
    }

    /// Map a token (marker or single character) to its id.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> UTResult<TokenId> {
        self.codec.token_to_id(token)
    }

    /// Map an id to its token (marker or single character).
    pub fn id_to_token(
        &self,
        id: TokenId,
    ) -> UTResult<Cow<'static, str>> {
        self.codec.id_to_token(id)
    }

    /// Encode text to a shaped id sequence.
    ///
    /// ## Arguments
    /// * `text` - the text to encode.
    /// * `options` - special token, truncation, and padding switches.
    ///
    /// ## Returns
    /// The final id sequence. Fails with
    /// [`UTError::Configuration`](crate::UTError::Configuration) when truncation
    /// or padding is requested without any max length.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text))
    )]
    pub fn encode(
        &self,
        text: &str,
        options: &EncodeOptions,
    ) -> UTResult<Vec<TokenId>> {
        let mut ids = Vec::with_capacity(text.len() + 2);
        ids.extend(text.chars().map(|c| self.codec.char_to_id(c)));
        self.shaper.shape(ids, options)
    }

    /// Encode each text of a batch with the same options.
    ///
    /// Each sequence is shaped on its own; there is no shared batch length.
    pub fn encode_batch<S>(
        &self,
        texts: &[S],
        options: &EncodeOptions,
    ) -> UTResult<Vec<Vec<TokenId>>>
    where
        S: AsRef<str> + Sync,
    {
        try_map_batch(texts, |text| self.encode(text.as_ref(), options))
    }

    /// Encode a single text or a batch.
    ///
    /// Dispatches to [`Self::encode`] or [`Self::encode_batch`].
    pub fn encode_input<'a, S, I>(
        &self,
        input: I,
        options: &EncodeOptions,
    ) -> UTResult<Encoding>
    where
        S: AsRef<str> + Sync + 'a,
        I: Into<TextInput<'a, S>>,
    {
        Ok(match input.into() {
            TextInput::Single(text) => Encoding::Single(self.encode(text, options)?),
            TextInput::Batch(texts) => Encoding::Batch(self.encode_batch(texts, options)?),
        })
    }

    /// Decode a single id to its token.
    pub fn decode_id(
        &self,
        id: TokenId,
    ) -> UTResult<Cow<'static, str>> {
        self.codec.id_to_token(id)
    }

    /// Decode ids to text.
    ///
    /// Special ids decode to their markers; they are not stripped.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, ids))
    )]
    pub fn decode(
        &self,
        ids: &[TokenId],
    ) -> UTResult<String> {
        let mut text = String::with_capacity(ids.len());
        for &id in ids {
            self.codec.push_token(id, &mut text)?;
        }
        Ok(text)
    }

    /// Decode each sequence of a batch.
    pub fn batch_decode<V>(
        &self,
        sequences: &[V],
    ) -> UTResult<Vec<String>>
    where
        V: AsRef<[TokenId]> + Sync,
    {
        try_map_batch(sequences, |ids| self.decode(ids.as_ref()))
    }

    /// Decode a single id, a sequence, or a batch.
    pub fn decode_input<'a, I>(
        &self,
        input: I,
    ) -> UTResult<Decoding>
    where
        I: Into<DecodeInput<'a>>,
    {
        Ok(match input.into() {
            DecodeInput::Id(id) => Decoding::Single(self.decode_id(id)?.into_owned()),
            DecodeInput::Ids(ids) => Decoding::Single(self.decode(ids)?),
            DecodeInput::Batch(batch) => Decoding::Batch(self.batch_decode(batch)?),
        })
    }

    /// Truncate content ids to fit `max_length`; see [`SequenceShaper::truncate_sequence`].
    pub fn truncate_sequence(
        &self,
        ids: Vec<TokenId>,
        max_length: usize,
        add_special_tokens: bool,
    ) -> Vec<TokenId> {
        self.shaper
            .truncate_sequence(ids, max_length, add_special_tokens)
    }

    /// Right-pad with the pad id; see [`SequenceShaper::pad`].
    pub fn pad(
        &self,
        ids: Vec<TokenId>,
        max_length: usize,
    ) -> Vec<TokenId> {
        self.shaper.pad(ids, max_length)
    }

    /// Build `<cls> A <sep>` / `<cls> A <sep> B <sep>` inputs.
    pub fn build_inputs_with_special_tokens(
        &self,
        ids_0: &[TokenId],
        ids_1: Option<&[TokenId]>,
    ) -> Vec<TokenId> {
        build_inputs_with_special_tokens(ids_0, ids_1)
    }

    /// Mark special token positions; see [`special_tokens_mask`].
    pub fn special_tokens_mask(
        &self,
        ids_0: &[TokenId],
        ids_1: Option<&[TokenId]>,
        already_has_special_tokens: bool,
    ) -> Vec<u8> {
        special_tokens_mask(ids_0, ids_1, already_has_special_tokens)
    }

    /// Join tokens back into text.
    pub fn convert_tokens_to_string<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> String {
        self.codec.convert_tokens_to_string(tokens)
    }
}
