//! # Unicode Code Point Codec
//!
//! The vocabulary is computed, not loaded: every Unicode scalar value is its
//! own token, and its id is its code point. The seven reserved ids in
//! [`crate::specials`] are checked before falling back to the numeric identity.

use std::borrow::Cow;

use crate::errors::{UTError, UTResult};
use crate::specials::SpecialToken;
use crate::types::{TokenId, VOCAB_SIZE, is_scalar_value};

/// Bidirectional token / id codec.
///
/// Stateless; safe to share or copy freely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UnicodeCodec;

impl UnicodeCodec {
    /// The vocabulary size; the same for every configuration.
    pub const fn vocab_size(&self) -> usize {
        VOCAB_SIZE
    }

    /// Split text into one token per Unicode scalar value.
    ///
    /// Special token markers in `text` are not recognized; `"<s>"` is three tokens.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// A vector of single-character slices of `text`.
    pub fn tokenize<'a>(
        &self,
        text: &'a str,
    ) -> Vec<&'a str> {
        let mut tokens = Vec::with_capacity(text.len());
        self.tokenize_append(text, &mut tokens);
        tokens
    }

    /// Split text into one token per Unicode scalar value, appending to `tokens`.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    /// * `tokens` - The target buffer to append to.
    pub fn tokenize_append<'a>(
        &self,
        text: &'a str,
        tokens: &mut Vec<&'a str>,
    ) {
        tokens.extend(
            text.char_indices()
                .map(|(idx, c)| &text[idx..idx + c.len_utf8()]),
        );
    }

    /// Map a single character to its id.
    #[inline(always)]
    pub const fn char_to_id(
        &self,
        c: char,
    ) -> TokenId {
        c as TokenId
    }

    /// Map a token to its id.
    ///
    /// ## Arguments
    /// * `token` - a special token marker, or a single character.
    ///
    /// ## Returns
    /// The reserved id for markers; otherwise the code point of the character.
    /// Fails with [`UTError::InvalidToken`] for empty or multi-character tokens.
    pub fn token_to_id(
        &self,
        token: &str,
    ) -> UTResult<TokenId> {
        if let Some(special) = SpecialToken::from_marker(token) {
            return Ok(special.id());
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(self.char_to_id(c)),
            _ => Err(UTError::InvalidToken {
                token: token.to_string(),
            }),
        }
    }

    /// Map an id to its token.
    ///
    /// ## Arguments
    /// * `id` - the token id.
    ///
    /// ## Returns
    /// The marker string for reserved ids; otherwise the single character.
    /// Fails with [`UTError::InvalidId`] for out-of-range or surrogate ids.
    pub fn id_to_token(
        &self,
        id: TokenId,
    ) -> UTResult<Cow<'static, str>> {
        if let Some(special) = SpecialToken::from_id(id) {
            return Ok(Cow::Borrowed(special.marker()));
        }
        Ok(Cow::Owned(self.id_to_char(id)?.to_string()))
    }

    /// Append the token for `id` to `buf`.
    ///
    /// ## Arguments
    /// * `id` - the token id.
    /// * `buf` - the target string buffer.
    pub fn push_token(
        &self,
        id: TokenId,
        buf: &mut String,
    ) -> UTResult<()> {
        match SpecialToken::from_id(id) {
            Some(special) => buf.push_str(special.marker()),
            None => buf.push(self.id_to_char(id)?),
        }
        Ok(())
    }

    fn id_to_char(
        &self,
        id: TokenId,
    ) -> UTResult<char> {
        char::from_u32(id).ok_or(UTError::InvalidId { id })
    }

    /// Map a sequence of tokens to ids; fails on the first invalid token.
    pub fn convert_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> UTResult<Vec<TokenId>> {
        tokens
            .iter()
            .map(|token| self.token_to_id(token.as_ref()))
            .collect()
    }

    /// Map a sequence of ids to tokens; fails on the first invalid id.
    pub fn convert_ids_to_tokens(
        &self,
        ids: &[TokenId],
    ) -> UTResult<Vec<Cow<'static, str>>> {
        ids.iter().map(|&id| self.id_to_token(id)).collect()
    }

    /// Join tokens back into a string.
    pub fn convert_tokens_to_string<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> String {
        tokens.iter().map(AsRef::as_ref).collect()
    }

    /// Lazily enumerate the vocabulary as `(token, id)` pairs.
    ///
    /// Surrogate ids are skipped; reserved ids yield their markers.
    pub fn vocab(&self) -> impl Iterator<Item = (Cow<'static, str>, TokenId)> + '_ {
        (0..VOCAB_SIZE as TokenId)
            .filter(|&id| is_scalar_value(id))
            .filter_map(|id| self.id_to_token(id).ok().map(|token| (token, id)))
    }
}
