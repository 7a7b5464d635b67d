//! # Special Tokens
//!
//! Seven code points are reserved for structural tokens: `U+0000` for padding,
//! and the head of the Private Use Area, `U+E000..=U+E005`, for the rest.
//!
//! Each [`SpecialToken`] has:
//! * an id, which is also its code point;
//! * a marker string, such as `<pad>`, which is what decoding produces;
//! * a raw character, `char::from_u32(id)`.
//!
//! The reserved ids double as ordinary code points. Encoding text that
//! contains, say, a raw `U+E002` produces the same id as the sequence start
//! token; the two are indistinguishable after encoding.

use strum::{EnumCount, IntoEnumIterator};

use crate::types::TokenId;

/// Padding id.
pub const PAD_ID: TokenId = 0x0000;

/// Class start id.
pub const CLS_ID: TokenId = 0xE000;

/// Separator / segment end id.
pub const SEP_ID: TokenId = 0xE001;

/// Sequence start (BOS) id.
pub const BOS_ID: TokenId = 0xE002;

/// Sequence end (EOS) id.
pub const EOS_ID: TokenId = 0xE003;

/// Unknown id.
pub const UNK_ID: TokenId = 0xE004;

/// Mask id.
pub const MASK_ID: TokenId = 0xE005;

/// Reserved structural tokens.
///
/// `Display` and `FromStr` use the marker form.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::IntoStaticStr,
)]
pub enum SpecialToken {
    /// Padding.
    #[strum(serialize = "<pad>")]
    Pad,

    /// Class start.
    #[strum(serialize = "<cls>")]
    ClassStart,

    /// Separator / segment end.
    #[strum(serialize = "<sep>")]
    SeparatorEnd,

    /// Sequence start.
    #[strum(serialize = "<s>")]
    SequenceStart,

    /// Sequence end.
    #[strum(serialize = "</s>")]
    SequenceEnd,

    /// Unknown.
    #[strum(serialize = "<unk>")]
    Unknown,

    /// Mask.
    #[strum(serialize = "<mask>")]
    Mask,
}

/// The number of special tokens.
pub const NUM_SPECIAL_TOKENS: usize = SpecialToken::COUNT;

impl SpecialToken {
    /// The reserved id of this token.
    pub const fn id(self) -> TokenId {
        match self {
            SpecialToken::Pad => PAD_ID,
            SpecialToken::ClassStart => CLS_ID,
            SpecialToken::SeparatorEnd => SEP_ID,
            SpecialToken::SequenceStart => BOS_ID,
            SpecialToken::SequenceEnd => EOS_ID,
            SpecialToken::Unknown => UNK_ID,
            SpecialToken::Mask => MASK_ID,
        }
    }

    /// The conventional short role name, as used by host frameworks.
    pub const fn role(self) -> &'static str {
        match self {
            SpecialToken::Pad => "pad",
            SpecialToken::ClassStart => "cls",
            SpecialToken::SeparatorEnd => "sep",
            SpecialToken::SequenceStart => "bos",
            SpecialToken::SequenceEnd => "eos",
            SpecialToken::Unknown => "unk",
            SpecialToken::Mask => "mask",
        }
    }

    /// The marker string, such as `<pad>`.
    pub fn marker(self) -> &'static str {
        self.into()
    }

    /// The raw reserved character.
    pub fn as_char(self) -> char {
        // All reserved ids are scalar values.
        char::from_u32(self.id()).unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Iterate over all special tokens, in table order.
    pub fn all() -> SpecialTokenIter {
        SpecialToken::iter()
    }

    /// Look up the special token reserved at `id`.
    pub fn from_id(id: TokenId) -> Option<Self> {
        match id {
            PAD_ID => Some(SpecialToken::Pad),
            CLS_ID => Some(SpecialToken::ClassStart),
            SEP_ID => Some(SpecialToken::SeparatorEnd),
            BOS_ID => Some(SpecialToken::SequenceStart),
            EOS_ID => Some(SpecialToken::SequenceEnd),
            UNK_ID => Some(SpecialToken::Unknown),
            MASK_ID => Some(SpecialToken::Mask),
            _ => None,
        }
    }

    /// Look up the special token with the given marker string.
    pub fn from_marker(marker: &str) -> Option<Self> {
        marker.parse().ok()
    }

    /// Is `id` one of the reserved ids?
    pub fn is_special_id(id: TokenId) -> bool {
        Self::from_id(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        let expected = [
            (SpecialToken::Pad, 0x0000, "<pad>", "pad"),
            (SpecialToken::ClassStart, 0xE000, "<cls>", "cls"),
            (SpecialToken::SeparatorEnd, 0xE001, "<sep>", "sep"),
            (SpecialToken::SequenceStart, 0xE002, "<s>", "bos"),
            (SpecialToken::SequenceEnd, 0xE003, "</s>", "eos"),
            (SpecialToken::Unknown, 0xE004, "<unk>", "unk"),
            (SpecialToken::Mask, 0xE005, "<mask>", "mask"),
        ];

        assert_eq!(NUM_SPECIAL_TOKENS, 7);
        assert_eq!(SpecialToken::all().count(), expected.len());

        for (tok, (expected_tok, id, marker, role)) in SpecialToken::all().zip(expected) {
            assert_eq!(tok, expected_tok);
            assert_eq!(tok.id(), id);
            assert_eq!(tok.marker(), marker);
            assert_eq!(tok.to_string(), marker);
            assert_eq!(tok.role(), role);
            assert_eq!(tok.as_char() as TokenId, id);

            assert_eq!(SpecialToken::from_id(id), Some(tok));
            assert_eq!(SpecialToken::from_marker(marker), Some(tok));
            assert!(SpecialToken::is_special_id(id));
        }
    }

    #[test]
    fn test_lookup_misses() {
        assert_eq!(SpecialToken::from_id('a' as TokenId), None);
        assert_eq!(SpecialToken::from_id(0xE006), None);
        assert!(!SpecialToken::is_special_id(0xDFFF));

        assert_eq!(SpecialToken::from_marker("<PAD>"), None);
        assert_eq!(SpecialToken::from_marker("<pad> "), None);
        assert_eq!(SpecialToken::from_marker(""), None);
        assert_eq!(SpecialToken::from_marker("\u{E002}"), None);
    }
}
