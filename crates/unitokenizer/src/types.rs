//! # Common Types and Constants

use core::ops::RangeInclusive;

/// Token id type.
///
/// A token id is the Unicode code point of the character it names.
pub type TokenId = u32;

/// The largest valid Unicode code point.
pub const MAX_CODE_POINT: TokenId = char::MAX as TokenId;

/// The size of the vocabulary.
///
/// This is the size of the raw code point range, `0..=0x10FFFF`.
/// The special token ids are a subset of this range, not additional slots;
/// and the surrogate block is counted even though it is never produced.
pub const VOCAB_SIZE: usize = MAX_CODE_POINT as usize + 1;

/// The UTF-16 surrogate block; never a valid token id.
pub const SURROGATE_RANGE: RangeInclusive<TokenId> = 0xD800..=0xDFFF;

/// Is this id a Unicode scalar value?
///
/// ## Arguments
/// * `id` - the candidate id.
///
/// ## Returns
/// `true` iff `id` is in range and not a surrogate.
#[inline(always)]
pub fn is_scalar_value(id: TokenId) -> bool {
    id <= MAX_CODE_POINT && !SURROGATE_RANGE.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocab_size() {
        assert_eq!(VOCAB_SIZE, 1_114_112);
        assert_eq!(MAX_CODE_POINT, 0x10FFFF);
    }

    #[test]
    fn test_is_scalar_value() {
        assert!(is_scalar_value(0));
        assert!(is_scalar_value('a' as TokenId));
        assert!(is_scalar_value(0xD7FF));
        assert!(!is_scalar_value(0xD800));
        assert!(!is_scalar_value(0xDFFF));
        assert!(is_scalar_value(0xE000));
        assert!(is_scalar_value(0x10FFFF));
        assert!(!is_scalar_value(0x110000));
        assert!(!is_scalar_value(TokenId::MAX));
    }
}
