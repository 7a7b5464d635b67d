//! # Classifier-Style Inputs
//!
//! Host NLP frameworks build model inputs for single sequences and sequence
//! pairs as `<cls> A <sep>` and `<cls> A <sep> B <sep>`.

use crate::specials::{CLS_ID, SEP_ID, SpecialToken};
use crate::types::TokenId;

/// Build `<cls> ids_0 <sep>`, or `<cls> ids_0 <sep> ids_1 <sep>` for a pair.
///
/// ## Arguments
/// * `ids_0` - the first sequence.
/// * `ids_1` - the optional second sequence.
pub fn build_inputs_with_special_tokens(
    ids_0: &[TokenId],
    ids_1: Option<&[TokenId]>,
) -> Vec<TokenId> {
    let extra = ids_1.map_or(0, |ids| ids.len() + 1);
    let mut result = Vec::with_capacity(ids_0.len() + 2 + extra);

    result.push(CLS_ID);
    result.extend_from_slice(ids_0);
    result.push(SEP_ID);

    if let Some(ids_1) = ids_1 {
        result.extend_from_slice(ids_1);
        result.push(SEP_ID);
    }
    result
}

/// Mark which positions hold special tokens.
///
/// ## Arguments
/// * `ids_0` - the first sequence.
/// * `ids_1` - the optional second sequence.
/// * `already_has_special_tokens` - whether the sequences were already wrapped.
///
/// ## Returns
/// When `already_has_special_tokens` is `false`, the mask of the sequence
/// [`build_inputs_with_special_tokens`] would produce. Otherwise `1` for every
/// reserved id in the given ids, `0` elsewhere.
pub fn special_tokens_mask(
    ids_0: &[TokenId],
    ids_1: Option<&[TokenId]>,
    already_has_special_tokens: bool,
) -> Vec<u8> {
    if already_has_special_tokens {
        return ids_0
            .iter()
            .chain(ids_1.unwrap_or_default())
            .map(|&id| SpecialToken::is_special_id(id) as u8)
            .collect();
    }

    let mut mask = Vec::with_capacity(ids_0.len() + 2);
    mask.push(1);
    mask.resize(ids_0.len() + 1, 0);
    mask.push(1);

    if let Some(ids_1) = ids_1 {
        mask.resize(mask.len() + ids_1.len(), 0);
        mask.push(1);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specials::{BOS_ID, PAD_ID};

    #[test]
    fn test_build_inputs() {
        assert_eq!(
            build_inputs_with_special_tokens(&[97, 98], None),
            vec![CLS_ID, 97, 98, SEP_ID]
        );
        assert_eq!(
            build_inputs_with_special_tokens(&[97], Some(&[99, 100][..])),
            vec![CLS_ID, 97, SEP_ID, 99, 100, SEP_ID]
        );
        assert_eq!(
            build_inputs_with_special_tokens(&[], Some(&[][..])),
            vec![CLS_ID, SEP_ID, SEP_ID]
        );
    }

    #[test]
    fn test_special_tokens_mask() {
        assert_eq!(special_tokens_mask(&[97, 98], None, false), vec![1, 0, 0, 1]);
        assert_eq!(
            special_tokens_mask(&[97], Some(&[99, 100][..]), false),
            vec![1, 0, 1, 0, 0, 1]
        );
        assert_eq!(special_tokens_mask(&[], None, false), vec![1, 1]);

        assert_eq!(
            special_tokens_mask(&[CLS_ID, 97, SEP_ID], Some(&[98, PAD_ID][..]), true),
            vec![1, 0, 1, 0, 1]
        );
        assert_eq!(
            special_tokens_mask(&[BOS_ID, 0xE006, 97], None, true),
            vec![1, 0, 0]
        );
    }

    #[test]
    fn test_mask_matches_inputs() {
        let ids_0 = [104, 105];
        let ids_1 = [106];

        let wrapped = build_inputs_with_special_tokens(&ids_0, Some(&ids_1[..]));
        assert_eq!(
            special_tokens_mask(&ids_0, Some(&ids_1[..]), false),
            special_tokens_mask(&wrapped, None, true)
        );
    }
}
