//! # Sequence Shaper

use crate::errors::{UTError, UTResult};
use crate::shaping::encode_options::EncodeOptions;
use crate::shaping::truncation::{TruncationSide, content_budget};
use crate::specials::{BOS_ID, EOS_ID, PAD_ID};
use crate::types::TokenId;

/// Applies truncation, boundary wrapping, and padding to id sequences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceShaper {
    /// Which end loses ids under truncation.
    pub truncation_side: TruncationSide,

    /// Fallback max length, used when a call does not supply one.
    pub model_max_length: Option<usize>,
}

impl SequenceShaper {
    /// Create a new shaper.
    ///
    /// ## Arguments
    /// * `truncation_side` - which end loses ids under truncation.
    /// * `model_max_length` - the fallback max length.
    pub fn new(
        truncation_side: TruncationSide,
        model_max_length: Option<usize>,
    ) -> Self {
        Self {
            truncation_side,
            model_max_length,
        }
    }

    /// Resolve the effective max length for a call.
    ///
    /// ## Returns
    /// `options.max_length`, else `model_max_length`.
    /// Fails with [`UTError::Configuration`] when truncation or padding is
    /// requested and neither is set.
    pub fn effective_max_length(
        &self,
        options: &EncodeOptions,
    ) -> UTResult<Option<usize>> {
        let max_length = options.max_length.or(self.model_max_length);
        if max_length.is_none() && options.needs_max_length() {
            return Err(UTError::Configuration(
                "max_length is required for truncation or padding, and no model_max_length is set"
                    .to_string(),
            ));
        }
        Ok(max_length)
    }

    /// Truncate content ids to fit `max_length`.
    ///
    /// ## Arguments
    /// * `ids` - the content ids, before boundary wrapping.
    /// * `max_length` - the total length budget.
    /// * `add_special_tokens` - reserve two slots for boundary ids.
    ///
    /// ## Returns
    /// At most `max_length` (or `max_length - 2`, clamped at zero) ids,
    /// taken from the end selected by the truncation side.
    pub fn truncate_sequence(
        &self,
        mut ids: Vec<TokenId>,
        max_length: usize,
        add_special_tokens: bool,
    ) -> Vec<TokenId> {
        let keep = content_budget(max_length, add_special_tokens);
        if ids.len() > keep {
            log::trace!(
                "truncating {} ids to {keep} ({})",
                ids.len(),
                self.truncation_side
            );
            self.truncation_side.truncate(&mut ids, keep);
        }
        ids
    }

    /// Wrap content ids in sequence start / end ids.
    pub fn add_boundary_ids(
        &self,
        ids: Vec<TokenId>,
    ) -> Vec<TokenId> {
        let mut wrapped = Vec::with_capacity(ids.len() + 2);
        wrapped.push(BOS_ID);
        wrapped.extend(ids);
        wrapped.push(EOS_ID);
        wrapped
    }

    /// Right-pad with [`PAD_ID`] up to `max_length`.
    ///
    /// Never shortens; the result length is `max(ids.len(), max_length)`.
    pub fn pad(
        &self,
        mut ids: Vec<TokenId>,
        max_length: usize,
    ) -> Vec<TokenId> {
        self.pad_append(&mut ids, max_length);
        ids
    }

    /// Right-pad `ids` in place with [`PAD_ID`] up to `max_length`.
    pub fn pad_append(
        &self,
        ids: &mut Vec<TokenId>,
        max_length: usize,
    ) {
        if ids.len() < max_length {
            ids.resize(max_length, PAD_ID);
        }
    }

    /// Shape a sequence of content ids.
    ///
    /// Truncates, then wraps with boundary ids, then pads; each step only when
    /// the options ask for it.
    ///
    /// ## Arguments
    /// * `ids` - the content ids.
    /// * `options` - the shaping options.
    ///
    /// ## Returns
    /// The final id sequence.
    pub fn shape(
        &self,
        ids: Vec<TokenId>,
        options: &EncodeOptions,
    ) -> UTResult<Vec<TokenId>> {
        let max_length = self.effective_max_length(options)?;

        let mut ids = match max_length {
            Some(max_length) if options.truncation => {
                self.truncate_sequence(ids, max_length, options.add_special_tokens)
            }
            _ => ids,
        };

        if options.add_special_tokens {
            ids = self.add_boundary_ids(ids);
        }

        if let Some(max_length) = max_length
            && options.pad_to_max_length
        {
            self.pad_append(&mut ids, max_length);
        }

        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: TokenId) -> Vec<TokenId> {
        (1..=n).collect()
    }

    #[test]
    fn test_effective_max_length() {
        let shaper = SequenceShaper::default();
        let options = EncodeOptions::default();

        assert_eq!(shaper.effective_max_length(&options).unwrap(), None);
        assert_eq!(
            shaper
                .effective_max_length(&options.with_max_length(Some(4)))
                .unwrap(),
            Some(4)
        );

        assert!(matches!(
            shaper.effective_max_length(&options.with_truncation(true)),
            Err(UTError::Configuration(_))
        ));
        assert!(matches!(
            shaper.effective_max_length(&options.with_pad_to_max_length(true)),
            Err(UTError::Configuration(_))
        ));

        let shaper = SequenceShaper::new(TruncationSide::Left, Some(16));
        assert_eq!(
            shaper
                .effective_max_length(&options.with_truncation(true))
                .unwrap(),
            Some(16)
        );
        assert_eq!(
            shaper
                .effective_max_length(&options.with_max_length(Some(4)))
                .unwrap(),
            Some(4)
        );
    }

    #[test]
    fn test_truncate_sequence() {
        let left = SequenceShaper::new(TruncationSide::Left, None);
        let right = SequenceShaper::new(TruncationSide::Right, None);

        assert_eq!(left.truncate_sequence(ids(10), 5, true), vec![8, 9, 10]);
        assert_eq!(left.truncate_sequence(ids(10), 5, false), vec![6, 7, 8, 9, 10]);
        assert_eq!(right.truncate_sequence(ids(10), 5, true), vec![1, 2, 3]);
        assert_eq!(right.truncate_sequence(ids(10), 5, false), vec![1, 2, 3, 4, 5]);

        // Never lengthens.
        assert_eq!(left.truncate_sequence(ids(2), 5, true), vec![1, 2]);

        // Budgets below the two boundary slots clamp to empty.
        assert!(left.truncate_sequence(ids(10), 1, true).is_empty());
        assert!(right.truncate_sequence(ids(10), 0, true).is_empty());
    }

    #[test]
    fn test_pad() {
        let shaper = SequenceShaper::default();

        assert_eq!(shaper.pad(vec![7, 8], 4), vec![7, 8, PAD_ID, PAD_ID]);
        assert_eq!(shaper.pad(vec![7, 8], 2), vec![7, 8]);
        assert_eq!(shaper.pad(vec![7, 8, 9], 1), vec![7, 8, 9]);
        assert_eq!(shaper.pad(vec![], 0), Vec::<TokenId>::new());
        assert_eq!(shaper.pad(vec![], 2), vec![PAD_ID, PAD_ID]);
    }

    #[test]
    fn test_shape() {
        let shaper = SequenceShaper::default();
        let options = EncodeOptions::default();

        assert_eq!(
            shaper.shape(vec![97, 98], &options).unwrap(),
            vec![BOS_ID, 97, 98, EOS_ID]
        );
        assert_eq!(shaper.shape(vec![], &options).unwrap(), vec![BOS_ID, EOS_ID]);

        // Truncate then wrap.
        let truncated = shaper
            .shape(
                ids(10),
                &options.with_truncation(true).with_max_length(Some(5)),
            )
            .unwrap();
        assert_eq!(truncated, vec![BOS_ID, 8, 9, 10, EOS_ID]);

        // Wrap then pad.
        let padded = shaper
            .shape(
                vec![97],
                &options.with_pad_to_max_length(true).with_max_length(Some(5)),
            )
            .unwrap();
        assert_eq!(padded, vec![BOS_ID, 97, EOS_ID, PAD_ID, PAD_ID]);

        // A max length without truncation or padding does nothing.
        assert_eq!(
            shaper
                .shape(ids(4), &options.with_max_length(Some(2)))
                .unwrap(),
            vec![BOS_ID, 1, 2, 3, 4, EOS_ID]
        );

        // Tiny budgets still carry both boundary ids.
        let tiny = shaper
            .shape(
                ids(4),
                &options
                    .with_truncation(true)
                    .with_pad_to_max_length(true)
                    .with_max_length(Some(1)),
            )
            .unwrap();
        assert_eq!(tiny, vec![BOS_ID, EOS_ID]);

        assert!(shaper.shape(ids(4), &options.with_truncation(true)).is_err());
    }
}
