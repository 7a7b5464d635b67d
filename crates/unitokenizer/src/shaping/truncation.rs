//! # Truncation Policy

use serde::{Deserialize, Serialize};

use crate::types::TokenId;

/// Which end of a sequence loses ids when it is too long.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TruncationSide {
    /// Drop from the front; keep the suffix.
    #[default]
    Left,

    /// Drop from the back; keep the prefix.
    Right,
}

impl TruncationSide {
    /// Truncate `ids` in place to at most `keep` ids.
    ///
    /// No-op when `ids.len() <= keep`.
    pub fn truncate(
        self,
        ids: &mut Vec<TokenId>,
        keep: usize,
    ) {
        if ids.len() <= keep {
            return;
        }
        match self {
            TruncationSide::Left => {
                ids.drain(..ids.len() - keep);
            }
            TruncationSide::Right => ids.truncate(keep),
        }
    }
}

/// The number of content ids kept under a `max_length` budget.
///
/// Reserves two slots for the boundary ids when `add_special_tokens` is set;
/// a budget smaller than two clamps to zero.
pub fn content_budget(
    max_length: usize,
    add_special_tokens: bool,
) -> usize {
    if add_special_tokens {
        max_length.saturating_sub(2)
    } else {
        max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        assert_eq!("left".parse::<TruncationSide>().unwrap(), TruncationSide::Left);
        assert_eq!("Right".parse::<TruncationSide>().unwrap(), TruncationSide::Right);
        assert!("middle".parse::<TruncationSide>().is_err());

        assert_eq!(TruncationSide::Left.to_string(), "left");
        assert_eq!(TruncationSide::Right.to_string(), "right");
        assert_eq!(TruncationSide::default(), TruncationSide::Left);
    }

    #[test]
    fn test_serde() {
        assert_eq!(
            serde_json::to_string(&TruncationSide::Right).unwrap(),
            "\"right\""
        );
        assert_eq!(
            serde_json::from_str::<TruncationSide>("\"left\"").unwrap(),
            TruncationSide::Left
        );
    }

    #[test]
    fn test_truncate() {
        let ids: Vec<TokenId> = (1..=5).collect();

        let mut left = ids.clone();
        TruncationSide::Left.truncate(&mut left, 2);
        assert_eq!(left, vec![4, 5]);

        let mut right = ids.clone();
        TruncationSide::Right.truncate(&mut right, 2);
        assert_eq!(right, vec![1, 2]);

        let mut short = ids.clone();
        TruncationSide::Left.truncate(&mut short, 10);
        assert_eq!(short, ids);

        let mut empty = ids.clone();
        TruncationSide::Right.truncate(&mut empty, 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_content_budget() {
        assert_eq!(content_budget(5, true), 3);
        assert_eq!(content_budget(5, false), 5);
        assert_eq!(content_budget(2, true), 0);
        assert_eq!(content_budget(1, true), 0);
        assert_eq!(content_budget(0, true), 0);
        assert_eq!(content_budget(0, false), 0);
    }
}
