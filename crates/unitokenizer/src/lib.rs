#![warn(missing_docs, unused)]
//! # `unitokenizer`
//!
//! A training-free Unicode code point tokenizer.
//!
//! Every Unicode scalar value is its own token, and its id is its code point;
//! the vocabulary is computed, never loaded, and always has `1_114_112` slots.
//! Seven code points are reserved for structural special tokens
//! (see [`specials`]).
//!
//! On top of the codec, a sequence shaper applies boundary wrapping,
//! truncation, and padding; and decoding is its inverse.
//!
//! ## Example
//!
//! ```rust
//! use unitokenizer::{EncodeOptions, TruncationSide, UniTokenizer};
//!
//! let tokenizer = UniTokenizer::new(TruncationSide::Left, None);
//!
//! let options = EncodeOptions::default()
//!     .with_add_special_tokens(false)
//!     .with_pad_to_max_length(true)
//!     .with_max_length(Some(4));
//!
//! let batch = tokenizer.encode_batch(&["a", "bb"], &options).unwrap();
//! assert_eq!(batch, vec![vec![97, 0, 0, 0], vec![98, 98, 0, 0]]);
//!
//! assert_eq!(tokenizer.decode(&[0, 104, 105, 0]).unwrap(), "<pad>hi<pad>");
//! ```
//!
//! ## Special Token Ambiguity
//!
//! The reserved ids are also ordinary code points. Raw `U+0000` or
//! `U+E000..=U+E005` characters in the input encode to the same ids as the
//! special tokens, and decode to their markers.
//!
//! ## Crate Features
#![doc = document_features::document_features!()]

pub mod codec;
pub mod concurrency;
pub mod config;
pub mod errors;
pub mod shaping;
pub mod specials;
pub mod tokenizer;
pub mod types;

#[doc(inline)]
pub use codec::UnicodeCodec;
#[doc(inline)]
pub use config::TokenizerOptions;
#[doc(inline)]
pub use errors::{UTError, UTResult};
#[doc(inline)]
pub use shaping::{EncodeOptions, SequenceShaper, TruncationSide};
#[doc(inline)]
pub use specials::{
    BOS_ID,
    CLS_ID,
    EOS_ID,
    MASK_ID,
    NUM_SPECIAL_TOKENS,
    PAD_ID,
    SEP_ID,
    SpecialToken,
    UNK_ID,
};
#[doc(inline)]
pub use tokenizer::{DecodeInput, Decoding, Encoding, TextInput, UniTokenizer};
#[doc(inline)]
pub use types::{TokenId, VOCAB_SIZE};
