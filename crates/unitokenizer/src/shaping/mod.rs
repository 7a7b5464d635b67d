//! # Sequence Shaping
//!
//! Shaping turns raw content ids into model-ready sequences:
//! * truncation to a length budget, from the left or the right;
//! * wrapping with sequence start / end ids;
//! * right-padding with the pad id.
//!
//! [`SequenceShaper`] holds the per-tokenizer policy, and [`EncodeOptions`]
//! carries the per-call switches.

mod encode_options;
mod pair_inputs;
mod sequence_shaper;
mod truncation;

#[doc(inline)]
pub use encode_options::*;
#[doc(inline)]
pub use pair_inputs::*;
#[doc(inline)]
pub use sequence_shaper::*;
#[doc(inline)]
pub use truncation::*;
