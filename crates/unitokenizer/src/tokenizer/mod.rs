//! # Tokenizer Facade
//!
//! [`UniTokenizer`] is the public entry point: it owns the codec and the
//! shaper, and exposes single, batch, and dispatching encode / decode calls.

mod inputs;
mod uni_tokenizer;

#[doc(inline)]
pub use inputs::*;
#[doc(inline)]
pub use uni_tokenizer::*;
