//! # Encode Options

/// Per-call sequence shaping options.
///
/// The defaults wrap with boundary ids and neither truncate nor pad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the sequence in sequence start / end ids.
    pub add_special_tokens: bool,

    /// Truncate sequences longer than the max length.
    pub truncation: bool,

    /// The max length; falls back to the tokenizer's `model_max_length`.
    pub max_length: Option<usize>,

    /// Right-pad shorter sequences to the max length.
    pub pad_to_max_length: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            add_special_tokens: true,
            truncation: false,
            max_length: None,
            pad_to_max_length: false,
        }
    }
}

impl EncodeOptions {
    /// Set whether to add special tokens.
    pub fn with_add_special_tokens(
        self,
        add_special_tokens: bool,
    ) -> Self {
        Self {
            add_special_tokens,
            ..self
        }
    }

    /// Set whether to truncate.
    pub fn with_truncation(
        self,
        truncation: bool,
    ) -> Self {
        Self { truncation, ..self }
    }

    /// Set the max length.
    pub fn with_max_length(
        self,
        max_length: Option<usize>,
    ) -> Self {
        Self { max_length, ..self }
    }

    /// Set whether to pad to the max length.
    pub fn with_pad_to_max_length(
        self,
        pad_to_max_length: bool,
    ) -> Self {
        Self {
            pad_to_max_length,
            ..self
        }
    }

    /// Does this configuration need a max length?
    pub fn needs_max_length(&self) -> bool {
        self.truncation || self.pad_to_max_length
    }
}
