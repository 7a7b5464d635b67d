//! # Tokenizer Configuration
//!
//! [`TokenizerOptions`] is the serializable construction-time configuration.
//! Unset fields are resolved by [`TokenizerOptions::resolve`]:
//! 1. the explicit value, if present;
//! 2. the environment variable, if set;
//! 3. the default.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{UTError, UTResult};
use crate::shaping::TruncationSide;

/// Environment variable key to override the default truncation side.
pub const UNITOKENIZER_TRUNCATION_SIDE: &str = "UNITOKENIZER_TRUNCATION_SIDE";

/// Environment variable key to override the default model max length.
pub const UNITOKENIZER_MODEL_MAX_LENGTH: &str = "UNITOKENIZER_MODEL_MAX_LENGTH";

/// Construction options for [`UniTokenizer`](crate::UniTokenizer).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerOptions {
    /// Which end loses ids under truncation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncation_side: Option<TruncationSide>,

    /// Fallback max length for truncation and padding.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_max_length: Option<usize>,
}

/// Read and parse an environment variable.
///
/// ## Returns
/// * `Ok(None)` if the variable is unset;
/// * `Err(UTError::Configuration)` if it is set but malformed.
fn parse_env_var<T>(key: &str) -> UTResult<Option<T>>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    match env::var(key) {
        Err(_) => Ok(None),
        Ok(value) => value.trim().parse().map(Some).map_err(|err| {
            UTError::Configuration(format!("invalid value {value:?} for {key}: {err}"))
        }),
    }
}

impl TokenizerOptions {
    /// Set the truncation side.
    pub fn with_truncation_side(
        self,
        truncation_side: TruncationSide,
    ) -> Self {
        Self {
            truncation_side: Some(truncation_side),
            ..self
        }
    }

    /// Set the model max length.
    pub fn with_model_max_length(
        self,
        model_max_length: Option<usize>,
    ) -> Self {
        Self {
            model_max_length,
            ..self
        }
    }

    /// Parse options from a JSON string.
    ///
    /// Unknown fields are ignored, so a host framework's tokenizer config file
    /// can be read directly.
    pub fn from_json_str(json: &str) -> UTResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize options to a JSON string.
    pub fn to_json_string(&self) -> UTResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fill unset fields from the environment.
    ///
    /// The truncation side always resolves, defaulting to [`TruncationSide::Left`];
    /// the model max length stays `None` if neither source provides it.
    pub fn resolve(mut self) -> UTResult<Self> {
        if self.truncation_side.is_none() {
            self.truncation_side = Some(
                parse_env_var(UNITOKENIZER_TRUNCATION_SIDE)?.unwrap_or_default(),
            );
        }

        if self.model_max_length.is_none() {
            self.model_max_length = parse_env_var(UNITOKENIZER_MODEL_MAX_LENGTH)?;
        }

        log::debug!("resolved tokenizer options: {self:?}");
        Ok(self)
    }
}
