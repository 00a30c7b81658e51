//! Sampling parameters and their validation.

use std::ops::RangeInclusive;

use thiserror::Error;

const TEMPERATURE: RangeInclusive<f64> = 0.0..=1.0;
const TOP_P: RangeInclusive<f64> = 0.0..=1.0;
const PRESENCE_PENALTY: RangeInclusive<f64> = -2.0..=2.0;
const FREQUENCY_PENALTY: RangeInclusive<f64> = -2.0..=2.0;
const BEST_OF: RangeInclusive<u32> = 1..=20;

/// Numeric knobs controlling generation diversity and cost.
///
/// Immutable once validated; `max_tokens` is passed through unchecked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub max_tokens: u32,
    pub best_of: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
            max_tokens: 500,
            best_of: 1,
        }
    }
}

impl SamplingParams {
    /// Check that every parameter is within its accepted range.
    ///
    /// Checks run in a fixed order and stop at the first violation, with
    /// the model lookup result checked before any numeric range.
    pub fn validate(&self, model_found: bool) -> Result<(), ParamError> {
        if !model_found {
            return Err(ParamError::InvalidModel);
        }
        if !TEMPERATURE.contains(&self.temperature) {
            return Err(ParamError::InvalidTemperature);
        }
        if !TOP_P.contains(&self.top_p) {
            return Err(ParamError::InvalidTopP);
        }
        if !PRESENCE_PENALTY.contains(&self.presence_penalty) {
            return Err(ParamError::InvalidPresencePenalty);
        }
        if !FREQUENCY_PENALTY.contains(&self.frequency_penalty) {
            return Err(ParamError::InvalidFrequencyPenalty);
        }
        if !BEST_OF.contains(&self.best_of) {
            return Err(ParamError::InvalidBestOf);
        }
        Ok(())
    }
}

/// A rejected model alias or out-of-range sampling parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("the model alias is not one of the supported models")]
    InvalidModel,

    #[error("temperature is out of range (0 <= temperature <= 1)")]
    InvalidTemperature,

    #[error("top_p is out of range (0 <= top_p <= 1)")]
    InvalidTopP,

    #[error("presence penalty is out of range (-2 <= presence <= 2)")]
    InvalidPresencePenalty,

    #[error("frequency penalty is out of range (-2 <= frequency <= 2)")]
    InvalidFrequencyPenalty,

    #[error("best_of is out of range (1 <= best_of <= 20)")]
    InvalidBestOf,
}
