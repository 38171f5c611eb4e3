//! Response classification for a language-model interaction.
//!
//! The orchestration layer classifies each model reply and, on success,
//! attaches the parsed config. Only successful responses carry a usable
//! config.

use serde::{Deserialize, Serialize};

use crate::plot::vocabulary::{vocabulary_impls, Vocabulary};
use crate::plot::PlotConfig;

// ============================================================================
// Core Types
// ============================================================================

/// Categorical outcome of a model interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResponseType {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "not related")]
    NotRelated,
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "failed to render")]
    FailedToRender,
}

impl Vocabulary for ResponseType {
    const NAME: &'static str = "response type";
    const VARIANTS: &'static [Self] = &[
        Self::Success,
        Self::NotRelated,
        Self::Unknown,
        Self::FailedToRender,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::NotRelated => "not related",
            Self::Unknown => "unknown",
            Self::FailedToRender => "failed to render",
        }
    }
}

vocabulary_impls!(ResponseType);

/// Classification paired with an optional config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmResponse {
    pub response_type: ResponseType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<PlotConfig>,
}

impl LlmResponse {
    /// Successful response carrying a config
    pub fn success(config: PlotConfig) -> Self {
        Self {
            response_type: ResponseType::Success,
            config: Some(config),
        }
    }

    /// Response without a config
    pub fn without_config(response_type: ResponseType) -> Self {
        Self {
            response_type,
            config: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.response_type == ResponseType::Success
    }

    /// The config, but only when the response is a success
    pub fn usable_config(&self) -> Option<&PlotConfig> {
        if self.is_success() {
            self.config.as_ref()
        } else {
            None
        }
    }
}
