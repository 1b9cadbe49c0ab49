//! Supported text-generation providers.

use serde::{Deserialize, Serialize};

/// External text-generation API.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    /// Google Generative Language API
    Gemini,
    /// OpenAI chat completions
    OpenAi,
}

impl ProviderKind {
    /// Stable lowercase name used in logs and errors.
    pub fn name(self) -> &'static str {
        self.into()
    }
}
