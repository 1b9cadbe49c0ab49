//! Text-generation provider adapters.
//!
//! Both supported providers go through one [`HttpTextGenerator`]; what differs
//! between them (endpoint, auth, payload shape, where the text lives in the
//! response) is kept in the [`wire`] module.

mod client;
mod dto;
mod probe;
mod settings;
mod traits;
pub mod wire;

pub use client::HttpTextGenerator;
pub use dto::{ChatMessage, ChatRequest, ChatRequestBuilder, GenerateTextRequest, TextPrompt};
pub use probe::extract_text;
pub use settings::{ProviderSettings, ProviderSettingsBuilder};
pub use traits::TextGenerator;
