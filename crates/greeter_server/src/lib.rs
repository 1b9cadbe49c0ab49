//! HTTP surface for the greeter message service.
//!
//! [`GreetingService`] runs the generation pipeline (validate, optionally
//! call a provider, fall back to the keyword classifier) and [`create_router`]
//! exposes it over axum.

mod api;
mod config;
mod service;

pub use api::{ApiState, create_router, serve};
pub use config::{ProvidersConfig, ProvidersConfigBuilder, ServerConfig, ServerConfigBuilder};
pub use service::GreetingService;
