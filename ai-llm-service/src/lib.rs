//! Generative model client shared by the service: Gemini provider, env-driven
//! config, health probe, unified errors and tracing setup.

pub mod config;
pub mod error_handler;
pub mod generative_model;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::default_config::config_gemini;
pub use error_handler::{AiLlmError, ConfigError};
pub use generative_model::{GenerateRequest, GenerativeModel, InlineImage};
pub use health_service::{HealthService, HealthStatus};
pub use services::gemini_service::GeminiService;
