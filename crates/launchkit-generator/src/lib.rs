//! HTTP client for the external strategy-generation service.
//!
//! The generator is a black box: founder inputs and raw file attachments
//! go in as a multipart form, a structured JSON artifact comes back.

mod client;
mod error;

pub use client::{GenerationRequest, GeneratorClient};
pub use error::GeneratorError;
