//! Cross-cutting configuration and the backend contract.

pub mod config;
pub mod endpoints;
