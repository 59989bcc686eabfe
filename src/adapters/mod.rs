//! Infrastructure adapters. Implement ports.
//!
//! HTTP transport, local image picker, terminal UI. Map errors to domain errors.

pub mod fs;
pub mod http;
pub mod ui;
