//! classifier-client: terminal client for a test-time image classification service,
//! laid out as a hexagon (domain, ports, adapters, use cases).

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
