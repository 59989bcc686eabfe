//! HTTP adapter module. Implements Transport for the classification backend.
//!
//! Provides the reqwest-backed transport and a scripted mock for testing.

pub mod mock_transport;
pub mod reqwest_transport;

pub use mock_transport::{MockTransport, RecordedRequest};
pub use reqwest_transport::ReqwestTransport;
