//! Inbound port. UI (adapter) calls into the application.

use crate::domain::DomainError;

/// Input port: the interactive shell that dispatches user intent to one operation at a time.
#[async_trait::async_trait]
pub trait InputPort: Send + Sync {
    /// Run the main menu until the user exits.
    async fn run(&self) -> Result<(), DomainError>;
}
