//! Platform glue for the Cirrus wrapper layer
//!
//! Bootstraps the application against the external toolkit's event loop
//! and hosts the thin wrappers around other native services (mail
//! submission, SQL column access).

pub mod application;
pub mod db;
pub mod mail;
pub mod window;

pub use application::{Application, ApplicationBuilder};
pub use mail::{Credentials, MailHost, MailSender, Message};
pub use window::{WindowBuilder, WindowConfig};

use cirrus_core::CoreError;

/// Platform-specific error type
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    #[error("Event loop error: {0}")]
    EventLoop(String),

    #[error("Mail error: {0}")]
    Mail(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Initialize the platform layer
pub fn init() -> Result<(), PlatformError> {
    tracing::info!("Cirrus Platform initialized");
    Ok(())
}
