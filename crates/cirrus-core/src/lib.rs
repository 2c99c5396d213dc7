//! Core functionality for the Cirrus wrapper layer
//!
//! This crate provides the non-toolkit pieces of the wrapper layer: UID
//! allocation, the event model, notifier dispatch, error types, logging
//! and configuration. Everything that draws pixels or runs an event loop
//! belongs to the external toolkit and the platform crate.

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod notifier;
pub mod types;
pub mod uid;

pub use config::{config, set_config, CirrusConfig};
pub use error::{CoreError, Result};
pub use event::{EventKind, EventResult};
pub use logging::LogLevel;
pub use notifier::{Notifier, NotifierId, NotifierRegistry, StaticCallback, StaticEventNotifier};
pub use types::{Color, Point, Rect, Size};
pub use uid::{Uid, UidManager};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        error::{CoreError, Result},
        event::{EventKind, EventResult},
        notifier::{Notifier, NotifierId, NotifierRegistry, StaticEventNotifier},
        types::{Color, Point, Rect, Size},
        uid::{Uid, UidManager},
    };
}

/// Framework version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the core layer (logging per the installed configuration).
pub fn init() -> Result<()> {
    logging::init();
    tracing::info!("Cirrus Core v{} initialized", VERSION);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
