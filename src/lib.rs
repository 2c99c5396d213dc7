//! Cirrus SDK - a thin, UID-tagged wrapper layer around native GUI toolkits
//!
//! Cirrus wraps an external widget toolkit behind UID-tagged wrapper
//! objects and a notifier-based event dispatch. The toolkit owns
//! rendering, styling and the event loop; Cirrus owns identity, event
//! delivery and bootstrap glue.

pub use cirrus_core;
pub use cirrus_platform;
pub use cirrus_widgets;

use cirrus_core::{CoreError, Result};

/// Unified prelude module that exports all commonly used types
pub mod prelude {
    pub use cirrus_core::prelude::*;
    pub use cirrus_platform::{Application, ApplicationBuilder, WindowBuilder, WindowConfig};
    pub use cirrus_widgets::prelude::*;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize all layers (logging, widgets, platform).
pub fn init_all() -> Result<()> {
    cirrus_core::init()?;
    cirrus_widgets::init()?;
    cirrus_platform::init()
        .map_err(|e| CoreError::other(format!("platform init failed: {e}")))?;
    Ok(())
}
