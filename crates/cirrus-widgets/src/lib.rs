//! Cirrus Widgets - UID-tagged wrapper widgets
//!
//! Thin wrappers around the external toolkit's widgets. Each wrapper
//! composes over an opaque native handle, carries a UID issued by an
//! explicit [`UidManager`](cirrus_core::UidManager), and reports state
//! changes through the core notifier registry. No rendering happens here.

pub mod dialog;
pub mod graphics_view;
pub mod label;
pub mod registry;
pub mod style;
pub mod toolbar;
pub mod widget;

pub mod prelude;

pub use dialog::{Dialog, DialogResult};
pub use graphics_view::GraphicsView;
pub use label::{Label, TextAlign};
pub use registry::WidgetRegistry;
pub use style::ColorStyle;
pub use toolbar::{Toolbar, ToolbarItem};
pub use widget::{NativeHandle, Widget, WidgetKind};

/// Initialize the widgets module
pub fn init() -> cirrus_core::Result<()> {
    tracing::info!("Cirrus Widgets initialized");
    Ok(())
}
