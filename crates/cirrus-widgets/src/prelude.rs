//! Commonly used widget types

pub use crate::dialog::{Dialog, DialogResult};
pub use crate::graphics_view::GraphicsView;
pub use crate::label::{Label, TextAlign};
pub use crate::registry::WidgetRegistry;
pub use crate::style::ColorStyle;
pub use crate::toolbar::{Toolbar, ToolbarItem};
pub use crate::widget::{NativeHandle, Widget, WidgetKind};
