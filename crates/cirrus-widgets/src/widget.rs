//! Base widget trait and the native-handle seam
//!
//! Wrapper widgets compose over the toolkit: each one holds an opaque
//! [`NativeHandle`] for the toolkit object it stands in for, instead of
//! extending a toolkit base class.

use cirrus_core::event::{EventKind, EventResult};
use cirrus_core::uid::Uid;
use std::any::Any;
use std::fmt::Debug;

/// The kind of toolkit object a wrapper stands in for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    GraphicsView,
    Dialog,
    Toolbar,
}

/// Opaque token for a native toolkit widget.
///
/// The raw value is whatever the toolkit hands back when the native
/// object is created; `0` means the wrapper is not attached to a native
/// object yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(u64);

impl NativeHandle {
    pub const DETACHED: NativeHandle = NativeHandle(0);

    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }

    pub const fn is_attached(&self) -> bool {
        self.0 != 0
    }
}

/// Base trait for all wrapper widgets
pub trait Widget: Debug + Send + Sync {
    /// The widget's UID, issued by the owning [`UidManager`](cirrus_core::UidManager)
    fn uid(&self) -> Uid;

    /// The kind of toolkit object this wrapper stands in for
    fn kind(&self) -> WidgetKind;

    /// The native toolkit handle this wrapper forwards to
    fn native(&self) -> NativeHandle;

    /// Attach the wrapper to a native toolkit object
    fn attach(&mut self, handle: NativeHandle);

    /// Handle an event addressed to this widget
    fn handle_event(&mut self, _kind: EventKind, _info1: u64, _info2: u64) -> EventResult {
        EventResult::Ignored
    }

    /// Get widget as Any for downcasting
    fn as_any(&self) -> &dyn Any;

    /// Get mutable widget as Any for downcasting
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_handle_is_not_attached() {
        assert!(!NativeHandle::DETACHED.is_attached());
        assert!(NativeHandle::from_raw(42).is_attached());
        assert_eq!(NativeHandle::from_raw(42).raw(), 42);
    }
}
