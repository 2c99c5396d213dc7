//! Event model for the wrapper layer
//!
//! Events travel between widgets and notifiers as a
//! `(sender, kind, info1, info2)` tuple. The two info words carry
//! event-specific payload (for example the new width and height on a
//! resize) and are 0 when unused.

/// Event-type discriminant delivered alongside a sender UID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A widget was activated by the user
    Clicked,
    /// A widget's primary value changed
    ValueChanged,
    /// A widget's selection changed
    SelectionChanged,
    /// The hosting window was resized; info1/info2 carry width/height
    WindowResized,
    /// The hosting window (or a dialog) was closed
    WindowClosed,
    /// Application-defined event
    Custom(u32),
}

/// Result of widget-local event handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, stop propagation
    Handled,
    /// Event was not handled, continue propagation
    Ignored,
}
