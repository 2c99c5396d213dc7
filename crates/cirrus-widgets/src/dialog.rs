//! Dialog widget wrapper
//!
//! Records open/closed state and the outcome, and notifies listeners on
//! close. The modal lifecycle itself (blocking, focus, stacking) belongs
//! to the toolkit.

use crate::widget::{NativeHandle, Widget, WidgetKind};
use cirrus_core::event::{EventKind, EventResult};
use cirrus_core::notifier::NotifierRegistry;
use cirrus_core::uid::{Uid, UidManager};
use cirrus_core::Result;
use std::any::Any;

/// Outcome of a dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// The dialog has not been closed yet (or was never opened)
    None,
    Accepted,
    Rejected,
}

impl DialogResult {
    /// Stable code carried in `info1` of the close notification
    pub const fn code(&self) -> u64 {
        match self {
            DialogResult::None => 0,
            DialogResult::Accepted => 1,
            DialogResult::Rejected => 2,
        }
    }
}

/// UID-tagged wrapper around a toolkit dialog window
#[derive(Debug)]
pub struct Dialog {
    uid: Uid,
    handle: NativeHandle,
    title: String,
    modal: bool,
    open: bool,
    result: DialogResult,
}

impl Dialog {
    pub fn new(uids: &UidManager, title: impl Into<String>) -> Result<Self> {
        Ok(Self {
            uid: uids.get_id()?,
            handle: NativeHandle::DETACHED,
            title: title.into(),
            modal: true,
            open: false,
            result: DialogResult::None,
        })
    }

    /// Set modality
    pub fn modal(mut self, modal: bool) -> Self {
        self.modal = modal;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_modal(&self) -> bool {
        self.modal
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn result(&self) -> DialogResult {
        self.result
    }

    /// Mark the dialog as shown; clears any previous outcome.
    pub fn open(&mut self) {
        self.open = true;
        self.result = DialogResult::None;
    }

    /// Close with an accepted outcome.
    pub fn accept(&mut self, notifiers: &NotifierRegistry) {
        self.close_with(DialogResult::Accepted, notifiers);
    }

    /// Close with a rejected outcome.
    pub fn reject(&mut self, notifiers: &NotifierRegistry) {
        self.close_with(DialogResult::Rejected, notifiers);
    }

    fn close_with(&mut self, result: DialogResult, notifiers: &NotifierRegistry) {
        if !self.open {
            return;
        }
        self.open = false;
        self.result = result;
        notifiers.dispatch(self.uid, EventKind::WindowClosed, result.code(), 0);
    }
}

impl Widget for Dialog {
    fn uid(&self) -> Uid {
        self.uid
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Dialog
    }

    fn native(&self) -> NativeHandle {
        self.handle
    }

    fn attach(&mut self, handle: NativeHandle) {
        self.handle = handle;
    }

    fn handle_event(&mut self, kind: EventKind, info1: u64, _info2: u64) -> EventResult {
        match kind {
            // Close driven from the toolkit side (e.g. the titlebar button).
            EventKind::WindowClosed if self.open => {
                self.open = false;
                self.result = if info1 == DialogResult::Accepted.code() {
                    DialogResult::Accepted
                } else {
                    DialogResult::Rejected
                };
                EventResult::Handled
            }
            _ => EventResult::Ignored,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
