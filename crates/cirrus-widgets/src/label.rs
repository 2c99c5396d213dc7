//! Label widget wrapper

use crate::widget::{NativeHandle, Widget, WidgetKind};
use cirrus_core::event::EventKind;
use cirrus_core::notifier::NotifierRegistry;
use cirrus_core::uid::{Uid, UidManager};
use cirrus_core::Result;
use std::any::Any;

/// Text alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// UID-tagged wrapper around the toolkit's static-text widget
#[derive(Debug)]
pub struct Label {
    uid: Uid,
    handle: NativeHandle,
    text: String,
    align: TextAlign,
    visible: bool,
}

impl Label {
    /// Create a label tagged with a fresh UID from `uids`.
    pub fn new(uids: &UidManager, text: impl Into<String>) -> Result<Self> {
        Ok(Self {
            uid: uids.get_id()?,
            handle: NativeHandle::DETACHED,
            text: text.into(),
            align: TextAlign::Left,
            visible: true,
        })
    }

    /// Set text alignment
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Set initial visibility
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alignment(&self) -> TextAlign {
        self.align
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Replace the label text, notifying registered listeners when the
    /// text actually changed.
    pub fn set_text(&mut self, text: impl Into<String>, notifiers: &NotifierRegistry) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        notifiers.dispatch(self.uid, EventKind::ValueChanged, 0, 0);
    }

    /// Show or hide the label
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Widget for Label {
    fn uid(&self) -> Uid {
        self.uid
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn native(&self) -> NativeHandle {
        self.handle
    }

    fn attach(&mut self, handle: NativeHandle) {
        self.handle = handle;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::notifier::Notifier;
    use cirrus_core::CoreError;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Recorder {
        hits: Arc<AtomicUsize>,
        expected_sender: Uid,
    }

    impl Notifier for Recorder {
        fn notify(
            &self,
            sender: Uid,
            kind: EventKind,
            _i1: u64,
            _i2: u64,
        ) -> std::result::Result<(), CoreError> {
            assert_eq!(sender, self.expected_sender);
            assert_eq!(kind, EventKind::ValueChanged);
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test]
    fn labels_are_tagged_from_the_manager() {
        let uids = UidManager::new();
        let a = Label::new(&uids, "a").unwrap();
        let b = Label::new(&uids, "b").unwrap();
        assert!(a.uid().is_valid());
        assert_ne!(a.uid(), b.uid());
    }

    #[test]
    fn set_text_emits_value_changed_once_per_change() {
        let uids = UidManager::new();
        let mut label = Label::new(&uids, "old").unwrap();

        let hits = Arc::new(AtomicUsize::new(0));
        let mut notifiers = NotifierRegistry::new();
        notifiers.register(Box::new(Recorder {
            hits: Arc::clone(&hits),
            expected_sender: label.uid(),
        }));

        label.set_text("new", &notifiers);
        assert_eq!(label.text(), "new");
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        // Unchanged text does not notify.
        label.set_text("new", &notifiers);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
