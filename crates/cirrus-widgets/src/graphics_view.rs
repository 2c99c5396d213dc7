//! Graphics-view widget wrapper

use crate::widget::{NativeHandle, Widget, WidgetKind};
use cirrus_core::event::{EventKind, EventResult};
use cirrus_core::notifier::NotifierRegistry;
use cirrus_core::types::Size;
use cirrus_core::uid::{Uid, UidManager};
use cirrus_core::Result;
use std::any::Any;

/// UID-tagged wrapper around the toolkit's scene/canvas view.
///
/// Holds the scene size and zoom factor the wrapper forwards to the
/// toolkit; rendering itself is the toolkit's business.
#[derive(Debug)]
pub struct GraphicsView {
    uid: Uid,
    handle: NativeHandle,
    scene_size: Size,
    zoom: f32,
    invalidations: u64,
}

impl GraphicsView {
    pub fn new(uids: &UidManager) -> Result<Self> {
        Ok(Self {
            uid: uids.get_id()?,
            handle: NativeHandle::DETACHED,
            scene_size: Size::zero(),
            zoom: 1.0,
            invalidations: 0,
        })
    }

    /// Set the initial scene size
    pub fn scene_size(mut self, size: Size) -> Self {
        self.scene_size = size;
        self
    }

    pub fn scene(&self) -> Size {
        self.scene_size
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set the zoom factor (clamped to be positive), notifying listeners
    /// when it changed. The new factor's bit pattern travels in `info1`.
    pub fn set_zoom(&mut self, zoom: f32, notifiers: &NotifierRegistry) {
        let zoom = zoom.max(f32::MIN_POSITIVE);
        if zoom == self.zoom {
            return;
        }
        self.zoom = zoom;
        notifiers.dispatch(self.uid, EventKind::ValueChanged, zoom.to_bits() as u64, 0);
    }

    /// Request a repaint from the toolkit.
    pub fn invalidate(&mut self) {
        self.invalidations += 1;
    }

    /// Number of repaint requests forwarded so far
    pub fn invalidation_count(&self) -> u64 {
        self.invalidations
    }
}

impl Widget for GraphicsView {
    fn uid(&self) -> Uid {
        self.uid
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::GraphicsView
    }

    fn native(&self) -> NativeHandle {
        self.handle
    }

    fn attach(&mut self, handle: NativeHandle) {
        self.handle = handle;
    }

    fn handle_event(&mut self, kind: EventKind, info1: u64, info2: u64) -> EventResult {
        match kind {
            EventKind::WindowResized => {
                self.scene_size = Size::new(info1 as f32, info2 as f32);
                self.invalidate();
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn zoom_is_clamped_positive() {
        let uids = UidManager::new();
        let notifiers = NotifierRegistry::new();
        let mut view = GraphicsView::new(&uids).unwrap();
        view.set_zoom(-2.0, &notifiers);
        assert!(view.zoom() > 0.0);
    }

    #[test]
    fn resize_events_update_the_scene_and_invalidate() {
        let uids = UidManager::new();
        let mut view = GraphicsView::new(&uids).unwrap();

        let result = view.handle_event(EventKind::WindowResized, 640, 480);
        assert_eq!(result, EventResult::Handled);
        assert_eq!(view.scene(), Size::new(640.0, 480.0));
        assert_eq!(view.invalidation_count(), 1);

        assert_eq!(
            view.handle_event(EventKind::Clicked, 0, 0),
            EventResult::Ignored
        );
    }
}
