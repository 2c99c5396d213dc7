//! Widget registry keyed by UID

use crate::widget::Widget;
use cirrus_core::event::{EventKind, EventResult};
use cirrus_core::uid::Uid;
use cirrus_core::{CoreError, Result};
use std::collections::HashMap;

/// Owns wrapper widgets and routes events to them by sender UID.
pub struct WidgetRegistry {
    widgets: HashMap<Uid, Box<dyn Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self {
            widgets: HashMap::new(),
        }
    }

    /// Insert a widget under its own UID.
    ///
    /// Rejects the invalid sentinel and UIDs already registered.
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> Result<()> {
        let uid = widget.uid();
        if !uid.is_valid() {
            return Err(CoreError::widget("cannot register an invalid UID"));
        }
        if self.widgets.contains_key(&uid) {
            return Err(CoreError::widget(format!("UID {uid} already registered")));
        }
        self.widgets.insert(uid, widget);
        Ok(())
    }

    pub fn get(&self, uid: Uid) -> Option<&dyn Widget> {
        self.widgets.get(&uid).map(|w| w.as_ref())
    }

    pub fn get_mut(&mut self, uid: Uid) -> Option<&mut dyn Widget> {
        match self.widgets.get_mut(&uid) {
            Some(w) => Some(w.as_mut()),
            None => None,
        }
    }

    /// Typed lookup via downcast.
    pub fn get_as<T: Widget + 'static>(&self, uid: Uid) -> Option<&T> {
        self.get(uid).and_then(|w| w.as_any().downcast_ref::<T>())
    }

    /// Typed mutable lookup via downcast.
    pub fn get_as_mut<T: Widget + 'static>(&mut self, uid: Uid) -> Option<&mut T> {
        self.get_mut(uid)
            .and_then(|w| w.as_any_mut().downcast_mut::<T>())
    }

    pub fn remove(&mut self, uid: Uid) -> Option<Box<dyn Widget>> {
        self.widgets.remove(&uid)
    }

    /// Route an event to the widget registered under `target`.
    ///
    /// Unknown targets are ignored; the toolkit can deliver events for
    /// objects the host already dropped.
    pub fn route(&mut self, target: Uid, kind: EventKind, info1: u64, info2: u64) -> EventResult {
        match self.widgets.get_mut(&target) {
            Some(widget) => widget.handle_event(kind, info1, info2),
            None => EventResult::Ignored,
        }
    }

    pub fn uids(&self) -> impl Iterator<Item = Uid> + '_ {
        self.widgets.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::Label;
    use cirrus_core::uid::UidManager;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_and_typed_lookup() {
        let uids = UidManager::new();
        let mut registry = WidgetRegistry::new();

        let label = Label::new(&uids, "hello").unwrap();
        let uid = label.uid();
        registry.insert(Box::new(label)).unwrap();

        assert_eq!(registry.len(), 1);
        let found: &Label = registry.get_as(uid).unwrap();
        assert_eq!(found.text(), "hello");
    }

    #[test]
    fn duplicate_uid_is_rejected() {
        let uids = UidManager::new();
        let mut registry = WidgetRegistry::new();

        let label = Label::new(&uids, "x").unwrap();
        let uid = label.uid();
        registry.insert(Box::new(label)).unwrap();

        // A second widget claiming the same UID (restored state gone wrong).
        uids.reset();
        let clash = Label::new(&uids, "y").unwrap();
        assert_eq!(clash.uid(), uid);
        assert!(registry.insert(Box::new(clash)).is_err());
    }

    #[test]
    fn routing_to_an_unknown_target_is_ignored() {
        let mut registry = WidgetRegistry::new();
        assert_eq!(
            registry.route(Uid(99), EventKind::Clicked, 0, 0),
            EventResult::Ignored
        );
    }
}
