//! Toolbar container wrapper
//!
//! An ordered container of child widget UIDs and separators. The toolbar
//! does not own its children; it records layout order for the toolkit.

use crate::widget::{NativeHandle, Widget, WidgetKind};
use cirrus_core::uid::{Uid, UidManager};
use cirrus_core::{CoreError, Result};
use std::any::Any;

/// One slot in a toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    Widget(Uid),
    Separator,
}

/// UID-tagged wrapper around a toolkit toolbar container
#[derive(Debug)]
pub struct Toolbar {
    uid: Uid,
    handle: NativeHandle,
    items: Vec<ToolbarItem>,
}

impl Toolbar {
    pub fn new(uids: &UidManager) -> Result<Self> {
        Ok(Self {
            uid: uids.get_id()?,
            handle: NativeHandle::DETACHED,
            items: Vec::new(),
        })
    }

    /// Append a child widget slot. Rejects the invalid sentinel and
    /// UIDs already present in the toolbar.
    pub fn add_widget(&mut self, child: Uid) -> Result<()> {
        if !child.is_valid() {
            return Err(CoreError::widget("cannot add an invalid UID to a toolbar"));
        }
        if self.contains(child) {
            return Err(CoreError::widget(format!(
                "widget {child} is already in the toolbar"
            )));
        }
        self.items.push(ToolbarItem::Widget(child));
        Ok(())
    }

    /// Append a separator slot.
    pub fn add_separator(&mut self) {
        self.items.push(ToolbarItem::Separator);
    }

    /// Remove a child widget slot. Returns false when absent.
    pub fn remove_widget(&mut self, child: Uid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| *item != ToolbarItem::Widget(child));
        self.items.len() != before
    }

    pub fn contains(&self, child: Uid) -> bool {
        self.items.contains(&ToolbarItem::Widget(child))
    }

    pub fn items(&self) -> &[ToolbarItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Widget for Toolbar {
    fn uid(&self) -> Uid {
        self.uid
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Toolbar
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
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_items_in_insertion_order() {
        let uids = UidManager::new();
        let mut toolbar = Toolbar::new(&uids).unwrap();
        let a = uids.get_id().unwrap();
        let b = uids.get_id().unwrap();

        toolbar.add_widget(a).unwrap();
        toolbar.add_separator();
        toolbar.add_widget(b).unwrap();

        assert_eq!(
            toolbar.items(),
            &[
                ToolbarItem::Widget(a),
                ToolbarItem::Separator,
                ToolbarItem::Widget(b),
            ]
        );
    }

    #[test]
    fn rejects_invalid_and_duplicate_children() {
        let uids = UidManager::new();
        let mut toolbar = Toolbar::new(&uids).unwrap();
        let a = uids.get_id().unwrap();

        assert!(toolbar.add_widget(Uid::INVALID).is_err());
        toolbar.add_widget(a).unwrap();
        assert!(toolbar.add_widget(a).is_err());
    }

    #[test]
    fn remove_and_clear() {
        let uids = UidManager::new();
        let mut toolbar = Toolbar::new(&uids).unwrap();
        let a = uids.get_id().unwrap();

        toolbar.add_widget(a).unwrap();
        assert!(toolbar.remove_widget(a));
        assert!(!toolbar.remove_widget(a));

        toolbar.add_separator();
        toolbar.clear();
        assert!(toolbar.is_empty());
    }
}
