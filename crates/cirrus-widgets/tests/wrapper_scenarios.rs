//! End-to-end wrapper scenarios: widgets, registry and notifier dispatch
//! working together the way a host application wires them up.

use cirrus_core::event::{EventKind, EventResult};
use cirrus_core::notifier::{Notifier, NotifierRegistry};
use cirrus_core::uid::{Uid, UidManager};
use cirrus_core::{CoreError, Result};
use cirrus_widgets::{Dialog, DialogResult, GraphicsView, Label, Toolbar, Widget, WidgetRegistry};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

struct EventLog {
    entries: Arc<Mutex<Vec<(Uid, EventKind, u64, u64)>>>,
}

impl Notifier for EventLog {
    fn notify(&self, sender: Uid, kind: EventKind, info1: u64, info2: u64) -> Result<()> {
        self.entries.lock().unwrap().push((sender, kind, info1, info2));
        Ok(())
    }
}

#[test]
fn a_session_of_widget_construction_and_events() {
    let uids = UidManager::new();
    let mut notifiers = NotifierRegistry::new();
    let mut widgets = WidgetRegistry::new();

    let entries = Arc::new(Mutex::new(Vec::new()));
    notifiers.register(Box::new(EventLog {
        entries: Arc::clone(&entries),
    }));

    let label = Label::new(&uids, "status: idle").unwrap();
    let view = GraphicsView::new(&uids).unwrap();
    let mut toolbar = Toolbar::new(&uids).unwrap();
    let dialog = Dialog::new(&uids, "Quit?").unwrap();

    let label_uid = label.uid();
    let view_uid = view.uid();
    let dialog_uid = dialog.uid();

    // Wrapper UIDs are pairwise distinct and valid.
    let mut all = vec![label_uid, view_uid, toolbar.uid(), dialog_uid];
    all.sort();
    all.dedup();
    assert_eq!(all.len(), 4);
    assert!(all.iter().all(Uid::is_valid));

    toolbar.add_widget(label_uid).unwrap();
    toolbar.add_separator();
    toolbar.add_widget(view_uid).unwrap();

    widgets.insert(Box::new(label)).unwrap();
    widgets.insert(Box::new(view)).unwrap();
    widgets.insert(Box::new(toolbar)).unwrap();
    widgets.insert(Box::new(dialog)).unwrap();
    assert_eq!(widgets.len(), 4);

    // Host-side mutation notifies listeners.
    widgets
        .get_as_mut::<Label>(label_uid)
        .unwrap()
        .set_text("status: busy", &notifiers);

    // Toolkit-side resize routed to the graphics view.
    let routed = widgets.route(view_uid, EventKind::WindowResized, 1024, 768);
    assert_eq!(routed, EventResult::Handled);

    // Dialog session driven by the host.
    let dialog = widgets.get_as_mut::<Dialog>(dialog_uid).unwrap();
    dialog.open();
    dialog.accept(&notifiers);

    let log = entries.lock().unwrap();
    assert_eq!(
        log.as_slice(),
        &[
            (label_uid, EventKind::ValueChanged, 0, 0),
            (dialog_uid, EventKind::WindowClosed, DialogResult::Accepted.code(), 0),
        ]
    );
}

#[test]
fn disabled_listener_misses_events_until_reenabled() {
    let uids = UidManager::new();
    let mut notifiers = NotifierRegistry::new();

    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in = Arc::clone(&hits);
    let id = notifiers.register_fn(move |_, _, _, _| {
        hits_in.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let mut label = Label::new(&uids, "a").unwrap();
    notifiers.disable(id);
    label.set_text("b", &notifiers);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    notifiers.enable(id);
    label.set_text("c", &notifiers);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn a_failing_listener_does_not_break_the_session() {
    let uids = UidManager::new();
    let mut notifiers = NotifierRegistry::new();

    notifiers.register_fn(|_, _, _, _| Err(CoreError::notifier("listener crashed")));
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_in = Arc::clone(&hits);
    notifiers.register_fn(move |_, _, _, _| {
        hits_in.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let reported = Arc::new(AtomicUsize::new(0));
    let reported_in = Arc::clone(&reported);
    notifiers.set_error_hook(move |_, _| {
        reported_in.fetch_add(1, Ordering::SeqCst);
    });

    let mut dialog = Dialog::new(&uids, "t").unwrap();
    dialog.open();
    dialog.reject(&notifiers);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(reported.load(Ordering::SeqCst), 1);
    assert_eq!(dialog.result(), DialogResult::Rejected);
}
