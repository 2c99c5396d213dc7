//! Notifier dispatch
//!
//! A [`Notifier`] receives UI event callbacks. Hosts register notifiers
//! with a [`NotifierRegistry`], which is the single event-delivery entry
//! point: it owns the enabled gate for every registration and traps
//! per-notifier errors at the dispatch boundary.

use crate::error::{CoreError, Result};
use crate::event::EventKind;
use crate::uid::Uid;

/// Receives UI event callbacks.
pub trait Notifier: Send + Sync {
    /// Deliver one event to this notifier.
    fn notify(&self, sender: Uid, kind: EventKind, info1: u64, info2: u64) -> Result<()>;
}

/// Adapter letting a closure act as a [`Notifier`]; see
/// [`NotifierRegistry::register_fn`].
struct FnNotifier<F>(F);

impl<F> Notifier for FnNotifier<F>
where
    F: Fn(Uid, EventKind, u64, u64) -> Result<()> + Send + Sync,
{
    fn notify(&self, sender: Uid, kind: EventKind, info1: u64, info2: u64) -> Result<()> {
        (self.0)(sender, kind, info1, info2)
    }
}

/// Free-function callback signature for [`StaticEventNotifier`].
pub type StaticCallback = fn(Uid, EventKind, u64, u64);

/// Notifier variant wrapping a single free-function callback fixed at
/// construction.
#[derive(Debug, Clone)]
pub struct StaticEventNotifier {
    callback: StaticCallback,
}

impl StaticEventNotifier {
    /// Wrap `callback`. Fails with [`CoreError::MissingCallback`] when no
    /// callback is supplied.
    pub fn new(callback: Option<StaticCallback>) -> Result<Self> {
        match callback {
            Some(callback) => Ok(Self { callback }),
            None => Err(CoreError::MissingCallback),
        }
    }
}

impl Notifier for StaticEventNotifier {
    fn notify(&self, sender: Uid, kind: EventKind, info1: u64, info2: u64) -> Result<()> {
        (self.callback)(sender, kind, info1, info2);
        Ok(())
    }
}

/// Identifies one registration within a [`NotifierRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifierId(u64);

type ErrorHook = Box<dyn Fn(Uid, &CoreError) + Send + Sync>;

struct Registration {
    id: NotifierId,
    enabled: bool,
    notifier: Box<dyn Notifier>,
}

/// Ordered list of registered notifiers with centralized enabled gating.
///
/// A disabled registration is never invoked. Errors returned by an
/// individual notifier are routed to the error hook and do not stop
/// delivery to the remaining notifiers; the hook defaults to a structured
/// log entry and can be replaced by the host (for example with a blocking
/// alert).
pub struct NotifierRegistry {
    registrations: Vec<Registration>,
    next_id: u64,
    error_hook: ErrorHook,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 1,
            error_hook: Box::new(|sender, err| {
                tracing::error!(%sender, error = %err, "notifier failed");
            }),
        }
    }

    /// Register a notifier, enabled, at the end of the delivery order.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) -> NotifierId {
        let id = NotifierId(self.next_id);
        self.next_id += 1;
        self.registrations.push(Registration {
            id,
            enabled: true,
            notifier,
        });
        id
    }

    /// Register a closure as a notifier.
    pub fn register_fn<F>(&mut self, f: F) -> NotifierId
    where
        F: Fn(Uid, EventKind, u64, u64) -> Result<()> + Send + Sync + 'static,
    {
        self.register(Box::new(FnNotifier(f)))
    }

    /// Remove a registration. Returns false when the id is unknown.
    pub fn remove(&mut self, id: NotifierId) -> bool {
        let before = self.registrations.len();
        self.registrations.retain(|r| r.id != id);
        self.registrations.len() != before
    }

    pub fn enable(&mut self, id: NotifierId) {
        self.set_enabled(id, true);
    }

    pub fn disable(&mut self, id: NotifierId) {
        self.set_enabled(id, false);
    }

    /// Whether the registration exists and is enabled.
    pub fn is_enabled(&self, id: NotifierId) -> bool {
        self.registrations
            .iter()
            .any(|r| r.id == id && r.enabled)
    }

    fn set_enabled(&mut self, id: NotifierId, enabled: bool) {
        if let Some(r) = self.registrations.iter_mut().find(|r| r.id == id) {
            r.enabled = enabled;
        }
    }

    /// Replace the dispatch-boundary error hook.
    pub fn set_error_hook<F>(&mut self, hook: F)
    where
        F: Fn(Uid, &CoreError) + Send + Sync + 'static,
    {
        self.error_hook = Box::new(hook);
    }

    /// Deliver one event to every enabled notifier, in registration order.
    ///
    /// Returns the number of notifiers that received the event without
    /// error. Individual failures go to the error hook and never
    /// propagate out of this call.
    pub fn dispatch(&self, sender: Uid, kind: EventKind, info1: u64, info2: u64) -> usize {
        let mut delivered = 0;
        for registration in &self.registrations {
            if !registration.enabled {
                continue;
            }
            match registration.notifier.notify(sender, kind, info1, info2) {
                Ok(()) => delivered += 1,
                Err(err) => (self.error_hook)(sender, &err),
            }
        }
        delivered
    }

    pub fn clear(&mut self) {
        self.registrations.clear();
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}
