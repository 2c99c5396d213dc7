//! UID allocation for UI objects
//!
//! Every wrapper object carries a process-scoped unique identifier issued
//! by a [`UidManager`]. The manager is an explicitly owned instance passed
//! to allocation sites; there is no process-wide static counter.

use crate::error::{CoreError, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process-scoped unique identifier for a UI object.
///
/// `0` is the invalid sentinel and is never issued by a manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Uid(pub u64);

impl Uid {
    /// The invalid sentinel.
    pub const INVALID: Uid = Uid(0);

    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique identifiers from a monotonic counter.
///
/// Safe to call from worker threads; every read-modify-write sequence runs
/// under the internal lock. All operations are short, non-blocking critical
/// sections.
#[derive(Debug)]
pub struct UidManager {
    next: Mutex<u64>,
}

impl UidManager {
    /// Create a manager whose first issued UID is 1.
    pub fn new() -> Self {
        Self {
            next: Mutex::new(1),
        }
    }

    /// Issue the next UID.
    ///
    /// Reads and post-increments the counter under the lock. Fails with
    /// [`CoreError::UidExhausted`] once the counter reaches `u64::MAX`,
    /// so the invalid sentinel can never be produced by wrap-around.
    pub fn get_id(&self) -> Result<Uid> {
        let mut next = self.next.lock();
        if *next == u64::MAX {
            return Err(CoreError::UidExhausted);
        }
        let id = *next;
        *next += 1;
        Ok(Uid(id))
    }

    /// Reset the counter to 1.
    ///
    /// Intended for test and teardown scenarios only. Calls racing with
    /// [`get_id`](Self::get_id) are serialized by the lock, but resetting
    /// while issued UIDs are still in use can reintroduce duplicates.
    pub fn reset(&self) {
        *self.next.lock() = 1;
    }

    /// Record `latest` as the most recently issued UID, so the next call
    /// to [`get_id`](Self::get_id) returns `latest + 1`.
    ///
    /// Used to resume allocation after restoring persisted state, keeping
    /// newly issued UIDs clear of the ones a previous session handed out.
    pub fn set_latest_uid(&self, latest: Uid) {
        let mut next = self.next.lock();
        *next = latest.0.checked_add(1).unwrap_or(u64::MAX);
    }
}

impl Default for UidManager {
    fn default() -> Self {
        Self::new()
    }
}
