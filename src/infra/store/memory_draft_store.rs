use std::sync::RwLock;

use crate::domain::models::booking::PendingBooking;
use crate::domain::ports::DraftStore;

/// Session-scoped draft stash. Holds at most one pending booking, exactly
/// like the single `pendingBooking` slot the web client keeps in session
/// storage across a social-login redirect.
#[derive(Default)]
pub struct MemoryDraftStore {
    inner: RwLock<Option<PendingBooking>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn save(&self, pending: &PendingBooking) {
        *self.inner.write().unwrap() = Some(pending.clone());
    }

    fn load(&self) -> Option<PendingBooking> {
        self.inner.read().unwrap().clone()
    }

    fn clear(&self) {
        *self.inner.write().unwrap() = None;
    }
}
