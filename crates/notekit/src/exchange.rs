//! # Template Value Exchange
//!
//! A single-slot hand-off between two workflow steps separated by a long
//! external interaction (typically a modal dialog):
//!
//! ```text
//! step A: compute payload ── publish ──▶ [ slot ] ── consume ──▶ step B resumes
//! ```
//!
//! ## Semantics
//!
//! - **Last write wins.** `publish` replaces any unconsumed payload. There is no
//!   queue and no error on overwrite.
//! - **Exactly once.** `consume(true)` reads and clears under one lock, so no
//!   caller can observe the payload after a clearing read has happened.
//! - **Copies out.** Callers receive their own copy; mutating it never touches
//!   the slot.
//! - **Absent vs. empty.** `None` means nothing to hand over. An empty payload is
//!   treated the same way, so consumers only ever see meaningful payloads.
//!
//! The exchange is an owned value. Construct one per workflow session and pass
//! it to whoever needs it; independent instances never share state.

use crate::model::Payload;
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
pub struct TemplateValueExchange {
    slot: Mutex<Option<Payload>>,
}

impl TemplateValueExchange {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `payload`, discarding whatever was there.
    pub fn publish(&self, payload: Payload) {
        let mut slot = self.lock();
        if slot.is_some() {
            tracing::debug!("Replacing unconsumed template payload");
        }
        *slot = Some(payload);
    }

    /// Returns a copy of the stored payload, clearing the slot when `clear` is set.
    ///
    /// The slot is cleared even when it held an empty payload.
    pub fn consume(&self, clear: bool) -> Option<Payload> {
        let mut slot = self.lock();
        let payload = if clear { slot.take() } else { slot.clone() };
        payload.filter(|p| !p.is_empty())
    }

    /// `consume(true)`.
    pub fn take(&self) -> Option<Payload> {
        self.consume(true)
    }

    /// `consume(false)`.
    pub fn peek(&self) -> Option<Payload> {
        self.consume(false)
    }

    /// Whether a non-empty payload is waiting.
    pub fn is_pending(&self) -> bool {
        self.lock().as_ref().is_some_and(|p| !p.is_empty())
    }

    fn lock(&self) -> MutexGuard<'_, Option<Payload>> {
        // The slot is only ever replaced or taken whole, so a poisoned lock still holds valid data.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
