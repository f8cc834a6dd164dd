//! # Form State Repository
//!
//! Where the quote form keeps its inputs between edits.
//!
//! ```text
//! ┌──────────────┐   load()/save()   ┌──────────────────────────┐
//! │  Quote form  │ ◄───────────────► │  FormStateRepository     │
//! └──────┬───────┘                   │  ├─ MemoryFormStore      │
//!        │                           │  └─ JsonFileFormStore    │
//!        │ CustomerInfo,             │     (apps/quote-cli)     │
//!        │ CostComponents            └──────────────────────────┘
//!        ▼
//!  compute_comparison  (never touches a repository)
//! ```
//!
//! Implementations are infallible from the caller's point of view: a store
//! that cannot read its backing data reports "nothing saved", and a failed
//! write is logged by the implementation.

use std::sync::{Arc, Mutex};

use crate::types::FormState;

/// Storage for the single in-progress quote form.
pub trait FormStateRepository: Send + Sync {
    /// Returns the last saved form, if any.
    fn load(&self) -> Option<FormState>;

    /// Replaces the saved form.
    fn save(&self, state: FormState);

    /// Forgets the saved form (the "reset" action).
    fn clear(&self);
}

/// Session-scoped store. Clones share the same slot.
///
/// ## Thread Safety
/// Wrapped in `Arc<Mutex<T>>` so UI events on different threads can share
/// one handle.
#[derive(Debug, Clone, Default)]
pub struct MemoryFormStore {
    slot: Arc<Mutex<Option<FormState>>>,
}

impl MemoryFormStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a closure with access to the slot.
    ///
    /// A poisoned lock still holds a consistent `Option<FormState>`, so the
    /// value is recovered instead of propagating the panic.
    fn with_slot<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Option<FormState>) -> R,
    {
        let mut guard = match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

impl FormStateRepository for MemoryFormStore {
    fn load(&self) -> Option<FormState> {
        self.with_slot(|slot| slot.clone())
    }

    fn save(&self, state: FormState) {
        self.with_slot(|slot| *slot = Some(state));
    }

    fn clear(&self) {
        self.with_slot(|slot| *slot = None);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
