//! Request cancellation tied to screen lifetime.
//!
//! A request started on a screen keeps running if the user navigates away
//! before it lands. The token lets the completion handler notice that the
//! screen is gone and drop the result instead of writing to disposed
//! state.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

/// Clonable cancellation flag. All clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct ScreenToken {
    cancelled: Arc<AtomicBool>,
}

impl ScreenToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that cancels itself when the current reactive owner is
    /// disposed, i.e. when the screen that created it unmounts.
    pub fn for_screen() -> Self {
        let token = Self::new();
        let handle = token.clone();
        on_cleanup(move || handle.cancel());
        token
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
