//! Toast stack for submit notices.
//!
//! DESIGN
//! ======
//! Newest toast last. The stack is bounded so repeated failures cannot grow it
//! without limit; the oldest toast falls off first.

use workflow::Notice;

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// Maximum toasts kept on screen at once.
pub const MAX_VISIBLE: usize = 3;

/// How long a toast stays before it dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastState {
    /// Add a notice and return its toast id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast { id, notice });
        if self.toasts.len() > MAX_VISIBLE {
            let overflow = self.toasts.len() - MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
        id
    }

    /// Remove a toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }
}
