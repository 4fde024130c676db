//! Transient status messages.
//!
//! Lifetimes are counted in event-loop ticks (16ms each), the same clock
//! that drives redraws, so toasts need no timers of their own.

use std::collections::VecDeque;

/// Ticks a toast stays visible (~3s at 60fps).
pub const TOAST_TICKS: u64 = 180;

/// Toasts shown at once; older ones are dropped first.
const MAX_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Toaster {
    toasts: VecDeque<Toast>,
    now: u64,
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            kind,
            message,
            expires_at: self.now + TOAST_TICKS,
        });
    }

    /// Advance the clock; returns true if any toast expired.
    pub fn tick(&mut self) -> bool {
        self.now += 1;
        let before = self.toasts.len();
        let now = self.now;
        self.toasts.retain(|t| t.expires_at > now);
        self.toasts.len() != before
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
