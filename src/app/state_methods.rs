//! Frame bookkeeping for the App.

use tokio::sync::mpsc;

use super::{App, AppMessage};

impl App {
    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether any store has a request in flight.
    pub fn is_busy(&self) -> bool {
        let s = &self.stores;
        s.auth.is_loading()
            || s.mood.is_loading()
            || s.chat.is_loading()
            || s.therapy.is_loading()
            || s.goals.is_loading()
            || s.analytics.is_loading()
            || s.personalization.is_loading()
            || s.crisis.is_loading()
            || s.community.is_loading()
            || s.notifications.is_loading()
    }

    /// Advance one frame (~16ms). Expires toasts and keeps the spinner moving
    /// while a request is in flight.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.toaster.tick() {
            self.mark_dirty();
        }
        if self.tick_count % 6 == 0 && self.is_busy() {
            self.mark_dirty();
        }
    }

    pub fn quit(&mut self) {
        self.breathing_driver.stop();
        self.should_quit = true;
    }
}
