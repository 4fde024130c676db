//! Screen navigation.
//!
//! [`Navigator`] is the single owner of the current [`Screen`]. Transitions
//! go through [`Navigator::navigate`]: a direct assignment with no guards,
//! no history and no deep links.

/// Every screen the client can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Onboarding,
    Auth,
    Chat,
    Mood,
    Tools,
    Profile,
    Analytics,
    Community,
    Notifications,
    Crisis,
    Personalization,
}

impl Screen {
    /// Screens reachable from the tab bar, in display order.
    pub const TABS: [Screen; 9] = [
        Screen::Chat,
        Screen::Mood,
        Screen::Tools,
        Screen::Analytics,
        Screen::Community,
        Screen::Notifications,
        Screen::Personalization,
        Screen::Profile,
        Screen::Crisis,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Onboarding => "Getting started",
            Screen::Auth => "Sign in",
            Screen::Chat => "Chat",
            Screen::Mood => "Mood",
            Screen::Tools => "Tools",
            Screen::Profile => "Profile",
            Screen::Analytics => "Insights",
            Screen::Community => "Community",
            Screen::Notifications => "Alerts",
            Screen::Crisis => "Crisis",
            Screen::Personalization => "For you",
        }
    }

    /// Whether the persistent tab bar is drawn on this screen.
    pub fn shows_tab_bar(&self) -> bool {
        !matches!(self, Screen::Welcome | Screen::Onboarding | Screen::Auth)
    }

    fn tab_index(&self) -> Option<usize> {
        Self::TABS.iter().position(|s| s == self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    /// Switch to `to`. Returns the screen that was left.
    pub fn navigate(&mut self, to: Screen) -> Screen {
        let from = self.current;
        if from != to {
            tracing::debug!("Navigate {:?} -> {:?}", from, to);
        }
        self.current = to;
        from
    }

    pub fn shows_tab_bar(&self) -> bool {
        self.current.shows_tab_bar()
    }

    /// Move to the next tab-bar screen, wrapping around. Returns the screen
    /// that was left; `None` (and no move) where the tab bar is hidden.
    pub fn next_tab(&mut self) -> Option<Screen> {
        self.step_tab(1)
    }

    /// Move to the previous tab-bar screen, wrapping around.
    pub fn prev_tab(&mut self) -> Option<Screen> {
        self.step_tab(Screen::TABS.len() - 1)
    }

    fn step_tab(&mut self, offset: usize) -> Option<Screen> {
        let idx = self.current.tab_index()?;
        let to = Screen::TABS[(idx + offset) % Screen::TABS.len()];
        Some(self.navigate(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_welcome_without_tab_bar() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Welcome);
        assert!(!nav.shows_tab_bar());
    }

    #[test]
    fn test_navigate_is_unconditional() {
        let mut nav = Navigator::new();
        assert_eq!(nav.navigate(Screen::Crisis), Screen::Welcome);
        assert_eq!(nav.navigate(Screen::Auth), Screen::Crisis);
        assert_eq!(nav.current(), Screen::Auth);
    }

    #[test]
    fn test_tab_bar_visibility() {
        for screen in [Screen::Welcome, Screen::Onboarding, Screen::Auth] {
            assert!(!screen.shows_tab_bar());
        }
        for screen in Screen::TABS {
            assert!(screen.shows_tab_bar());
        }
    }

    #[test]
    fn test_tab_cycling_wraps() {
        let mut nav = Navigator::new();
        assert_eq!(nav.next_tab(), None);
        assert_eq!(nav.current(), Screen::Welcome);

        nav.navigate(Screen::Chat);
        nav.prev_tab();
        assert_eq!(nav.current(), Screen::Crisis);
        nav.next_tab();
        nav.next_tab();
        assert_eq!(nav.current(), Screen::Mood);
    }
}
