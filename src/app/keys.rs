//! Keyboard handling.
//!
//! Global bindings are checked first; everything else goes to the current
//! screen. Text inputs get keys before screen commands so typing never
//! triggers a shortcut.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::models::{MoodLevel, NotificationSetting};
use crate::navigation::Screen;
use crate::settings::SettingField;

use super::actions::PROGRESS_STEP;
use super::forms::{AuthMode, ContactForm, GoalField, MoodSection, PostForm};
use super::types::{step_index, CrisisTab, ProfileTab, ToolPanel};
use super::App;

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        self.mark_dirty();

        if ctrl(&key, 'c') || ctrl(&key, 'q') {
            self.quit();
            return;
        }
        if ctrl(&key, 'g') && self.navigator.current() != Screen::Crisis {
            self.navigate_to(Screen::Crisis);
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Right => return self.next_tab(),
                KeyCode::Left => return self.prev_tab(),
                _ => {}
            }
        }

        match self.navigator.current() {
            Screen::Welcome => self.welcome_key(key),
            Screen::Onboarding => self.onboarding_key(key),
            Screen::Auth => self.auth_key(key),
            Screen::Chat => self.chat_key(key),
            Screen::Mood => self.mood_key(key),
            Screen::Tools => self.tools_key(key),
            Screen::Profile => self.profile_key(key),
            Screen::Analytics => self.analytics_key(key),
            Screen::Community => self.community_key(key),
            Screen::Notifications => self.notifications_key(key),
            Screen::Crisis => self.crisis_key(key),
            Screen::Personalization => self.personalization_key(key),
        }
    }

    fn welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.navigate_to(Screen::Onboarding),
            KeyCode::Char('l') => self.navigate_to(Screen::Auth),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            _ => {}
        }
    }

    fn onboarding_key(&mut self, key: KeyEvent) {
        let form = &mut self.onboarding;
        match key.code {
            KeyCode::Esc => {
                if !form.back() {
                    self.navigate_to(Screen::Welcome);
                }
            }
            KeyCode::Enter => {
                if form.advance() {
                    self.onboarded_profile = Some(self.onboarding.profile());
                    self.auth_form.set_mode(AuthMode::Register);
                    self.navigate_to(Screen::Auth);
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => match form.current_picker() {
                Some(picker) => match key.code {
                    KeyCode::Left => picker.move_left(),
                    KeyCode::Right => picker.move_right(),
                    _ => picker.toggle_current(),
                },
                None => form.style = form.style.next(),
            },
            _ => {}
        }
    }

    fn auth_key(&mut self, key: KeyEvent) {
        if ctrl(&key, 't') {
            self.auth_form.toggle_mode();
            return;
        }
        match key.code {
            KeyCode::Esc => self.navigate_to(Screen::Welcome),
            KeyCode::Tab | KeyCode::Down => self.auth_form.next_field(),
            KeyCode::Enter => self.submit_auth(),
            _ => {
                self.auth_form.focused_input().handle_key(key);
            }
        }
    }

    fn chat_key(&mut self, key: KeyEvent) {
        if ctrl(&key, 'l') {
            self.stores.chat.clear();
            return;
        }
        if ctrl(&key, 'e') {
            return self.analyze_chat_draft();
        }
        match key.code {
            KeyCode::Enter => self.send_chat(),
            KeyCode::PageUp | KeyCode::Up => self.chat.scroll = self.chat.scroll.saturating_add(1),
            KeyCode::PageDown | KeyCode::Down => {
                self.chat.scroll = self.chat.scroll.saturating_sub(1)
            }
            _ => {
                self.chat.input.handle_key(key);
            }
        }
    }

    fn mood_key(&mut self, key: KeyEvent) {
        if ctrl(&key, 's') {
            return self.submit_mood();
        }
        let form = &mut self.mood.form;
        if key.code == KeyCode::Tab {
            form.section = form.section.next();
            return;
        }
        if form.section == MoodSection::Notes {
            match key.code {
                KeyCode::Enter => self.submit_mood(),
                _ => {
                    form.notes.handle_key(key);
                }
            }
            return;
        }
        match (form.section, key.code) {
            (_, KeyCode::Char('i')) => self.mood.show_insights = !self.mood.show_insights,
            (_, KeyCode::Enter) => self.submit_mood(),
            (MoodSection::Level, KeyCode::Char(c @ '1'..='5')) => {
                form.level = c.to_digit(10).map(|d| d as u8);
            }
            (MoodSection::Level, KeyCode::Left) => {
                form.level = Some(form.level.unwrap_or(2).saturating_sub(1).max(1));
            }
            (MoodSection::Level, KeyCode::Right) => {
                form.level = Some((form.level.unwrap_or(0) + 1).min(5));
            }
            (MoodSection::Emotion, KeyCode::Left) => form.move_emotion(false),
            (MoodSection::Emotion, KeyCode::Right) => form.move_emotion(true),
            (MoodSection::Emotion, KeyCode::Char(' ')) => form.pick_emotion(),
            (MoodSection::Triggers, KeyCode::Left) => form.triggers.move_left(),
            (MoodSection::Triggers, KeyCode::Right) => form.triggers.move_right(),
            (MoodSection::Triggers, KeyCode::Char(' ')) => form.triggers.toggle_current(),
            _ => {}
        }
    }

    fn tools_key(&mut self, key: KeyEvent) {
        match self.tools.panel {
            ToolPanel::Menu => match key.code {
                KeyCode::Up => self.tools.menu_index = self.tools.menu_index.saturating_sub(1),
                KeyCode::Down => {
                    self.tools.menu_index = step_index(self.tools.menu_index, ToolPanel::MENU.len(), true)
                }
                KeyCode::Enter => self.tools.panel = ToolPanel::MENU[self.tools.menu_index],
                _ => {}
            },
            ToolPanel::Breathing => match key.code {
                KeyCode::Esc => {
                    self.stop_breathing();
                    self.tools.panel = ToolPanel::Menu;
                }
                KeyCode::Char(' ') => self.toggle_breathing(),
                KeyCode::Char('s') => self.stop_breathing(),
                KeyCode::Char('f') => self.finish_breathing(),
                KeyCode::Char(c @ '1'..='5') => {
                    if let Some(level) = c
                        .to_digit(10)
                        .and_then(|d| MoodLevel::new(d as u8).ok())
                    {
                        self.tools.rate_mood(level);
                    }
                }
                KeyCode::Left | KeyCode::Right if self.tools.timer.is_stopped() => {
                    self.cycle_breathing_exercise(key.code == KeyCode::Right)
                }
                _ => {}
            },
            ToolPanel::Mindfulness => {
                let len = self.stores.therapy.snapshot().mindfulness_sessions.len();
                match key.code {
                    KeyCode::Esc => self.tools.panel = ToolPanel::Menu,
                    KeyCode::Up => {
                        self.tools.mindfulness_index =
                            step_index(self.tools.mindfulness_index, len, false)
                    }
                    KeyCode::Down => {
                        self.tools.mindfulness_index =
                            step_index(self.tools.mindfulness_index, len, true)
                    }
                    KeyCode::Enter => self.start_mindfulness(),
                    KeyCode::Char('f') => self.finish_mindfulness(),
                    _ => {}
                }
            }
            ToolPanel::Journal => {
                if ctrl(&key, 's') {
                    return self.save_journal();
                }
                let journal = &mut self.tools.journal;
                match key.code {
                    KeyCode::Esc => self.tools.panel = ToolPanel::Menu,
                    KeyCode::Tab => journal.next_field(),
                    _ => match journal.focused_input() {
                        Some(input) => {
                            input.handle_key(key);
                        }
                        None => match key.code {
                            KeyCode::Left => journal.emotions.move_left(),
                            KeyCode::Right => journal.emotions.move_right(),
                            KeyCode::Char(' ') => journal.emotions.toggle_current(),
                            _ => {}
                        },
                    },
                }
            }
            ToolPanel::Goals => self.goals_key(key),
        }
    }

    fn goals_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.tools.goal_form {
            match key.code {
                KeyCode::Esc => self.tools.goal_form = None,
                KeyCode::Tab => form.next_field(),
                KeyCode::Enter => self.submit_goal(),
                KeyCode::Left | KeyCode::Right if form.focus == GoalField::Category => {
                    form.category = form.category.next();
                }
                _ => {
                    if let Some(input) = form.focused_input() {
                        input.handle_key(key);
                    }
                }
            }
            return;
        }
        let len = self.stores.goals.snapshot().goals.len();
        match key.code {
            KeyCode::Esc => self.tools.panel = ToolPanel::Menu,
            KeyCode::Up => self.tools.goal_index = step_index(self.tools.goal_index, len, false),
            KeyCode::Down => self.tools.goal_index = step_index(self.tools.goal_index, len, true),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_goal(PROGRESS_STEP),
            KeyCode::Char('-') => self.adjust_goal(-PROGRESS_STEP),
            KeyCode::Char('n') => self.open_goal_form(),
            KeyCode::Char('c') => self.complete_selected_goal(),
            _ => {}
        }
    }

    fn profile_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.profile.tab = match self.profile.tab {
                    ProfileTab::Profile => ProfileTab::Settings,
                    ProfileTab::Settings => ProfileTab::Profile,
                }
            }
            KeyCode::Char('o') => self.sign_out(),
            _ if self.profile.tab == ProfileTab::Settings => {
                let len = SettingField::ALL.len();
                match key.code {
                    KeyCode::Up => {
                        self.profile.setting_index =
                            step_index(self.profile.setting_index, len, false)
                    }
                    KeyCode::Down => {
                        self.profile.setting_index =
                            step_index(self.profile.setting_index, len, true)
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let field = SettingField::ALL[self.profile.setting_index];
                        self.settings.cycle(field);
                    }
                    KeyCode::Char('s') => self.save_settings(),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn analytics_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') => self.cycle_analytics_period(),
            KeyCode::Char('r') => self.refresh_analytics_all(),
            _ => {}
        }
    }

    fn community_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.community.compose {
            if ctrl(&key, 'a') {
                form.anonymous = !form.anonymous;
                return;
            }
            match key.code {
                KeyCode::Esc => self.community.compose = None,
                KeyCode::Tab => form.category = form.category.next(),
                KeyCode::Enter => self.submit_post(),
                _ => {
                    form.content.handle_key(key);
                }
            }
            return;
        }
        if let Some(form) = &mut self.community.comment {
            match key.code {
                KeyCode::Esc => self.community.comment = None,
                KeyCode::Enter => self.submit_comment(),
                _ => {
                    form.content.handle_key(key);
                }
            }
            return;
        }
        let len = self.stores.community.snapshot().visible_posts().len();
        match key.code {
            KeyCode::Up => self.community.selected = step_index(self.community.selected, len, false),
            KeyCode::Down => self.community.selected = step_index(self.community.selected, len, true),
            KeyCode::Char('f') => self.cycle_community_filter(),
            KeyCode::Char('n') => self.community.compose = Some(PostForm::default()),
            KeyCode::Char('l') => self.like_selected_post(),
            KeyCode::Char('c') => self.open_comment(),
            _ => {}
        }
    }

    fn notifications_key(&mut self, key: KeyEvent) {
        if self.notifications.settings_open {
            let len = NotificationSetting::ALL.len();
            let view = &mut self.notifications;
            match key.code {
                KeyCode::Esc | KeyCode::Char('s') => view.settings_open = false,
                KeyCode::Up => view.setting_index = step_index(view.setting_index, len, false),
                KeyCode::Down => view.setting_index = step_index(view.setting_index, len, true),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let setting = view.selected_setting();
                    self.toggle_notification_setting(setting);
                }
                _ => {}
            }
            return;
        }
        let len = self.stores.notifications.snapshot().notifications.len();
        match key.code {
            KeyCode::Char('s') => self.notifications.settings_open = true,
            KeyCode::Up => {
                self.notifications.selected = step_index(self.notifications.selected, len, false)
            }
            KeyCode::Down => {
                self.notifications.selected = step_index(self.notifications.selected, len, true)
            }
            KeyCode::Enter => self.mark_selected_notification_read(),
            KeyCode::Char('a') => self.mark_all_notifications_read(),
            _ => {}
        }
    }

    fn crisis_key(&mut self, key: KeyEvent) {
        if let Some(form) = &mut self.crisis.contact_form {
            if ctrl(&key, 'e') {
                form.is_emergency = !form.is_emergency;
                return;
            }
            match key.code {
                KeyCode::Esc => self.crisis.contact_form = None,
                KeyCode::Tab => form.next_field(),
                KeyCode::Enter => self.submit_contact(),
                _ => {
                    form.focused_input().handle_key(key);
                }
            }
            return;
        }
        if let Some(severity) = self.crisis.support_confirm {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.trigger_crisis_support(),
                KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
                    self.crisis.support_confirm = Some(severity.next())
                }
                _ => self.crisis.support_confirm = None,
            }
            return;
        }
        let state = self.stores.crisis.snapshot();
        let len = match self.crisis.tab {
            CrisisTab::Resources => state.visible_resources().len(),
            CrisisTab::Contacts => state.contacts.len(),
        };
        match key.code {
            KeyCode::Tab => {
                self.crisis.tab = match self.crisis.tab {
                    CrisisTab::Resources => CrisisTab::Contacts,
                    CrisisTab::Contacts => CrisisTab::Resources,
                };
                self.crisis.selected = 0;
            }
            KeyCode::Up => self.crisis.selected = step_index(self.crisis.selected, len, false),
            KeyCode::Down => self.crisis.selected = step_index(self.crisis.selected, len, true),
            KeyCode::Enter => self.open_selected_resource(),
            KeyCode::Char('a') if self.crisis.tab == CrisisTab::Contacts => {
                self.crisis.contact_form = Some(ContactForm::default())
            }
            KeyCode::Char('x') => self.open_support_confirm(),
            _ => {}
        }
    }

    fn personalization_key(&mut self, key: KeyEvent) {
        if ctrl(&key, 's') {
            return self.save_personalization();
        }
        let recommendations = self.stores.personalization.snapshot().recommendations.len();
        let view = &mut self.personalization;
        match key.code {
            KeyCode::Left => view.content.move_left(),
            KeyCode::Right => view.content.move_right(),
            KeyCode::Char(' ') => view.content.toggle_current(),
            KeyCode::Char('s') => view.style = view.style.next(),
            KeyCode::Up => view.selected = step_index(view.selected, recommendations, false),
            KeyCode::Down => view.selected = step_index(view.selected, recommendations, true),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(rating) = c.to_digit(10) {
                    self.rate_recommendation(rating as u8);
                }
            }
            _ => {}
        }
    }
}
