//! Form drafts for the screens that create records.
//!
//! Each draft owns its text inputs and a focus cursor, and converts into a
//! request payload through a validating method. Validation happens here,
//! before any store action is spawned, so a rejected draft never reaches the
//! network.

use crate::error::ValidationError;
use crate::models::{
    CommunicationStyle, GoalCategory, LoginRequest, MoodLevel, NewComment, NewCrisisContact,
    NewGoal, NewJournalEntry, NewMoodEntry, NewPost, PostCategory, RegisterRequest,
    WellnessProfile, EMOTIONS, MOOD_TRIGGERS,
};
use crate::selection::TagPicker;
use crate::validation::{self, MAX_POST_LEN};
use crate::widgets::InputBox;

/// Sign-in or account creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthField {
    #[default]
    Email,
    Password,
    FirstName,
    LastName,
}

#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub focus: AuthField,
    pub email: InputBox,
    pub password: InputBox,
    pub first_name: InputBox,
    pub last_name: InputBox,
}

impl AuthForm {
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::FirstName,
                AuthField::LastName,
                AuthField::Email,
                AuthField::Password,
            ],
        }
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        });
    }

    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.focus = self.fields()[0];
    }

    pub fn next_field(&mut self) {
        let fields = self.fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focused_input(&mut self) -> &mut InputBox {
        match self.focus {
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::FirstName => &mut self.first_name,
            AuthField::LastName => &mut self.last_name,
        }
    }

    pub fn to_login(&self) -> Result<LoginRequest, ValidationError> {
        Ok(LoginRequest {
            email: validation::email(self.email.get_content())?,
            password: validation::password(self.password.get_content())?,
        })
    }

    pub fn to_register(
        &self,
        wellness_profile: Option<WellnessProfile>,
    ) -> Result<RegisterRequest, ValidationError> {
        Ok(RegisterRequest {
            first_name: validation::require("First name", self.first_name.get_content())?,
            last_name: validation::optional(self.last_name.get_content()).unwrap_or_default(),
            email: validation::email(self.email.get_content())?,
            password: validation::password(self.password.get_content())?,
            wellness_profile,
        })
    }

    /// Drop the password once it has been used.
    pub fn clear_secret(&mut self) {
        self.password.clear();
    }
}

/// Onboarding questionnaire answers, handed to registration.
#[derive(Debug, Clone)]
pub struct OnboardingForm {
    pub step: usize,
    pub goals: TagPicker,
    pub concerns: TagPicker,
    pub style: CommunicationStyle,
}

impl OnboardingForm {
    /// Goals, concerns, communication style.
    pub const STEPS: usize = 3;

    pub fn new() -> Self {
        Self {
            step: 0,
            goals: TagPicker::new(crate::models::WELLNESS_GOALS),
            concerns: TagPicker::new(crate::models::WELLNESS_CONCERNS),
            style: CommunicationStyle::default(),
        }
    }

    pub fn current_picker(&mut self) -> Option<&mut TagPicker> {
        match self.step {
            0 => Some(&mut self.goals),
            1 => Some(&mut self.concerns),
            _ => None,
        }
    }

    /// Advance one step. Returns true once the questionnaire is finished.
    pub fn advance(&mut self) -> bool {
        if self.step + 1 >= Self::STEPS {
            return true;
        }
        self.step += 1;
        false
    }

    pub fn back(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    pub fn profile(&self) -> WellnessProfile {
        WellnessProfile {
            goals: self.goals.selected.to_vec(),
            concerns: self.concerns.selected.to_vec(),
            communication_style: self.style,
        }
    }
}

impl Default for OnboardingForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodSection {
    #[default]
    Level,
    Emotion,
    Triggers,
    Notes,
}

impl MoodSection {
    pub fn next(&self) -> Self {
        match self {
            MoodSection::Level => MoodSection::Emotion,
            MoodSection::Emotion => MoodSection::Triggers,
            MoodSection::Triggers => MoodSection::Notes,
            MoodSection::Notes => MoodSection::Level,
        }
    }
}

/// The mood check-in.
#[derive(Debug, Clone)]
pub struct MoodForm {
    pub section: MoodSection,
    pub level: Option<u8>,
    pub emotion_cursor: usize,
    pub emotion: Option<&'static str>,
    pub triggers: TagPicker,
    pub notes: InputBox,
}

impl MoodForm {
    pub fn new() -> Self {
        Self {
            section: MoodSection::default(),
            level: None,
            emotion_cursor: 0,
            emotion: None,
            triggers: TagPicker::new(MOOD_TRIGGERS),
            notes: InputBox::new(),
        }
    }

    pub fn move_emotion(&mut self, forward: bool) {
        let len = EMOTIONS.len();
        self.emotion_cursor = if forward {
            (self.emotion_cursor + 1) % len
        } else {
            (self.emotion_cursor + len - 1) % len
        };
    }

    /// Select the emotion under the cursor, or deselect it if already chosen.
    pub fn pick_emotion(&mut self) {
        let current = EMOTIONS[self.emotion_cursor];
        self.emotion = if self.emotion == Some(current) {
            None
        } else {
            Some(current)
        };
    }

    pub fn to_entry(&self) -> Result<NewMoodEntry, ValidationError> {
        let level = self.level.ok_or(ValidationError::MissingMood)?;
        Ok(NewMoodEntry {
            level: MoodLevel::new(level)?,
            emotion: self.emotion.map(str::to_string),
            notes: validation::optional(self.notes.get_content()),
            triggers: self.triggers.selected.to_vec(),
        })
    }
}

impl Default for MoodForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JournalField {
    #[default]
    Situation,
    Thoughts,
    Emotions,
    Behaviors,
    Alternative,
}

impl JournalField {
    pub const ALL: [JournalField; 5] = [
        JournalField::Situation,
        JournalField::Thoughts,
        JournalField::Emotions,
        JournalField::Behaviors,
        JournalField::Alternative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            JournalField::Situation => "Situation",
            JournalField::Thoughts => "Automatic thoughts",
            JournalField::Emotions => "Emotions",
            JournalField::Behaviors => "Behaviors",
            JournalField::Alternative => "Alternative thoughts",
        }
    }
}

/// A CBT thought record.
#[derive(Debug, Clone)]
pub struct JournalForm {
    pub focus: JournalField,
    pub situation: InputBox,
    pub thoughts: InputBox,
    pub emotions: TagPicker,
    pub behaviors: InputBox,
    pub alternative: InputBox,
}

impl JournalForm {
    pub fn new() -> Self {
        Self {
            focus: JournalField::default(),
            situation: InputBox::new(),
            thoughts: InputBox::new(),
            emotions: TagPicker::new(EMOTIONS),
            behaviors: InputBox::new(),
            alternative: InputBox::new(),
        }
    }

    pub fn next_field(&mut self) {
        let idx = JournalField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        self.focus = JournalField::ALL[(idx + 1) % JournalField::ALL.len()];
    }

    /// Text input under focus; `None` while the emotion picker is focused.
    pub fn focused_input(&mut self) -> Option<&mut InputBox> {
        match self.focus {
            JournalField::Situation => Some(&mut self.situation),
            JournalField::Thoughts => Some(&mut self.thoughts),
            JournalField::Emotions => None,
            JournalField::Behaviors => Some(&mut self.behaviors),
            JournalField::Alternative => Some(&mut self.alternative),
        }
    }

    pub fn to_entry(&self) -> Result<NewJournalEntry, ValidationError> {
        Ok(NewJournalEntry {
            situation: validation::require("Situation", self.situation.get_content())?,
            thoughts: self.thoughts.get_content().trim().to_string(),
            emotions: self.emotions.selected.to_vec(),
            behaviors: self.behaviors.get_content().trim().to_string(),
            alternative_thoughts: self.alternative.get_content().trim().to_string(),
        })
    }
}

impl Default for JournalForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    Title,
    Description,
    Category,
}

#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub focus: GoalField,
    pub title: InputBox,
    pub description: InputBox,
    pub category: GoalCategory,
}

impl GoalForm {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            GoalField::Title => GoalField::Description,
            GoalField::Description => GoalField::Category,
            GoalField::Category => GoalField::Title,
        };
    }

    pub fn focused_input(&mut self) -> Option<&mut InputBox> {
        match self.focus {
            GoalField::Title => Some(&mut self.title),
            GoalField::Description => Some(&mut self.description),
            GoalField::Category => None,
        }
    }

    pub fn to_goal(&self) -> Result<NewGoal, ValidationError> {
        Ok(NewGoal {
            title: validation::require("Goal title", self.title.get_content())?,
            description: validation::optional(self.description.get_content()),
            target_date: None,
            category: self.category,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
    Relationship,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub focus: ContactField,
    pub name: InputBox,
    pub phone: InputBox,
    pub relationship: InputBox,
    pub is_emergency: bool,
}

impl ContactForm {
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            ContactField::Name => ContactField::Phone,
            ContactField::Phone => ContactField::Relationship,
            ContactField::Relationship => ContactField::Name,
        };
    }

    pub fn focused_input(&mut self) -> &mut InputBox {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Relationship => &mut self.relationship,
        }
    }

    pub fn to_contact(&self) -> Result<NewCrisisContact, ValidationError> {
        Ok(NewCrisisContact {
            name: validation::require("Name", self.name.get_content())?,
            phone: validation::require("Phone", self.phone.get_content())?,
            relationship: validation::optional(self.relationship.get_content()),
            is_emergency: self.is_emergency,
        })
    }
}

/// A new community post.
#[derive(Debug, Clone)]
pub struct PostForm {
    pub content: InputBox,
    pub category: PostCategory,
    pub anonymous: bool,
}

impl Default for PostForm {
    fn default() -> Self {
        Self {
            content: InputBox::new(),
            category: PostCategory::ALL[0],
            anonymous: true,
        }
    }
}

impl PostForm {
    pub fn to_post(&self) -> Result<NewPost, ValidationError> {
        Ok(NewPost {
            content: validation::require_bounded("Post", self.content.get_content(), MAX_POST_LEN)?,
            category: self.category,
            is_anonymous: self.anonymous,
        })
    }
}

/// A reply to a post.
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub post_id: String,
    pub content: InputBox,
    pub anonymous: bool,
}

impl CommentForm {
    pub fn new(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            content: InputBox::new(),
            anonymous: true,
        }
    }

    pub fn to_comment(&self) -> Result<NewComment, ValidationError> {
        Ok(NewComment {
            content: validation::require_bounded(
                "Comment",
                self.content.get_content(),
                MAX_POST_LEN,
            )?,
            is_anonymous: self.anonymous,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_requires_a_level() {
        let form = MoodForm::new();
        assert_eq!(form.to_entry().unwrap_err(), ValidationError::MissingMood);
    }

    #[test]
    fn test_mood_entry_carries_selection() {
        let mut form = MoodForm::new();
        form.level = Some(4);
        form.pick_emotion();
        form.triggers.toggle_current();
        form.notes.set_content("  slept well ".to_string());

        let entry = form.to_entry().unwrap();
        assert_eq!(entry.level.value(), 4);
        assert_eq!(entry.emotion.as_deref(), Some(EMOTIONS[0]));
        assert_eq!(entry.triggers, vec![MOOD_TRIGGERS[0].to_string()]);
        assert_eq!(entry.notes.as_deref(), Some("slept well"));
    }

    #[test]
    fn test_pick_emotion_twice_deselects() {
        let mut form = MoodForm::new();
        form.move_emotion(false);
        form.pick_emotion();
        assert_eq!(form.emotion, EMOTIONS.last().copied());
        form.pick_emotion();
        assert_eq!(form.emotion, None);
    }

    #[test]
    fn test_blank_post_rejected() {
        let mut form = PostForm::default();
        form.content.set_content("   ".to_string());
        assert_eq!(
            form.to_post().unwrap_err(),
            ValidationError::empty("Post")
        );
    }

    #[test]
    fn test_auth_field_cycle_follows_mode() {
        let mut form = AuthForm::default();
        form.next_field();
        assert_eq!(form.focus, AuthField::Password);
        form.next_field();
        assert_eq!(form.focus, AuthField::Email);

        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Register);
        assert_eq!(form.focus, AuthField::FirstName);
    }

    #[test]
    fn test_login_validation() {
        let mut form = AuthForm::default();
        form.email.set_content("not-an-email".to_string());
        form.password.set_content("longenough".to_string());
        assert_eq!(form.to_login().unwrap_err(), ValidationError::InvalidEmail);

        form.email.set_content("sam@example.com".to_string());
        let request = form.to_login().unwrap();
        assert_eq!(request.email, "sam@example.com");
    }

    #[test]
    fn test_contact_needs_name_and_phone() {
        let mut form = ContactForm::default();
        form.name.set_content("Alex".to_string());
        assert_eq!(
            form.to_contact().unwrap_err(),
            ValidationError::empty("Phone")
        );
        form.phone.set_content("555-0100".to_string());
        assert!(form.to_contact().is_ok());
    }

    #[test]
    fn test_journal_requires_situation() {
        let mut form = JournalForm::new();
        form.thoughts.set_content("I always mess up".to_string());
        assert_eq!(
            form.to_entry().unwrap_err(),
            ValidationError::empty("Situation")
        );
    }

    #[test]
    fn test_onboarding_profile() {
        let mut form = OnboardingForm::new();
        form.goals.toggle_current();
        assert!(!form.advance());
        assert!(!form.advance());
        assert!(form.advance());
        let profile = form.profile();
        assert_eq!(profile.goals.len(), 1);
        assert!(profile.concerns.is_empty());
    }
}
