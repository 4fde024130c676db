//! Multi-select tag sets used by the check-in and preference forms.

use std::collections::BTreeSet;

/// A set of selected tags. Toggling is its own inverse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    selected: BTreeSet<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `tag` if absent, remove it if present. Returns whether it is now
    /// selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.selected.remove(tag) {
            false
        } else {
            self.selected.insert(tag.to_string());
            true
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Cursor over a fixed list of options with a [`TagSet`] of picks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPicker {
    options: &'static [&'static str],
    cursor: usize,
    pub selected: TagSet,
}

impl TagPicker {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            cursor: 0,
            selected: TagSet::new(),
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_left(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + self.options.len() - 1) % self.options.len();
        }
    }

    pub fn move_right(&mut self) {
        if !self.options.is_empty() {
            self.cursor = (self.cursor + 1) % self.options.len();
        }
    }

    /// Toggle the option under the cursor.
    pub fn toggle_current(&mut self) {
        if let Some(tag) = self.options.get(self.cursor) {
            self.selected.toggle(tag);
        }
    }
}
