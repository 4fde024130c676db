use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM};

/// Single-line text input with a character-indexed cursor.
///
/// Features:
/// - Basic text editing (insert, delete, backspace)
/// - Cursor movement (left/right, home/end)
/// - Horizontal scrolling when text exceeds widget width
/// - Optional masking for passwords
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
}

impl InputBox {
    /// Create a new empty InputBox
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an InputBox holding `content`, cursor at the end.
    pub fn with_content(content: &str) -> Self {
        let mut input = Self::new();
        input.set_content(content.to_string());
        input
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let idx = self.byte_index(self.cursor_position);
        self.content.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let idx = self.byte_index(self.cursor_position);
            self.content.remove(idx);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index(self.cursor_position);
            self.content.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// Get the current text content
    pub fn get_content(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text content and move the cursor to the end
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    /// Return the content and clear the box.
    pub fn take(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Apply an editing key. Returns false for keys the box does not handle
    /// so the caller can treat them as commands.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.clear();
                    true
                }
                _ => false,
            };
        }
        match key.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.move_cursor_home(),
            KeyCode::End => self.move_cursor_end(),
            _ => return false,
        }
        true
    }

    /// First visible character so the cursor stays inside `visible_width`.
    fn scroll_offset(&self, visible_width: usize) -> usize {
        if visible_width == 0 || self.cursor_position < visible_width {
            0
        } else {
            self.cursor_position - visible_width + 1
        }
    }

    /// Render the input box with the given title
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        focused: bool,
        masked: bool,
    ) {
        let inner_width = area.width.saturating_sub(2);
        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        block.render(area, buf);

        let inner_area = Rect {
            x: area.x + 1,
            y: area.y + 1,
            width: inner_width,
            height: if area.height > 2 { 1 } else { 0 },
        };
        if inner_area.width == 0 || inner_area.height == 0 {
            return;
        }

        let scroll_offset = self.scroll_offset(inner_width as usize);
        let text_style = Style::default().fg(if focused { Color::White } else { COLOR_DIM });
        let visible: Vec<char> = self
            .content
            .chars()
            .skip(scroll_offset)
            .take(inner_width as usize)
            .map(|c| if masked { '\u{2022}' } else { c })
            .collect();
        for (i, c) in visible.iter().enumerate() {
            buf.set_string(inner_area.x + i as u16, inner_area.y, c.to_string(), text_style);
        }

        if focused {
            let cursor_x = (self.cursor_position - scroll_offset) as u16;
            if cursor_x < inner_width {
                let cursor_char = visible.get(cursor_x as usize).copied().unwrap_or(' ');
                let cursor_style = Style::default().fg(Color::Black).bg(COLOR_ACCENT);
                buf.set_string(
                    inner_area.x + cursor_x,
                    inner_area.y,
                    cursor_char.to_string(),
                    cursor_style,
                );
            }
        }
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
    masked: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
            masked: false,
        }
    }

    /// Render bullets instead of the content.
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused, self.masked);
    }
}
