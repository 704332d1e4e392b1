//! Prompt line: the pending input buffer

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const PROMPT: &str = "> ";

/// Render `buffer` after the prompt marker and park the cursor after it
pub fn render_prompt(frame: &mut Frame, area: Rect, buffer: &str) {
    let line = Line::from(vec![
        Span::styled(
            PROMPT,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer.to_string(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);

    let x = cursor_column(area, buffer);
    frame.set_cursor_position((x, area.y));
}

/// Column just past the typed text, kept inside `area`
fn cursor_column(area: Rect, buffer: &str) -> u16 {
    let typed = u16::try_from(PROMPT.len() + buffer.chars().count()).unwrap_or(u16::MAX);
    area
        .x
        .saturating_add(typed)
        .min(area.right().saturating_sub(1))
}
