//! Stack pane rendering
//!
//! The stack is drawn bottom-aligned: the top of the stack sits on the last
//! line, right above the prompt, labelled `1`. Older values are numbered
//! upwards from there. When the stack is taller than the pane, the oldest
//! values scroll off the top.

use crate::calculator::Number;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the stack pane
pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &[Number]) {
    let block = Block::default()
        .title(format!(" Stack ({}) ", stack.len()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    if stack.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders
    let label_width = stack.len().to_string().len();
    let skip = stack.len().saturating_sub(visible_height);

    let mut items: Vec<ListItem> = Vec::with_capacity(visible_height);
    // Pad so the top of the stack lands on the last row
    let shown = stack.len() - skip;
    items.extend((shown..visible_height).map(|_| ListItem::new("")));
    items.extend(stack.iter().enumerate().skip(skip).map(|(index, value)| {
        let position = stack.len() - index;
        ListItem::new(Line::from(vec![
            Span::styled(
                format!("{:>width$}: ", position, width = label_width),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            format_value_styled(value, position == 1),
        ]))
    }));

    frame.render_widget(List::new(items).block(block), area);
}

/// A stack value, highlighted when it is the top of the stack
fn format_value_styled(value: &Number, is_top: bool) -> Span<'static> {
    let color = match value {
        Number::Real(v) if !v.is_finite() => DEFAULT_THEME.error,
        Number::Complex(_) => DEFAULT_THEME.complex,
        _ => DEFAULT_THEME.number,
    };
    let style = if is_top {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    Span::styled(value.to_string(), style)
}
