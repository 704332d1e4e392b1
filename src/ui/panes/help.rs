//! Help screen

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Key legend, in display order
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("+", "Add"),
    ("-", "Subtract (as the first key: start a negative number)"),
    ("*", "Multiply"),
    ("/", "Divide"),
    ("^", "Exponentiation"),
    ("%", "Modulus"),
    (
        "r",
        "Round (optionally, enter a number to specify precision, e.g. \"3r\" rounds to 3 decimal places)",
    ),
    ("n", "Negate"),
    ("s", "Swap top two elements"),
    ("d", "Drop top element"),
    ("c", "Clear"),
    ("↑/↓", "Recall previous/next entered number"),
    ("⌫", "Delete last typed character"),
    ("h", "Help"),
    ("q", "Quit (copies the bottom element to the clipboard)"),
];

pub const HELP_FOOTER: &str = "Press any key to continue...";

/// Render the help screen over the whole frame
pub fn render_help(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(DEFAULT_THEME.secondary)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = vec![
        Line::from(Span::styled(
            "Operators:",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(HELP_ENTRIES.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {:>3}: ", key), key_style),
            Span::styled(*desc, desc_style),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        HELP_FOOTER,
        Style::default().fg(DEFAULT_THEME.comment),
    )));

    let block = Block::default()
        .title(" RPN Calculator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
