//! Output pane rendering

use crate::events::EventLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Split "name output : text" so the printed text can be highlighted
fn split_output(message: &str) -> Option<(&str, &str)> {
    let idx = message.find(" output : ")?;
    Some((&message[..idx], &message[idx + " output : ".len()..]))
}

fn message_line(message: &str) -> Line<'_> {
    match split_output(message) {
        Some((name, text)) => Line::from(vec![
            Span::styled(name, Style::default().fg(DEFAULT_THEME.function)),
            Span::styled(" ▶ ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                text,
                Style::default()
                    .fg(DEFAULT_THEME.output)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        None => Line::from(Span::styled(message, Style::default().fg(DEFAULT_THEME.fg))),
    }
}

/// Render the status message history
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    events: &EventLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let messages = events.status_messages();

    if messages.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = messages.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = messages
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|message| ListItem::new(message_line(message)))
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_output() {
        assert_eq!(split_output("a output : hi"), Some(("a", "hi")));
        assert_eq!(split_output("a : x = 1"), None);
    }
}
