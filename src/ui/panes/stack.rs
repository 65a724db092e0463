//! Call stack pane rendering
//!
//! Draws the frames mirrored by the [`EventLog`] from enter/exit events,
//! top of the stack first. Each frame shows its method name, virtual size
//! and caller; the top frame also shows the line it will execute next.

use crate::events::{EventLog, FrameView};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
#[derive(Default)]
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

fn frame_header(depth: usize, frame: &FrameView, is_top: bool) -> Line<'_> {
    let name_style = if is_top {
        Style::default()
            .fg(DEFAULT_THEME.function)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.muted_function)
    };

    Line::from(vec![
        Span::styled("▸ ", Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            format!("Frame {} ", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(format!("{}()", frame.name), name_style),
        Span::styled(
            format!("  {} bytes", frame.size),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ])
}

/// Render the stack pane. `next_line` is the line the top frame runs next.
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    events: &EventLog,
    next_line: Option<&str>,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" Call Stack ({}) ", events.depth()))
        .borders(Borders::ALL)
        .border_style(border_style);

    let frames = events.frames();
    let mut all_items = Vec::new();

    if frames.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let top = frames.len() - 1;
        for (depth, stack_frame) in frames.iter().enumerate().rev() {
            all_items.push(ListItem::new(frame_header(depth, stack_frame, depth == top)));

            if depth == top {
                if let Some(line) = next_line {
                    all_items.push(ListItem::new(Line::from(vec![
                        Span::styled("    next → ", Style::default().fg(DEFAULT_THEME.comment)),
                        Span::styled(line.trim().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
                    ])));
                }
            }

            if depth > 0 {
                let caller = &frames[depth - 1];
                all_items.push(ListItem::new(Line::from(vec![
                    Span::styled("  ↪ ", Style::default().fg(DEFAULT_THEME.comment)),
                    Span::styled(
                        format!("[{}] ", depth - 1),
                        Style::default().fg(DEFAULT_THEME.comment),
                    ),
                    Span::styled(
                        format!("{}()", caller.name),
                        Style::default().fg(DEFAULT_THEME.muted_function),
                    ),
                ])));
            }
        }
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // New frames appear at the top, so jump there when the stack grows
    if total_items > scroll_state.prev_item_count {
        scroll_state.offset = 0;
    } else if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }
    scroll_state.prev_item_count = total_items;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
