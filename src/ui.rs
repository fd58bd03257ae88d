//! Terminal rendering - a pure function of [`RenderState`]

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::messages::RenderState;
use crate::models::Item;

/// What the body of the screen shows, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Loading,
    Error(&'a str),
    Empty { docs_url: &'a str },
    Items(&'a [Item]),
}

/// Decide which sections to show for the given state.
///
/// The error is shown regardless of `loading`; the list (or the empty
/// message) only once a fetch has settled without error.
pub fn sections(state: &RenderState) -> Vec<Section<'_>> {
    let view = &state.view;
    let mut out = Vec::new();

    if view.loading {
        out.push(Section::Loading);
    }
    if let Some(error) = &view.error {
        out.push(Section::Error(error));
    }
    if view.is_empty_loaded() {
        out.push(Section::Empty {
            docs_url: &state.docs_url,
        });
    } else if view.has_items_loaded() {
        out.push(Section::Items(&view.items));
    }

    out
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + refresh button
            Constraint::Min(3),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, state, chunks[0]);
    draw_body(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_header(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(18)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Items ", Style::default().fg(Color::Cyan).bold()),
        Span::styled(state.items_url.as_str(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} v{} ", APP_NAME, APP_VERSION)),
    );
    f.render_widget(title, chunks[0]);

    f.render_widget(refresh_button(state), chunks[1]);
}

/// The refresh control: always visible, greyed out while loading
fn refresh_button(state: &RenderState) -> Paragraph<'static> {
    let (label, style) = if state.refresh_enabled() {
        ("[r] Refresh", Style::default().fg(Color::Green).bold())
    } else {
        ("Refreshing...", Style::default().fg(Color::DarkGray))
    };

    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style))
}

fn draw_body(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Records ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = sections(state);
    let mut lines: Vec<Line> = Vec::new();

    for section in &sections {
        match section {
            Section::Loading => {
                lines.push(Line::styled("Loading data...", Style::default().fg(Color::Yellow)));
            }
            Section::Error(message) => {
                lines.push(Line::styled(
                    format!("Error: {}", message),
                    Style::default().fg(Color::Red).bold(),
                ));
            }
            Section::Empty { docs_url } => {
                lines.push(Line::raw("No items yet."));
                lines.push(Line::from(vec![
                    Span::raw("Add some via the API docs: "),
                    Span::styled(
                        *docs_url,
                        Style::default().fg(Color::Cyan).underlined(),
                    ),
                ]));
            }
            Section::Items(_) => {}
        }
    }

    let list = sections.iter().find_map(|s| match s {
        Section::Items(items) => Some(*items),
        _ => None,
    });

    match list {
        Some(items) => {
            let header_height = lines.len() as u16;
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(header_height), Constraint::Min(0)])
                .split(inner);
            f.render_widget(Paragraph::new(lines), chunks[0]);
            draw_item_list(f, items, state.selected, chunks[1]);
        }
        None => {
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
        }
    }
}

fn draw_item_list(f: &mut Frame, items: &[Item], selected: usize, area: Rect) {
    let entries: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(item.name.as_str(), Style::default().bold()),
                    Span::styled(format!(" (ID: {})", item.id), Style::default().fg(Color::DarkGray)),
                ]),
                Line::raw(format!("  {}", item.description)),
            ])
        })
        .collect();

    let list = List::new(entries)
        .highlight_style(Style::default().fg(Color::Yellow))
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} items ", state.view.items.len()),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    )];

    if let Some(ms) = state.last_fetch_ms {
        spans.push(Span::raw(format!(" {}ms", ms)));
    }
    if let Some(at) = state.last_loaded_at {
        spans.push(Span::raw(format!(" | updated {}", at.format("%H:%M:%S"))));
    }
    spans.push(Span::styled(
        " | r:refresh ↑/↓:select ?:help q:quit",
        Style::default().fg(Color::DarkGray),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup = centered_rect(50, 40, area);
    let text = vec![
        Line::styled("Keys", Style::default().bold()),
        Line::raw(""),
        Line::raw("r / F5 / Ctrl+R   refresh items"),
        Line::raw("↑ ↓ / k j         move selection"),
        Line::raw("?                 toggle help"),
        Line::raw("q / Esc / Ctrl+C  quit"),
    ];

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help "),
        ),
        popup,
    );
}

/// Helper to create a centered rect using up certain percentage of the available rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
