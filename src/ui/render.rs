use crate::source::SourceItem;
use crate::ui::app::{App, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const FOCUSED_MARK: &str = "★";
const UNFOCUSED_MARK: &str = "☆";

pub fn render(frame: &mut Frame, app: &App) {
    // Main layout: Header + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);

    // Split body into left (list) and right (preview)
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(main_chunks[1]);

    match app.view {
        View::Palette => render_palette(frame, app, body_chunks[0]),
        View::Focused => render_focused(frame, app, body_chunks[0]),
    }

    render_preview(frame, app, body_chunks[1]);
    render_footer(frame, app, main_chunks[2]);

    if app.show_help {
        render_help(frame, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header_text = vec![Line::from(vec![
        Span::styled(
            "  NEWSDECK  ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} sources · {} focused",
                app.catalog().len(),
                app.focused_count()
            ),
            Style::default().fg(Color::Gray),
        ),
    ])];

    let header = Paragraph::new(header_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(header, area);
}

fn source_row<'a>(app: &App, item: &'a SourceItem, is_highlighted: bool) -> ListItem<'a> {
    let style = if is_highlighted {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mark = if app.is_focused(item.id.as_str()) {
        FOCUSED_MARK
    } else {
        UNFOCUSED_MARK
    };

    let mut spans = vec![
        Span::raw(format!("{mark} ")),
        Span::styled(
            format!("[{}] ", item.icon_key()),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(item.name.as_str()),
    ];
    if let Some(title) = &item.title {
        spans.push(Span::styled(
            format!("  {title}"),
            Style::default().fg(Color::Gray),
        ));
    }

    ListItem::new(Line::from(spans)).style(style)
}

fn render_palette(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let input = Paragraph::new(Line::from(vec![
        Span::styled("> ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.search_query.as_str(),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("▏", Style::default().fg(Color::Cyan)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("🔍 Search sources")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(input, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("📰 Sources ({})", app.results.len()))
        .border_style(Style::default().fg(Color::Cyan));

    if app.results.is_empty() {
        let empty = Paragraph::new("No results")
            .style(Style::default().fg(Color::Gray))
            .block(block);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, item)| source_row(app, item, i == app.highlighted))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(app.highlighted));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn render_focused(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focused_items();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{FOCUSED_MARK} Focused ({})", focused.len()))
        .border_style(Style::default().fg(Color::Gray));

    if focused.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from("No focused sources yet"),
            Line::from(""),
            Line::from("Press Ctrl+K or / to search"),
        ])
        .style(Style::default().fg(Color::Gray))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = focused
        .iter()
        .enumerate()
        .map(|(i, item)| source_row(app, item, i == app.focused_index))
        .collect();

    let list = List::new(items).block(block);
    let mut state = ListState::default().with_selected(Some(app.focused_index));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_preview(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.selected_item() {
        Some(item) => {
            let focused = app.is_focused(item.id.as_str());
            vec![
                Line::from(vec![Span::styled(
                    item.name.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )]),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Id: ", Style::default().fg(Color::Gray)),
                    Span::raw(item.id.to_string()),
                ]),
                Line::from(vec![
                    Span::styled("Title: ", Style::default().fg(Color::Gray)),
                    Span::raw(item.title.clone().unwrap_or_else(|| "-".to_string())),
                ]),
                Line::from(vec![
                    Span::styled("Column: ", Style::default().fg(Color::Gray)),
                    Span::raw(item.column.clone().unwrap_or_else(|| "-".to_string())),
                ]),
                Line::from(vec![
                    Span::styled("Focused: ", Style::default().fg(Color::Gray)),
                    Span::raw(if focused { "yes" } else { "no" }),
                ]),
                Line::from(""),
                Line::from("────────────────────────────────────────"),
                Line::from(""),
                Line::from(if focused {
                    "Enter / f: remove from focus"
                } else {
                    "Enter / f: add to focus"
                }),
            ]
        }
        None => vec![Line::from("No source selected")],
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("🗞️  Source")
                .border_style(Style::default().fg(Color::Gray)),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(status) = &app.status {
        let footer = Paragraph::new(status.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(footer, area);
        return;
    }

    let help_text = match app.view {
        View::Palette => "[type] Search  [↑↓] Navigate  [Enter] Toggle focus  [Esc] Close",
        View::Focused => {
            "[/ Ctrl+K] Search  [↑↓/jk] Navigate  [f] Toggle focus  [?] Help  [Q] Quit"
        }
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default());

    frame.render_widget(footer, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 60, area);
    let lines = vec![
        Line::from(Span::styled(
            "Key bindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Ctrl+K      Open / close the search palette"),
        Line::from("/           Open the search palette"),
        Line::from("Enter       Toggle focus of the highlighted source"),
        Line::from("↑ ↓ / j k   Move through the list"),
        Line::from("f           Toggle focus of the selected source"),
        Line::from("Esc         Close the palette"),
        Line::from("?           Show / hide this help"),
        Line::from("q           Quit"),
        Line::from(""),
        Line::from("Press ? or Esc to close"),
    ];

    let help = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(help, popup);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::MemoryFocusStore;
    use crate::source::{builtin_sources, Catalog};
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        let catalog = Catalog::build(&builtin_sources().unwrap());
        App::new(catalog, Box::new(MemoryFocusStore::new())).unwrap()
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_focused_view_empty() {
        let app = test_app();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("NEWSDECK"));
        assert!(text.contains("No focused sources yet"));
    }

    #[test]
    fn test_render_palette_no_results() {
        let mut app = test_app();
        app.open_palette();
        app.on_search_text_changed("qqqqqqqq");

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("No results"));
    }

    #[test]
    fn test_render_help_modal() {
        let mut app = test_app();
        app.toggle_help();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Key bindings"));
        assert!(text.contains("/           Open the search palette"));
        assert!(text.contains("?           Show / hide this help"));
    }
}
