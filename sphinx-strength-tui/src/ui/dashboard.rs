// sphinx-strength-tui/src/ui/dashboard.rs
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

pub fn render_dashboard(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Welcome header
            Constraint::Length(8),  // Quick actions
            Constraint::Min(5),     // Recent progress
        ])
        .split(area);

    render_welcome(f, app, chunks[0]);
    render_quick_actions(f, app, chunks[1]);
    render_progress_table(f, app, chunks[2]);
}

fn render_welcome(f: &mut Frame, app: &App, area: Rect) {
    let username = app
        .service
        .auth
        .user
        .as_ref()
        .map(|user| user.username.as_str())
        .unwrap_or("athlete");

    let welcome = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Welcome back, "),
            Span::styled(
                format!("{username}!"),
                Style::default()
                    .fg(app.accent_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            "Ready to dominate your workout?",
            Style::default().fg(Color::Gray),
        )),
    ]);
    f.render_widget(welcome, area);
}

fn render_quick_actions(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .dash_actions
        .iter()
        .map(|action| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    action.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    action.subtitle,
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Quick Actions"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.dash_action_state);
}

fn render_progress_table(f: &mut Frame, app: &mut App, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Exercise").style(Style::default().fg(Color::LightBlue)),
        Cell::from("Weight (lbs)").style(Style::default().fg(Color::LightBlue)),
        Cell::from("Reps").style(Style::default().fg(Color::LightBlue)),
    ])
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .dash_progress
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.exercise),
                Cell::from(entry.weight.to_string()),
                Cell::from(entry.reps.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(6),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Recent Progress"))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    f.render_stateful_widget(table, area, &mut app.dash_progress_state);
}
