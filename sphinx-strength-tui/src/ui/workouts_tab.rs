// sphinx-strength-tui/src/ui/workouts_tab.rs
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn render_workouts_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Training categories
            Constraint::Length(5), // Quick workouts
        ])
        .split(area);

    render_categories(f, app, chunks[0]);
    render_quick_workouts(f, app, chunks[1]);
}

fn render_categories(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .workout_categories
        .iter()
        .map(|category| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    category.title,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    category.subtitle,
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Training Programs"),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.workouts_list_state);
}

fn render_quick_workouts(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .quick_workouts
        .iter()
        .map(|workout| {
            Line::from(vec![
                Span::styled(workout.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(workout.duration, Style::default().fg(Color::Gray)),
                Span::raw("  "),
                Span::styled(workout.level, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Quick Workouts"),
    );
    f.render_widget(paragraph, area);
}
