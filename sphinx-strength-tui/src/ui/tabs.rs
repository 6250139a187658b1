// sphinx-strength-tui/src/ui/tabs.rs
use crate::app::{ActiveScreen, App};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles = vec![
        Line::from("Dashboard [F1]"),
        Line::from("Workouts [F2]"),
        Line::from("Planner [F3]"),
    ];
    let selected = match app.active_screen {
        ActiveScreen::Dashboard | ActiveScreen::Login => 0,
        ActiveScreen::Workouts => 1,
        ActiveScreen::Planner => 2,
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sphinx Strength ")
                .title_style(Style::default().fg(app.header_color).add_modifier(Modifier::BOLD)),
        )
        .select(selected)
        .highlight_style(
            Style::default()
                .fg(app.accent_color)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(tabs, area);
}
