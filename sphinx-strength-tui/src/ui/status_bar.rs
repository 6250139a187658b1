// sphinx-strength-tui/src/ui/status_bar.rs
use crate::app::{state::ActiveModal, ActiveScreen, App};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
         ActiveModal::None => match app.active_screen {
             ActiveScreen::Login => " [Tab] Switch Field | [Enter] Sign In | [Esc] Quit ",
             ActiveScreen::Dashboard => " [↑↓/jk] Nav | [Enter] Open | [F1-F3] Screens | [o] Logout | [?] Help | [Q]uit ",
             ActiveScreen::Workouts => " [↑↓/jk] Nav | [F1-F3] Screens | [o] Logout | [?] Help | [Q]uit ",
             ActiveScreen::Planner => " [Tab] Focus | [←→] Day | [h/l] Span | [t] Today | [Drag] Swipe | [o] Logout | [?] Help | [Q]uit ",
         }.to_string(),
         ActiveModal::Help => " [Esc/Enter/?] Close Help ".to_string(),
     };

    let error_text = app.last_error.as_deref().unwrap_or("");

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(80), Constraint::Percentage(20)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let error_paragraph = Paragraph::new(error_text)
        .style(Style::default().bg(Color::DarkGray).fg(Color::Red))
        .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(error_paragraph, status_chunks[1]);
}
