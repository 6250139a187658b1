// sphinx-strength-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App},
    ui::layout::centered_rect, // Use centered_rect from layout
};
use ratatui::{
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame, app: &App) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::default().fg(app.accent_color));

    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area); // Clear the background underneath

    let text = vec![
        Line::from("--- Global ---"),
        Line::from(" F1 / F2 / F3: Dashboard / Workouts / Planner"),
        Line::from(" o: Log out"),
        Line::from(" ?: Toggle this help"),
        Line::from(" q: Quit"),
        Line::from(""),
        Line::from("--- Dashboard ---"),
        Line::from(" j / k or arrows: Move between quick actions"),
        Line::from(" Enter: Open the highlighted action"),
        Line::from(""),
        Line::from("--- Planner ---"),
        Line::from(" Tab: Switch focus between day cards and exercises"),
        Line::from(" Left / Right: Highlight a day in the visible window"),
        Line::from(" h / l: Slide to the previous / next 3-day window"),
        Line::from(" t: Jump back to today"),
        Line::from(" Mouse: Click a day to select it, drag sideways to swipe"),
    ];

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}
