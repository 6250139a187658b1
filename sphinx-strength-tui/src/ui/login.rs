// sphinx-strength-tui/src/ui/login.rs
use crate::app::{App, LoginField};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_login(f: &mut Frame, app: &App, area: Rect) {
    let panel = centered_rect(60, 80, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Brand
            Constraint::Length(3), // Username input
            Constraint::Length(1), // Username error
            Constraint::Length(3), // Password input
            Constraint::Length(1), // Password error
            Constraint::Length(2), // Action line
            Constraint::Min(0),
        ])
        .split(panel);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled(
            "SPHINX STRENGTH",
            Style::default()
                .fg(app.accent_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fitness Evolution",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(brand, chunks[0]);

    render_input_field(
        f,
        chunks[1],
        "Username",
        &app.login_username,
        app.login_focus == LoginField::Username,
        app.accent_color,
    );
    render_field_error(f, chunks[2], app.login_username_error.as_deref());

    let masked = "*".repeat(app.login_password.chars().count());
    render_input_field(
        f,
        chunks[3],
        "Password",
        &masked,
        app.login_focus == LoginField::Password,
        app.accent_color,
    );
    render_field_error(f, chunks[4], app.login_password_error.as_deref());

    let action_text = if app.login_pending_since.is_some() {
        Line::from(Span::styled(
            "Signing in...",
            Style::default()
                .fg(app.accent_color)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(
            "[Enter] Sign In   [Tab] Switch Field   [Esc] Quit",
            Style::default().fg(Color::Gray),
        ))
    };
    let action = Paragraph::new(action_text).alignment(Alignment::Center);
    f.render_widget(action, chunks[5]);
}

fn render_input_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    accent: Color,
) {
    let border_style = if focused {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    // A trailing cursor marker on the focused field
    let content = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let field = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(border_style),
    );
    f.render_widget(field, area);
}

fn render_field_error(f: &mut Frame, area: Rect, error: Option<&str>) {
    if let Some(message) = error {
        let paragraph =
            Paragraph::new(message.to_string()).style(Style::default().fg(Color::Red));
        f.render_widget(paragraph, area);
    }
}
