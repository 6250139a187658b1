// sphinx-strength-tui/src/ui/planner_tab.rs
use crate::app::{App, PlannerFocus};
use crate::ui::hex_color;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use sphinx_strength_lib::{date_key, formatted_month_year, CalendarDay, DayVariant, NavDirection};

pub fn render_planner_tab(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Month header
            Constraint::Length(9), // Day cards
            Constraint::Min(0),    // Exercise list
        ])
        .split(area);

    render_month_header(f, app, chunks[0]);
    render_day_cards(f, app, chunks[1]);
    render_exercise_list(f, app, chunks[2]);
}

fn render_month_header(f: &mut Frame, app: &App, area: Rect) {
    let month_year = formatted_month_year(app.planner.center_date());
    // An arrow marks the direction while a transition is in flight
    let text = match app.planner.transition_direction() {
        Some(NavDirection::Advance) => format!("{month_year} >>"),
        Some(NavDirection::Retreat) => format!("<< {month_year}"),
        None => month_year,
    };

    let header = Paragraph::new(text)
        .style(
            Style::default()
                .fg(app.header_color)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_day_cards(f: &mut Frame, app: &mut App, area: Rect) {
    // Remember the unshifted geometry for mouse hit-testing
    app.planner_cards_area = Some(area);

    // Live drag displacement slides the whole row sideways
    let offset = app.drag.translation().round() as i32;
    let shifted = shift_rect(area, offset, f.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(shifted);

    let focused = app.planner_focus == PlannerFocus::DayCards;
    for (day, column) in app.planner_days.iter().zip(columns.iter()) {
        render_day_card(f, day, *column, app.accent_color, focused);
    }
}

fn render_day_card(f: &mut Frame, day: &CalendarDay, area: Rect, accent: Color, focused: bool) {
    let variant = day.variant();

    let border_style = match variant {
        DayVariant::Selected if focused => Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD),
        DayVariant::Selected => Style::default().fg(accent),
        DayVariant::Today => Style::default().fg(accent).add_modifier(Modifier::DIM),
        DayVariant::Default => Style::default().fg(Color::DarkGray),
    };
    let number_style = match variant {
        DayVariant::Selected => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        DayVariant::Today => Style::default().fg(accent).add_modifier(Modifier::BOLD),
        DayVariant::Default => Style::default().fg(Color::Gray),
    };

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(day.day_number.to_string(), number_style)),
        Line::from(""),
    ];
    match &day.workout {
        Some(workout) if workout.is_rest_day => {
            lines.push(Line::from(Span::styled(
                workout.name.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        Some(workout) => {
            let workout_color = hex_color(&workout.color).unwrap_or(accent);
            lines.push(Line::from(Span::styled(
                workout.name.clone(),
                Style::default()
                    .fg(workout_color)
                    .add_modifier(Modifier::BOLD),
            )));
        }
        None => {
            lines.push(Line::from(Span::styled(
                "No plan",
                Style::default().fg(Color::DarkGray),
            )));
        }
    }
    if day.is_today {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "* today",
            Style::default().fg(accent),
        )));
    }

    let card = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", day.day_of_week))
                .border_style(border_style),
        )
        .alignment(Alignment::Center);
    f.render_widget(card, area);
}

fn render_exercise_list(f: &mut Frame, app: &mut App, area: Rect) {
    let title = match &app.selected_workout {
        Some(workout) => format!("{} ({})", workout.name, date_key(app.planner.selected_date())),
        None => format!("No workout ({})", date_key(app.planner.selected_date())),
    };

    let border_style = if app.planner_focus == PlannerFocus::Exercises {
        Style::default().fg(app.accent_color)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let items: Vec<ListItem> = match &app.selected_workout {
        Some(workout) if workout.is_rest_day => {
            vec![ListItem::new("Recovery day. No exercises planned.")]
        }
        Some(workout) => workout
            .exercises
            .iter()
            .map(|exercise| {
                let mut spans = vec![
                    Span::styled(
                        exercise.name.clone(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(exercise.sets.clone(), Style::default().fg(Color::Gray)),
                ];
                if let Some(muscle) = &exercise.target_muscle {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(
                        muscle.clone(),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                if exercise.is_completed {
                    spans.push(Span::styled(
                        "  [done]",
                        Style::default().fg(Color::Green),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect(),
        None => vec![ListItem::new("Nothing scheduled for this day.")],
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, &mut app.exercise_list_state);
}

// Slides `area` horizontally by `dx` cells, clamped to the frame
fn shift_rect(area: Rect, dx: i32, frame: Rect) -> Rect {
    let max_x = frame.width.saturating_sub(area.width);
    let x = (i32::from(area.x) + dx).clamp(0, i32::from(max_x));
    Rect {
        x: x as u16,
        ..area
    }
}
