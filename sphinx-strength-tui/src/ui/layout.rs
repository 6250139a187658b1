// sphinx-strength-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, ActiveScreen, App},
    ui::{
        // Use sibling UI modules
        dashboard::render_dashboard,
        login::render_login,
        modals::render_modal,
        planner_tab::render_planner_tab,
        status_bar::render_status_bar,
        tabs::render_tabs,
        workouts_tab::render_workouts_tab,
    },
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    if app.active_screen == ActiveScreen::Login {
        // The login screen stands alone, no tabs or status bar
        render_login(f, app, size);
    } else {
        // Create main layout: Tabs on top, content below, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Status Bar
            ])
            .split(size);

        render_tabs(f, app, main_chunks[0]);
        render_main_content(f, app, main_chunks[1]);
        render_status_bar(f, app, main_chunks[2]);
    }

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

// Render the content area based on the active screen
fn render_main_content(f: &mut Frame, app: &mut App, area: Rect) {
    match app.active_screen {
        ActiveScreen::Dashboard => render_dashboard(f, app, area),
        ActiveScreen::Workouts => render_workouts_tab(f, app, area),
        ActiveScreen::Planner => render_planner_tab(f, app, area),
        ActiveScreen::Login => {} // Rendered above, without the tab chrome
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
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
