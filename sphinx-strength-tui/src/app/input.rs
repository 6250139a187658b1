// sphinx-strength-tui/src/app/input.rs
use super::navigation::{list_next, list_previous};
use super::state::{ActiveModal, ActiveScreen, App, LoginField, PlannerFocus};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use sphinx_strength_lib::{AuthError, LoginCredentials, SwipeOutcome};
use std::time::Instant;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }
        // The login screen owns the whole keyboard until sign-in completes
        if self.active_screen == ActiveScreen::Login {
            return self.handle_login_input(key);
        }

        // Global keys
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::F(1) => self.active_screen = ActiveScreen::Dashboard,
            KeyCode::F(2) => self.active_screen = ActiveScreen::Workouts,
            KeyCode::F(3) => self.active_screen = ActiveScreen::Planner,
            KeyCode::Char('o') => self.logout(),
            _ => {
                // Delegate to screen-specific handler
                match self.active_screen {
                    ActiveScreen::Dashboard => self.handle_dashboard_input(key)?,
                    ActiveScreen::Workouts => self.handle_workouts_input(key)?,
                    ActiveScreen::Planner => self.handle_planner_input(key)?,
                    ActiveScreen::Login => {}
                }
            }
        }
        Ok(())
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?')
                ) {
                    self.active_modal = ActiveModal::None;
                }
            }
            ActiveModal::None => {}
        }
        Ok(())
    }

    // --- Login Screen Input ---
    fn handle_login_input(&mut self, key: KeyEvent) -> Result<()> {
        if self.login_pending_since.is_some() {
            // Input is ignored while the mock sign-in resolves
            return Ok(());
        }
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.login_focus = match self.login_focus {
                    LoginField::Username => LoginField::Password,
                    LoginField::Password => LoginField::Username,
                };
            }
            KeyCode::Enter => self.submit_login(),
            KeyCode::Backspace => match self.login_focus {
                LoginField::Username => {
                    self.login_username.pop();
                }
                LoginField::Password => {
                    self.login_password.pop();
                }
            },
            KeyCode::Char(c) => match self.login_focus {
                LoginField::Username => self.login_username.push(c),
                LoginField::Password => self.login_password.push(c),
            },
            _ => {}
        }
        Ok(())
    }

    fn submit_login(&mut self) {
        // Reset errors, then re-validate both fields so the user sees
        // everything that is still missing at once
        self.login_username_error = None;
        self.login_password_error = None;
        if self.login_username.trim().is_empty() {
            self.login_username_error = Some(AuthError::UsernameRequired.to_string());
        }
        if self.login_password.trim().is_empty() {
            self.login_password_error = Some(AuthError::PasswordRequired.to_string());
        }
        if self.login_username_error.is_some() || self.login_password_error.is_some() {
            return;
        }

        let credentials = LoginCredentials {
            username: self.login_username.trim().to_string(),
            password: self.login_password.clone(),
        };
        match self.service.login(&credentials) {
            Ok(()) => self.login_pending_since = Some(Instant::now()),
            Err(e) => self.set_error(format!("Sign in failed: {}", e)),
        }
    }

    pub(crate) fn logout(&mut self) {
        self.service.logout();
        self.login_username.clear();
        self.login_password.clear();
        self.login_username_error = None;
        self.login_password_error = None;
        self.login_focus = LoginField::Username;
        self.active_screen = ActiveScreen::Login;
    }

    // --- Screen-Specific Input Handling ---
    fn handle_dashboard_input(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                list_previous(&mut self.dash_action_state, self.dash_actions.len());
            }
            KeyCode::Char('j') | KeyCode::Down => {
                list_next(&mut self.dash_action_state, self.dash_actions.len());
            }
            KeyCode::Enter => {
                // Only the plans card leads anywhere; the rest are placeholders
                if self.dash_action_state.selected() == Some(0) {
                    self.active_screen = ActiveScreen::Planner;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_workouts_input(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('k') | KeyCode::Up => {
                list_previous(&mut self.workouts_list_state, self.workout_categories.len());
            }
            KeyCode::Char('j') | KeyCode::Down => {
                list_next(&mut self.workouts_list_state, self.workout_categories.len());
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_planner_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.planner_focus {
            PlannerFocus::DayCards => match key.code {
                KeyCode::Tab => self.planner_focus = PlannerFocus::Exercises,
                KeyCode::Left => self.select_adjacent_day(-1),
                KeyCode::Right => self.select_adjacent_day(1),
                KeyCode::Char('h') => {
                    self.planner.retreat();
                }
                KeyCode::Char('l') => {
                    self.planner.advance();
                }
                KeyCode::Char('t') => self.planner.jump_to(Utc::now().date_naive()),
                _ => {}
            },
            PlannerFocus::Exercises => match key.code {
                KeyCode::Tab => self.planner_focus = PlannerFocus::DayCards,
                KeyCode::Char('k') | KeyCode::Up => {
                    let len = self
                        .selected_workout
                        .as_ref()
                        .map_or(0, |workout| workout.exercises.len());
                    list_previous(&mut self.exercise_list_state, len);
                }
                KeyCode::Char('j') | KeyCode::Down => {
                    let len = self
                        .selected_workout
                        .as_ref()
                        .map_or(0, |workout| workout.exercises.len());
                    list_next(&mut self.exercise_list_state, len);
                }
                KeyCode::Char('h') | KeyCode::Left => {
                    self.planner.retreat();
                }
                KeyCode::Char('l') | KeyCode::Right => {
                    self.planner.advance();
                }
                KeyCode::Char('t') => self.planner.jump_to(Utc::now().date_naive()),
                _ => {}
            },
        }
        Ok(())
    }

    // Moves the highlighted day within the visible window; never shifts the
    // window itself (that is what h/l and swipes are for)
    fn select_adjacent_day(&mut self, delta: i64) {
        let selected = self.planner.selected_date();
        match self.planner_days.iter().position(|day| day.date == selected) {
            Some(index) => {
                let target = index as i64 + delta;
                if (0..self.planner_days.len() as i64).contains(&target) {
                    let date = self.planner_days[target as usize].date;
                    self.planner.select_date(date);
                }
            }
            // Selection fell outside the window (e.g. after a selection on a
            // previous span): snap it back to the center
            None => self.planner.select_date(self.planner.center_date()),
        }
    }

    // --- Mouse Input (planner only) ---
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.active_modal != ActiveModal::None || self.active_screen != ActiveScreen::Planner {
            return Ok(());
        }
        let Some(area) = self.planner_cards_area else {
            return Ok(());
        };
        let width = f32::from(area.width.max(1));

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if hit_test(area, mouse.column, mouse.row) {
                    self.drag.begin(Instant::now());
                    self.drag_origin_col = Some(mouse.column);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(origin) = self.drag_origin_col {
                    let raw = f32::from(mouse.column) - f32::from(origin);
                    self.drag
                        .update(raw, width, &self.gesture_config, Instant::now());
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let had_origin = self.drag_origin_col.take().is_some();
                if self.drag.is_active() && self.drag.translation().abs() < 1.0 {
                    // A press without horizontal movement is a tap
                    self.drag.cancel();
                    if had_origin && hit_test(area, mouse.column, mouse.row) {
                        self.select_day_at_column(area, mouse.column);
                    }
                } else {
                    match self.drag.release(width, &self.gesture_config) {
                        SwipeOutcome::Advance => {
                            self.planner.advance();
                        }
                        SwipeOutcome::Retreat => {
                            self.planner.retreat();
                        }
                        SwipeOutcome::Cancel => {}
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn select_day_at_column(&mut self, area: Rect, column: u16) {
        let card_width = (area.width / 3).max(1);
        let index = usize::from(column.saturating_sub(area.x) / card_width).min(2);
        if let Some(day) = self.planner_days.get(index) {
            let date = day.date;
            self.planner.select_date(date);
        }
    }
}

fn hit_test(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
