// sphinx-strength-tui/src/app/data.rs
use super::state::{ActiveScreen, App, MOCK_LOGIN_DELAY_MS};
use sphinx_strength_lib::LoginCredentials;
use std::time::{Duration, Instant};

// Make refresh logic methods on App
impl App {
    // Fetch or update data based on the active screen
    pub fn refresh_data_for_active_screen(&mut self) {
        self.clear_expired_error(); // Check and clear status bar error first

        match self.active_screen {
            ActiveScreen::Login => self.refresh_login_data(),
            ActiveScreen::Planner => self.refresh_planner_data(),
            // Dashboard and catalog data is static for the session
            ActiveScreen::Dashboard | ActiveScreen::Workouts => {}
        }
    }

    // --- Login Screen Data ---
    fn refresh_login_data(&mut self) {
        let Some(started) = self.login_pending_since else {
            return;
        };
        if started.elapsed() < Duration::from_millis(MOCK_LOGIN_DELAY_MS) {
            return;
        }

        // The mock backend has "responded": promote the pending credentials
        let credentials = LoginCredentials {
            username: self.login_username.trim().to_string(),
            password: self.login_password.clone(),
        };
        self.service.complete_login(&credentials);
        self.login_pending_since = None;
        self.login_password.clear();
        self.active_screen = ActiveScreen::Dashboard;
    }

    // --- Planner Screen Data ---
    pub(crate) fn refresh_planner_data(&mut self) {
        if self.planner.tick(Instant::now()) {
            // A navigation just committed; the selection moved with it
            self.exercise_list_state.select(Some(0));
        }
        // Gesture input stays off for as long as a transition is in flight
        self.drag.set_disabled(self.planner.is_navigating());

        self.planner_days = self.planner.window(&self.service.schedule).to_vec();
        self.selected_workout = self
            .planner
            .selected_workout(&self.service.schedule)
            .cloned();

        // Clamp the exercise selection to the selected day's list
        let exercise_count = self
            .selected_workout
            .as_ref()
            .map_or(0, |workout| workout.exercises.len());
        if self.exercise_list_state.selected().unwrap_or(0) >= exercise_count {
            self.exercise_list_state.select(if exercise_count == 0 {
                None
            } else {
                Some(exercise_count - 1)
            });
        } else if self.exercise_list_state.selected().is_none() && exercise_count > 0 {
            self.exercise_list_state.select(Some(0));
        }
    }
}
