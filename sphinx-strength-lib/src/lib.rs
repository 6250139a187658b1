// src/lib.rs
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::time::Duration;

// --- Declare modules ---
mod auth;
mod cache;
mod config;
mod dates;
mod gesture;
mod schedule;
mod window;

// --- Expose public types ---
pub use auth::{AuthError, AuthState, LoginCredentials, User};
pub use cache::{Span, SpanCache};
pub use config::{
    get_config_path as get_config_path_util,
    load as load_config_util,
    parse_color,
    save as save_config_util,
    Config,
    Error as ConfigError,
    StandardColor,
    Theme,
};
pub use dates::{
    add_days, date_key, formatted_month_year, is_same_day, is_today, month_name, parse_date_key,
    short_day_name, start_of_week, three_day_span, DateError,
};
pub use gesture::{apply_resistance, resolve_release, DragTracker, GestureConfig, SwipeOutcome};
pub use schedule::{
    CalendarDay, DayVariant, Exercise, WorkoutDay, WorkoutSchedule, SAMPLE_HORIZON_DAYS,
};
pub use window::{NavDirection, WindowController, NAVIGATION_STEP_DAYS};

pub struct AppService {
    pub config: Config,
    pub auth: AuthState,
    pub schedule: WorkoutSchedule,
    pub config_path: PathBuf,
}

impl AppService {
    /// Initializes the application service with the sample schedule.
    /// # Errors
    /// Returns `anyhow::Error` if config path determination or loading fails.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .context(format!("Failed to load config from {config_path:?}"))?;

        Ok(Self {
            config,
            auth: AuthState::default(),
            schedule: WorkoutSchedule::sample(),
            config_path,
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    /// The swipe thresholds as the gesture unit consumes them.
    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            swipe_threshold: self.config.swipe_threshold,
            velocity_threshold: self.config.velocity_threshold,
            boundary_resistance: self.config.boundary_resistance,
            max_drag_fraction: self.config.max_drag_fraction,
        }
    }

    /// Builds a window controller around `initial_date` with a fresh span
    /// cache sized from config.
    pub fn new_window_controller(&self, initial_date: NaiveDate) -> WindowController {
        WindowController::new(
            initial_date,
            SpanCache::new(self.config.span_cache_capacity),
            Duration::from_millis(self.config.transition_duration_ms),
        )
    }

    /// Swaps in a new schedule. Any window controller built from this
    /// service must have its span cache cleared afterwards, or stale spans
    /// will keep serving the old workout associations.
    pub fn replace_schedule(&mut self, schedule: WorkoutSchedule) {
        self.schedule = schedule;
    }

    /// Begins a mock sign-in: validates, then marks the session loading.
    /// The caller completes it with `complete_login` once its simulated
    /// latency elapses.
    /// # Errors
    /// Returns `AuthError` if a credential field is missing.
    pub fn login(&mut self, credentials: &LoginCredentials) -> Result<(), AuthError> {
        credentials.validate()?;
        self.auth.login_start();
        Ok(())
    }

    pub fn complete_login(&mut self, credentials: &LoginCredentials) {
        self.auth.login_success(credentials.mock_user());
    }

    pub fn logout(&mut self) {
        self.auth.logout();
    }
}
