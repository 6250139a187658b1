// sphinx-strength-tui/src/app/state.rs
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{ListState, TableState};
use sphinx_strength_lib::{
    parse_color, AppService, CalendarDay, DragTracker, GestureConfig, StandardColor, Theme,
    WindowController, WorkoutDay,
};
use std::time::Instant;

/// Simulated sign-in latency of the mock backend, in milliseconds.
pub const MOCK_LOGIN_DELAY_MS: u64 = 1000;

// Represents the active screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveScreen {
    Login,
    Dashboard,
    Workouts,
    Planner,
}

// Represents which pane has focus on the planner screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlannerFocus {
    DayCards,
    Exercises,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    Help,
}

pub struct QuickAction {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct ProgressEntry {
    pub exercise: &'static str,
    pub weight: u32,
    pub reps: u32,
}

pub struct WorkoutCategory {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub struct QuickWorkout {
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub active_screen: ActiveScreen,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub last_error: Option<String>, // For status bar errors
    pub error_clear_time: Option<Instant>,

    // Resolved theme colors
    pub header_color: Color,
    pub accent_color: Color,

    // === Login Screen State ===
    pub login_username: String,
    pub login_password: String,
    pub login_focus: LoginField,
    pub login_username_error: Option<String>,
    pub login_password_error: Option<String>,
    pub login_pending_since: Option<Instant>,

    // === Dashboard Screen State ===
    pub dash_actions: Vec<QuickAction>,
    pub dash_action_state: ListState,
    pub dash_progress: Vec<ProgressEntry>,
    pub dash_progress_state: TableState,

    // === Workouts Screen State ===
    pub workout_categories: Vec<WorkoutCategory>,
    pub workouts_list_state: ListState,
    pub quick_workouts: Vec<QuickWorkout>,

    // === Planner Screen State ===
    pub planner: WindowController,
    pub planner_focus: PlannerFocus,
    pub planner_days: Vec<CalendarDay>,
    pub selected_workout: Option<WorkoutDay>,
    pub exercise_list_state: ListState,
    pub gesture_config: GestureConfig,
    pub drag: DragTracker,
    pub drag_origin_col: Option<u16>,
    // Set during render so mouse events can be hit-tested against the
    // actual card geometry
    pub planner_cards_area: Option<Rect>,
}

impl App {
    pub fn new(service: AppService) -> Self {
        let today = chrono::Utc::now().date_naive();
        let planner = service.new_window_controller(today);
        let gesture_config = service.gesture_config();
        let (header_color, accent_color, theme_error) = resolve_theme(&service.config.theme);

        let mut app = App {
            active_screen: ActiveScreen::Login,
            should_quit: false,
            active_modal: ActiveModal::None,
            last_error: None,
            error_clear_time: None,
            header_color,
            accent_color,
            // --- Login Screen State ---
            login_username: String::new(),
            login_password: String::new(),
            login_focus: LoginField::Username,
            login_username_error: None,
            login_password_error: None,
            login_pending_since: None,
            // --- Dashboard Screen State ---
            dash_actions: quick_actions(),
            dash_action_state: ListState::default(),
            dash_progress: progress_entries(),
            dash_progress_state: TableState::default(),
            // --- Workouts Screen State ---
            workout_categories: workout_categories(),
            workouts_list_state: ListState::default(),
            quick_workouts: quick_workouts(),
            // --- Planner Screen State ---
            planner,
            planner_focus: PlannerFocus::DayCards,
            planner_days: Vec::new(),
            selected_workout: None,
            exercise_list_state: ListState::default(),
            gesture_config,
            drag: DragTracker::new(),
            drag_origin_col: None,
            planner_cards_area: None,
            // --- General State ---
            service,
        };
        app.dash_action_state.select(Some(0));
        app.workouts_list_state.select(Some(0));
        app.exercise_list_state.select(Some(0));
        if let Some(message) = theme_error {
            app.set_error(message);
        }
        app.refresh_planner_data();
        app
    }

    // Method to set status bar errors
    pub fn set_error(&mut self, msg: String) {
        self.last_error = Some(msg);
        self.error_clear_time =
            Some(Instant::now() + chrono::Duration::seconds(5).to_std().unwrap());
    }

    // Method to clear expired error messages (called each refresh)
    pub(crate) fn clear_expired_error(&mut self) {
        if let Some(clear_time) = self.error_clear_time {
            if Instant::now() >= clear_time {
                self.last_error = None;
                self.error_clear_time = None;
            }
        }
    }
}

fn resolve_theme(theme: &Theme) -> (Color, Color, Option<String>) {
    let mut error = None;
    let header = match parse_color(&theme.header_color) {
        Ok(color) => standard_to_color(color),
        Err(e) => {
            error = Some(e.to_string());
            Color::White
        }
    };
    let accent = match parse_color(&theme.accent_color) {
        Ok(color) => standard_to_color(color),
        Err(e) => {
            error = Some(e.to_string());
            Color::LightYellow
        }
    };
    (header, accent, error)
}

// Ratatui's base colors correspond to the terminal's dark variants, so the
// bright names map to the Light* colors.
fn standard_to_color(color: StandardColor) -> Color {
    match color {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::LightRed,
        StandardColor::Green => Color::LightGreen,
        StandardColor::Yellow => Color::LightYellow,
        StandardColor::Blue => Color::LightBlue,
        StandardColor::Magenta => Color::LightMagenta,
        StandardColor::Cyan => Color::LightCyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::DarkRed => Color::Red,
        StandardColor::DarkGreen => Color::Green,
        StandardColor::DarkYellow => Color::Yellow,
        StandardColor::DarkBlue => Color::Blue,
        StandardColor::DarkMagenta => Color::Magenta,
        StandardColor::DarkCyan => Color::Cyan,
        StandardColor::Grey => Color::Gray,
    }
}

fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            title: "Exercise Plans",
            subtitle: "Create and manage your workout routines",
        },
        QuickAction {
            title: "Progress Tracking",
            subtitle: "Monitor your strength gains and goals",
        },
        QuickAction {
            title: "Nutrition",
            subtitle: "Track your macros and meal plans",
        },
    ]
}

fn progress_entries() -> Vec<ProgressEntry> {
    vec![
        ProgressEntry {
            exercise: "Bench Press",
            weight: 185,
            reps: 8,
        },
        ProgressEntry {
            exercise: "Deadlift",
            weight: 275,
            reps: 5,
        },
        ProgressEntry {
            exercise: "Squat",
            weight: 225,
            reps: 10,
        },
    ]
}

fn workout_categories() -> Vec<WorkoutCategory> {
    vec![
        WorkoutCategory {
            title: "Strength Training",
            subtitle: "Build muscle and increase power",
        },
        WorkoutCategory {
            title: "Cardio Blast",
            subtitle: "Burn calories and improve endurance",
        },
        WorkoutCategory {
            title: "Flexibility",
            subtitle: "Improve mobility and recovery",
        },
        WorkoutCategory {
            title: "HIIT",
            subtitle: "High-intensity interval training",
        },
    ]
}

fn quick_workouts() -> Vec<QuickWorkout> {
    vec![
        QuickWorkout {
            title: "Push-up Challenge",
            duration: "5 minutes",
            level: "Beginner",
        },
        QuickWorkout {
            title: "Morning Stretch",
            duration: "10 minutes",
            level: "All levels",
        },
        QuickWorkout {
            title: "Cardio Blast",
            duration: "15 minutes",
            level: "Intermediate",
        },
    ]
}
