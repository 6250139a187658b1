use anyhow::Result;
use chrono::{NaiveDate, TimeZone, Utc};
use sphinx_strength_lib::{
    add_days, apply_resistance, date_key, formatted_month_year, is_same_day, month_name,
    parse_date_key, resolve_release, short_day_name, start_of_week, three_day_span, AppService,
    AuthError, AuthState, Config, ConfigError, DateError, DayVariant, DragTracker, GestureConfig,
    LoginCredentials, SpanCache, SwipeOutcome, WindowController, WorkoutSchedule,
    NAVIGATION_STEP_DAYS,
};
use std::cell::Cell;
use std::rc::Rc;
use std::thread;
use std::time::{Duration as StdDuration, Instant};

// Helper function to create a test service with an in-memory schedule
fn create_test_service() -> AppService {
    AppService {
        config: Config::default(),
        auth: AuthState::default(),
        schedule: WorkoutSchedule::sample(),
        config_path: "test_config.toml".into(),
    }
}

fn create_test_controller(
    initial: NaiveDate,
    capacity: usize,
    transition_ms: u64,
) -> WindowController {
    WindowController::new(
        initial,
        SpanCache::new(capacity),
        StdDuration::from_millis(transition_ms),
    )
}

fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 8).unwrap() // A Friday
}

// --- Date utilities ---

#[test]
fn test_date_key_stable_and_time_of_day_independent() -> Result<()> {
    let d = sample_date();
    assert_eq!(date_key(d), "2025-08-08");
    assert_eq!(date_key(d), date_key(d)); // Stable under repeated calls

    // Two instants on the same calendar day collapse to the same key
    let morning = Utc.with_ymd_and_hms(2025, 8, 8, 0, 1, 0).unwrap();
    let night = Utc.with_ymd_and_hms(2025, 8, 8, 23, 59, 0).unwrap();
    assert_eq!(date_key(morning.date_naive()), date_key(night.date_naive()));

    // Round trip through the validated parser
    assert_eq!(parse_date_key("2025-08-08")?, d);
    Ok(())
}

#[test]
fn test_parse_date_key_rejects_invalid_input() {
    for bad in ["", "not-a-date", "2025-13-40", "08/08/2025", "2025-02-30"] {
        let result = parse_date_key(bad);
        assert!(
            matches!(result, Err(DateError::InvalidKey(_))),
            "expected InvalidKey for {bad:?}, got {result:?}"
        );
    }
}

#[test]
fn test_day_and_month_names() {
    let d = sample_date();
    assert_eq!(short_day_name(d), "Fri");
    assert_eq!(month_name(d), "August");
    assert_eq!(formatted_month_year(d), "August 2025");

    let sunday = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
    assert_eq!(short_day_name(sunday), "Sun");
    assert_eq!(month_name(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()), "January");
    assert_eq!(month_name(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()), "December");
}

#[test]
fn test_add_days_and_start_of_week() {
    let d = sample_date();
    assert_eq!(add_days(d, 3), NaiveDate::from_ymd_opt(2025, 8, 11).unwrap());
    assert_eq!(add_days(d, -3), NaiveDate::from_ymd_opt(2025, 8, 5).unwrap());

    // Month and year boundaries
    let end_of_month = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
    assert_eq!(add_days(end_of_month, 1), NaiveDate::from_ymd_opt(2025, 9, 1).unwrap());
    let new_year_eve = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    assert_eq!(add_days(new_year_eve, 1), NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

    // Monday of the containing week, including from a Sunday
    assert_eq!(start_of_week(d), NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
    let sunday = NaiveDate::from_ymd_opt(2025, 8, 10).unwrap();
    assert_eq!(start_of_week(sunday), NaiveDate::from_ymd_opt(2025, 8, 4).unwrap());
}

#[test]
fn test_three_day_span_offsets_and_selection() {
    let center = sample_date();
    let schedule = WorkoutSchedule::new();

    let span = three_day_span(center, center, &schedule);
    assert_eq!(span.len(), 3);
    assert_eq!(span[0].date, add_days(center, -1));
    assert_eq!(span[1].date, center);
    assert_eq!(span[2].date, add_days(center, 1));
    assert_eq!(span.iter().filter(|day| day.is_selected).count(), 1);
    assert!(span[1].is_selected);

    // Selection at the window edge
    let span = three_day_span(center, add_days(center, -1), &schedule);
    assert!(span[0].is_selected);
    assert_eq!(span.iter().filter(|day| day.is_selected).count(), 1);

    // Selection outside the window: zero selected entries
    let span = three_day_span(center, add_days(center, 10), &schedule);
    assert_eq!(span.iter().filter(|day| day.is_selected).count(), 0);

    // Day metadata is derived from each entry's own date
    assert_eq!(span[0].day_of_week, "Thu");
    assert_eq!(span[0].day_number, 7);
    assert_eq!(span[2].day_number, 9);
}

#[test]
fn test_three_day_span_workout_lookup() {
    let center = sample_date();
    let schedule = WorkoutSchedule::sample_around(center);

    let span = three_day_span(center, center, &schedule);
    for day in &span {
        let workout = day.workout.as_ref().expect("inside the sample horizon");
        assert_eq!(workout.id, format!("workout-{}", date_key(day.date)));
    }

    // Outside the sample horizon there is nothing to attach
    let far_center = add_days(center, 100);
    let span = three_day_span(far_center, far_center, &schedule);
    assert!(span.iter().all(|day| day.workout.is_none()));
}

#[test]
fn test_day_variant_resolution() {
    let center = sample_date();
    let span = three_day_span(center, center, &WorkoutSchedule::new());
    assert_eq!(span[1].variant(), DayVariant::Selected);
    assert_eq!(span[0].variant(), DayVariant::Default);

    // Selected wins over today
    let today = Utc::now().date_naive();
    let span = three_day_span(today, today, &WorkoutSchedule::new());
    assert!(span[1].is_today);
    assert_eq!(span[1].variant(), DayVariant::Selected);
    // The neighbor of today is neither
    assert_eq!(span[0].variant(), DayVariant::Default);
}

// --- Span cache ---

#[test]
fn test_span_cache_round_trip_without_recompute() {
    let center = sample_date();
    let schedule = WorkoutSchedule::sample_around(center);
    let mut cache = SpanCache::new(50);
    let computes = Cell::new(0usize);

    let first = cache
        .get_or_compute(center, center, || {
            computes.set(computes.get() + 1);
            three_day_span(center, center, &schedule)
        })
        .clone();
    assert_eq!(computes.get(), 1);

    let second = cache
        .get_or_compute(center, center, || {
            computes.set(computes.get() + 1);
            three_day_span(center, center, &schedule)
        })
        .clone();
    assert_eq!(computes.get(), 1); // Served from cache, compute not invoked
    assert_eq!(first, second);
}

#[test]
fn test_span_cache_distinct_keys_per_selection() {
    let center = sample_date();
    let schedule = WorkoutSchedule::new();
    let mut cache = SpanCache::new(50);

    cache.get_or_compute(center, center, || three_day_span(center, center, &schedule));
    let other = add_days(center, 1);
    cache.get_or_compute(center, other, || three_day_span(center, other, &schedule));

    assert_eq!(cache.len(), 2);
    assert!(cache.contains(center, center));
    assert!(cache.contains(center, other));
}

#[test]
fn test_span_cache_fifo_eviction() {
    let base = sample_date();
    let schedule = WorkoutSchedule::new();
    let mut cache = SpanCache::new(50);

    // Insert 51 distinct (center, selected) pairs
    for i in 0..51 {
        let center = add_days(base, i);
        cache.get_or_compute(center, base, || three_day_span(center, base, &schedule));
    }

    assert_eq!(cache.len(), 50);
    assert!(!cache.contains(base, base)); // The very first insert was evicted
    for i in 1..51 {
        assert!(cache.contains(add_days(base, i), base), "entry {i} should remain");
    }
}

#[test]
fn test_span_cache_eviction_ignores_access_recency() {
    let base = sample_date();
    let schedule = WorkoutSchedule::new();
    let mut cache = SpanCache::new(50);

    for i in 0..51 {
        let center = add_days(base, i);
        cache.get_or_compute(center, base, || three_day_span(center, base, &schedule));
    }

    // Touch the current oldest entry, then insert one more: the touched
    // entry is still the one evicted (strict insertion order)
    let oldest = add_days(base, 1);
    cache.get_or_compute(oldest, base, || three_day_span(oldest, base, &schedule));
    let newest = add_days(base, 51);
    cache.get_or_compute(newest, base, || three_day_span(newest, base, &schedule));

    assert!(!cache.contains(oldest, base));
    assert!(cache.contains(newest, base));
}

#[test]
fn test_span_cache_clear() {
    let center = sample_date();
    let schedule = WorkoutSchedule::new();
    let mut cache = SpanCache::new(50);

    cache.get_or_compute(center, center, || three_day_span(center, center, &schedule));
    assert!(!cache.is_empty());

    cache.clear();
    assert!(cache.is_empty());
    assert!(!cache.contains(center, center));
}

// --- Window controller ---

#[test]
fn test_select_date_fires_callback_and_keeps_center() {
    let start = sample_date();
    let mut controller = create_test_controller(start, 50, 0);

    let selections: Rc<Cell<Option<NaiveDate>>> = Rc::new(Cell::new(None));
    let seen = Rc::clone(&selections);
    controller.set_on_select(move |date| seen.set(Some(date)));

    let picked = add_days(start, 1);
    controller.select_date(picked);

    assert_eq!(controller.selected_date(), picked);
    assert_eq!(controller.center_date(), start); // selection never moves the window
    assert_eq!(selections.get(), Some(picked));
}

#[test]
fn test_navigation_shifts_by_exactly_three_days() {
    let start = sample_date();
    let mut controller = create_test_controller(start, 50, 0);

    assert!(controller.advance());
    assert!(controller.tick(Instant::now()));
    assert_eq!(controller.center_date(), add_days(start, NAVIGATION_STEP_DAYS));
    assert_eq!(controller.selected_date(), controller.center_date());

    assert!(controller.retreat());
    assert!(controller.tick(Instant::now()));
    assert_eq!(controller.center_date(), start);
    assert_eq!(controller.selected_date(), start);
}

#[test]
fn test_overlapping_navigation_is_dropped() {
    let start = sample_date();
    let mut controller = create_test_controller(start, 50, 50);

    assert!(controller.advance());
    assert!(controller.is_navigating());
    assert!(controller.progress(Instant::now()).is_some());
    // Second command while the transition is in flight: dropped, not queued
    assert!(!controller.advance());
    assert!(!controller.retreat());

    // Before the duration elapses nothing commits
    assert!(!controller.tick(Instant::now()));
    assert_eq!(controller.center_date(), start);

    thread::sleep(StdDuration::from_millis(60));
    assert!(controller.tick(Instant::now()));
    assert!(!controller.is_navigating());
    assert!(controller.progress(Instant::now()).is_none());

    // One net 3-day shift, not two
    assert_eq!(controller.center_date(), add_days(start, NAVIGATION_STEP_DAYS));
}

#[test]
fn test_navigation_commit_does_not_fire_select_callback() {
    let start = sample_date();
    let mut controller = create_test_controller(start, 50, 0);

    let fired = Rc::new(Cell::new(0usize));
    let count = Rc::clone(&fired);
    controller.set_on_select(move |_| count.set(count.get() + 1));

    controller.advance();
    controller.tick(Instant::now());
    assert_eq!(fired.get(), 0);
    assert_eq!(controller.selected_date(), add_days(start, 3));
}

#[test]
fn test_window_is_cached_and_centered() {
    let start = sample_date();
    let schedule = WorkoutSchedule::sample_around(start);
    let mut controller = create_test_controller(start, 50, 0);

    let span = controller.window(&schedule).clone();
    assert_eq!(span[1].date, start);
    assert!(span[1].is_selected);
    assert_eq!(controller.cached_spans(), 1);

    // Same state, same cached entry
    controller.window(&schedule);
    assert_eq!(controller.cached_spans(), 1);

    controller.select_date(add_days(start, 1));
    controller.window(&schedule);
    assert_eq!(controller.cached_spans(), 2);
}

#[test]
fn test_selected_workout_follows_selection() {
    let start = sample_date();
    let schedule = WorkoutSchedule::sample_around(start);
    let mut controller = create_test_controller(start, 50, 0);

    let at_center = controller.selected_workout(&schedule).cloned();
    assert!(at_center.is_some());

    // A rest-day slot of the rotation (|offset| % 6 == 5)
    controller.select_date(add_days(start, 5));
    let at_rest = controller
        .selected_workout(&schedule)
        .expect("rest day is still scheduled");
    assert!(at_rest.is_rest_day);
    assert!(at_rest.exercises.is_empty());

    // Outside the horizon there is no workout
    controller.jump_to(add_days(start, 100));
    assert!(controller.selected_workout(&schedule).is_none());
}

#[test]
fn test_jump_to_recenters_without_touching_cache() {
    let start = sample_date();
    let schedule = WorkoutSchedule::new();
    let mut controller = create_test_controller(start, 50, 0);

    controller.window(&schedule);
    assert_eq!(controller.cached_spans(), 1);

    let target = add_days(start, 30);
    controller.jump_to(target);
    assert_eq!(controller.center_date(), target);
    assert_eq!(controller.selected_date(), target);
    assert_eq!(controller.cached_spans(), 1); // untouched

    // Dropped while navigating, like advance/retreat
    let mut busy = create_test_controller(start, 50, 50);
    busy.advance();
    busy.jump_to(target);
    assert_eq!(busy.center_date(), start);
}

#[test]
fn test_schedule_replacement_requires_cache_clear() {
    let start = sample_date();
    let mut service = create_test_service();
    service.schedule = WorkoutSchedule::sample_around(start);
    let mut controller = service.new_window_controller(start);

    let before = controller.window(&service.schedule).clone();
    assert!(before[1].workout.is_some());

    // Swap in an empty schedule: the cached span still serves the old
    // association until the cache is cleared
    service.replace_schedule(WorkoutSchedule::new());
    let stale = controller.window(&service.schedule).clone();
    assert!(stale[1].workout.is_some());

    controller.clear_cache();
    let fresh = controller.window(&service.schedule).clone();
    assert!(fresh[1].workout.is_none());
}

// --- Gesture adapter ---

#[test]
fn test_resolve_release_outcomes() {
    let config = GestureConfig::default();
    let width = 400.0;

    // Distance beyond the 25% threshold commits; sign picks the direction
    assert_eq!(resolve_release(0.30 * width, 0.0, width, &config), SwipeOutcome::Retreat);
    assert_eq!(resolve_release(-0.30 * width, 0.0, width, &config), SwipeOutcome::Advance);

    // Below both thresholds: cancelled
    assert_eq!(resolve_release(0.10 * width, 0.0, width, &config), SwipeOutcome::Cancel);
    assert_eq!(resolve_release(-0.10 * width, 499.0, width, &config), SwipeOutcome::Cancel);

    // Velocity alone commits, direction still from the translation sign
    assert_eq!(resolve_release(0.05 * width, 600.0, width, &config), SwipeOutcome::Retreat);
    assert_eq!(resolve_release(-0.05 * width, 600.0, width, &config), SwipeOutcome::Advance);
    assert_eq!(resolve_release(-0.05 * width, -600.0, width, &config), SwipeOutcome::Advance);
}

#[test]
fn test_apply_resistance_curve() {
    let config = GestureConfig::default();
    let width = 400.0;
    let boundary = width * config.max_drag_fraction; // 320

    // Identity inside the boundary
    assert_eq!(apply_resistance(100.0, width, &config), 100.0);
    assert_eq!(apply_resistance(-100.0, width, &config), -100.0);
    assert_eq!(apply_resistance(boundary, width, &config), boundary);

    // Sub-linear past it, symmetric in sign
    let stretched = apply_resistance(360.0, width, &config);
    assert!((stretched - 332.0).abs() < 1e-3);
    assert!(stretched < 360.0);
    let negative = apply_resistance(-360.0, width, &config);
    assert!((negative + 332.0).abs() < 1e-3);
}

#[test]
fn test_drag_commit_by_distance() {
    let config = GestureConfig::default();
    let width = 400.0;
    let mut drag = DragTracker::new();
    let t0 = Instant::now();

    drag.begin(t0);
    // Slow drag: 120 px over 400 ms is 300 px/s, below the velocity threshold,
    // so the commit is decided purely by distance
    drag.update(0.30 * width, width, &config, t0 + StdDuration::from_millis(400));
    let outcome = drag.release(width, &config);
    assert_eq!(outcome, SwipeOutcome::Retreat);
    assert_eq!(drag.translation(), 0.0); // displacement always returns to zero
}

#[test]
fn test_drag_cancel_springs_back() {
    let config = GestureConfig::default();
    let width = 400.0;
    let mut drag = DragTracker::new();
    let t0 = Instant::now();

    drag.begin(t0);
    drag.update(0.10 * width, width, &config, t0 + StdDuration::from_millis(200));
    assert_eq!(drag.release(width, &config), SwipeOutcome::Cancel);
    assert_eq!(drag.translation(), 0.0);
    assert!(!drag.is_active());
}

#[test]
fn test_drag_commit_by_velocity() {
    let config = GestureConfig::default();
    let width = 400.0;
    let mut drag = DragTracker::new();
    let t0 = Instant::now();

    drag.begin(t0);
    // 40 px in 10 ms = 4000 px/s, far above the 500 px/s threshold
    drag.update(-40.0, width, &config, t0 + StdDuration::from_millis(10));
    assert_eq!(drag.release(width, &config), SwipeOutcome::Advance);
}

#[test]
fn test_drag_tracker_disabled_ignores_input() {
    let config = GestureConfig::default();
    let width = 400.0;
    let mut drag = DragTracker::new();
    let t0 = Instant::now();

    drag.set_disabled(true);
    drag.begin(t0);
    drag.update(0.50 * width, width, &config, t0 + StdDuration::from_millis(10));
    assert!(!drag.is_active());
    assert_eq!(drag.translation(), 0.0);
    assert_eq!(drag.release(width, &config), SwipeOutcome::Cancel);

    // Disabling mid-drag discards the drag in progress
    drag.set_disabled(false);
    drag.begin(t0);
    drag.update(0.50 * width, width, &config, t0 + StdDuration::from_millis(10));
    drag.set_disabled(true);
    assert_eq!(drag.translation(), 0.0);
    assert!(!drag.is_active());
}

// --- Sample schedule ---

#[test]
fn test_sample_schedule_covers_horizon() {
    let anchor = sample_date();
    let schedule = WorkoutSchedule::sample_around(anchor);

    for offset in -14i64..=14 {
        let date = add_days(anchor, offset);
        let workout = schedule
            .workout_for(date)
            .unwrap_or_else(|| panic!("no workout at offset {offset}"));
        // Exercises are empty exactly on rest days
        assert_eq!(workout.exercises.is_empty(), workout.is_rest_day);
        assert_eq!(workout.id, format!("workout-{}", date_key(date)));
    }

    assert!(schedule.workout_for(add_days(anchor, 15)).is_none());
    assert!(schedule.workout_for(add_days(anchor, -15)).is_none());
    assert_eq!(schedule.len(), 29);
}

#[test]
fn test_sample_schedule_rotation_is_symmetric() {
    let anchor = sample_date();
    let schedule = WorkoutSchedule::sample_around(anchor);

    // Slots are assigned by absolute offset, so the rotation mirrors
    for offset in 1i64..=14 {
        let forward = schedule.workout_for(add_days(anchor, offset)).unwrap();
        let backward = schedule.workout_for(add_days(anchor, -offset)).unwrap();
        assert_eq!(forward.name, backward.name);
    }

    assert_eq!(schedule.workout_for(anchor).unwrap().name, "Upper Body");
    let rest = schedule.workout_for(add_days(anchor, 5)).unwrap();
    assert!(rest.is_rest_day);
    assert_eq!(rest.name, "Optional Rest");
}

// --- Mock auth ---

#[test]
fn test_auth_state_transitions() {
    let mut auth = AuthState::default();
    assert!(!auth.is_authenticated);
    assert!(auth.user.is_none());

    auth.login_start();
    assert!(auth.is_loading);
    assert!(!auth.is_authenticated);

    let creds = LoginCredentials {
        username: "ada".to_string(),
        password: "hunter2".to_string(),
    };
    auth.login_success(creds.mock_user());
    assert!(auth.is_authenticated);
    assert!(!auth.is_loading);
    let user = auth.user.as_ref().unwrap();
    assert_eq!(user.id, "1");
    assert_eq!(user.username, "ada");
    assert_eq!(user.email.as_deref(), Some("ada@example.com"));

    auth.logout();
    assert!(!auth.is_authenticated);
    assert!(auth.user.is_none());

    auth.login_start();
    auth.login_failure();
    assert!(!auth.is_authenticated);
    assert!(!auth.is_loading);
    assert!(auth.user.is_none());
}

#[test]
fn test_credential_validation() {
    let blank_user = LoginCredentials {
        username: "   ".to_string(),
        password: "secret".to_string(),
    };
    assert_eq!(blank_user.validate(), Err(AuthError::UsernameRequired));

    let blank_pass = LoginCredentials {
        username: "ada".to_string(),
        password: String::new(),
    };
    assert_eq!(blank_pass.validate(), Err(AuthError::PasswordRequired));

    let ok = LoginCredentials {
        username: "ada".to_string(),
        password: "hunter2".to_string(),
    };
    assert!(ok.validate().is_ok());
}

#[test]
fn test_service_login_flow() {
    let mut service = create_test_service();

    let bad = LoginCredentials::default();
    assert!(service.login(&bad).is_err());
    assert!(!service.auth.is_loading);

    let creds = LoginCredentials {
        username: "ada".to_string(),
        password: "hunter2".to_string(),
    };
    service.login(&creds).unwrap();
    assert!(service.auth.is_loading);
    assert!(!service.auth.is_authenticated);

    service.complete_login(&creds);
    assert!(service.auth.is_authenticated);
    assert_eq!(service.auth.user.as_ref().unwrap().username, "ada");

    service.logout();
    assert!(!service.auth.is_authenticated);
}

// --- Config ---

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.transition_duration_ms, 300);
    assert_eq!(config.swipe_threshold, 0.25);
    assert_eq!(config.velocity_threshold, 500.0);
    assert_eq!(config.boundary_resistance, 0.3);
    assert_eq!(config.max_drag_fraction, 0.8);
    assert_eq!(config.span_cache_capacity, 50);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_toml_round_trip_with_defaults() -> Result<()> {
    // Missing fields fall back to defaults
    let config: Config = toml::from_str("")?;
    assert_eq!(config.span_cache_capacity, 50);

    let config: Config = toml::from_str("swipe_threshold = 0.5\n")?;
    assert_eq!(config.swipe_threshold, 0.5);
    assert_eq!(config.transition_duration_ms, 300);

    // Full round trip
    let serialized = toml::to_string(&Config::default())?;
    let reparsed: Config = toml::from_str(&serialized)?;
    assert_eq!(reparsed.velocity_threshold, 500.0);
    assert_eq!(reparsed.theme.accent_color, "Yellow");
    Ok(())
}

#[test]
fn test_config_rejects_zero_cache_capacity() {
    let config = Config {
        span_cache_capacity: 0,
        ..Default::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidCacheCapacity(0))
    ));
}

#[test]
fn test_parse_color_names() {
    assert!(sphinx_strength_lib::parse_color("yellow").is_ok());
    assert!(sphinx_strength_lib::parse_color("DarkGrey").is_ok());
    let result = sphinx_strength_lib::parse_color("gold-ish");
    assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
}

#[test]
fn test_config_load_creates_default_file() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("sphinx-strength-test-{}", std::process::id()));
    let path = dir.join("config.toml");
    let _ = std::fs::remove_dir_all(&dir);

    let loaded = sphinx_strength_lib::load_config_util(&path)?;
    assert!(path.exists());
    assert_eq!(loaded.span_cache_capacity, 50);

    // Edits survive a save/load cycle
    let mut edited = loaded;
    edited.transition_duration_ms = 150;
    sphinx_strength_lib::save_config_util(&path, &edited)?;
    let reloaded = sphinx_strength_lib::load_config_util(&path)?;
    assert_eq!(reloaded.transition_duration_ms, 150);

    let _ = std::fs::remove_dir_all(&dir);
    Ok(())
}

// --- Misc ---

#[test]
fn test_is_same_day() {
    let a = sample_date();
    let b = NaiveDate::from_ymd_opt(2025, 8, 8).unwrap();
    assert!(is_same_day(a, b));
    assert!(!is_same_day(a, add_days(a, 1)));
}
