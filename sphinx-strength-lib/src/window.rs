//src/window.rs
use crate::cache::{Span, SpanCache};
use crate::dates::{add_days, three_day_span};
use crate::schedule::{WorkoutDay, WorkoutSchedule};
use chrono::NaiveDate;
use std::time::{Duration, Instant};

/// `advance`/`retreat` always move the window by exactly this many days.
pub const NAVIGATION_STEP_DAYS: i64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Advance,
    Retreat,
}

#[derive(Clone, Copy, Debug)]
struct Transition {
    direction: NavDirection,
    new_center: NaiveDate,
    started: Instant,
    duration: Duration,
}

type SelectCallback = Box<dyn FnMut(NaiveDate)>;

/// Owns the calendar's center and selected dates plus the injected span
/// cache. Navigation is a timed transition: `advance`/`retreat` arm it,
/// `tick` commits it once the duration has elapsed. Commands arriving while
/// a transition is in flight are dropped, not queued, and a transition
/// always runs to completion (there is no cancellation).
pub struct WindowController {
    center_date: NaiveDate,
    selected_date: NaiveDate,
    cache: SpanCache,
    transition: Option<Transition>,
    transition_duration: Duration,
    on_select: Option<SelectCallback>,
}

impl WindowController {
    pub fn new(initial_date: NaiveDate, cache: SpanCache, transition_duration: Duration) -> Self {
        Self {
            center_date: initial_date,
            selected_date: initial_date,
            cache,
            transition: None,
            transition_duration,
            on_select: None,
        }
    }

    pub fn center_date(&self) -> NaiveDate {
        self.center_date
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn is_navigating(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition_direction(&self) -> Option<NavDirection> {
        self.transition.as_ref().map(|t| t.direction)
    }

    /// Registers the callback fired on every user selection. Navigation
    /// commits move the selection too but do not fire it.
    pub fn set_on_select(&mut self, callback: impl FnMut(NaiveDate) + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Highlights `date` without moving the window. Always succeeds.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        if let Some(callback) = self.on_select.as_mut() {
            callback(date);
        }
    }

    /// Starts a forward navigation. Returns false if dropped because a
    /// transition is already in flight.
    pub fn advance(&mut self) -> bool {
        self.begin_navigation(NavDirection::Advance)
    }

    /// Starts a backward navigation. Returns false if dropped.
    pub fn retreat(&mut self) -> bool {
        self.begin_navigation(NavDirection::Retreat)
    }

    fn begin_navigation(&mut self, direction: NavDirection) -> bool {
        if self.transition.is_some() {
            return false;
        }
        let step = match direction {
            NavDirection::Advance => NAVIGATION_STEP_DAYS,
            NavDirection::Retreat => -NAVIGATION_STEP_DAYS,
        };
        self.transition = Some(Transition {
            direction,
            new_center: add_days(self.center_date, step),
            started: Instant::now(),
            duration: self.transition_duration,
        });
        true
    }

    /// Advances transition time. The caller supplies `now`, so any driver
    /// can pace the animation: the TUI event loop in production, manual
    /// ticks in tests. Returns true when a transition committed this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        let completed = match &self.transition {
            Some(t) => now.duration_since(t.started) >= t.duration,
            None => false,
        };
        if completed {
            if let Some(t) = self.transition.take() {
                self.center_date = t.new_center;
                self.selected_date = t.new_center;
            }
        }
        completed
    }

    /// Fraction of the in-flight transition elapsed at `now`, if any.
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.transition.as_ref().map(|t| {
            let elapsed = now.duration_since(t.started).as_secs_f32();
            (elapsed / t.duration.as_secs_f32().max(f32::EPSILON)).min(1.0)
        })
    }

    /// The current 3-day window, served from the cache when possible.
    pub fn window(&mut self, schedule: &WorkoutSchedule) -> &Span {
        let (center, selected) = (self.center_date, self.selected_date);
        self.cache
            .get_or_compute(center, selected, || three_day_span(center, selected, schedule))
    }

    /// The workout planned for the selected day, if any.
    pub fn selected_workout<'s>(&self, schedule: &'s WorkoutSchedule) -> Option<&'s WorkoutDay> {
        schedule.workout_for(self.selected_date)
    }

    /// Recenters and reselects in one step, bypassing the transition.
    /// Dropped while a transition is in flight, like `advance`/`retreat`.
    pub fn jump_to(&mut self, date: NaiveDate) {
        if self.transition.is_some() {
            return;
        }
        self.center_date = date;
        self.selected_date = date;
    }

    /// Forwarded cache reset for schedule replacement.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cached_spans(&self) -> usize {
        self.cache.len()
    }
}
