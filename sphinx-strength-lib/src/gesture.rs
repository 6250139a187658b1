//src/gesture.rs
use std::time::Instant;

/// Swipe recognition thresholds. All fields are configuration; the defaults
/// match the tuning the presentation layer ships with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Minimum drag distance to commit, as a fraction of the window width.
    pub swipe_threshold: f32,
    /// Minimum release velocity to commit regardless of distance.
    pub velocity_threshold: f32,
    /// Multiplier applied to translation past the overstretch boundary.
    pub boundary_resistance: f32,
    /// Maximum freely-dragged distance, as a fraction of the window width.
    pub max_drag_fraction: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: 0.25,
            velocity_threshold: 500.0,
            boundary_resistance: 0.3,
            max_drag_fraction: 0.8,
        }
    }
}

/// Discrete outcome of a released drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Move the window forward (drag to the left).
    Advance,
    /// Move the window backward (drag to the right).
    Retreat,
    /// Spring back to zero displacement; no navigation.
    Cancel,
}

/// Clamps a raw drag translation: linear up to the overstretch boundary,
/// sub-linear past it. Sign-symmetric.
pub fn apply_resistance(translation: f32, width: f32, config: &GestureConfig) -> f32 {
    let max_translate = width * config.max_drag_fraction;
    if translation.abs() <= max_translate {
        return translation;
    }
    if translation > 0.0 {
        max_translate + (translation - max_translate) * config.boundary_resistance
    } else {
        -max_translate + (translation + max_translate) * config.boundary_resistance
    }
}

/// Pure decision function from a release sample to a navigation command.
/// Either threshold commits; the translation's sign picks the direction.
pub fn resolve_release(
    translation: f32,
    velocity: f32,
    width: f32,
    config: &GestureConfig,
) -> SwipeOutcome {
    let should_swipe = translation.abs() > width * config.swipe_threshold
        || velocity.abs() > config.velocity_threshold;

    if !should_swipe {
        return SwipeOutcome::Cancel;
    }
    if translation > 0.0 {
        SwipeOutcome::Retreat
    } else {
        SwipeOutcome::Advance
    }
}

/// Live state of one horizontal drag. Velocity is estimated from consecutive
/// samples so release decisions work without a platform gesture runtime.
/// While disabled, all input is ignored entirely, not partially tracked.
#[derive(Debug, Default)]
pub struct DragTracker {
    translation: f32,
    velocity: f32,
    active: bool,
    disabled: bool,
    last_sample: Option<(Instant, f32)>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current displacement after resistance, for rendering.
    pub fn translation(&self) -> f32 {
        self.translation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disabling mid-drag discards the drag in progress.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.reset();
        }
    }

    pub fn begin(&mut self, now: Instant) {
        if self.disabled {
            return;
        }
        self.active = true;
        self.translation = 0.0;
        self.velocity = 0.0;
        self.last_sample = Some((now, 0.0));
    }

    pub fn update(&mut self, raw_translation: f32, width: f32, config: &GestureConfig, now: Instant) {
        if self.disabled || !self.active {
            return;
        }
        let clamped = apply_resistance(raw_translation, width, config);
        if let Some((last_at, last_translation)) = self.last_sample {
            let dt = now.duration_since(last_at).as_secs_f32();
            if dt > 0.0 {
                self.velocity = (clamped - last_translation) / dt;
            }
        }
        self.last_sample = Some((now, clamped));
        self.translation = clamped;
    }

    /// Ends the drag and decides its outcome. Displacement always returns to
    /// zero: a committed swipe hands off to the navigation transition and a
    /// cancelled one springs back.
    pub fn release(&mut self, width: f32, config: &GestureConfig) -> SwipeOutcome {
        if self.disabled || !self.active {
            self.reset();
            return SwipeOutcome::Cancel;
        }
        let outcome = resolve_release(self.translation, self.velocity, width, config);
        self.reset();
        outcome
    }

    /// Abandons the drag without a decision.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.active = false;
        self.translation = 0.0;
        self.velocity = 0.0;
        self.last_sample = None;
    }
}
