//! Swipe-to-reveal gesture tracking for list rows.
//!
//! Converts a stream of pointer samples (touch or mouse, fed by the list
//! component) into a horizontal reveal offset per row, and decides at
//! release time whether the row stays open to expose its delete action or
//! springs back. Pure geometry/state: coordinates and timestamps come in as
//! parameters, so everything here runs under plain `cargo test`.

use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Minimum net horizontal displacement (px) for a deliberate swipe.
    pub min_swipe_distance: f64,
    /// Clamp bound and the resting offset of an open row (px).
    pub max_swipe_distance: f64,
    /// Fraction of `min_swipe_distance` below which even a fast flick is ignored.
    pub swipe_threshold: f64,
    /// Damping multiplier applied to raw displacement before clamping.
    pub resistance: f64,
    /// Minimum speed (px/ms) that lets a short gesture still complete.
    pub velocity_gate: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_swipe_distance: 50.0,
            max_swipe_distance: 80.0,
            swipe_threshold: 0.3,
            resistance: 0.5,
            velocity_gate: 0.15,
        }
    }
}

/// One-time axis decision for a session: vertical movement means the user is
/// scrolling, and the session is abandoned without touching any offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

/// Ephemeral per-gesture state. Created on pointer-down, discarded on
/// pointer-up or pointer-leave; never outlives a single interaction.
#[derive(Debug, Clone)]
struct GestureSession {
    row_id: String,
    origin: (f64, f64),
    last: (f64, f64),
    start_ms: f64,
    axis: Axis,
    offset: f64,
}

/// What the renderer applies to a row: a translateX offset and whether the
/// change should animate (transitions are suspended while dragging so the
/// row tracks the pointer exactly).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowTransform {
    pub offset: f64,
    pub animate: bool,
}

/// Tracks the active gesture session plus which row (if any) is revealed.
///
/// Invariant: at most one row is recorded as open at a time; starting a drag
/// on a different row implicitly closes the open one. Rows pinned by a
/// completed *right* swipe keep their visual offset but are deliberately not
/// recorded as open (see `right_swipe_pins_but_does_not_open` below).
#[derive(Debug, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    session: Option<GestureSession>,
    open_row: Option<String>,
    resting: HashMap<String, f64>,
}

impl SwipeTracker {
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Row currently revealed by a completed left swipe, if any.
    pub fn open_row(&self) -> Option<&str> {
        self.open_row.as_deref()
    }

    /// Start a gesture session for `row_id`. Supersedes any prior session.
    pub fn begin(&mut self, row_id: &str, x: f64, y: f64, now_ms: f64) {
        let offset = if self.open_row.as_deref() == Some(row_id) {
            // Re-dragging the open row starts from its pinned offset so it
            // can be swiped back closed.
            self.resting.get(row_id).copied().unwrap_or(0.0)
        } else {
            // Starting on any other row closes the open one.
            if let Some(open) = self.open_row.take() {
                self.resting.remove(&open);
            }
            self.resting.remove(row_id);
            0.0
        };
        self.session = Some(GestureSession {
            row_id: row_id.to_string(),
            origin: (x, y),
            last: (x, y),
            start_ms: now_ms,
            axis: Axis::Undecided,
            offset,
        });
    }

    /// Feed a pointer-move sample. Returns the new live offset while the
    /// session is horizontal; `None` means the sample was ignored (no
    /// session, or the gesture locked vertical) and default scroll behaviour
    /// should proceed.
    pub fn update(&mut self, x: f64, y: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        let delta_x = x - session.origin.0;
        let delta_y = y - session.origin.1;

        if session.axis == Axis::Undecided {
            session.axis = if delta_y.abs() > delta_x.abs() {
                Axis::Vertical
            } else {
                Axis::Horizontal
            };
        }
        if session.axis == Axis::Vertical {
            return None;
        }

        let translated = delta_x * self.config.resistance;
        session.offset = translated.clamp(
            -self.config.max_swipe_distance,
            self.config.max_swipe_distance,
        );
        session.last = (x, y);
        Some(session.offset)
    }

    /// Pointer-up: decide open vs. closed and discard the session.
    pub fn end(&mut self, row_id: &str, now_ms: f64) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.row_id != row_id {
            self.session = Some(session);
            return;
        }
        // A session that never went horizontal was a scroll (or a bare tap);
        // leave all reveal state untouched.
        if session.axis != Axis::Horizontal {
            return;
        }

        let delta_x = session.last.0 - session.origin.0;
        let elapsed = now_ms - session.start_ms;
        let velocity = delta_x.abs() / elapsed;
        let should_complete = delta_x.abs() > self.config.min_swipe_distance
            || (delta_x.abs() > self.config.min_swipe_distance * self.config.swipe_threshold
                && velocity > self.config.velocity_gate);

        if should_complete {
            let direction = if delta_x < 0.0 { -1.0 } else { 1.0 };
            self.resting
                .insert(row_id.to_string(), direction * self.config.max_swipe_distance);
            // Only a left swipe counts as "open"; a completed right swipe
            // pins the offset but is not tracked (kept as-is from the
            // original behaviour, see the pinned test).
            self.open_row = (direction < 0.0).then(|| row_id.to_string());
        } else {
            self.resting.remove(row_id);
            if self.open_row.as_deref() == Some(row_id) {
                self.open_row = None;
            }
        }
    }

    /// Pointer-leave while dragging: always a cancel, regardless of how far
    /// the drag had progressed. Settles the row back to 0.
    pub fn cancel(&mut self, row_id: &str) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.row_id != row_id {
            self.session = Some(session);
            return;
        }
        self.resting.remove(row_id);
        if self.open_row.as_deref() == Some(row_id) {
            self.open_row = None;
        }
    }

    /// Reset a row's reveal without a gesture (used when its delete
    /// affordance is tapped).
    pub fn close_row(&mut self, row_id: &str) {
        self.resting.remove(row_id);
        if self.open_row.as_deref() == Some(row_id) {
            self.open_row = None;
        }
    }

    /// Transform the renderer should apply to `row_id` right now.
    pub fn row_transform(&self, row_id: &str) -> RowTransform {
        if let Some(session) = &self.session {
            // Transitions stay suspended for the whole active gesture so the
            // row tracks the pointer exactly; a vertical-locked session is a
            // scroll and leaves the row's resting transform alone.
            if session.row_id == row_id && session.axis != Axis::Vertical {
                return RowTransform {
                    offset: session.offset,
                    animate: false,
                };
            }
        }
        RowTransform {
            offset: self.resting.get(row_id).copied().unwrap_or(0.0),
            animate: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_left(tracker: &mut SwipeTracker, row: &str) {
        tracker.begin(row, 200.0, 100.0, 0.0);
        tracker.update(140.0, 100.0);
        tracker.end(row, 300.0);
    }

    #[test]
    fn vertical_lock_leaves_offset_untouched() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 100.0, 100.0, 0.0);
        assert_eq!(tracker.update(105.0, 140.0), None);
        // Later horizontal-dominant samples never re-evaluate the lock.
        assert_eq!(tracker.update(300.0, 140.0), None);
        tracker.end("a", 500.0);
        assert_eq!(tracker.row_transform("a").offset, 0.0);
        assert_eq!(tracker.open_row(), None);
    }

    #[test]
    fn offset_is_clamped_to_max() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 1000.0, 100.0, 0.0);
        assert_eq!(tracker.update(0.0, 100.0), Some(-80.0));
        assert_eq!(tracker.update(5000.0, 100.0), Some(80.0));
    }

    #[test]
    fn resistance_damps_raw_displacement() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 100.0, 100.0, 0.0);
        assert_eq!(tracker.update(40.0, 100.0), Some(-30.0));
    }

    #[test]
    fn left_swipe_past_threshold_opens_row() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(140.0, 100.0); // deltaX = -60
        tracker.end("a", 300.0); // velocity 0.2 px/ms
        assert_eq!(tracker.open_row(), Some("a"));
        let t = tracker.row_transform("a");
        assert_eq!(t.offset, -80.0);
        assert!(t.animate);
    }

    #[test]
    fn short_fast_flick_completes() {
        // 20px in 100ms: under min_swipe_distance but over the velocity gate
        // and over min_swipe_distance * swipe_threshold = 15.
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(180.0, 100.0);
        tracker.end("a", 100.0);
        assert_eq!(tracker.open_row(), Some("a"));
        assert_eq!(tracker.row_transform("a").offset, -80.0);
    }

    #[test]
    fn short_slow_drag_springs_back() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(180.0, 100.0); // deltaX = -20
        tracker.end("a", 2000.0); // velocity 0.01 px/ms
        assert_eq!(tracker.open_row(), None);
        assert_eq!(tracker.row_transform("a").offset, 0.0);
    }

    #[test]
    fn opening_a_row_closes_the_previous_one() {
        let mut tracker = SwipeTracker::default();
        open_left(&mut tracker, "a");
        open_left(&mut tracker, "b");
        assert_eq!(tracker.open_row(), Some("b"));
        assert_eq!(tracker.row_transform("a").offset, 0.0);
        assert_eq!(tracker.row_transform("b").offset, -80.0);
    }

    #[test]
    fn cancel_overrides_completion() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(60.0, 100.0); // would easily complete
        tracker.cancel("a");
        assert_eq!(tracker.open_row(), None);
        let t = tracker.row_transform("a");
        assert_eq!(t.offset, 0.0);
        assert!(t.animate);
    }

    #[test]
    fn cancel_closes_a_previously_open_row_mid_drag() {
        let mut tracker = SwipeTracker::default();
        open_left(&mut tracker, "a");
        tracker.begin("a", 200.0, 100.0, 1000.0);
        tracker.update(210.0, 100.0);
        tracker.cancel("a");
        assert_eq!(tracker.open_row(), None);
        assert_eq!(tracker.row_transform("a").offset, 0.0);
    }

    #[test]
    fn tap_on_open_row_leaves_it_open() {
        // begin + end with no movement: the axis is never decided, so the
        // release is a no-op and the row stays pinned open.
        let mut tracker = SwipeTracker::default();
        open_left(&mut tracker, "a");
        tracker.begin("a", 200.0, 100.0, 1000.0);
        tracker.end("a", 1050.0);
        assert_eq!(tracker.open_row(), Some("a"));
        assert_eq!(tracker.row_transform("a").offset, -80.0);
    }

    #[test]
    fn reopened_row_starts_from_pinned_offset() {
        let mut tracker = SwipeTracker::default();
        open_left(&mut tracker, "a");
        tracker.begin("a", 200.0, 100.0, 1000.0);
        let t = tracker.row_transform("a");
        assert_eq!(t.offset, -80.0);
        assert!(!t.animate);
    }

    #[test]
    fn live_drag_emits_unanimated_transform() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 100.0, 100.0, 0.0);
        tracker.update(60.0, 100.0);
        let t = tracker.row_transform("a");
        assert_eq!(t.offset, -20.0);
        assert!(!t.animate);
        // Other rows are unaffected by the session.
        assert_eq!(tracker.row_transform("b").offset, 0.0);
    }

    #[test]
    fn right_swipe_pins_but_does_not_open() {
        // Faithful oddity: a completed right swipe pins the offset positive
        // yet is not recorded as open, so the single-open rule does not
        // close it when another row is swiped later.
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 100.0, 100.0, 0.0);
        tracker.update(160.0, 100.0); // deltaX = +60
        tracker.end("a", 300.0);
        assert_eq!(tracker.open_row(), None);
        assert_eq!(tracker.row_transform("a").offset, 80.0);

        open_left(&mut tracker, "b");
        assert_eq!(tracker.open_row(), Some("b"));
        assert_eq!(tracker.row_transform("a").offset, 80.0);
    }

    #[test]
    fn begin_on_pinned_right_row_resets_its_offset() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 100.0, 100.0, 0.0);
        tracker.update(160.0, 100.0);
        tracker.end("a", 300.0);
        // Not the open row, so a fresh drag starts from 0.
        tracker.begin("a", 100.0, 100.0, 1000.0);
        tracker.update(101.0, 100.0);
        assert_eq!(tracker.row_transform("a").offset, 0.5);
    }

    #[test]
    fn custom_config_narrows_the_clamp() {
        let mut tracker = SwipeTracker::with_config(SwipeConfig {
            max_swipe_distance: 40.0,
            ..SwipeConfig::default()
        });
        tracker.begin("a", 200.0, 100.0, 0.0);
        assert_eq!(tracker.update(40.0, 100.0), Some(-40.0));
        tracker.end("a", 300.0);
        assert_eq!(tracker.open_row(), Some("a"));
        assert_eq!(tracker.row_transform("a").offset, -40.0);
    }

    #[test]
    fn end_for_a_different_row_is_ignored() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(140.0, 100.0);
        tracker.end("b", 300.0);
        // Session still live for "a".
        assert!(!tracker.row_transform("a").animate);
        tracker.end("a", 300.0);
        assert_eq!(tracker.open_row(), Some("a"));
    }

    #[test]
    fn new_begin_supersedes_prior_session() {
        let mut tracker = SwipeTracker::default();
        tracker.begin("a", 200.0, 100.0, 0.0);
        tracker.update(140.0, 100.0);
        tracker.begin("b", 300.0, 100.0, 50.0);
        tracker.update(230.0, 100.0);
        tracker.end("b", 350.0);
        assert_eq!(tracker.open_row(), Some("b"));
        assert_eq!(tracker.row_transform("a").offset, 0.0);
    }
}
