//! Gesture recording: raw pointer signals in, committed strokes out.
//!
//! A two-state machine (Idle, Drawing) turns the normalized
//! begin/move/end signal stream into a transient in-progress stroke,
//! handing it to the [`StrokeStore`] when the gesture ends. Points are
//! kept in arrival order — reordering would corrupt the polyline.
//!
//! All three gesture-ending events (pointer up, pointer leave, touch
//! end) are handled uniformly: a gesture with at least 2 recorded
//! points commits exactly one stroke, anything shorter is discarded.
//! There is no separate cancel path.

use crate::store::StrokeStore;
use crate::types::{BrushContext, MaskError, Point, StrokeId};

/// The Idle/Drawing state machine behind the painting surface.
///
/// Holds the in-progress gesture buffer; committed data lives in the
/// [`StrokeStore`]. Transient state is discarded at gesture end
/// regardless of whether a stroke was committed.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
    drawing: bool,
    last_point: Option<Point>,
    current: Vec<Point>,
}

impl StrokeRecorder {
    /// Create a recorder in the Idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drawing: false,
            last_point: None,
            current: Vec::new(),
        }
    }

    /// Idle → Drawing: a gesture starts at `point` (image pixel-space).
    ///
    /// If a gesture is somehow already active (an end event was lost),
    /// the stale buffer is discarded and the new gesture starts clean.
    pub fn begin(&mut self, point: Point) {
        self.drawing = true;
        self.current.clear();
        self.current.push(point);
        self.last_point = Some(point);
    }

    /// Drawing → Drawing: the gesture continues through `point`.
    ///
    /// Appends to the in-progress buffer in arrival order. A move while
    /// Idle is a no-op, not an error; returns whether the point was
    /// recorded so the caller knows a redraw is warranted.
    pub fn extend(&mut self, point: Point) -> bool {
        if !self.drawing {
            return false;
        }
        self.current.push(point);
        self.last_point = Some(point);
        true
    }

    /// Drawing → Idle: the gesture is over.
    ///
    /// Commits one stroke to `store` when at least 2 points were
    /// recorded, capturing the ambient brush settings active during the
    /// gesture; shorter gestures are silently discarded. Transient
    /// state is reset in both cases. Returns the committed stroke's id,
    /// if any.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidBrushSize`] if the ambient brush
    /// size is invalid; the transient state is still reset.
    pub fn finish(
        &mut self,
        store: &mut StrokeStore,
        brush: &BrushContext,
    ) -> Result<Option<StrokeId>, MaskError> {
        let points = std::mem::take(&mut self.current);
        self.drawing = false;
        self.last_point = None;

        if points.len() < 2 {
            return Ok(None);
        }
        store.commit(&points, brush)
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// The most recently recorded point of the active gesture.
    #[must_use]
    pub const fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// The in-progress gesture's points, in arrival order.
    ///
    /// The compositor reads this directly to paint live feedback on top
    /// of the committed strokes.
    #[must_use]
    pub fn live_points(&self) -> &[Point] {
        &self.current
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::{BrushContext, MASK_OVERLAY};

    fn brush() -> BrushContext {
        BrushContext {
            brush_size: 5.0,
            color: MASK_OVERLAY,
        }
    }

    #[test]
    fn starts_idle() {
        let recorder = StrokeRecorder::new();
        assert!(!recorder.is_drawing());
        assert!(recorder.last_point().is_none());
        assert!(recorder.live_points().is_empty());
    }

    #[test]
    fn begin_enters_drawing_with_one_point() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(Point::new(10.0, 10.0));

        assert!(recorder.is_drawing());
        assert_eq!(recorder.last_point(), Some(Point::new(10.0, 10.0)));
        assert_eq!(recorder.live_points(), &[Point::new(10.0, 10.0)]);
    }

    #[test]
    fn extend_appends_in_arrival_order() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(Point::new(10.0, 10.0));
        assert!(recorder.extend(Point::new(20.0, 20.0)));
        assert!(recorder.extend(Point::new(30.0, 10.0)));

        assert_eq!(
            recorder.live_points(),
            &[
                Point::new(10.0, 10.0),
                Point::new(20.0, 20.0),
                Point::new(30.0, 10.0),
            ],
        );
        assert_eq!(recorder.last_point(), Some(Point::new(30.0, 10.0)));
    }

    #[test]
    fn extend_while_idle_is_noop() {
        let mut recorder = StrokeRecorder::new();
        assert!(!recorder.extend(Point::new(5.0, 5.0)));
        assert!(recorder.live_points().is_empty());
        assert!(!recorder.is_drawing());
    }

    #[test]
    fn finish_commits_one_stroke_with_all_points() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();

        recorder.begin(Point::new(10.0, 10.0));
        recorder.extend(Point::new(20.0, 20.0));
        recorder.extend(Point::new(30.0, 10.0));
        let id = recorder.finish(&mut store, &brush()).unwrap();

        assert!(id.is_some());
        assert_eq!(store.len(), 1);
        let stroke = &store.list()[0];
        // N samples produce 2N interleaved coordinates.
        assert_eq!(stroke.points(), &[10.0, 10.0, 20.0, 20.0, 30.0, 10.0]);
        assert!((stroke.brush_size() - 5.0).abs() < f32::EPSILON);

        // Transient state fully reset.
        assert!(!recorder.is_drawing());
        assert!(recorder.last_point().is_none());
        assert!(recorder.live_points().is_empty());
    }

    #[test]
    fn single_point_gesture_is_discarded() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();

        recorder.begin(Point::new(10.0, 10.0));
        let id = recorder.finish(&mut store, &brush()).unwrap();

        assert_eq!(id, None);
        assert!(store.is_empty());
        assert!(!recorder.is_drawing());
    }

    #[test]
    fn finish_while_idle_is_noop() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();

        let id = recorder.finish(&mut store, &brush()).unwrap();
        assert_eq!(id, None);
        assert!(store.is_empty());
    }

    #[test]
    fn begin_discards_stale_gesture() {
        let mut recorder = StrokeRecorder::new();
        recorder.begin(Point::new(1.0, 1.0));
        recorder.extend(Point::new(2.0, 2.0));

        // A lost end event followed by a new down: old buffer goes away.
        recorder.begin(Point::new(50.0, 50.0));
        assert_eq!(recorder.live_points(), &[Point::new(50.0, 50.0)]);
    }

    #[test]
    fn two_point_gesture_commits() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();

        recorder.begin(Point::new(0.0, 0.0));
        recorder.extend(Point::new(1.0, 1.0));
        let id = recorder.finish(&mut store, &brush()).unwrap();

        assert!(id.is_some());
        assert_eq!(store.list()[0].pair_count(), 2);
    }

    #[test]
    fn consecutive_gestures_commit_separate_strokes() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();

        for offset in [0.0, 100.0] {
            recorder.begin(Point::new(offset, offset));
            recorder.extend(Point::new(offset + 10.0, offset));
            recorder.finish(&mut store, &brush()).unwrap();
        }

        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id(), StrokeId(0));
        assert_eq!(store.list()[1].id(), StrokeId(1));
    }

    #[test]
    fn failed_commit_still_resets_state() {
        let mut recorder = StrokeRecorder::new();
        let mut store = StrokeStore::new();
        let bad_brush = BrushContext {
            brush_size: -1.0,
            color: MASK_OVERLAY,
        };

        recorder.begin(Point::new(0.0, 0.0));
        recorder.extend(Point::new(1.0, 1.0));
        let result = recorder.finish(&mut store, &bad_brush);

        assert!(result.is_err());
        assert!(store.is_empty());
        assert!(!recorder.is_drawing());
        assert!(recorder.live_points().is_empty());
    }
}
