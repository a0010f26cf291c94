//! Ordered, append-only storage for committed strokes.
//!
//! Insertion order is paint order: the compositor draws strokes in the
//! sequence they were committed, so later strokes cover earlier ones at
//! overlapping pixels. The store also carries the overlay visibility
//! flag — hiding the overlay keeps every stroke's data intact, so
//! turning visibility back on reproduces the exact same composite.

use crate::types::{BrushContext, MaskError, Point, Stroke, StrokeId};

/// Committed strokes in paint order, plus the overlay visibility flag.
///
/// Created once per editing session. Strokes are appended on gesture
/// completion and never mutated afterwards; the whole list can be
/// cleared (the "eraser" action) without touching visibility.
#[derive(Debug, Default)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
    next_id: u64,
    visible: bool,
}

impl StrokeStore {
    /// Create an empty store with the overlay visible.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
            next_id: 0,
            visible: true,
        }
    }

    /// Append an externally constructed stroke.
    ///
    /// The stroke type enforces its own invariants at construction, so
    /// a malformed stroke (odd point list, too few pairs) can never
    /// reach the paint order through this path. The stroke keeps the id
    /// it was built with; ids from [`commit`](Self::commit) and ids
    /// supplied here share one namespace, and the internal counter is
    /// advanced past any larger supplied id.
    pub fn add(&mut self, stroke: Stroke) {
        self.next_id = self.next_id.max(stroke.id().0 + 1);
        self.strokes.push(stroke);
    }

    /// Commit a recorded gesture as a new stroke, assigning its id.
    ///
    /// Returns `None` without mutating the store when the gesture holds
    /// fewer than 2 coordinate pairs — under-length gestures are
    /// silently dropped by policy, not reported as errors.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::InvalidBrushSize`] if the ambient brush
    /// size is not positive and finite.
    pub fn commit(
        &mut self,
        pairs: &[Point],
        brush: &BrushContext,
    ) -> Result<Option<StrokeId>, MaskError> {
        if pairs.len() < 2 {
            return Ok(None);
        }

        let id = StrokeId(self.next_id);
        let stroke = Stroke::from_pairs(id, pairs, brush.brush_size, brush.color)?;
        self.next_id += 1;
        self.strokes.push(stroke);
        Ok(Some(id))
    }

    /// All committed strokes in paint order.
    ///
    /// Read-only view: strokes are immutable once committed.
    #[must_use]
    pub fn list(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Number of committed strokes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Returns `true` if no strokes have been committed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Remove every committed stroke. Visibility is untouched.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Set whether the compositor paints the overlay at all.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the overlay is currently painted.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::MASK_OVERLAY;

    fn brush(size: f32) -> BrushContext {
        BrushContext {
            brush_size: size,
            color: MASK_OVERLAY,
        }
    }

    fn zigzag() -> Vec<Point> {
        vec![
            Point::new(10.0, 10.0),
            Point::new(20.0, 20.0),
            Point::new(30.0, 10.0),
        ]
    }

    #[test]
    fn new_store_is_empty_and_visible() {
        let store = StrokeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.is_visible());
    }

    #[test]
    fn commit_appends_in_order() {
        let mut store = StrokeStore::new();
        let first = store.commit(&zigzag(), &brush(5.0)).unwrap();
        let second = store
            .commit(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)], &brush(9.0))
            .unwrap();

        assert_eq!(first, Some(StrokeId(0)));
        assert_eq!(second, Some(StrokeId(1)));
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].id(), StrokeId(0));
        assert_eq!(store.list()[1].id(), StrokeId(1));
    }

    #[test]
    fn commit_captures_ambient_brush() {
        let mut store = StrokeStore::new();
        store.commit(&zigzag(), &brush(5.0)).unwrap();

        let stroke = &store.list()[0];
        assert_eq!(stroke.points(), &[10.0, 10.0, 20.0, 20.0, 30.0, 10.0]);
        assert!((stroke.brush_size() - 5.0).abs() < f32::EPSILON);
        assert_eq!(stroke.color(), MASK_OVERLAY);
    }

    #[test]
    fn under_length_gestures_are_dropped() {
        let mut store = StrokeStore::new();
        assert_eq!(store.commit(&[], &brush(5.0)).unwrap(), None);
        assert_eq!(
            store.commit(&[Point::new(1.0, 1.0)], &brush(5.0)).unwrap(),
            None,
        );
        assert!(store.is_empty());
        // Dropped gestures must not consume ids.
        let id = store.commit(&zigzag(), &brush(5.0)).unwrap();
        assert_eq!(id, Some(StrokeId(0)));
    }

    #[test]
    fn commit_rejects_bad_brush_size() {
        let mut store = StrokeStore::new();
        let result = store.commit(&zigzag(), &brush(0.0));
        assert!(matches!(result, Err(MaskError::InvalidBrushSize { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_keeps_visibility() {
        let mut store = StrokeStore::new();
        store.commit(&zigzag(), &brush(5.0)).unwrap();
        store.set_visible(false);

        store.clear();

        assert!(store.is_empty());
        assert!(!store.is_visible());

        store.set_visible(true);
        store.clear();
        assert!(store.is_visible());
    }

    #[test]
    fn add_advances_id_counter() {
        let mut store = StrokeStore::new();
        let external = Stroke::from_pairs(StrokeId(10), &zigzag(), 3.0, MASK_OVERLAY).unwrap();
        store.add(external);

        let id = store.commit(&zigzag(), &brush(5.0)).unwrap();
        assert_eq!(id, Some(StrokeId(11)));
    }

    #[test]
    fn visibility_toggle_retains_strokes() {
        let mut store = StrokeStore::new();
        store.commit(&zigzag(), &brush(5.0)).unwrap();

        store.set_visible(false);
        assert_eq!(store.len(), 1);
        store.set_visible(true);
        assert_eq!(store.len(), 1);
    }
}
