//! One editing session: photo binding, gesture state, committed
//! strokes, and the composited surface, behind a single mutation API.
//!
//! The session is the single writer for every shared resource in the
//! engine — the stroke list, the in-progress gesture buffer, the brush
//! context, and the surface. Rendering is an explicit invalidation
//! contract rather than a side effect of any UI framework: each call
//! that mutates stroke data or overlay visibility performs exactly one
//! recomposition before returning, so the caller observes the updated
//! surface as soon as the call returns.

use tiny_skia::Pixmap;

use crate::compositor;
use crate::mapper;
use crate::recorder::StrokeRecorder;
use crate::store::StrokeStore;
use crate::types::{
    BrushContext, Dimensions, GesturePhase, PointerInput, RgbaImage, Stroke, SurfaceRect,
    MIN_BRUSH_SIZE,
};

/// A mask painting session over one photo.
///
/// Input arrives as normalized [`PointerInput`] signals in device
/// coordinates; output is the composited [`surface`](Self::surface) and
/// the committed strokes in [`strokes`](Self::strokes). Everything is
/// synchronous and inline — no call in this type suspends or blocks.
#[derive(Debug, Default)]
pub struct MaskSession {
    base: Option<Pixmap>,
    dimensions: Option<Dimensions>,
    surface: Option<Pixmap>,
    rect: SurfaceRect,
    store: StrokeStore,
    recorder: StrokeRecorder,
    brush: BrushContext,
    redraws: u64,
}

impl MaskSession {
    /// Create a session with no photo bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: None,
            dimensions: None,
            surface: None,
            rect: SurfaceRect::new(0.0, 0.0, 0.0, 0.0),
            store: StrokeStore::new(),
            recorder: StrokeRecorder::new(),
            brush: BrushContext::default(),
            redraws: 0,
        }
    }

    /// Bind a decoded photo to the session.
    ///
    /// Resets the mapping basis, discards any in-progress gesture, and
    /// recomposites. Committed strokes are retained — they belong to
    /// the session, not the photo; callers that want a clean slate
    /// call [`clear_strokes`](Self::clear_strokes) as well.
    ///
    /// A zero-sized image unbinds the photo; pointer input and
    /// compositing become no-ops until a real photo is loaded.
    pub fn load_image(&mut self, image: &RgbaImage) {
        self.recorder = StrokeRecorder::new();
        self.rect = SurfaceRect::new(0.0, 0.0, 0.0, 0.0);

        match compositor::rgba_to_pixmap(image) {
            Some(pixmap) => {
                self.dimensions = Some(Dimensions {
                    width: image.width(),
                    height: image.height(),
                });
                self.surface = Pixmap::new(pixmap.width(), pixmap.height());
                self.base = Some(pixmap);
                self.redraw();
            }
            None => {
                self.base = None;
                self.dimensions = None;
                self.surface = None;
            }
        }
    }

    /// Update the rendered surface's bounding rectangle used for
    /// device-to-image mapping. Purely a mapping-basis change; does not
    /// recomposite.
    pub const fn set_surface_rect(&mut self, rect: SurfaceRect) {
        self.rect = rect;
    }

    /// Feed one normalized pointer signal, in device coordinates.
    ///
    /// No-op until a photo is bound — coordinate mapping is meaningless
    /// before the intrinsic dimensions are known. `Begin` starts a
    /// gesture, `Move` extends it (and recomposites for live feedback),
    /// `End` commits or discards it and recomposites. Moves while no
    /// gesture is active are ignored.
    pub fn pointer(&mut self, input: PointerInput) {
        let Some(intrinsic) = self.dimensions else {
            return;
        };

        match input.phase {
            GesturePhase::Begin => {
                let point = mapper::to_image_space(
                    input.position.x,
                    input.position.y,
                    self.rect,
                    intrinsic,
                );
                self.recorder.begin(point);
            }
            GesturePhase::Move => {
                let point = mapper::to_image_space(
                    input.position.x,
                    input.position.y,
                    self.rect,
                    intrinsic,
                );
                if self.recorder.extend(point) {
                    self.redraw();
                }
            }
            GesturePhase::End => {
                // The brush is clamped at the session boundary, so the
                // commit cannot fail on brush size; a failure would
                // only drop the gesture, which is the documented
                // degradation for input-path problems.
                let _ = self.recorder.finish(&mut self.store, &self.brush);
                self.redraw();
            }
        }
    }

    /// Set the ambient brush size, clamped to [`MIN_BRUSH_SIZE`].
    ///
    /// Takes effect for the live stroke on its next recorded point and
    /// for strokes committed afterwards.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush.brush_size = if size.is_finite() {
            size.max(MIN_BRUSH_SIZE)
        } else {
            MIN_BRUSH_SIZE
        };
    }

    /// Toggle overlay visibility and recomposite once.
    pub fn set_overlay_visible(&mut self, visible: bool) {
        self.store.set_visible(visible);
        self.redraw();
    }

    /// Whether the overlay is currently painted.
    #[must_use]
    pub const fn is_overlay_visible(&self) -> bool {
        self.store.is_visible()
    }

    /// Remove all committed strokes (the eraser action) and
    /// recomposite once. Overlay visibility is untouched.
    pub fn clear_strokes(&mut self) {
        self.store.clear();
        self.redraw();
    }

    /// Append an externally supplied stroke (for example one restored
    /// by the host) and recomposite once.
    pub fn add_stroke(&mut self, stroke: Stroke) {
        self.store.add(stroke);
        self.redraw();
    }

    /// Committed strokes in paint order, for the host to persist or
    /// transmit.
    #[must_use]
    pub fn strokes(&self) -> &[Stroke] {
        self.store.list()
    }

    /// The ambient brush configuration.
    #[must_use]
    pub const fn brush(&self) -> BrushContext {
        self.brush
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.recorder.is_drawing()
    }

    /// Intrinsic dimensions of the bound photo, if any.
    #[must_use]
    pub const fn dimensions(&self) -> Option<Dimensions> {
        self.dimensions
    }

    /// The current composited surface, `None` until a photo is bound.
    #[must_use]
    pub const fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    /// How many recompositions have run. Each mutating call performs
    /// exactly one; pure no-ops perform none.
    #[must_use]
    pub const fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Recomposite the surface from current state. No-op when no photo
    /// is bound.
    fn redraw(&mut self) {
        let (Some(base), Some(surface)) = (self.base.as_ref(), self.surface.as_mut()) else {
            return;
        };
        compositor::composite(surface, base, &self.store, &self.recorder, &self.brush);
        self.redraws += 1;
    }
}
