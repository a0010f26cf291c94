//! restage-mask: mask painting and compositing engine (sans-IO).
//!
//! Captures freehand paint gestures over a photo, keeps a vector
//! record of committed strokes, and recomposites photo + overlay on
//! every input event:
//! normalized pointer signal -> coordinate mapping -> gesture recorder
//! -> stroke store -> compositor.
//!
//! This crate has **no browser or filesystem dependencies** -- it
//! operates on in-memory pixel buffers and normalized input signals.
//! Event sources, canvas presentation, and uploads live in
//! `restage-io`.

pub mod compositor;
pub mod mapper;
pub mod recorder;
pub mod session;
pub mod store;
pub mod types;

pub use recorder::StrokeRecorder;
pub use session::MaskSession;
pub use store::StrokeStore;
pub use types::{
    BrushContext, Color, Dimensions, GesturePhase, MaskError, Point, PointerInput, RgbaImage,
    Stroke, StrokeId, SurfaceRect, MASK_OVERLAY, MIN_BRUSH_SIZE, OVERLAY_ALPHA,
};
