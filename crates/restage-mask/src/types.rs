//! Shared types for the restage mask painting engine.

use serde::{Deserialize, Serialize};

/// Re-export `RgbaImage` so downstream crates can hand decoded photos
/// to the engine without depending on `image` directly.
pub use image::RgbaImage;

/// Overlay color painted over masked regions (`#A855F7`).
pub const MASK_OVERLAY: Color = Color {
    r: 0xA8,
    g: 0x55,
    b: 0xF7,
};

/// Fixed overlay opacity. Committed and in-progress strokes are always
/// painted at this alpha so the photo stays readable underneath.
pub const OVERLAY_ALPHA: f32 = 0.6;

/// Smallest brush width the engine will accept, in image pixels.
pub const MIN_BRUSH_SIZE: f32 = 1.0;

/// A 2D point in image pixel-space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal position (pixels from the left edge).
    pub x: f64,
    /// Vertical position (pixels from the top edge).
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Intrinsic image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// The rendered surface's bounding rectangle in device coordinates.
///
/// This is what `getBoundingClientRect` reports for the canvas element:
/// the origin offset of the surface within the viewport plus the size it
/// currently occupies on screen, which may differ from the intrinsic
/// image dimensions in either axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    /// Left edge in device coordinates.
    pub left: f64,
    /// Top edge in device coordinates.
    pub top: f64,
    /// Rendered width. Zero while the surface has not been laid out.
    pub width: f64,
    /// Rendered height. Zero while the surface has not been laid out.
    pub height: f64,
}

impl SurfaceRect {
    /// Create a new surface rectangle.
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// An opaque RGB stroke color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Unique identifier for a committed stroke, assigned by the store at
/// commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StrokeId(pub u64);

/// A committed paint gesture: an immutable polyline in image
/// pixel-space with a fixed width and color.
///
/// `points` stores interleaved `(x, y)` pairs, so it always has even
/// length and at least 4 entries (2 coordinate pairs). The engine never
/// mutates a stroke after commit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<f64>,
    brush_size: f32,
    color: Color,
}

impl Stroke {
    /// Build a stroke from interleaved `(x, y)` coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::OddPointList`] if `points` has odd length,
    /// [`MaskError::TooFewPoints`] if it holds fewer than 2 coordinate
    /// pairs, and [`MaskError::InvalidBrushSize`] if `brush_size` is not
    /// a positive finite number.
    pub fn new(
        id: StrokeId,
        points: Vec<f64>,
        brush_size: f32,
        color: Color,
    ) -> Result<Self, MaskError> {
        if points.len() % 2 != 0 {
            return Err(MaskError::OddPointList { len: points.len() });
        }
        if points.len() < 4 {
            return Err(MaskError::TooFewPoints {
                pairs: points.len() / 2,
            });
        }
        if !(brush_size.is_finite() && brush_size > 0.0) {
            return Err(MaskError::InvalidBrushSize { size: brush_size });
        }
        Ok(Self {
            id,
            points,
            brush_size,
            color,
        })
    }

    /// Build a stroke from a sequence of coordinate pairs.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Stroke::new`], except an odd-length list
    /// cannot occur by construction.
    pub fn from_pairs(
        id: StrokeId,
        pairs: &[Point],
        brush_size: f32,
        color: Color,
    ) -> Result<Self, MaskError> {
        let mut points = Vec::with_capacity(pairs.len() * 2);
        for p in pairs {
            points.push(p.x);
            points.push(p.y);
        }
        Self::new(id, points, brush_size, color)
    }

    /// The stroke's unique identifier.
    #[must_use]
    pub const fn id(&self) -> StrokeId {
        self.id
    }

    /// Interleaved `(x, y)` coordinates, in arrival order.
    #[must_use]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// Iterate the stroke's coordinate pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.chunks_exact(2).map(|c| Point::new(c[0], c[1]))
    }

    /// Number of coordinate pairs in the stroke.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Line width the stroke was committed with, in image pixels.
    #[must_use]
    pub const fn brush_size(&self) -> f32 {
        self.brush_size
    }

    /// The stroke's color.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// Shared brush configuration read by both the recorder (at commit
/// time) and the compositor (for the live stroke).
///
/// Single-writer discipline: only the owning session mutates this;
/// everything else receives it by shared reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushContext {
    /// Line width in image pixels. Always at least [`MIN_BRUSH_SIZE`].
    pub brush_size: f32,
    /// Stroke color, fixed per session.
    pub color: Color,
}

impl Default for BrushContext {
    fn default() -> Self {
        Self {
            brush_size: 20.0,
            color: MASK_OVERLAY,
        }
    }
}

/// Lifecycle phase of a normalized pointer signal.
///
/// Mouse down / touch start map to `Begin`; mouse move / touch move to
/// `Move`; mouse up, mouse leave, and touch end all map uniformly to
/// `End` — there is no distinct cancel signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    /// A gesture is starting at the carried position.
    Begin,
    /// The gesture continues through the carried position.
    Move,
    /// The gesture is over. The carried position is not meaningful.
    End,
}

/// One normalized input signal in device coordinates, produced by the
/// input dispatcher from either a mouse or a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerInput {
    /// Device-space position (`clientX`, `clientY`).
    pub position: Point,
    /// Where in the gesture lifecycle this signal falls.
    pub phase: GesturePhase,
}

impl PointerInput {
    /// A `Begin` signal at the given device position.
    #[must_use]
    pub const fn begin(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            phase: GesturePhase::Begin,
        }
    }

    /// A `Move` signal at the given device position.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            phase: GesturePhase::Move,
        }
    }

    /// An `End` signal. Carries the origin as a placeholder position.
    #[must_use]
    pub const fn end() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            phase: GesturePhase::End,
        }
    }
}

/// Errors that can occur when constructing or storing strokes.
///
/// Input-path failures (unloaded image, zero-area surface, short
/// gestures) are deliberately *not* errors — they degrade to no-ops so
/// a dropped frame of interaction never crashes the paint surface.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// A stroke's point list has odd length and cannot be interpreted
    /// as `(x, y)` pairs.
    #[error("stroke point list has odd length {len}")]
    OddPointList {
        /// Length of the rejected point list.
        len: usize,
    },

    /// A stroke holds fewer than 2 coordinate pairs.
    #[error("stroke needs at least 2 coordinate pairs, got {pairs}")]
    TooFewPoints {
        /// Number of coordinate pairs in the rejected stroke.
        pairs: usize,
    },

    /// A stroke's brush size is zero, negative, or not finite.
    #[error("brush size must be positive and finite, got {size}")]
    InvalidBrushSize {
        /// The rejected brush size.
        size: f32,
    },
}
