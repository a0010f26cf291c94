//! Full clear-and-redraw compositing of photo plus stroke overlay.
//!
//! Every trigger (new point, gesture end, visibility toggle, store
//! clear, new photo) reproduces the whole surface from scratch: base
//! image first, then committed strokes in commit order, then the
//! in-progress stroke on top for live feedback. Stroke counts per
//! session are small, so redrawing everything keeps the output a pure
//! function of the current state.

use tiny_skia::{
    LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::recorder::StrokeRecorder;
use crate::store::StrokeStore;
use crate::types::{BrushContext, Color, Point, RgbaImage, OVERLAY_ALPHA};

/// Convert a decoded RGBA photo into a premultiplied pixmap the
/// compositor can draw from.
///
/// Returns `None` for zero-sized images.
#[must_use]
pub fn rgba_to_pixmap(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = tiny_skia::ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Redraw the full composite into `target`.
///
/// 1. Clear and draw `base` at its intrinsic resolution, anchored at
///    the origin.
/// 2. Stop if the overlay is hidden.
/// 3. Paint committed strokes in commit order: source-over, fixed
///    [`OVERLAY_ALPHA`], round caps and joins, each stroke at its own
///    committed width and color.
/// 4. If a gesture is in progress with at least 2 points, paint it last
///    at the live ambient brush width so it shows on top of everything.
pub fn composite(
    target: &mut Pixmap,
    base: &Pixmap,
    store: &StrokeStore,
    recorder: &StrokeRecorder,
    brush: &BrushContext,
) {
    target.fill(tiny_skia::Color::TRANSPARENT);
    target.draw_pixmap(
        0,
        0,
        base.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        None,
    );

    if !store.is_visible() {
        return;
    }

    for stroke in store.list() {
        if stroke.pair_count() < 2 {
            continue;
        }
        stroke_polyline(
            target,
            stroke.pairs(),
            stroke.brush_size(),
            stroke.color(),
        );
    }

    if recorder.is_drawing() && recorder.live_points().len() >= 2 {
        stroke_polyline(
            target,
            recorder.live_points().iter().copied(),
            brush.brush_size,
            brush.color,
        );
    }
}

/// Stroke a single connected polyline through `points` in order.
fn stroke_polyline(
    target: &mut Pixmap,
    points: impl Iterator<Item = Point>,
    width: f32,
    color: Color,
) {
    let Some(path) = build_path(points) else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(overlay_color(color));
    paint.anti_alias = true;

    let style = tiny_skia::Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..tiny_skia::Stroke::default()
    };

    target.stroke_path(&path, &paint, &style, Transform::identity(), None);
}

/// Build a path visiting `points` in order, `None` if fewer than 2.
fn build_path(points: impl Iterator<Item = Point>) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    let mut count = 0usize;
    #[allow(clippy::cast_possible_truncation)]
    for p in points {
        if count == 0 {
            builder.move_to(p.x as f32, p.y as f32);
        } else {
            builder.line_to(p.x as f32, p.y as f32);
        }
        count += 1;
    }
    if count < 2 {
        return None;
    }
    builder.finish()
}

/// The overlay paint color: the stroke's RGB at the fixed overlay alpha.
fn overlay_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(
        f32::from(color.r) / 255.0,
        f32::from(color.g) / 255.0,
        f32::from(color.b) / 255.0,
        OVERLAY_ALPHA,
    )
    .unwrap_or(tiny_skia::Color::BLACK)
}
