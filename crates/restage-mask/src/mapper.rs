//! Device-to-image coordinate mapping.
//!
//! The painting surface is displayed at whatever size the page layout
//! gives it, while strokes are recorded in the photo's intrinsic
//! pixel-space. This module converts pointer positions from device
//! coordinates into image pixel-space by scaling against the surface's
//! current bounding rectangle.
//!
//! Scaling is intentionally per-axis: if the layout distorts the
//! surface's aspect ratio, mapped coordinates follow the distortion so
//! painted strokes still land under the pointer.

use crate::types::{Dimensions, Point, SurfaceRect};

/// Convert a device-space position to image pixel-space.
///
/// `client_x` / `client_y` are viewport coordinates (`clientX`,
/// `clientY`), `rect` is the surface's current bounding rectangle, and
/// `intrinsic` is the photo's natural resolution.
///
/// Returns the origin when the surface has zero width or height (not
/// yet laid out) instead of dividing by zero.
#[must_use]
pub fn to_image_space(
    client_x: f64,
    client_y: f64,
    rect: SurfaceRect,
    intrinsic: Dimensions,
) -> Point {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Point::new(0.0, 0.0);
    }

    let scale_x = f64::from(intrinsic.width) / rect.width;
    let scale_y = f64::from(intrinsic.height) / rect.height;

    Point::new(
        (client_x - rect.left) * scale_x,
        (client_y - rect.top) * scale_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const HD: Dimensions = Dimensions {
        width: 1920,
        height: 1080,
    };

    #[test]
    fn identity_when_rendered_at_intrinsic_size() {
        let rect = SurfaceRect::new(0.0, 0.0, 1920.0, 1080.0);
        let p = to_image_space(640.0, 360.0, rect, HD);
        assert_eq!(p, Point::new(640.0, 360.0));
    }

    #[test]
    fn subtracts_rect_origin() {
        let rect = SurfaceRect::new(100.0, 50.0, 1920.0, 1080.0);
        let p = to_image_space(100.0, 50.0, rect, HD);
        assert_eq!(p, Point::new(0.0, 0.0));

        let p = to_image_space(740.0, 410.0, rect, HD);
        assert_eq!(p, Point::new(640.0, 360.0));
    }

    #[test]
    fn scales_up_when_displayed_smaller() {
        // Surface displayed at half size: device deltas double in image space.
        let rect = SurfaceRect::new(0.0, 0.0, 960.0, 540.0);
        let p = to_image_space(480.0, 270.0, rect, HD);
        assert_eq!(p, Point::new(960.0, 540.0));
    }

    #[test]
    fn non_uniform_scaling_is_allowed() {
        // Width halved, height untouched: x doubles, y passes through.
        let rect = SurfaceRect::new(0.0, 0.0, 960.0, 1080.0);
        let p = to_image_space(100.0, 100.0, rect, HD);
        assert_eq!(p, Point::new(200.0, 100.0));
    }

    #[test]
    fn zero_width_returns_origin() {
        let rect = SurfaceRect::new(10.0, 10.0, 0.0, 500.0);
        let p = to_image_space(300.0, 300.0, rect, HD);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn zero_height_returns_origin() {
        let rect = SurfaceRect::new(10.0, 10.0, 500.0, 0.0);
        let p = to_image_space(300.0, 300.0, rect, HD);
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn mapping_is_scale_invariant() {
        // The same relative pointer position maps to the same relative
        // image point regardless of absolute sizes.
        let small = Dimensions {
            width: 400,
            height: 300,
        };
        let large = Dimensions {
            width: 1600,
            height: 1200,
        };

        // Pointer at 50% width, 50% height of each rendered surface.
        let p_small = to_image_space(
            100.0,
            75.0,
            SurfaceRect::new(0.0, 0.0, 200.0, 150.0),
            small,
        );
        let p_large = to_image_space(
            400.0,
            300.0,
            SurfaceRect::new(0.0, 0.0, 800.0, 600.0),
            large,
        );

        assert!((p_small.x / f64::from(small.width) - 0.5).abs() < 1e-12);
        assert!((p_small.y / f64::from(small.height) - 0.5).abs() < 1e-12);
        assert!((p_large.x / f64::from(large.width) - 0.5).abs() < 1e-12);
        assert!((p_large.y / f64::from(large.height) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pointer_outside_rect_maps_outside_image() {
        // No clamping: callers get raw projected coordinates.
        let rect = SurfaceRect::new(0.0, 0.0, 1920.0, 1080.0);
        let p = to_image_space(-10.0, 2000.0, rect, HD);
        assert_eq!(p, Point::new(-10.0, 2000.0));
    }
}
