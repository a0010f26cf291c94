//! Integration test: drive a full painting session through device
//! coordinates and verify the committed strokes and composite pixels.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use restage_mask::{
    Dimensions, MaskSession, PointerInput, RgbaImage, SurfaceRect,
};

/// A light gray photo, 120x80, displayed at half size offset in the page.
fn scaled_session() -> MaskSession {
    let mut session = MaskSession::new();
    session.load_image(&RgbaImage::from_pixel(
        120,
        80,
        image::Rgba([200, 200, 200, 255]),
    ));
    session.set_surface_rect(SurfaceRect::new(40.0, 10.0, 60.0, 40.0));
    session
}

fn pixel(session: &MaskSession, x: u32, y: u32) -> [u8; 4] {
    let p = session
        .surface()
        .expect("surface should exist after load")
        .pixel(x, y)
        .expect("pixel in bounds")
        .demultiply();
    [p.red(), p.green(), p.blue(), p.alpha()]
}

#[test]
fn paint_toggle_clear_round_trip() {
    let mut session = scaled_session();
    assert_eq!(
        session.dimensions(),
        Some(Dimensions {
            width: 120,
            height: 80,
        }),
    );
    session.set_brush_size(10.0);

    let untouched = pixel(&session, 10, 70);

    // Drag horizontally across the middle of the displayed surface.
    // Device y = 30 maps to image y = (30 - 10) * (80 / 40) = 40.
    session.pointer(PointerInput::begin(45.0, 30.0));
    for device_x in [55.0, 65.0, 75.0, 85.0] {
        session.pointer(PointerInput::moved(device_x, 30.0));
    }

    // Live feedback is visible mid-gesture.
    let live = pixel(&session, 60, 40);
    assert_ne!(live, untouched, "live stroke should tint the surface");

    session.pointer(PointerInput::end());

    // Exactly one committed stroke with 2 coordinates per sample.
    assert_eq!(session.strokes().len(), 1);
    let stroke = &session.strokes()[0];
    assert_eq!(stroke.pair_count(), 5);
    assert_eq!(stroke.points().len(), 10);

    // Device x = 45 maps to image x = (45 - 40) * (120 / 60) = 10.
    assert!((stroke.points()[0] - 10.0).abs() < 1e-9);
    assert!((stroke.points()[1] - 40.0).abs() < 1e-9);

    let painted = pixel(&session, 60, 40);
    assert_ne!(painted, untouched);

    // Hiding the overlay shows only the photo; showing it again
    // reproduces the identical composite.
    let before_toggle = session.surface().unwrap().data().to_vec();
    session.set_overlay_visible(false);
    assert_eq!(pixel(&session, 60, 40), untouched);
    session.set_overlay_visible(true);
    assert_eq!(session.surface().unwrap().data(), &before_toggle[..]);

    // The eraser clears geometry but keeps visibility.
    session.clear_strokes();
    assert!(session.strokes().is_empty());
    assert!(session.is_overlay_visible());
    assert_eq!(pixel(&session, 60, 40), untouched);
}

#[test]
fn tap_commits_nothing_and_leaves_photo_clean() {
    let mut session = scaled_session();
    let baseline = session.surface().unwrap().data().to_vec();

    session.pointer(PointerInput::begin(50.0, 30.0));
    session.pointer(PointerInput::end());

    assert!(session.strokes().is_empty());
    assert_eq!(session.surface().unwrap().data(), &baseline[..]);
}

#[test]
fn second_stroke_paints_over_first() {
    let mut session = scaled_session();
    session.set_brush_size(8.0);

    // Two crossing diagonal gestures.
    session.pointer(PointerInput::begin(45.0, 15.0));
    session.pointer(PointerInput::moved(95.0, 45.0));
    session.pointer(PointerInput::end());

    session.pointer(PointerInput::begin(45.0, 45.0));
    session.pointer(PointerInput::moved(95.0, 15.0));
    session.pointer(PointerInput::end());

    assert_eq!(session.strokes().len(), 2);
    assert!(session.strokes()[0].id() < session.strokes()[1].id());
}
