//! The mask painting surface.
//!
//! An HTML `<canvas>` wired to a shared [`MaskSession`]: DOM mouse and
//! touch events are normalized through the [`PointerDispatcher`], the
//! session recomposites synchronously, and an effect keyed on the
//! session's redraw counter blits the new surface into the canvas.

use dioxus::prelude::*;
use restage_mask::{MaskSession, PointerInput};

use crate::pointer::PointerDispatcher;
use crate::surface;

/// DOM id of the painting canvas. One painting surface exists at a
/// time, so a fixed id keeps the measure/blit lookups simple.
pub const CANVAS_ID: &str = "restage-mask-canvas";

/// Props for the [`MaskCanvas`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MaskCanvasProps {
    /// The shared painting session. The canvas is one of several
    /// writers (toolbar and brush controls also mutate it).
    session: Signal<MaskSession>,
    /// Whether the mask tool is active. When inactive the canvas still
    /// displays the composite but ignores pointer input.
    active: bool,
}

/// The photo display and mask painting canvas.
///
/// While the mask tool is active, drags and touches paint overlay
/// strokes; the canvas re-measures its on-screen rectangle at every
/// gesture event so mapping stays correct across scrolls and resizes.
#[component]
pub fn MaskCanvas(props: MaskCanvasProps) -> Element {
    let mut session = props.session;
    let active = props.active;
    let mut dispatcher = use_signal(PointerDispatcher::new);

    // Blit whenever the session recomposites. Reading the counter
    // subscribes this effect to every session mutation; sessions that
    // mutate without recompositing (brush size, rect) re-blit the same
    // surface, which is harmless.
    use_effect(move || {
        let session = session.read();
        let _ = session.redraw_count();
        if let Some(pixmap) = session.surface()
            && let Err(e) = surface::present(CANVAS_ID, pixmap)
        {
            web_sys::console::warn_1(&format!("canvas blit failed: {e}").into());
        }
    });

    // Re-measure the canvas and feed one normalized signal, if the
    // dispatcher produced one for this event.
    let mut forward = move |input: Option<PointerInput>| {
        let Some(input) = input else { return };
        match surface::bounding_rect(CANVAS_ID) {
            Ok(rect) => {
                let mut session = session.write();
                session.set_surface_rect(rect);
                session.pointer(input);
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("canvas measure failed: {e}").into());
            }
        }
    };

    let cursor = if active {
        "cursor-crosshair touch-none"
    } else {
        "cursor-default"
    };

    rsx! {
        canvas {
            id: CANVAS_ID,
            class: "w-full h-auto rounded select-none {cursor}",

            onmousedown: move |evt| {
                if !active {
                    return;
                }
                evt.prevent_default();
                let p = evt.client_coordinates();
                forward(dispatcher.write().mouse_down(p.x, p.y));
            },
            onmousemove: move |evt| {
                if !active || !dispatcher.read().is_active() {
                    return;
                }
                evt.prevent_default();
                let p = evt.client_coordinates();
                forward(dispatcher.write().mouse_move(p.x, p.y));
            },
            onmouseup: move |evt| {
                if !active {
                    return;
                }
                evt.prevent_default();
                forward(dispatcher.write().mouse_up());
            },
            // Leaving the surface mid-drag commits the stroke painted
            // so far instead of resuming on re-entry.
            onmouseleave: move |_| {
                forward(dispatcher.write().mouse_leave());
            },

            ontouchstart: move |evt| {
                if !active {
                    return;
                }
                evt.prevent_default();
                for touch in evt.touches_changed() {
                    let p = touch.client_coordinates();
                    forward(dispatcher.write().touch_start(touch.identifier(), p.x, p.y));
                }
            },
            ontouchmove: move |evt| {
                if !active {
                    return;
                }
                evt.prevent_default();
                for touch in evt.touches_changed() {
                    let p = touch.client_coordinates();
                    forward(dispatcher.write().touch_move(touch.identifier(), p.x, p.y));
                }
            },
            ontouchend: move |evt| {
                if !active {
                    return;
                }
                evt.prevent_default();
                for touch in evt.touches_changed() {
                    forward(dispatcher.write().touch_end(touch.identifier()));
                }
            },
            ontouchcancel: move |evt| {
                for touch in evt.touches_changed() {
                    forward(dispatcher.write().touch_end(touch.identifier()));
                }
            },
        }
    }
}
