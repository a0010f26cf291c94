//! Pointer event normalization.
//!
//! Mouse and touch events arrive through different DOM interfaces with
//! different shapes. This module folds both into the engine's
//! [`PointerInput`] signal so the rest of the stack never distinguishes
//! input devices.
//!
//! Tracking rules:
//! - Mouse: button down begins a gesture; moves are forwarded only
//!   while the button is held; button up (or the cursor leaving the
//!   canvas) ends it.
//! - Touch: only the first touch of a gesture paints. Additional
//!   fingers landing mid-gesture are ignored, and lifting one of them
//!   does not end the stroke -- only the tracked finger does.

use restage_mask::PointerInput;

/// Folds raw mouse/touch events into normalized [`PointerInput`]s.
///
/// One dispatcher instance lives per painting surface. Methods return
/// `None` for events that do not belong to the active gesture (moves
/// without a held button, secondary fingers); callers forward `Some`
/// values straight to the engine.
#[derive(Debug, Default)]
pub struct PointerDispatcher {
    mouse_held: bool,
    active_touch: Option<i32>,
}

impl PointerDispatcher {
    /// A dispatcher with no gesture in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mouse_held: false,
            active_touch: None,
        }
    }

    /// Whether a gesture (mouse or touch) is currently being tracked.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.mouse_held || self.active_touch.is_some()
    }

    /// Mouse button pressed at client coordinates.
    pub fn mouse_down(&mut self, x: f64, y: f64) -> Option<PointerInput> {
        if self.active_touch.is_some() {
            return None;
        }
        self.mouse_held = true;
        Some(PointerInput::begin(x, y))
    }

    /// Mouse moved; forwarded only while the button is held.
    pub fn mouse_move(&mut self, x: f64, y: f64) -> Option<PointerInput> {
        self.mouse_held.then(|| PointerInput::moved(x, y))
    }

    /// Mouse button released.
    pub fn mouse_up(&mut self) -> Option<PointerInput> {
        std::mem::take(&mut self.mouse_held).then(PointerInput::end)
    }

    /// Cursor left the painting surface mid-drag.
    ///
    /// Treated as the end of the gesture: the stroke painted so far is
    /// committed rather than silently continued when the cursor
    /// re-enters.
    pub fn mouse_leave(&mut self) -> Option<PointerInput> {
        self.mouse_up()
    }

    /// New touch landed, identified by the DOM touch identifier.
    ///
    /// Returns `Some` only for the first touch of a gesture.
    pub fn touch_start(&mut self, id: i32, x: f64, y: f64) -> Option<PointerInput> {
        if self.is_active() {
            return None;
        }
        self.active_touch = Some(id);
        Some(PointerInput::begin(x, y))
    }

    /// A tracked or untracked touch moved.
    pub fn touch_move(&mut self, id: i32, x: f64, y: f64) -> Option<PointerInput> {
        (self.active_touch == Some(id)).then(|| PointerInput::moved(x, y))
    }

    /// A touch lifted or was cancelled by the platform.
    pub fn touch_end(&mut self, id: i32) -> Option<PointerInput> {
        if self.active_touch == Some(id) {
            self.active_touch = None;
            Some(PointerInput::end())
        } else {
            None
        }
    }

    /// Abort whatever gesture is in progress, ending it if one exists.
    pub fn reset(&mut self) -> Option<PointerInput> {
        let was_active = self.is_active();
        self.mouse_held = false;
        self.active_touch = None;
        was_active.then(PointerInput::end)
    }
}
