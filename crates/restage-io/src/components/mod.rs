//! Dioxus UI components for restage.
//!
//! Provides the photo upload drop zone, the mask painting canvas, the
//! edit-screen toolbar, brush controls, the prompt composer, and the
//! before/after comparison slider.

mod brush_controls;
mod compare;
mod mask_canvas;
mod prompt;
mod toolbar;
mod upload;

pub use brush_controls::BrushControls;
pub use compare::CompareSlider;
pub use mask_canvas::MaskCanvas;
pub use prompt::PromptComposer;
pub use toolbar::EditToolbar;
pub use upload::PhotoUpload;
