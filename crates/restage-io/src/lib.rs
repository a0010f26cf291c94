//! restage-io: Browser I/O and Dioxus component library.
//!
//! Normalizes mouse and touch DOM events into the engine's pointer
//! signal, presents the composited surface on an HTML canvas, handles
//! photo uploads and downloads, and provides the reusable UI
//! components for the restage web application.

pub mod components;
pub mod download;
pub mod pointer;
pub mod surface;
pub mod tool;

pub use components::{
    BrushControls, CompareSlider, EditToolbar, MaskCanvas, PhotoUpload, PromptComposer,
};
pub use pointer::PointerDispatcher;
pub use tool::Tool;
