//! Brush parameter controls.
//!
//! Shown only while the mask tool is active: a brush-size slider and
//! an overlay visibility toggle in the labeled-control idiom used
//! across the app.

use dioxus::prelude::*;
use restage_mask::MIN_BRUSH_SIZE;

/// Largest brush width offered by the slider, in image pixels.
const MAX_BRUSH_SIZE: f64 = 80.0;

/// Props for the [`BrushControls`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BrushControlsProps {
    /// Current brush width in image pixels.
    brush_size: f32,
    /// Whether the overlay is currently shown.
    overlay_visible: bool,
    /// Fired with the new width when the slider moves.
    on_brush_size: EventHandler<f32>,
    /// Fired with the new visibility when the toggle flips.
    on_overlay_visible: EventHandler<bool>,
}

/// Brush size and overlay visibility controls.
#[component]
pub fn BrushControls(props: BrushControlsProps) -> Element {
    let on_brush_size = props.on_brush_size;
    let on_overlay_visible = props.on_overlay_visible;

    rsx! {
        div { class: "space-y-2",
            {render_slider(
                "brush_size",
                "Brush Size",
                f64::from(props.brush_size),
                f64::from(MIN_BRUSH_SIZE),
                MAX_BRUSH_SIZE,
                move |v: f64| {
                    #[allow(clippy::cast_possible_truncation)]
                    on_brush_size.call(v as f32);
                },
            )}
            {render_toggle(
                "overlay_visible",
                "Show Mask",
                props.overlay_visible,
                move |v: bool| on_overlay_visible.call(v),
            )}
        }
    }
}

/// Render a labeled range slider.
fn render_slider(
    id: &str,
    label: &str,
    value: f64,
    min: f64,
    max: f64,
    on_input: impl Fn(f64) + 'static,
) -> Element {
    let display = format!("{value:.0} px");
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "flex flex-col gap-1",
            div { class: "flex justify-between text-sm",
                label { r#for: "{id}",
                    class: "text-[var(--text-heading)] font-medium",
                    "{label}"
                }
                span { class: "text-[var(--text-secondary)] tabular-nums",
                    "{display}"
                }
            }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                step: "1",
                value: "{value}",
                class: "w-full accent-[var(--btn-primary)]",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}

/// Render a labeled toggle (checkbox styled as switch).
fn render_toggle(
    id: &str,
    label: &str,
    checked: bool,
    on_change: impl Fn(bool) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "flex items-center justify-between",
            label { r#for: "{id}",
                class: "text-sm text-[var(--text-heading)] font-medium",
                "{label}"
            }
            input {
                r#type: "checkbox",
                id: "{id}",
                checked: checked,
                class: "w-5 h-5 accent-[var(--btn-primary)]",
                onchange: move |e| {
                    on_change(e.checked());
                },
            }
        }
    }
}
