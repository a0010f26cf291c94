//! Edit-screen toolbar.
//!
//! Back navigation, the mask-mode toggle, the eraser, overlay
//! visibility, and the composite download, rendered as a row of icon
//! buttons.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCornerUpLeft, LdDownload, LdEraser, LdEye, LdEyeOff, LdPaintRoller,
};
use dioxus_free_icons::Icon;

use crate::tool::Tool;

/// Props for the [`EditToolbar`] component.
#[derive(Props, Clone, PartialEq)]
pub struct EditToolbarProps {
    /// Currently active tool (highlights the mask toggle).
    tool: Tool,
    /// Whether the overlay is currently shown (selects the eye icon).
    overlay_visible: bool,
    /// Whether any committed strokes exist (enables the eraser).
    has_strokes: bool,
    /// Leave the edit screen and return to upload.
    on_back: EventHandler<()>,
    /// Toggle between [`Tool::Edit`] and [`Tool::Mask`].
    on_toggle_tool: EventHandler<()>,
    /// Remove all committed strokes.
    on_erase: EventHandler<()>,
    /// Show or hide the painted overlay.
    on_toggle_overlay: EventHandler<()>,
    /// Download the composited surface as a PNG.
    on_download: EventHandler<()>,
}

/// The row of edit-screen actions.
#[component]
pub fn EditToolbar(props: EditToolbarProps) -> Element {
    let mask_active = props.tool.is_mask();

    rsx! {
        div { class: "flex items-center gap-2",
            {icon_button(
                "Back to upload",
                rsx! { Icon { icon: LdCornerUpLeft, width: 18, height: 18 } },
                false,
                false,
                move |()| props.on_back.call(()),
            )}

            div { class: "w-px h-6 bg-[var(--border)]" }

            {icon_button(
                if mask_active { "Stop painting mask" } else { "Paint mask" },
                rsx! { Icon { icon: LdPaintRoller, width: 18, height: 18 } },
                mask_active,
                false,
                move |()| props.on_toggle_tool.call(()),
            )}
            {icon_button(
                "Clear mask",
                rsx! { Icon { icon: LdEraser, width: 18, height: 18 } },
                false,
                !props.has_strokes,
                move |()| props.on_erase.call(()),
            )}
            {toggle_icon_button(
                props.overlay_visible,
                move |()| props.on_toggle_overlay.call(()),
            )}

            div { class: "w-px h-6 bg-[var(--border)]" }

            {icon_button(
                "Download composite",
                rsx! { Icon { icon: LdDownload, width: 18, height: 18 } },
                false,
                false,
                move |()| props.on_download.call(()),
            )}
        }
    }
}

/// The overlay visibility button swaps between the eye icons, so it
/// cannot share the generic helper's single icon parameter.
fn toggle_icon_button(visible: bool, on_click: impl Fn(()) + 'static) -> Element {
    let icon = if visible {
        rsx! { Icon { icon: LdEye, width: 18, height: 18 } }
    } else {
        rsx! { Icon { icon: LdEyeOff, width: 18, height: 18 } }
    };
    let title = if visible { "Hide mask" } else { "Show mask" };
    icon_button(title, icon, false, false, on_click)
}

/// Render one toolbar icon button.
fn icon_button(
    title: &str,
    icon: Element,
    active: bool,
    disabled: bool,
    on_click: impl Fn(()) + 'static,
) -> Element {
    let title = title.to_string();
    let state_class = if active {
        "bg-[var(--btn-primary)] text-white"
    } else {
        "bg-[var(--surface)] text-[var(--text)] hover:bg-[var(--surface-active)]"
    };

    rsx! {
        button {
            r#type: "button",
            title: "{title}",
            disabled: disabled,
            class: "p-2 rounded border border-[var(--border)] transition-colors
                    disabled:opacity-40 disabled:pointer-events-none {state_class}",
            onclick: move |_| on_click(()),
            {icon}
        }
    }
}
