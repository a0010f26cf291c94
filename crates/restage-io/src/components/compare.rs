//! Before/after comparison slider.
//!
//! Stacks two same-sized images and clips the "after" layer at a
//! draggable split so the photo and its staged result can be compared
//! in place.

use dioxus::prelude::*;

/// Props for the [`CompareSlider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct CompareSliderProps {
    /// Image URL shown on the left of the split.
    before_url: String,
    /// Image URL shown on the right of the split.
    after_url: String,
}

/// Two stacked images with a draggable vertical split.
#[component]
pub fn CompareSlider(props: CompareSliderProps) -> Element {
    // Split position as a percentage of the width, 50/50 initially.
    let mut split = use_signal(|| 50.0_f64);

    let position = split();
    // The after layer is clipped away on the left of the split.
    let clip = format!("clip-path: inset(0 0 0 {position}%)");

    rsx! {
        div { class: "flex flex-col gap-2",
            div { class: "relative select-none",
                img {
                    src: "{props.before_url}",
                    alt: "Original photo",
                    class: "w-full h-auto rounded block",
                    draggable: false,
                }
                img {
                    src: "{props.after_url}",
                    alt: "Staged result",
                    class: "absolute inset-0 w-full h-auto rounded block",
                    style: "{clip}",
                    draggable: false,
                }
                div {
                    class: "absolute inset-y-0 w-0.5 bg-white/80 pointer-events-none",
                    style: "left: {position}%",
                }
            }
            input {
                r#type: "range",
                min: "0",
                max: "100",
                step: "1",
                value: "{position}",
                "aria-label": "Comparison split",
                class: "w-full accent-[var(--btn-primary)]",
                oninput: move |e| {
                    match e.value().parse::<f64>() {
                        Ok(v) => split.set(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("split parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
            div { class: "flex justify-between text-xs text-[var(--text-secondary)]",
                span { "Before" }
                span { "After" }
            }
        }
    }
}
