//! Natural-language edit prompt composer.

use dioxus::prelude::*;

/// Props for the [`PromptComposer`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PromptComposerProps {
    /// Current prompt text (owned by the app root).
    prompt: String,
    /// Whether a submission is in flight; disables the form.
    busy: bool,
    /// Fired on every edit with the full new text.
    on_change: EventHandler<String>,
    /// Fired when the user submits a non-empty prompt.
    on_submit: EventHandler<()>,
}

/// A textarea plus submit button for describing the desired edit.
///
/// Submission is blocked while the prompt is blank or a previous
/// submission is still pending.
#[component]
pub fn PromptComposer(props: PromptComposerProps) -> Element {
    let blank = props.prompt.trim().is_empty();
    let on_submit = props.on_submit;
    let button_label = if props.busy { "Applying..." } else { "Apply Edit" };

    rsx! {
        div { class: "flex flex-col gap-2",
            label { r#for: "edit_prompt",
                class: "text-sm text-[var(--text-heading)] font-medium",
                "Describe the change"
            }
            textarea {
                id: "edit_prompt",
                rows: "3",
                placeholder: "e.g. replace the sofa with a mid-century leather couch",
                disabled: props.busy,
                value: "{props.prompt}",
                class: "w-full px-3 py-2 rounded border border-[var(--border)]
                        bg-[var(--surface)] text-[var(--text)] text-sm resize-y",
                oninput: move |e| props.on_change.call(e.value()),
            }
            button {
                r#type: "button",
                disabled: props.busy || blank,
                class: "self-end px-4 py-2 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)]
                        rounded text-white font-medium transition-colors
                        disabled:opacity-40 disabled:pointer-events-none",
                onclick: move |_| on_submit.call(()),
                "{button_label}"
            }
        }
    }
}
