use dioxus::prelude::*;
use restage_io::{
    surface, BrushControls, CompareSlider, EditToolbar, MaskCanvas, PhotoUpload, PromptComposer,
    Tool,
};
use restage_io::download;
use restage_mask::{Dimensions, MaskSession, Stroke};
use serde::Serialize;

fn main() {
    dioxus::launch(app);
}

/// Everything a staging backend would need to apply the requested
/// edit: the prompt, the mask strokes in image pixel-space, and the
/// photo dimensions they were painted against.
#[derive(Debug, Clone, Serialize)]
struct EditRequest {
    prompt: String,
    strokes: Vec<Stroke>,
    dimensions: Option<Dimensions>,
}

/// MIME type for an uploaded photo, from its filename extension.
fn mime_for(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "jpg" || ext == "jpeg" => "image/jpeg",
        Some(ext) if ext == "bmp" => "image/bmp",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "image/png",
    }
}

/// Root application component.
///
/// Manages the core application state via Dioxus signals and wires
/// together the upload, mask canvas, toolbar, brush controls, prompt,
/// and compare components.
#[allow(clippy::too_many_lines)]
fn app() -> Element {
    // --- Application state ---
    let mut session = use_signal(MaskSession::new);
    let mut photo_url = use_signal(|| Option::<String>::None);
    let mut filename = use_signal(|| String::from("photo"));
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut generation = use_signal(|| 0u64);
    let mut tool = use_signal(Tool::default);
    let mut prompt = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut last_request = use_signal(|| Option::<String>::None);
    let mut compare_url = use_signal(|| Option::<String>::None);

    // --- File upload handler ---
    // Decodes off the event path: the loading indicator renders before
    // the synchronous decode blocks the thread.
    let on_upload = move |(bytes, name): (Vec<u8>, String)| {
        let base_name = name
            .rsplit_once('.')
            .map_or(name.as_str(), |(base, _)| base)
            .to_owned();
        filename.set(base_name);
        error.set(None);
        loading.set(true);

        // Increment generation so an in-flight decode from a prior
        // upload knows it is stale and should discard its result.
        generation += 1;
        let my_generation = *generation.peek();

        spawn(async move {
            // Yield to the browser event loop so it can paint the
            // loading state before we block on the decode.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let decoded = image::load_from_memory(&bytes);
            if *generation.peek() != my_generation {
                return;
            }

            match decoded {
                Ok(img) => {
                    if let Some(ref old) = photo_url.take() {
                        surface::revoke_blob_url(old);
                    }
                    match surface::bytes_to_blob_url(&bytes, mime_for(&name)) {
                        Ok(url) => photo_url.set(Some(url)),
                        Err(e) => {
                            web_sys::console::warn_1(
                                &format!("photo blob url failed: {e}").into(),
                            );
                        }
                    }

                    let mut fresh = MaskSession::new();
                    fresh.load_image(&img.to_rgba8());
                    session.set(fresh);
                    tool.set(Tool::default());
                    prompt.set(String::new());
                    last_request.set(None);
                }
                Err(e) => {
                    error.set(Some(format!("Could not decode {name}: {e}")));
                }
            }
            loading.set(false);
        });
    };

    // --- Toolbar handlers ---
    let on_back = move |()| {
        if let Some(ref url) = photo_url.take() {
            surface::revoke_blob_url(url);
        }
        if let Some(ref url) = compare_url.take() {
            surface::revoke_blob_url(url);
        }
        session.set(MaskSession::new());
        tool.set(Tool::default());
        prompt.set(String::new());
        last_request.set(None);
        error.set(None);
    };

    let mut close_compare = move || {
        if let Some(ref url) = compare_url.take() {
            surface::revoke_blob_url(url);
        }
    };

    let on_toggle_tool = move |()| {
        // The compare view and the painting surface are exclusive.
        close_compare();
        let next = tool.peek().toggled();
        tool.set(next);
    };

    let on_erase = move |()| {
        session.write().clear_strokes();
    };

    let on_toggle_overlay = move |()| {
        let visible = session.peek().is_overlay_visible();
        session.write().set_overlay_visible(!visible);
    };

    let on_download = move |()| {
        let result = {
            let session = session.peek();
            session
                .surface()
                .map(surface::encode_png)
        };
        match result {
            Some(Ok(png)) => {
                let name = format!("{}-staged.png", filename.peek());
                if let Err(e) = download::trigger_download(&png, &name, "image/png") {
                    error.set(Some(format!("Download failed: {e}")));
                }
            }
            Some(Err(e)) => error.set(Some(format!("Could not encode composite: {e}"))),
            None => {}
        }
    };

    let on_compare = move |_| {
        if compare_url.peek().is_some() {
            close_compare();
            return;
        }
        let url = {
            let session = session.peek();
            session.surface().map(surface::png_blob_url)
        };
        match url {
            Some(Ok(url)) => {
                tool.set(Tool::Edit);
                compare_url.set(Some(url));
            }
            Some(Err(e)) => error.set(Some(format!("Could not build comparison: {e}"))),
            None => {}
        }
    };

    // --- Prompt submission ---
    // The staging backend is out of scope here; the composed request
    // (prompt + strokes + dimensions) is the output boundary. It is
    // serialized, logged, and displayed for inspection.
    let on_submit = move |()| {
        submitting.set(true);
        spawn(async move {
            gloo_timers::future::TimeoutFuture::new(0).await;

            let request = {
                let session = session.peek();
                EditRequest {
                    prompt: prompt.peek().clone(),
                    strokes: session.strokes().to_vec(),
                    dimensions: session.dimensions(),
                }
            };
            match serde_json::to_string_pretty(&request) {
                Ok(json) => {
                    web_sys::console::log_1(&format!("edit request:\n{json}").into());
                    last_request.set(Some(json));
                }
                Err(e) => {
                    error.set(Some(format!("Could not compose request: {e}")));
                }
            }
            submitting.set(false);
        });
    };

    // --- Derived view state ---
    let photo_bound = session.read().dimensions().is_some();
    let brush_size = session.read().brush().brush_size;
    let overlay_visible = session.read().is_overlay_visible();
    let has_strokes = !session.read().strokes().is_empty();
    // Compare is shown only when both the original photo and the
    // composite snapshot have Blob URLs.
    let compare_pair = photo_url().zip(compare_url());
    let comparing = compare_pair.is_some();

    // --- Layout ---
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/theme.css") }
        // Tailwind utilities via the Play CDN; the component classes
        // are plain Tailwind.
        script { src: "https://cdn.tailwindcss.com" }

        div { class: "min-h-screen bg-[var(--bg)] text-[var(--text)] flex flex-col",
            header { class: "px-6 py-4 border-b border-[var(--border)]",
                h1 { class: "text-2xl font-semibold text-[var(--text-heading)]", "restage" }
                p { class: "text-[var(--muted)] text-sm",
                    "Paint a mask over your room photo and describe the change"
                }
            }

            div { class: "flex-1 flex flex-col gap-4 p-6 max-w-4xl w-full mx-auto",
                if loading() {
                    div { class: "flex-1 flex items-center justify-center",
                        p { class: "text-[var(--text-secondary)] text-lg animate-pulse",
                            "Loading photo..."
                        }
                    }
                } else if photo_bound {
                    // Edit screen
                    div { class: "flex items-center justify-between",
                        EditToolbar {
                            tool: tool(),
                            overlay_visible: overlay_visible,
                            has_strokes: has_strokes,
                            on_back: on_back,
                            on_toggle_tool: on_toggle_tool,
                            on_erase: on_erase,
                            on_toggle_overlay: on_toggle_overlay,
                            on_download: on_download,
                        }
                        button {
                            r#type: "button",
                            class: "px-3 py-2 text-sm rounded border border-[var(--border)]
                                    bg-[var(--surface)] hover:bg-[var(--surface-active)]
                                    transition-colors",
                            onclick: on_compare,
                            if comparing { "Close Compare" } else { "Compare" }
                        }
                    }

                    if let Some((before, after)) = compare_pair {
                        CompareSlider {
                            before_url: before,
                            after_url: after,
                        }
                    } else {
                        MaskCanvas {
                            session: session,
                            active: tool().is_mask(),
                        }
                    }

                    if tool().is_mask() {
                        div { class: "bg-[var(--surface)] rounded p-4",
                            BrushControls {
                                brush_size: brush_size,
                                overlay_visible: overlay_visible,
                                on_brush_size: move |size| session.write().set_brush_size(size),
                                on_overlay_visible: move |v| session.write().set_overlay_visible(v),
                            }
                        }
                    }

                    PromptComposer {
                        prompt: prompt(),
                        busy: submitting(),
                        on_change: move |text| prompt.set(text),
                        on_submit: on_submit,
                    }

                    if let Some(ref json) = last_request() {
                        details { class: "bg-[var(--surface)] rounded p-3 text-sm",
                            summary { class: "cursor-pointer text-[var(--text-secondary)]",
                                "Edit request composed"
                            }
                            pre { class: "mt-2 overflow-x-auto text-xs", "{json}" }
                        }
                    }
                } else {
                    // Home screen
                    div { class: "flex-1 flex flex-col justify-center",
                        PhotoUpload {
                            on_upload: on_upload,
                        }
                    }
                }

                if let Some(ref err) = error() {
                    div { class: "bg-[var(--error-bg)] border border-[var(--error-border)] rounded p-3",
                        p { class: "text-[var(--text-error)] text-sm", "{err}" }
                    }
                }
            }
        }
    }
}
