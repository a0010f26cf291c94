//! Canvas presentation for the composited surface.
//!
//! The engine hands back a finished pixel buffer after every
//! recomposition; this module measures the on-screen canvas for the
//! coordinate mapper and blits that buffer into it via `ImageData`.
//! It also encodes the surface as PNG for downloads.

use image::ImageEncoder;
use restage_mask::SurfaceRect;
use tiny_skia::Pixmap;
use wasm_bindgen::{Clamped, JsCast, JsValue};

/// Errors that can occur while presenting or encoding the surface.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    /// No element with the requested id exists in the document.
    #[error("no element with id {0:?}")]
    MissingElement(String),

    /// The element exists but is not the expected kind of node.
    #[error("element {0:?} is not a canvas")]
    NotACanvas(String),

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for SurfaceError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

impl From<image::ImageError> for SurfaceError {
    fn from(err: image::ImageError) -> Self {
        Self::PngEncode(err.to_string())
    }
}

/// Look up a canvas element by id.
fn canvas_by_id(id: &str) -> Result<web_sys::HtmlCanvasElement, SurfaceError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| SurfaceError::JsError("no document".into()))?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| SurfaceError::MissingElement(id.to_owned()))?;
    element
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| SurfaceError::NotACanvas(id.to_owned()))
}

/// Measure the canvas's current on-screen bounding rectangle.
///
/// This is the device-space rectangle the coordinate mapper divides
/// by; it changes whenever the page is resized or scrolled, so it is
/// re-read at the start of every gesture event.
///
/// # Errors
///
/// Returns [`SurfaceError::MissingElement`] or
/// [`SurfaceError::NotACanvas`] if `id` does not name a canvas.
pub fn bounding_rect(id: &str) -> Result<SurfaceRect, SurfaceError> {
    let rect = canvas_by_id(id)?.get_bounding_client_rect();
    Ok(SurfaceRect::new(
        rect.left(),
        rect.top(),
        rect.width(),
        rect.height(),
    ))
}

/// Blit a composited pixel buffer into the canvas.
///
/// Resizes the canvas's intrinsic buffer to match the pixmap (CSS
/// sizing is left to the stylesheet), then writes the pixels through
/// `putImageData`. The pixmap's premultiplied pixels are converted back
/// to straight alpha, which is what `ImageData` expects.
///
/// # Errors
///
/// Returns [`SurfaceError::MissingElement`] / [`SurfaceError::NotACanvas`]
/// if `id` does not name a canvas, and [`SurfaceError::JsError`] if the
/// 2D context or the blit itself fails.
pub fn present(id: &str, surface: &Pixmap) -> Result<(), SurfaceError> {
    let canvas = canvas_by_id(id)?;
    if canvas.width() != surface.width() {
        canvas.set_width(surface.width());
    }
    if canvas.height() != surface.height() {
        canvas.set_height(surface.height());
    }

    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| SurfaceError::JsError("no 2d context".into()))?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::JsError("context is not 2d".into()))?;

    let rgba = straight_alpha_bytes(surface);
    let image_data = web_sys::ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(&rgba),
        surface.width(),
        surface.height(),
    )?;
    ctx.put_image_data(&image_data, 0.0, 0.0)?;
    Ok(())
}

/// Convert a premultiplied pixmap into straight-alpha RGBA bytes.
fn straight_alpha_bytes(surface: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(surface.pixels().len() * 4);
    for p in surface.pixels() {
        let p = p.demultiply();
        rgba.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
    }
    rgba
}

/// Encode the composited surface as PNG bytes.
///
/// # Errors
///
/// Returns [`SurfaceError::PngEncode`] if encoding fails.
pub fn encode_png(surface: &Pixmap) -> Result<Vec<u8>, SurfaceError> {
    let rgba = straight_alpha_bytes(surface);
    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder.write_image(
        &rgba,
        surface.width(),
        surface.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(png_bytes)
}

/// Create a Blob URL from raw bytes for use as an `<img src>`.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed to avoid memory leaks.
///
/// # Errors
///
/// Returns [`SurfaceError::JsError`] if Blob or URL creation fails.
pub fn bytes_to_blob_url(bytes: &[u8], mime_type: &str) -> Result<String, SurfaceError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = web_sys::BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(url)
}

/// Encode the composited surface as a PNG Blob URL.
///
/// The returned URL must be revoked via [`revoke_blob_url`] when no
/// longer needed.
///
/// # Errors
///
/// Returns [`SurfaceError::PngEncode`] if encoding fails and
/// [`SurfaceError::JsError`] if Blob or URL creation fails.
pub fn png_blob_url(surface: &Pixmap) -> Result<String, SurfaceError> {
    bytes_to_blob_url(&encode_png(surface)?, "image/png")
}

/// Revoke a Blob URL previously created by [`bytes_to_blob_url`] or
/// [`png_blob_url`].
///
/// Best-effort: failures are silently ignored since the URL may have
/// already been revoked or garbage collected.
pub fn revoke_blob_url(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
