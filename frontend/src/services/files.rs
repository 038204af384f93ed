//! File input reading and PDF downloads.

use cartel::FilePart;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, File, HtmlAnchorElement, Url};

/// Wrap raw bytes in a typed `Blob`.
pub fn blob_from_bytes(bytes: &[u8], mime: &str) -> Result<Blob, JsValue> {
    let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

/// Read a picked file into memory.
pub async fn read_file(file: &File) -> Result<FilePart, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("Failed to read {}: {:?}", file.name(), e))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let mime = file.type_();
    Ok(if mime.is_empty() {
        FilePart::from_name(file.name(), bytes)
    } else {
        FilePart::new(file.name(), mime, bytes)
    })
}

/// Offer `bytes` as a download named `file_name`.
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), String> {
    let err = |e: JsValue| format!("Download failed: {:?}", e);

    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;
    let body = document.body().ok_or("no body")?;

    let blob = blob_from_bytes(bytes, "application/pdf").map_err(err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(err)?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(err)?
        .dyn_into()
        .map_err(|_| "not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(err)?;
    anchor.click();
    body.remove_child(&anchor).map_err(err)?;

    Url::revoke_object_url(&url).map_err(err)?;
    log::info!("📄 Saved {} ({} bytes)", file_name, bytes.len());
    Ok(())
}
