//! Save the canvas as a PNG download.
//!
//! Encoding is the browser's job (`HTMLCanvasElement.toDataURL`); this module
//! only fetches the data URL and clicks a temporary download link.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

pub const EXPORT_FILENAME: &str = "mindmap.png";
pub const EXPORT_MIME: &str = "image/png";

/// Encode the current pixel buffer as a `data:image/png` URL.
pub fn data_url(canvas: &HtmlCanvasElement) -> Result<String, JsValue> {
    canvas.to_data_url_with_type(EXPORT_MIME)
}

/// Trigger a browser download of the canvas as `mindmap.png`.
pub fn download(canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let url = data_url(canvas)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document available for export"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url);
    anchor.set_download(EXPORT_FILENAME);
    anchor.click();
    log::debug!("exported canvas as {EXPORT_FILENAME}");
    Ok(())
}
