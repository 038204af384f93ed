//! 3D artwork viewer, backed by three.js in `src/js/viewer3d.js`.
//!
//! The photo is mapped on a 3x2 plane; the camera orbits with damping.

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// A mounted viewer. Dropping it stops the render loop and frees GPU
/// resources.
pub struct ArtworkViewer {
    handle: JsValue,
}

impl ArtworkViewer {
    pub fn mount(container: &HtmlElement, image_url: &str, width: u32, height: u32) -> Result<Self, String> {
        log::debug!("🧊 Mounting 3D viewer for {}", image_url);
        let handle = mount_viewer_js(container, image_url, width, height)
            .map_err(|e| format!("Failed to start 3D viewer: {:?}", e))?;
        Ok(Self { handle })
    }
}

impl Drop for ArtworkViewer {
    fn drop(&mut self) {
        dispose_viewer_js(&self.handle);
    }
}

#[wasm_bindgen(module = "/src/js/viewer3d.js")]
extern "C" {
    #[wasm_bindgen(js_name = "mountViewer", catch)]
    fn mount_viewer_js(
        container: &HtmlElement,
        image_url: &str,
        width: u32,
        height: u32,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_name = "disposeViewer")]
    fn dispose_viewer_js(handle: &JsValue);
}
