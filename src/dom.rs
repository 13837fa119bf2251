use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{} has wrong type: {:?}", id, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Match the canvas backing size to the window's inner size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((width as u32).max(1));
        canvas.set_height((height as u32).max(1));
        log::debug!("[resize] canvas {}x{}", canvas.width(), canvas.height());
    }
}
