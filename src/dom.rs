use web_sys as web;

/// Window inner size in CSS pixels; zero when the host does not report it.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Match the canvas backing store to the window and return the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement, window: &web::Window) -> (u32, u32) {
    let (width, height) = viewport_size(window);
    canvas.set_width(width);
    canvas.set_height(height);
    (width, height)
}
