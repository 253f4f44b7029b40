use super::{enqueue, InputQueue, Listeners};
use crate::sim::InputEvent;
use web_sys as web;

/// Client position of the only active touch; multi-touch gestures are ignored.
fn single_touch(ev: &web::TouchEvent) -> Option<(f32, f32)> {
    let touches = ev.touches();
    if touches.length() != 1 {
        return None;
    }
    touches
        .get(0)
        .map(|t| (t.client_x() as f32, t.client_y() as f32))
}

pub(super) fn wire(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    queue: &InputQueue,
) {
    let q = queue.clone();
    listeners.add(canvas, "touchstart", None, move |ev: web::TouchEvent| {
        if let Some((x, y)) = single_touch(&ev) {
            enqueue(&q, InputEvent::PointerDown { x, y });
        }
    });

    let q = queue.clone();
    listeners.add(window, "touchmove", None, move |ev: web::TouchEvent| {
        if let Some((x, y)) = single_touch(&ev) {
            enqueue(&q, InputEvent::PointerMove { x, y });
        }
    });

    let q = queue.clone();
    listeners.add(window, "touchend", None, move |_: web::TouchEvent| {
        enqueue(&q, InputEvent::PointerUp);
    });
}
