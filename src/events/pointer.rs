use super::{enqueue, InputQueue, Listeners};
use crate::sim::InputEvent;
use web_sys as web;

// Press on the canvas, but follow moves and releases on the window so a drag
// that leaves the canvas still ends.
pub(super) fn wire(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    queue: &InputQueue,
) {
    let q = queue.clone();
    listeners.add(canvas, "mousedown", None, move |ev: web::MouseEvent| {
        enqueue(
            &q,
            InputEvent::PointerDown {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            },
        );
    });

    let q = queue.clone();
    listeners.add(window, "mousemove", None, move |ev: web::MouseEvent| {
        enqueue(
            &q,
            InputEvent::PointerMove {
                x: ev.client_x() as f32,
                y: ev.client_y() as f32,
            },
        );
    });

    let q = queue.clone();
    listeners.add(window, "mouseup", None, move |_: web::MouseEvent| {
        enqueue(&q, InputEvent::PointerUp);
    });

    let q = queue.clone();
    listeners.add(canvas, "wheel", Some(false), move |ev: web::WheelEvent| {
        ev.prevent_default();
        enqueue(
            &q,
            InputEvent::Wheel {
                delta_y: ev.delta_y() as f32,
            },
        );
    });
}
