use crate::dom;
use crate::sim::{push_event, InputEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod pointer;
mod touch;

/// Events written by DOM handlers and drained by the frame loop.
pub type InputQueue = Rc<RefCell<Vec<InputEvent>>>;

pub fn enqueue(queue: &InputQueue, event: InputEvent) {
    push_event(&mut queue.borrow_mut(), event);
}

struct Registered {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners kept alive for the mount and removed on drop.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Registered>,
}

impl Listeners {
    /// Register `handler` for `kind` events on `target`. Pass
    /// `passive: Some(false)` for handlers that call `prevent_default`.
    pub fn add<E, F>(
        &mut self,
        target: &impl AsRef<web::EventTarget>,
        kind: &'static str,
        passive: Option<bool>,
        mut handler: F,
    ) where
        E: JsCast + 'static,
        F: FnMut(E) + 'static,
    {
        let target: &web::EventTarget = target.as_ref();
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let function = callback.as_ref().unchecked_ref::<js_sys::Function>();
        let added = match passive {
            Some(passive) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind, function, &opts,
                )
            }
            None => target.add_event_listener_with_callback(kind, function),
        };
        if let Err(e) = added {
            log::warn!("[input] could not listen for {}: {:?}", kind, e);
            return;
        }
        self.entries.push(Registered {
            target: target.clone(),
            kind,
            callback,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        for entry in self.entries.drain(..) {
            _ = entry.target.remove_event_listener_with_callback(
                entry.kind,
                entry.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Wire mouse, touch, wheel and resize input into `queue`.
pub fn wire_input_handlers(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    queue: &InputQueue,
) -> Listeners {
    let mut listeners = Listeners::default();
    pointer::wire(&mut listeners, window, canvas, queue);
    touch::wire(&mut listeners, window, canvas, queue);
    wire_resize(&mut listeners, window, canvas, queue);
    log::info!("[input] {} listeners registered", listeners.len());
    listeners
}

fn wire_resize(
    listeners: &mut Listeners,
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    queue: &InputQueue,
) {
    let q = queue.clone();
    let win = window.clone();
    let canvas = canvas.clone();
    listeners.add(window, "resize", None, move |_: web::Event| {
        let (width, height) = dom::sync_canvas_to_viewport(&canvas, &win);
        enqueue(&q, InputEvent::Resize { width, height });
    });
}
