use crate::constants::{HINT_FADED_CLASS, HINT_ID, HINT_VISIBLE_MS};
use crate::events::Listeners;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HINT_FADED_CLASS);
}

#[inline]
pub fn fade(el: &web::Element) {
    _ = el.class_list().add_1(HINT_FADED_CLASS);
}

#[inline]
pub fn is_faded(el: &web::Element) -> bool {
    el.class_list().contains(HINT_FADED_CLASS)
}

/// The "scroll to zoom / drag to rotate" hint: visible on mount, faded after a
/// few seconds, brought back while hovered.
pub struct HintOverlay {
    window: web::Window,
    timer: Option<i32>,
    _on_timeout: Closure<dyn FnMut()>,
    _listeners: Listeners,
}

impl HintOverlay {
    /// `None` when the page has no hint element.
    pub fn attach(window: &web::Window, document: &web::Document) -> Option<Self> {
        let el = document.get_element_by_id(HINT_ID)?;
        show(&el);

        let el_timeout = el.clone();
        let on_timeout = Closure::wrap(Box::new(move || {
            fade(&el_timeout);
        }) as Box<dyn FnMut()>);
        let timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.as_ref().unchecked_ref(),
                HINT_VISIBLE_MS,
            )
            .ok();

        let mut listeners = Listeners::default();
        let el_hover = el.clone();
        listeners.add(&el, "mouseenter", None, move |_: web::MouseEvent| {
            if is_faded(&el_hover) {
                show(&el_hover);
            }
        });

        Some(Self {
            window: window.clone(),
            timer,
            _on_timeout: on_timeout,
            _listeners: listeners,
        })
    }
}

impl Drop for HintOverlay {
    fn drop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
