#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod overlay;
mod render;
pub mod sim;

use constants::CANVAS_ID;
use error::MountError;
use sim::{GlobeController, GlobeParams};

/// Everything that lives while the globe is on the page. Field order is drop
/// order: the loop stops before its listeners go away.
struct Mount {
    frame_loop: frame::FrameLoop,
    _listeners: events::Listeners,
    _hint: Option<overlay::HintOverlay>,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-globe starting");
    mount_globe();
    Ok(())
}

/// Mount onto `#globe-canvas`. A second call while mounted does nothing.
#[wasm_bindgen]
pub fn mount_globe() {
    if MOUNTED.with(|m| m.borrow().is_some()) {
        log::info!("[mount] already mounted");
        return;
    }
    match mount(CANVAS_ID) {
        Ok(m) => MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
        // Without a 2D context the animation simply never starts
        Err(e) => match e.downcast_ref::<MountError>() {
            Some(MountError::NoContext) => log::warn!("[mount] {}; globe disabled", e),
            _ => log::error!("[mount] {:#}", e),
        },
    }
}

/// Stop the frame loop and remove every listener the mount registered.
#[wasm_bindgen]
pub fn unmount() {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take());
    if let Some(m) = mounted {
        m.frame_loop.cancel();
        drop(m);
        log::info!("[mount] unmounted");
    }
}

fn mount(canvas_id: &str) -> anyhow::Result<Mount> {
    let window = web::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::MissingCanvas(canvas_id.to_string()))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))?;
    let surface = render::CanvasSurface::new(&canvas)?;

    let (width, height) = dom::sync_canvas_to_viewport(&canvas, &window);
    let params = GlobeParams::default();
    let controller = GlobeController::new(&params, width, height, rand::random());
    log::info!(
        "[mount] {}x{} points={} radius={:.1}",
        width,
        height,
        controller.globe().points().len(),
        controller.globe().radius()
    );

    let queue: events::InputQueue = Rc::default();
    let listeners = events::wire_input_handlers(&window, &canvas, &queue);
    let hint = overlay::HintOverlay::attach(&window, &document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        controller, surface, queue,
    )));
    let frame_loop = frame::start_loop(frame_ctx);

    Ok(Mount {
        frame_loop,
        _listeners: listeners,
        _hint: hint,
    })
}
