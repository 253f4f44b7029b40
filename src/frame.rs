use crate::constants::FRAME_LOG_INTERVAL_SEC;
use crate::events::InputQueue;
use crate::render::CanvasSurface;
use crate::sim::GlobeController;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub controller: GlobeController,
    pub surface: CanvasSurface,
    pub queue: InputQueue,

    last_instant: Instant,
    log_elapsed: f32,
    log_frames: u32,
}

impl FrameContext {
    pub fn new(controller: GlobeController, surface: CanvasSurface, queue: InputQueue) -> Self {
        Self {
            controller,
            surface,
            queue,
            last_instant: Instant::now(),
            log_elapsed: 0.0,
            log_frames: 0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // Take the queue before stepping so handlers never see a borrow
        let events = std::mem::take(&mut *self.queue.borrow_mut());
        let stats = self.controller.frame(events, &mut self.surface);

        self.log_frames += 1;
        self.log_elapsed += dt_sec;
        if self.log_elapsed >= FRAME_LOG_INTERVAL_SEC {
            let ix = self.controller.interaction();
            log::debug!(
                "[frame] {:.1} fps drawn={} culled={} links={} zoom={:.2} rot=({:.2},{:.2})",
                self.log_frames as f32 / self.log_elapsed,
                stats.drawn,
                stats.culled,
                stats.links,
                ix.zoom,
                ix.rotation_x,
                ix.rotation_y
            );
            self.log_elapsed = 0.0;
            self.log_frames = 0;
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running `requestAnimationFrame` loop; cancelled explicitly or on drop.
pub struct FrameLoop {
    tick: Tick,
    request_id: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.request_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure holds a clone of `tick`; dropping it breaks the cycle.
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &Tick, request_id: &Cell<Option<i32>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => request_id.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Tick = Rc::new(RefCell::new(None));
    let request_id = Rc::new(Cell::new(None));
    let running = Rc::new(Cell::new(true));

    let tick_clone = tick.clone();
    let request_id_tick = request_id.clone();
    let running_tick = running.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        request_id_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &request_id_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &request_id);
    FrameLoop {
        tick,
        request_id,
        running,
    }
}
