use crate::canvas::CanvasSurface;
use crate::constants::FPS_LOG_INTERVAL_SEC;
use crate::core::Simulation;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,

    pub window_start: Instant,
    pub frames_in_window: u32,
}

impl FrameContext {
    pub fn new(sim: Rc<RefCell<Simulation>>, surface: CanvasSurface) -> Self {
        Self {
            sim,
            surface,
            window_start: Instant::now(),
            frames_in_window: 0,
        }
    }

    pub fn frame(&mut self) {
        let stats = self.sim.borrow_mut().tick(&mut self.surface);

        self.frames_in_window += 1;
        let elapsed = self.window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1} particles={} connections={}",
                self.frames_in_window as f32 / elapsed,
                stats.particles,
                stats.connections
            );
            self.window_start = Instant::now();
            self.frames_in_window = 0;
        }
    }
}

/// Run `frame` once per display refresh. The browser throttles or stops the
/// callbacks for hidden tabs, which is the only pause there is.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
