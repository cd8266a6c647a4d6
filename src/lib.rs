#![cfg(target_arch = "wasm32")]
use crate::core::{FieldParams, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    sim: &Rc<RefCell<Simulation>>,
) {
    let window_resize = window.clone();
    let canvas_resize = canvas.clone();
    let sim_resize = sim.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        let viewport = dom::window_viewport(&window_resize);
        dom::sync_canvas_backing_size(&canvas_resize, &viewport);
        let mut sim = sim_resize.borrow_mut();
        sim.resize(viewport);
        log::debug!(
            "[resize] {}x{} dpr={} particles={}",
            viewport.width,
            viewport.height,
            viewport.dpr,
            sim.field.len()
        );
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gold-dust starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let surface = canvas::CanvasSurface::from_canvas(&canvas)?;

    let viewport = dom::window_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);

    let sim = Rc::new(RefCell::new(Simulation::new(
        viewport,
        FieldParams::default(),
        rand::random(),
    )));
    log::info!(
        "[field] {}x{} dpr={} particles={}",
        viewport.width,
        viewport.height,
        viewport.dpr,
        sim.borrow().field.len()
    );

    wire_canvas_resize(&window, &canvas, &sim);
    events::wire_pointer_handlers(events::PointerWiring {
        window: window.clone(),
        document: document.clone(),
        sim: sim.clone(),
    });
    dom::set_footer_year(&document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(sim, surface)));
    frame::start_loop(frame_ctx);
    Ok(())
}
