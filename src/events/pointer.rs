use crate::core::Simulation;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub sim: Rc<RefCell<Simulation>>,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_mouseleave(&w);
    wire_click(&w);
}

fn wire_mousemove(w: &PointerWiring) {
    let w = w.clone();
    let target = w.window.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let cx = ev.client_x() as f64;
        let cy = ev.client_y() as f64;
        w.sim.borrow_mut().on_pointer_move(cx, cy);
        dom::apply_card_halo(&w.document, cx, cy);
    }) as Box<dyn FnMut(_)>);

    _ = target.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_mouseleave(w: &PointerWiring) {
    let w = w.clone();
    // `mouseleave` does not fire on window; the root element sees the exit.
    let Some(root) = w.document.document_element() else {
        return;
    };

    let closure = Closure::wrap(Box::new(move || {
        w.sim.borrow_mut().on_pointer_leave();
    }) as Box<dyn FnMut()>);

    _ = root.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_click(w: &PointerWiring) {
    let w = w.clone();
    let target = w.window.clone();

    let closure = Closure::wrap(Box::new(move || {
        let picks = w.sim.borrow_mut().on_click();
        log::debug!("[click] burst {:?}", picks.as_slice());
    }) as Box<dyn FnMut()>);

    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
