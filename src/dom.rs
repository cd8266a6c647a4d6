use crate::constants::{FOOTER_YEAR_ID, HALO_X_PROPERTY, HALO_Y_PROPERTY, LINK_CARD_SELECTOR};
use crate::core::{card_halo, CardRect, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Current CSS viewport and device-pixel-ratio as simulation metrics.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(css_w, css_h, window.device_pixel_ratio())
}

/// Size the backing store to device pixels and the element to CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    canvas.set_width(viewport.width as u32);
    canvas.set_height(viewport.height as u32);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
}

/// Publish the pointer position over each link card as `--mx` / `--my`.
pub fn apply_card_halo(document: &web::Document, client_x: f64, client_y: f64) {
    let cards = match document.query_selector_all(LINK_CARD_SELECTOR) {
        Ok(list) => list,
        Err(_) => return,
    };
    for i in 0..cards.length() {
        let Some(card) = cards
            .get(i)
            .and_then(|n| n.dyn_into::<web::HtmlElement>().ok())
        else {
            continue;
        };
        let r = card.get_bounding_client_rect();
        let rect = CardRect {
            left: r.left(),
            top: r.top(),
            width: r.width(),
            height: r.height(),
        };
        if let Some([mx, my]) = card_halo(client_x, client_y, rect) {
            let style = card.style();
            _ = style.set_property(HALO_X_PROPERTY, &format!("{}%", mx));
            _ = style.set_property(HALO_Y_PROPERTY, &format!("{}%", my));
        }
    }
}

pub fn set_footer_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(FOOTER_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
