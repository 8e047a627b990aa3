use crate::core::HeroScene;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_resize(
    container: &web::Element,
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<HeroScene>>,
) {
    let (w, h) = dom::client_size(container);
    let mut scene = scene.borrow_mut();
    if scene.resize(w, h, dom::device_pixel_ratio()) {
        // GPU surface follows on the next frame via `GpuState::resize_if_needed`
        dom::sync_canvas_size(canvas, &scene.viewport);
    }
}

pub fn wire_window_resize(
    container: web::Element,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<HeroScene>>,
) {
    if let Some(window) = web::window() {
        dom::add_listener(
            window.unchecked_ref::<web::EventTarget>(),
            "resize",
            move |_ev: web::Event| handle_resize(&container, &canvas, &scene),
        );
    }
}
