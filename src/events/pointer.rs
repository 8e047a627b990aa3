use crate::core::HeroScene;
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub container: web::Element,
    pub scene: Rc<RefCell<HeroScene>>,
}

/// Track the pointer anywhere on the page, relative to the hero container.
pub fn wire_pointermove(document: &web::Document, w: PointerWiring) {
    dom::add_listener(
        document.unchecked_ref::<web::EventTarget>(),
        "mousemove",
        move |ev: web::MouseEvent| {
            let target = input::mouse_target(&ev, &w.container);
            w.scene.borrow_mut().pointer_moved(target);
        },
    );
}
