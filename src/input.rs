use crate::core::{pointer_target, PointerTarget};
use crate::dom;
use web_sys as web;

// ---------------- Pointer helpers ----------------
#[inline]
pub fn mouse_target(ev: &web::MouseEvent, container: &web::Element) -> Option<PointerTarget> {
    let rect = dom::client_rect(container);
    pointer_target(ev.client_x() as f32, ev.client_y() as f32, rect)
}
