#![cfg(target_arch = "wasm32")]
use crate::core::{SetupError, TypewriterConfig};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod cards;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod hero;
mod input;
mod render;
mod typing;

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(init_once) as Box<dyn FnMut()>);
        document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
    } else {
        init_once();
    }
    Ok(())
}

/// Cancel the hero render loop (e.g. before tearing the page section down).
#[wasm_bindgen]
pub fn stop_hero() {
    hero::stop();
}

fn init_once() {
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(document) = dom::window_document() else {
        log::error!("init error: no document");
        return;
    };

    match hero::init(&document) {
        Ok(()) => {}
        Err(e) => match e.downcast_ref::<SetupError>() {
            Some(SetupError::MissingElement(id)) => log::error!("hero container #{} not found", id),
            _ => log::error!("hero init error: {:?}", e),
        },
    }

    if !typing::init(&document, TypewriterConfig::default()) {
        log::debug!("[typing] target missing, typewriter disabled");
    }

    let bound = cards::init(&document);
    log::debug!("[cards] hover bound to {} cards", bound);
}
