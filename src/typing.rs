use crate::constants::TYPING_TARGET_SELECTOR;
use crate::core::{TimerHost, TimerSlot, Typewriter, TypewriterConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `setTimeout`/`clearTimeout` on the window, always firing the same callback.
struct WindowTimers {
    window: web::Window,
    callback: SharedCallback,
}

impl TimerHost for WindowTimers {
    type Handle = i32;

    fn set_timeout(&mut self, delay_ms: u32) -> Option<i32> {
        let cb = self.callback.borrow();
        let cb = cb.as_ref()?;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms as i32,
            ) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("setTimeout failed: {:?}", e);
                None
            }
        }
    }

    fn clear_timeout(&mut self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}

struct TypingState {
    machine: Typewriter,
    element: web::Element,
    slot: TimerSlot<i32>,
    timers: WindowTimers,
}

impl TypingState {
    fn on_tick(&mut self) {
        self.slot.fired();
        let tick = self.machine.tick();
        self.element.set_text_content(Some(&tick.text));
        self.slot.rearm(&mut self.timers, tick.next_delay_ms);
    }
}

/// Start the headline typewriter. Returns `false` without scheduling
/// anything when the target span is missing or there is nothing to type.
pub fn init(document: &web::Document, config: TypewriterConfig) -> bool {
    let element = match document.query_selector(TYPING_TARGET_SELECTOR) {
        Ok(Some(el)) => el,
        _ => return false,
    };
    let machine = match Typewriter::new(config) {
        Some(m) => m,
        None => {
            log::warn!("[typing] no non-empty phrases configured");
            return false;
        }
    };
    let window = match web::window() {
        Some(w) => w,
        None => return false,
    };

    let callback: SharedCallback = Rc::new(RefCell::new(None));
    let startup = machine.startup_delay_ms();
    let state = Rc::new(RefCell::new(TypingState {
        machine,
        element,
        slot: TimerSlot::default(),
        timers: WindowTimers {
            window,
            callback: callback.clone(),
        },
    }));

    let state_tick = state.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state_tick.borrow_mut().on_tick();
    }) as Box<dyn FnMut()>));

    let mut st = state.borrow_mut();
    let st = &mut *st;
    st.slot.rearm(&mut st.timers, startup);
    st.slot.is_pending()
}
