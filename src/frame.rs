use crate::core::{HeroScene, LoopHandle};
use crate::render;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<HeroScene>>,
    pub gpu: render::GpuState,
    pub clock: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed().as_secs_f32();
        let mut scene = self.scene.borrow_mut();
        scene.advance(elapsed);
        if let Err(e) = self.gpu.render(&scene) {
            log::error!("render error: {:?}", e);
        }
    }
}

/// Running `requestAnimationFrame` loop.
///
/// Cancelling stops the next re-request and drops the frame already queued.
/// A loop cancelled before `start_loop` never requests a frame.
#[derive(Clone, Default)]
pub struct FrameLoop {
    handle: LoopHandle,
    raf_id: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn is_active(&self) -> bool {
        self.handle.is_active()
    }

    pub fn cancel(&self) {
        if !self.handle.cancel() {
            return;
        }
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        log::info!("[frame] loop cancelled after {} frames", self.handle.frames());
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>, raf_id: &Cell<Option<i32>>) {
    if let Some(w) = web::window() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, frame_loop: &FrameLoop) {
    if !frame_loop.is_active() {
        return;
    }
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let loop_tick = frame_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        loop_tick.raf_id.set(None);
        if !loop_tick.handle.is_active() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        loop_tick.handle.record_frame();
        if loop_tick.handle.is_active() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_frame(cb, &loop_tick.raf_id);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb, &frame_loop.raf_id);
    };
}
