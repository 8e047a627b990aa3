use crate::constants::{HERO_CANVAS_CLASS, HERO_CONTAINER_ID};
use crate::core::{HeroConfig, HeroScene, SetupError, Viewport};
use crate::dom;
use crate::events;
use crate::frame::{self, FrameContext, FrameLoop};
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

thread_local! {
    static HERO_LOOP: RefCell<Option<FrameLoop>> = const { RefCell::new(None) };
}

/// Cancel the hero render loop. Works before the GPU is ready too: the loop
/// then never starts.
pub fn stop() {
    HERO_LOOP.with(|slot| {
        if let Some(l) = slot.borrow_mut().take() {
            l.cancel();
        }
    });
}

fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SetupError::NotAnElement("canvas"))?;
    canvas.set_class_name(HERO_CANVAS_CLASS);
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// Build the hero scene inside `#threejs-container` and start animating it.
///
/// Listeners are attached right away; the render loop starts once the GPU
/// device is ready.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let container = document
        .get_element_by_id(HERO_CONTAINER_ID)
        .ok_or(SetupError::MissingElement(HERO_CONTAINER_ID))?;

    let canvas = create_canvas(document, &container)?;
    let (css_w, css_h) = dom::client_size(&container);
    let viewport = Viewport {
        css_width: css_w,
        css_height: css_h,
        pixel_ratio: dom::device_pixel_ratio(),
    };
    dom::sync_canvas_size(&canvas, &viewport);
    let scene = Rc::new(RefCell::new(HeroScene::new(HeroConfig::default(), viewport)));

    events::wire_pointermove(
        document,
        events::PointerWiring {
            container: container.clone(),
            scene: scene.clone(),
        },
    );
    events::wire_window_resize(container, canvas.clone(), scene.clone());

    let frame_loop = FrameLoop::default();
    HERO_LOOP.with(|slot| *slot.borrow_mut() = Some(frame_loop.clone()));

    spawn_local(async move {
        let gpu = match render::GpuState::new(&canvas).await {
            Ok(g) => g,
            Err(e) => {
                log::error!("WebGPU init error: {:?}", e);
                canvas.remove();
                return;
            }
        };
        if !frame_loop.is_active() {
            log::info!("[hero] stopped before the GPU was ready");
            return;
        }
        let ctx = Rc::new(RefCell::new(FrameContext {
            scene,
            gpu,
            clock: Instant::now(),
        }));
        frame::start_loop(ctx, &frame_loop);
        log::info!("[hero] render loop started");
    });
    Ok(())
}
