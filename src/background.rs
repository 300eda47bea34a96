use crate::constants::{DEFAULT_CANVAS_ID, RESIZE_EVENT};
use crate::core::Animation;
use crate::dom;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::CanvasSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static DEFAULT_BACKGROUND: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

struct Mounted {
    // field order is drop order: unsubscribe from resize before stopping frames
    _resize: dom::Listener,
    frames: FrameLoop,
}

/// Particle background bound to one canvas. Inert if the canvas or its 2D
/// context could not be acquired.
#[wasm_bindgen]
pub struct ParticleBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Mount on `<canvas id=canvas_id>`. Never throws; failures are logged.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> ParticleBackground {
        match mount(canvas_id) {
            Ok(m) => ParticleBackground { mounted: Some(m) },
            Err(e) => {
                log::warn!("[particles] not started: {:#}", e);
                ParticleBackground { mounted: None }
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.frames.is_running())
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.mounted
            .as_ref()
            .map(|m| m.frames.frame_ctx().borrow().animation.frames() as f64)
            .unwrap_or(0.0)
    }

    /// Unsubscribe from resize and stop scheduling frames.
    pub fn teardown(&mut self) {
        self.mounted = None;
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn mount(canvas_id: &str) -> anyhow::Result<Mounted> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?;
    let config = dom::read_config(&canvas_el);
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::viewport_bounds(&window);
    dom::size_canvas(&canvas, viewport);
    let animation = Animation::start(config, viewport, &mut StdRng::from_entropy())?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        animation,
        CanvasSurface::new(ctx),
    )));

    let frame_ctx_resize = frame_ctx.clone();
    let window_resize = window.clone();
    let resize = dom::Listener::attach(&window, RESIZE_EVENT, move || {
        let viewport = dom::viewport_bounds(&window_resize);
        dom::size_canvas(&canvas, viewport);
        frame_ctx_resize.borrow_mut().animation.resize(viewport);
    })?;

    Ok(Mounted {
        _resize: resize,
        frames: FrameLoop::start(frame_ctx),
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-field starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    let has_canvas = dom::window_document()
        .and_then(|d| d.get_element_by_id(DEFAULT_CANVAS_ID))
        .is_some();
    if has_canvas {
        let bg = ParticleBackground::new(DEFAULT_CANVAS_ID);
        DEFAULT_BACKGROUND.with(|slot| *slot.borrow_mut() = Some(bg));
    }
    Ok(())
}

/// Tear down the background the start hook mounted, if any.
#[wasm_bindgen]
pub fn teardown_default() {
    let bg = DEFAULT_BACKGROUND.with(|slot| slot.borrow_mut().take());
    drop(bg);
}
