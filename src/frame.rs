use crate::constants::STATS_LOG_INTERVAL_SEC;
use crate::core::{Animation, Schedule};
use crate::render::CanvasSurface;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub animation: Animation,
    pub surface: CanvasSurface,

    pub last_instant: Instant,
    pub stats_elapsed: f32,
    pub stats_frames: u32,
}

impl FrameContext {
    pub fn new(animation: Animation, surface: CanvasSurface) -> Self {
        Self {
            animation,
            surface,
            last_instant: Instant::now(),
            stats_elapsed: 0.0,
            stats_frames: 0,
        }
    }

    pub fn frame(&mut self) -> Schedule {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let schedule = self.animation.frame(&mut self.surface);
        if schedule == Schedule::Next {
            self.record_stats(dt_sec);
        }
        schedule
    }

    fn record_stats(&mut self, dt_sec: f32) {
        self.stats_elapsed += dt_sec;
        self.stats_frames += 1;
        if self.stats_elapsed >= STATS_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps over {} frames",
                self.stats_frames as f32 / self.stats_elapsed,
                self.stats_frames
            );
            self.stats_elapsed = 0.0;
            self.stats_frames = 0;
        }
    }
}

/// Running `requestAnimationFrame` chain. Dropping it or calling `stop`
/// cancels the pending frame and breaks the closure's self-reference.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
    frame_ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let pending_tick = pending.clone();
        let frame_ctx_tick = frame_ctx.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if frame_ctx_tick.borrow_mut().frame() == Schedule::Stop {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(request_frame(cb));
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(request_frame(cb));
        }
        Self {
            tick,
            pending,
            frame_ctx,
        }
    }

    pub fn frame_ctx(&self) -> &Rc<RefCell<FrameContext>> {
        &self.frame_ctx
    }

    pub fn is_running(&self) -> bool {
        self.frame_ctx.borrow().animation.is_active()
    }

    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.frame_ctx.borrow_mut().animation.teardown();
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    let w = web::window()?;
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => Some(id),
        Err(e) => {
            log::error!("requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}
