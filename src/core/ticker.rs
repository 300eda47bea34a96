//! Fixed-rate driver for hosts without a browser frame scheduler.
//!
//! A dedicated thread calls `Animation::frame` once per period and checks a
//! stop flag on every iteration. Resizes are posted from any thread and picked
//! up before the next frame is drawn.

use instant::Instant;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::animation::{Animation, Schedule};
use super::particle::Bounds;
use super::surface::Surface;

pub struct Ticker<S> {
    stop: Arc<AtomicBool>,
    pending_resize: Arc<Mutex<Option<Bounds>>>,
    frames: Arc<AtomicU64>,
    handle: Option<JoinHandle<(Animation, S)>>,
}

impl<S: Surface + Send + 'static> Ticker<S> {
    pub fn spawn(mut animation: Animation, mut surface: S, period: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let pending_resize = Arc::new(Mutex::new(None::<Bounds>));
        let frames = Arc::new(AtomicU64::new(0));

        let stop_t = stop.clone();
        let resize_t = pending_resize.clone();
        let frames_t = frames.clone();
        let handle = thread::spawn(move || {
            while !stop_t.load(Ordering::Acquire) {
                let started = Instant::now();
                let resize = match resize_t.lock() {
                    Ok(mut slot) => slot.take(),
                    Err(poisoned) => poisoned.into_inner().take(),
                };
                if let Some(bounds) = resize {
                    animation.resize(bounds);
                }
                if animation.frame(&mut surface) == Schedule::Stop {
                    break;
                }
                frames_t.fetch_add(1, Ordering::Relaxed);
                if let Some(rest) = period.checked_sub(started.elapsed()) {
                    thread::sleep(rest);
                }
            }
            animation.teardown();
            (animation, surface)
        });

        Self {
            stop,
            pending_resize,
            frames,
            handle: Some(handle),
        }
    }

    /// Applied before the next frame. A newer size replaces one not yet applied.
    pub fn resize(&self, bounds: Bounds) {
        match self.pending_resize.lock() {
            Ok(mut slot) => *slot = Some(bounds),
            Err(poisoned) => *poisoned.into_inner() = Some(bounds),
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the thread and hand back the torn-down animation and its surface.
    /// `None` if the render thread panicked.
    pub fn stop(mut self) -> Option<(Animation, S)> {
        self.stop.store(true, Ordering::Release);
        let handle = self.handle.take()?;
        match handle.join() {
            Ok(parts) => Some(parts),
            Err(_) => {
                log::error!("[ticker] render thread panicked");
                None
            }
        }
    }
}

impl<S> Drop for Ticker<S> {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            _ = handle.join();
        }
    }
}
