use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::behavior::{Scheduler, Task, TimerGuard};

/// `requestAnimationFrame` for frames, `gloo-timers` for delays.
pub struct BrowserScheduler {
    window: Window,
    frame_fallback_ms: u32,
}

impl BrowserScheduler {
    pub fn new(window: Window, frame_fallback_ms: u32) -> Self {
        Self {
            window,
            frame_fallback_ms,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn next_frame(&self, task: Task) {
        let callback = Closure::once_into_js(move || task());
        if let Err(e) = self.window.request_animation_frame(callback.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed, falling back to a timer: {:?}", e);
            let function: js_sys::Function = callback.unchecked_into();
            Timeout::new(self.frame_fallback_ms, move || {
                if let Err(e) = function.call0(&wasm_bindgen::JsValue::NULL) {
                    log::warn!("Frame callback failed: {:?}", e);
                }
            })
            .forget();
        }
    }

    fn after(&self, delay_ms: u32, task: Task) -> TimerGuard {
        TimerGuard::new(Timeout::new(delay_ms, move || task()))
    }

    fn defer(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, move || task()).forget();
    }
}
