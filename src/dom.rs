use crate::constants::config_attr;
use crate::core::{Bounds, FieldConfig, OVERRIDE_KEYS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `innerWidth x innerHeight` of the window; 0 on either axis if unreadable.
pub fn viewport_bounds(window: &web::Window) -> Bounds {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Bounds::new(read(window.inner_width()), read(window.inner_height()))
}

/// Match the canvas backing store to the viewport.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width as u32);
    canvas.set_height(bounds.height as u32);
}

/// Defaults plus any `data-particles-*` overrides on the element.
pub fn read_config(el: &web::Element) -> FieldConfig {
    FieldConfig::from_overrides(
        OVERRIDE_KEYS
            .iter()
            .filter_map(|&key| el.get_attribute(&config_attr(key)).map(|v| (key, v))),
    )
}

/// Event listener that unsubscribes itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut() + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}
