use folio_core::{scene, Rect, TargetError, TargetSpec};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up a single target, typed. `Ok(None)` only for an absent optional target.
pub fn query_as<T: JsCast>(
    document: &web::Document,
    spec: &TargetSpec,
    expected: &'static str,
) -> Result<Option<T>, TargetError> {
    let found = document.query_selector(spec.selector).ok().flatten();
    match spec.resolve(found)? {
        Some(el) => el
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| TargetError::WrongType {
                name: spec.name,
                selector: spec.selector,
                expected,
            }),
        None => Ok(None),
    }
}

/// Look up a target the feature cannot do without.
pub fn require<T: JsCast>(
    document: &web::Document,
    spec: &TargetSpec,
    expected: &'static str,
) -> Result<T, TargetError> {
    query_as(document, spec, expected)?.ok_or(TargetError::Missing {
        name: spec.name,
        selector: spec.selector,
    })
}

/// Every HTML element matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Layout viewport size in CSS pixels.
pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

/// Size the canvas to cover the viewport: CSS size in viewport pixels, backing
/// store scaled by the (capped) device pixel ratio. Returns the backing size.
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, width: f64, height: f64) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = scene::backing_size(width, height, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
    (w_px, h_px)
}

/// Event listener that detaches itself when dropped, unless [`Listener::forget`] is called.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Option<Closure<dyn FnMut(web::Event)>>,
}

impl Listener {
    pub fn new<E>(target: &web::EventTarget, event: &'static str, mut handler: impl FnMut(E) + 'static) -> Self
    where
        E: JsCast + 'static,
    {
        let callback = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Ok(ev) = ev.dyn_into::<E>() {
                handler(ev);
            }
        }) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback: Some(callback),
        }
    }

    /// Keep the handler attached for the lifetime of the page.
    pub fn forget(mut self) {
        if let Some(callback) = self.callback.take() {
            callback.forget();
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            _ = self
                .target
                .remove_event_listener_with_callback(self.event, callback.as_ref().unchecked_ref());
        }
    }
}
