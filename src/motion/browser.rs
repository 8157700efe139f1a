use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, Window};

use super::viewport::{
    IntersectionListener, MotionError, Observation, ScrollListener, Subscription, ViewportSource,
};

/// The real page: `window` scroll events and `IntersectionObserver`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BrowserViewport;

impl ViewportSource for BrowserViewport {
    type Target = Element;

    fn scroll_offset(&self) -> f64 {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn on_scroll(&self, listener: ScrollListener) -> Result<Subscription, MotionError> {
        let window = web_sys::window().ok_or(MotionError::ListenerRejected("scroll"))?;

        let scroll_callback = Closure::<dyn Fn()>::new({
            let window = window.clone();
            move || listener(window.scroll_y().unwrap_or(0.0))
        });

        window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
            .map_err(|_| MotionError::ListenerRejected("scroll"))?;

        Ok(Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                scroll_callback.as_ref().unchecked_ref(),
            );
        }))
    }

    fn observe(
        &self,
        target: &Element,
        listener: IntersectionListener,
    ) -> Result<Observation, MotionError> {
        let window = web_sys::window().ok_or(MotionError::ObservationUnavailable)?;
        let supported = Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            return Err(MotionError::ObservationUnavailable);
        }

        let intersect_callback = Closure::<dyn Fn(Array)>::new(move |entries: Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    listener(entry.is_intersecting());
                }
            }
        });

        let observer = IntersectionObserver::new(intersect_callback.as_ref().unchecked_ref())
            .map_err(|_| MotionError::ObservationUnavailable)?;
        observer.observe(target);

        Ok(Observation {
            initially_visible: in_viewport(&window, target),
            subscription: Subscription::new(move || {
                observer.disconnect();
                drop(intersect_callback);
            }),
        })
    }
}

fn in_viewport(window: &Window, element: &Element) -> bool {
    let rect = element.get_bounding_client_rect();
    let height = window
        .inner_height()
        .ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0);
    rect.top() < height && rect.bottom() > 0.0
}
