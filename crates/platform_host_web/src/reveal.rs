//! One-shot "scrolled into view" detection backed by `IntersectionObserver`.

/// Fraction of an element that must be on screen before it counts as revealed.
pub const REVEAL_THRESHOLD: f64 = 0.3;

/// Live observer registration; disconnects when dropped.
pub struct RevealObserver {
    #[cfg(target_arch = "wasm32")]
    observer: web_sys::IntersectionObserver,
    #[cfg(target_arch = "wasm32")]
    _callback: wasm_bindgen::closure::Closure<
        dyn FnMut(js_sys::Array, web_sys::IntersectionObserver),
    >,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        self.observer.disconnect();
    }
}

/// Calls `on_reveal` once, the first time `threshold` of `element` intersects the viewport.
///
/// Returns `None` when no observer is needed or available. Outside the browser, and in browsers
/// without `IntersectionObserver`, the element is treated as revealed immediately.
pub fn observe_reveal(
    element: &web_sys::Element,
    threshold: f64,
    on_reveal: impl FnOnce() + 'static,
) -> Option<RevealObserver> {
    #[cfg(target_arch = "wasm32")]
    {
        use std::{cell::Cell, rc::Rc};

        use wasm_bindgen::{closure::Closure, JsCast, JsValue};

        let pending: Rc<Cell<Option<Box<dyn FnOnce()>>>> =
            Rc::new(Cell::new(Some(Box::new(on_reveal))));
        let fallback = Rc::clone(&pending);

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let revealed = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if !revealed {
                    return;
                }
                observer.disconnect();
                if let Some(reveal) = pending.take() {
                    reveal();
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(observer) => {
                observer.observe(element);
                Some(RevealObserver {
                    observer,
                    _callback: callback,
                })
            }
            Err(_) => {
                if let Some(reveal) = fallback.take() {
                    reveal();
                }
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (element, threshold);
        on_reveal();
        None
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[test]
    fn native_targets_reveal_immediately() {
        let element: web_sys::Element = wasm_bindgen::JsCast::unchecked_into(wasm_bindgen::JsValue::NULL);
        let revealed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&revealed);

        let observer = observe_reveal(&element, REVEAL_THRESHOLD, move || flag.set(true));

        assert!(observer.is_none());
        assert!(revealed.get());
    }
}
