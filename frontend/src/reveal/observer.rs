//! Binds [`RevealTracker`]s to the browser's `IntersectionObserver`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::state::{batch_ratio, RevealTracker};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;
type RevealHook = Cell<Option<Box<dyn FnOnce()>>>;

/// Keeps one element's observer alive.
///
/// The observer is disconnected exactly once: when the element reveals, or
/// when the subscription is dropped, whichever happens first.
pub struct RevealSubscription {
    observer: Rc<RefCell<Option<IntersectionObserver>>>,
    _callback: Option<ObserverCallback>,
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        release(&self.observer);
    }
}

fn release(slot: &RefCell<Option<IntersectionObserver>>) {
    if let Some(observer) = slot.borrow_mut().take() {
        observer.disconnect();
    }
}

/// Watches `element` and runs `on_reveal` once its visible fraction reaches `threshold`.
///
/// If the host has no `IntersectionObserver`, the element is revealed right away
/// instead of staying hidden forever.
pub fn register(
    element: &Element,
    threshold: f64,
    on_reveal: impl FnOnce() + 'static,
) -> RevealSubscription {
    let tracker = Rc::new(RefCell::new(RevealTracker::new(threshold)));
    let slot = Rc::new(RefCell::new(None::<IntersectionObserver>));
    let on_reveal: Rc<RevealHook> = Rc::new(Cell::new(Some(Box::new(on_reveal))));

    let callback = {
        let tracker = tracker.clone();
        let slot = slot.clone();
        let on_reveal = on_reveal.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| (entry.is_intersecting(), entry.intersection_ratio()));
            let Some(ratio) = batch_ratio(batch) else {
                return;
            };

            if tracker.borrow_mut().observe(ratio) {
                debug!("Revealed element at ratio {:.2}", ratio);
                release(&slot);
                if let Some(reveal) = on_reveal.take() {
                    reveal();
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(tracker.borrow().threshold()));

    let created = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options);
    match created {
        Ok(observer) => {
            observer.observe(element);
            *slot.borrow_mut() = Some(observer);
            RevealSubscription {
                observer: slot,
                _callback: Some(callback),
            }
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable, revealing immediately: {:?}", err);
            tracker.borrow_mut().reveal_now();
            if let Some(reveal) = on_reveal.take() {
                reveal();
            }
            RevealSubscription {
                observer: slot,
                _callback: None,
            }
        }
    }
}
