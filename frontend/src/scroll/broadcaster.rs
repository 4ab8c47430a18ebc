//! Owns the page's only scroll subscription and republishes derived values
//! through a [`ScrollStore`].

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{info, trace, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Window};

use super::frame_gate::FrameGate;
use super::snapshot::{ScrollSnapshot, SectionRect};
use super::store::ScrollStore;
use crate::sections::SECTIONS;

const EVENTS: [&str; 2] = ["scroll", "resize"];

struct Shared {
    store: ScrollStore,
    gate: RefCell<FrameGate>,
    frame_id: Cell<Option<i32>>,
    on_frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Shared {
    /// Called for every scroll/resize event.
    fn schedule(&self) {
        if !self.gate.borrow_mut().request() {
            return;
        }
        let requested = web_sys::window().and_then(|window| {
            let on_frame = self.on_frame.borrow();
            let on_frame = on_frame.as_ref()?;
            window.request_animation_frame(on_frame.as_ref().unchecked_ref()).ok()
        });
        match requested {
            Some(id) => self.frame_id.set(Some(id)),
            None => {
                // No frame source: recompute inline rather than go stale.
                self.gate.borrow_mut().cancel();
                self.recompute();
            }
        }
    }

    fn run_frame(&self) {
        self.frame_id.set(None);
        let due = self.gate.borrow_mut().begin_frame();
        if due {
            self.recompute();
        }
    }

    fn recompute(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        let viewport_height = window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0);
        let document = window.document();

        let snapshot = ScrollSnapshot::compute(scroll_y, viewport_height, SECTIONS, |id| {
            let rect = document.as_ref()?.get_element_by_id(id)?.get_bounding_client_rect();
            Some(SectionRect {
                top: rect.top(),
                bottom: rect.bottom(),
            })
        });
        if self.store.publish(snapshot) {
            trace!("Scroll snapshot updated: {:?}", snapshot);
        }
    }
}

/// Live scroll subscription. Dropping it removes the listeners and cancels any pending frame.
pub struct ScrollBroadcaster {
    window: Window,
    shared: Rc<Shared>,
    on_event: Closure<dyn FnMut()>,
}

impl ScrollBroadcaster {
    /// Subscribes to scroll and resize events and publishes an initial snapshot.
    ///
    /// Returns `None` when there is no `window` to listen on.
    pub fn install(store: ScrollStore) -> Option<Self> {
        let window = web_sys::window()?;

        let shared = Rc::new(Shared {
            store,
            gate: RefCell::new(FrameGate::default()),
            frame_id: Cell::new(None),
            on_frame: RefCell::new(None),
        });

        let weak: Weak<Shared> = Rc::downgrade(&shared);
        *shared.on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_timestamp: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.run_frame();
            }
        }) as Box<dyn FnMut(f64)>));

        let weak = Rc::downgrade(&shared);
        let on_event = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.schedule();
            }
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        for event in EVENTS {
            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                event,
                on_event.as_ref().unchecked_ref(),
                &options,
            ) {
                warn!("Failed to listen for {} events: {:?}", event, err);
            }
        }

        shared.recompute();
        info!("Scroll broadcaster installed");

        Some(Self {
            window,
            shared,
            on_event,
        })
    }
}

impl Drop for ScrollBroadcaster {
    fn drop(&mut self) {
        for event in EVENTS {
            let _ = self
                .window
                .remove_event_listener_with_callback(event, self.on_event.as_ref().unchecked_ref());
        }
        if let Some(id) = self.shared.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let mut gate = self.shared.gate.borrow_mut();
        gate.cancel();
        info!("Scroll broadcaster torn down after {} frames", gate.frames());
    }
}
