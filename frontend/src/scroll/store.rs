//! Process-wide scroll state: one writer, any number of readers.
//!
//! Readers subscribe for change notifications and pull the latest
//! [`ScrollSnapshot`] themselves. Only the broadcaster publishes.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use yew::prelude::*;

use super::snapshot::ScrollSnapshot;

type Listener = Rc<dyn Fn(&ScrollStore)>;

#[derive(Clone, Default)]
pub struct ScrollStore {
    inner: Rc<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    snapshot: Cell<ScrollSnapshot>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_id: Cell<u64>,
}

impl PartialEq for ScrollStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScrollStore {
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.inner.snapshot.get()
    }

    /// Stores `snapshot` and notifies subscribers if it differs from the current one.
    pub(super) fn publish(&self, snapshot: ScrollSnapshot) -> bool {
        if self.inner.snapshot.get() == snapshot {
            return false;
        }
        self.inner.snapshot.set(snapshot);

        // Listeners may subscribe or unsubscribe while being notified.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(self);
        }
        true
    }

    /// Registers `listener` until the returned subscription is dropped.
    pub fn subscribe(&self, listener: impl Fn(&ScrollStore) + 'static) -> StoreSubscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        let listener: Listener = Rc::new(listener);
        self.inner.listeners.borrow_mut().push((id, listener));
        StoreSubscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct StoreSubscription {
    id: u64,
    store: Weak<StoreInner>,
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// Latest scroll snapshot from the nearest [`ScrollStore`] context.
///
/// Re-renders the calling component whenever the snapshot changes. Outside a
/// provider this returns the default (unscrolled) snapshot.
#[hook]
pub fn use_scroll_snapshot() -> ScrollSnapshot {
    let store = use_context::<ScrollStore>();
    let snapshot = use_state_eq({
        let store = store.clone();
        move || store.map(|store| store.snapshot()).unwrap_or_default()
    });

    {
        let snapshot = snapshot.clone();
        use_effect_with_deps(
            move |store: &Option<ScrollStore>| {
                let subscription = store.as_ref().map(|store| {
                    snapshot.set(store.snapshot());
                    store.subscribe(move |store| snapshot.set(store.snapshot()))
                });
                move || drop(subscription)
            },
            store,
        );
    }

    *snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled_to(scroll_y: u32) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            viewport_height: 800.0,
            ..ScrollSnapshot::default()
        }
    }

    #[test]
    fn readers_pull_latest_snapshot() {
        let store = ScrollStore::default();
        let seen = Rc::new(Cell::new(0));
        let _subscription = {
            let seen = seen.clone();
            store.subscribe(move |store| seen.set(store.snapshot().scroll_y))
        };

        assert!(store.publish(scrolled_to(120)));
        assert_eq!(seen.get(), 120);
        assert_eq!(store.snapshot().scroll_y, 120);
    }

    #[test]
    fn identical_snapshot_does_not_notify() {
        let store = ScrollStore::default();
        let calls = Rc::new(Cell::new(0));
        let _subscription = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };

        store.publish(scrolled_to(10));
        assert!(!store.publish(scrolled_to(10)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dropped_subscription_is_not_notified() {
        let store = ScrollStore::default();
        let calls = Rc::new(Cell::new(0));
        let subscription = {
            let calls = calls.clone();
            store.subscribe(move |_| calls.set(calls.get() + 1))
        };
        assert_eq!(store.subscriber_count(), 1);

        drop(subscription);
        assert_eq!(store.subscriber_count(), 0);
        store.publish(scrolled_to(300));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn every_reader_sees_the_same_snapshot() {
        let store = ScrollStore::default();
        let a = Rc::new(Cell::new(0));
        let b = Rc::new(Cell::new(0));
        let _sa = {
            let a = a.clone();
            store.subscribe(move |store| a.set(store.snapshot().scroll_y))
        };
        let _sb = {
            let b = b.clone();
            store.subscribe(move |store| b.set(store.snapshot().scroll_y))
        };

        store.publish(scrolled_to(42));
        assert_eq!((a.get(), b.get()), (42, 42));
    }

    #[test]
    fn subscription_outliving_store_is_harmless() {
        let store = ScrollStore::default();
        let subscription = store.subscribe(|_| {});
        drop(store);
        drop(subscription);
    }

    #[test]
    fn clones_share_state() {
        let store = ScrollStore::default();
        let reader = store.clone();
        assert!(store == reader);
        store.publish(scrolled_to(7));
        assert_eq!(reader.snapshot().scroll_y, 7);
        assert!(store != ScrollStore::default());
    }
}
