//! # Observable Stores
//!
//! Process-wide preferences (current language, dark mode) and the live document
//! snapshot are held in explicit stores instead of globals. A store is created
//! once at startup and handed to every consumer by reference.
//!
//! Every `set` notifies subscribers. Consumers running inside an event loop can
//! poll [`Subscription::has_changed`] on each tick, or `await`
//! [`Subscription::changed`] when they live in an async task. Values that come
//! from another window or tab are fed in through [`Store::set`] like any local
//! write.

use tokio::sync::watch;
use tracing::debug;

/// Shared value with change notification
#[derive(Debug)]
pub struct Store<T> {
    tx: watch::Sender<T>,
}

impl<T> Store<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value and notify every subscriber
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
        debug!(subscribers = self.tx.receiver_count(), "Store updated");
    }

    /// Update in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Run `f` against the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Register a new subscriber.
    ///
    /// The subscription starts in the "seen" state: only writes made after
    /// this call are reported as changes.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Store<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// Receiving side of a [`Store`]
#[derive(Debug, Clone)]
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Whether a write happened since the last observed value.
    ///
    /// A dropped store counts as "no change".
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next write. Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Run `f` on the current value and mark it as seen
    pub fn observe<R>(&mut self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.rx.borrow_and_update())
    }
}

impl<T: Clone> Subscription<T> {
    /// Current value, marking it as seen
    pub fn latest(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }
}
