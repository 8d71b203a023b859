//! Field stores: the live, subscribable state containers.
//!
//! Each store owns one group of document fields and exposes a dedicated
//! setter per field. Setters are unconditional last-write-wins
//! assignments — no validation, no clamping (range limits are the
//! calling control's job) — and every assignment notifies all
//! subscribers synchronously, in registration order, before the setter
//! returns.

use lf_core::{BackgroundState, IconId, IconState};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

/// A single-threaded state cell with synchronous change subscriptions.
///
/// The state borrow is released before subscribers run, so a subscriber
/// may freely read the store (or any other store) from its callback.
pub struct FieldStore<T> {
    state: RefCell<T>,
    subscribers: RefCell<SmallVec<[Subscriber; 2]>>,
}

impl<T: Clone> FieldStore<T> {
    pub fn new(state: T) -> Self {
        Self {
            state: RefCell::new(state),
            subscribers: RefCell::new(SmallVec::new()),
        }
    }

    /// Clone out the current state.
    pub fn get(&self) -> T {
        self.state.borrow().clone()
    }

    /// Register a change callback. Subscribers fire in registration
    /// order after every write, for the lifetime of the store.
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.subscribe_shared(Rc::new(callback));
    }

    pub(crate) fn subscribe_shared(&self, callback: Subscriber) {
        self.subscribers.borrow_mut().push(callback);
    }

    /// Apply a mutation and notify subscribers. The mutation runs under
    /// the state borrow; notification runs after it is released.
    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.state.borrow_mut());
        self.notify();
    }

    fn notify(&self) {
        // Snapshot the list so a callback may register new subscribers.
        let subscribers: SmallVec<[Subscriber; 2]> = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            subscriber();
        }
    }
}

// ─── Icon store ──────────────────────────────────────────────────────────

/// Holds the icon-layer fields with one setter per field.
pub struct IconStore {
    inner: FieldStore<IconState>,
}

impl IconStore {
    pub fn new() -> Self {
        Self {
            inner: FieldStore::new(IconState::default()),
        }
    }

    pub fn state(&self) -> IconState {
        self.inner.get()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.inner.subscribe(callback);
    }

    pub(crate) fn subscribe_shared(&self, callback: Subscriber) {
        self.inner.subscribe_shared(callback);
    }

    /// Replace the whole group in one write (a single notification).
    pub fn replace(&self, state: IconState) {
        self.inner.update(|s| *s = state);
    }

    pub fn set_icon_id(&self, icon_id: IconId) {
        self.inner.update(|s| s.icon_id = icon_id);
    }

    pub fn set_size(&self, size: f32) {
        self.inner.update(|s| s.size = size);
    }

    pub fn set_rotate(&self, rotate: f32) {
        self.inner.update(|s| s.rotate = rotate);
    }

    pub fn set_border_width(&self, width: f32) {
        self.inner.update(|s| s.border_width = width);
    }

    pub fn set_border_color(&self, color: String) {
        self.inner.update(|s| s.border_color = color);
    }

    pub fn set_fill_opacity(&self, opacity: f32) {
        self.inner.update(|s| s.fill_opacity = opacity);
    }

    pub fn set_color(&self, color: String) {
        self.inner.update(|s| s.color = color);
    }
}

impl Default for IconStore {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Background store ────────────────────────────────────────────────────

/// Holds the background-plate fields with one setter per field.
pub struct BackgroundStore {
    inner: FieldStore<BackgroundState>,
}

impl BackgroundStore {
    pub fn new() -> Self {
        Self {
            inner: FieldStore::new(BackgroundState::default()),
        }
    }

    pub fn state(&self) -> BackgroundState {
        self.inner.get()
    }

    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        self.inner.subscribe(callback);
    }

    pub(crate) fn subscribe_shared(&self, callback: Subscriber) {
        self.inner.subscribe_shared(callback);
    }

    /// Replace the whole group in one write (a single notification).
    pub fn replace(&self, state: BackgroundState) {
        self.inner.update(|s| *s = state);
    }

    pub fn set_rounded(&self, rounded: f32) {
        self.inner.update(|s| s.rounded = rounded);
    }

    pub fn set_padding(&self, padding: f32) {
        self.inner.update(|s| s.padding = padding);
    }

    pub fn set_shadow(&self, shadow: u8) {
        self.inner.update(|s| s.shadow = shadow);
    }

    pub fn set_bg_color(&self, color: String) {
        self.inner.update(|s| s.bg_color = color);
    }
}

impl Default for BackgroundStore {
    fn default() -> Self {
        Self::new()
    }
}
