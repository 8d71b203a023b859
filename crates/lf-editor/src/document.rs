//! The composite logo document.
//!
//! The document's fields physically live in two independent stores, but
//! undo/redo needs to treat them as one thing. `LogoDocument` is that
//! seam: a single `capture()`/`apply()` pair over both groups, plus a
//! fan-out `subscribe()` so an observer sees every change regardless of
//! which store it landed in. Adding a third field group later means
//! extending the snapshot and this facade — the history engine stays
//! untouched.

use crate::store::{BackgroundStore, IconStore};
use lf_core::LogoSnapshot;
use std::rc::Rc;

pub struct LogoDocument {
    pub icon: IconStore,
    pub background: BackgroundStore,
}

impl LogoDocument {
    /// A fresh document with the stock defaults.
    pub fn new() -> Self {
        Self {
            icon: IconStore::new(),
            background: BackgroundStore::new(),
        }
    }

    /// Read both stores into one immutable snapshot. Pure; always succeeds.
    pub fn capture(&self) -> LogoSnapshot {
        LogoSnapshot::compose(&self.icon.state(), &self.background.state())
    }

    /// Write every field of the snapshot back onto the stores.
    /// One whole-group write per store, so subscribers fire twice.
    pub fn apply(&self, snapshot: &LogoSnapshot) {
        self.icon.replace(snapshot.icon_state());
        self.background.replace(snapshot.background_state());
    }

    /// Observe changes to either store with a single callback.
    pub fn subscribe(&self, callback: impl Fn() + 'static) {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        self.icon.subscribe_shared(Rc::clone(&callback));
        self.background.subscribe_shared(callback);
    }
}

impl Default for LogoDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn capture_reflects_both_stores() {
        let document = LogoDocument::new();
        document.icon.set_size(230.0);
        document.background.set_rounded(36.0);

        let snapshot = document.capture();
        assert_eq!(snapshot.size, 230.0);
        assert_eq!(snapshot.rounded, 36.0);
    }

    #[test]
    fn apply_restores_a_captured_snapshot_exactly() {
        let document = LogoDocument::new();
        document.icon.set_color("#fff7ed".to_string());
        document.background.set_shadow(4);
        let saved = document.capture();

        document.icon.set_color("#dcfce7".to_string());
        document.background.set_shadow(0);
        document.apply(&saved);

        assert_eq!(document.capture(), saved);
    }

    #[test]
    fn subscribe_observes_both_stores() {
        let document = LogoDocument::new();
        let fired = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fired);
        document.subscribe(move || counter.set(counter.get() + 1));

        document.icon.set_rotate(-8.0);
        document.background.set_padding(20.0);
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn apply_notifies_once_per_store() {
        let document = LogoDocument::new();
        let fired = Rc::new(Cell::new(0));

        let counter = Rc::clone(&fired);
        document.subscribe(move || counter.set(counter.get() + 1));

        document.apply(&LogoSnapshot::default());
        assert_eq!(fired.get(), 2);
    }
}
