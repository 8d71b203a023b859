//! Linear undo/redo over document snapshots.
//!
//! The engine subscribes to both field stores and diffs the document
//! against the last recorded snapshot after every write. Effective
//! changes push the *previous* snapshot onto `past` and clear `future`;
//! writes that only re-spell a color are ignored. Programmatic replays
//! (undo, redo, batch application) run with tracking paused so the
//! engine never re-records its own writes.
//!
//! One engine instance exists per editing session. Nested batches and
//! undo/redo calls from inside a batch mutation are disallowed by
//! contract — the single pause flag cannot express them.

use crate::document::LogoDocument;
use lf_core::LogoSnapshot;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::{Rc, Weak};

/// Hard cap on `past`. Oldest entries are evicted first on overflow.
pub const MAX_HISTORY_ITEMS: usize = 120;

#[derive(Default)]
struct HistoryState {
    /// Snapshots preceding the current state, oldest first.
    past: Vec<LogoSnapshot>,
    /// Snapshots undone from the current state, nearest first.
    future: Vec<LogoSnapshot>,
    /// Baseline the next store change is diffed against.
    last_snapshot: Option<LogoSnapshot>,
    /// Set while the engine itself is writing the stores.
    paused: bool,
    /// Whether store subscriptions have been attached.
    initialized: bool,
}

/// The per-session undo/redo engine.
///
/// Construct once, next to the document it observes, and pass by
/// reference to whatever owns the session. Every operation is
/// synchronous and completes within the triggering event.
pub struct HistoryEngine {
    document: Rc<LogoDocument>,
    state: Rc<RefCell<HistoryState>>,
}

impl HistoryEngine {
    /// Create an engine for `document`. Subscriptions are attached
    /// lazily by [`initialize`](Self::initialize).
    pub fn new(document: Rc<LogoDocument>) -> Self {
        Self {
            document,
            state: Rc::new(RefCell::new(HistoryState::default())),
        }
    }

    /// Attach store subscriptions and baseline the current snapshot.
    ///
    /// Idempotent: callers may (and do) invoke this defensively; only
    /// the first call has any effect.
    pub fn initialize(&self) {
        {
            let mut state = self.state.borrow_mut();
            if state.initialized {
                return;
            }
            state.initialized = true;
            state.last_snapshot = Some(self.document.capture());
        }

        // Weak document reference: the stores hold the subscriber, so a
        // strong reference here would cycle document -> callback -> document.
        let document = Rc::downgrade(&self.document);
        let state = Rc::clone(&self.state);
        self.document
            .subscribe(move || track_change(&document, &state));
    }

    /// Revert to the most recent `past` snapshot. No-op when `past` is
    /// empty — matches a disabled toolbar button being clicked anyway.
    pub fn undo(&self) {
        self.initialize();

        let Some(previous) = self.state.borrow_mut().past.pop() else {
            return;
        };
        let current = self.document.capture();
        self.apply_paused(&previous);

        let mut state = self.state.borrow_mut();
        state.last_snapshot = Some(previous);
        state.future.insert(0, current);
        log::trace!(
            "undo applied: past={} future={}",
            state.past.len(),
            state.future.len()
        );
    }

    /// Re-apply the nearest `future` snapshot. No-op when `future` is
    /// empty.
    ///
    /// The pre-redo state goes back onto `past` through the same capped
    /// push as forward edits, so redo bookkeeping right at the cap can
    /// evict the oldest real history entry.
    pub fn redo(&self) {
        self.initialize();

        let next = {
            let mut state = self.state.borrow_mut();
            if state.future.is_empty() {
                return;
            }
            state.future.remove(0)
        };
        let current = self.document.capture();
        self.apply_paused(&next);

        let mut state = self.state.borrow_mut();
        push_capped(&mut state.past, current);
        state.last_snapshot = Some(next);
        log::trace!(
            "redo applied: past={} future={}",
            state.past.len(),
            state.future.len()
        );
    }

    /// Forget all history and re-baseline on the current state. The
    /// visible document is untouched.
    pub fn clear(&self) {
        let snapshot = self.document.capture();
        let mut state = self.state.borrow_mut();
        state.past.clear();
        state.future.clear();
        state.last_snapshot = Some(snapshot);
    }

    /// Run `mutate` — typically several field writes — as one undoable
    /// step. A batch that changes nothing only re-baselines.
    pub fn apply_batch(&self, mutate: impl FnOnce()) {
        let result: Result<(), Infallible> = self.try_apply_batch(|| {
            mutate();
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Fallible form of [`apply_batch`](Self::apply_batch).
    ///
    /// If `mutate` fails, tracking is unpaused before the error returns
    /// to the caller and no history entry is recorded; fields the
    /// mutation wrote before failing are left in place (no rollback).
    pub fn try_apply_batch<T, E>(
        &self,
        mutate: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.initialize();

        let before = self.document.capture();
        let outcome = {
            let _guard = PauseGuard::engage(&self.state);
            mutate()
        };
        let value = outcome?;
        let after = self.document.capture();

        let mut state = self.state.borrow_mut();
        if before.equivalent(&after) {
            state.last_snapshot = Some(after);
            return Ok(value);
        }

        push_capped(&mut state.past, before);
        state.future.clear();
        state.last_snapshot = Some(after);
        log::debug!("batch recorded as one step: past={}", state.past.len());
        Ok(value)
    }

    /// Number of undoable steps. Read-only; drives button enablement.
    pub fn past_len(&self) -> usize {
        self.state.borrow().past.len()
    }

    /// Number of redoable steps.
    pub fn future_len(&self) -> usize {
        self.state.borrow().future.len()
    }

    pub fn can_undo(&self) -> bool {
        self.past_len() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.future_len() > 0
    }

    /// Write a snapshot onto the stores with tracking paused, so the
    /// resulting store notifications are not re-recorded.
    fn apply_paused(&self, snapshot: &LogoSnapshot) {
        let _guard = PauseGuard::engage(&self.state);
        self.document.apply(snapshot);
    }
}

/// Store-change subscriber: diff the document against the baseline and
/// record the pre-change snapshot when the change is effective.
fn track_change(document: &Weak<LogoDocument>, state: &RefCell<HistoryState>) {
    if state.borrow().paused {
        return;
    }
    let Some(document) = document.upgrade() else {
        return;
    };

    let snapshot = document.capture();
    let mut state = state.borrow_mut();
    match state.last_snapshot.take() {
        // Out-of-order initialization: adopt the first snapshot seen.
        None => state.last_snapshot = Some(snapshot),
        // Spurious write (same value, or a re-spelled color): keep the
        // old baseline, record nothing.
        Some(last) if snapshot.equivalent(&last) => state.last_snapshot = Some(last),
        Some(last) => {
            push_capped(&mut state.past, last);
            state.future.clear();
            state.last_snapshot = Some(snapshot);
        }
    }
}

fn push_capped(past: &mut Vec<LogoSnapshot>, snapshot: LogoSnapshot) {
    past.push(snapshot);
    if past.len() > MAX_HISTORY_ITEMS {
        past.remove(0);
    }
}

/// Pauses tracking for as long as it lives. `Drop` restores the flag,
/// so a panicking or failing batch mutation cannot leave the engine
/// stuck paused.
struct PauseGuard {
    state: Rc<RefCell<HistoryState>>,
}

impl PauseGuard {
    fn engage(state: &Rc<RefCell<HistoryState>>) -> Self {
        state.borrow_mut().paused = true;
        Self {
            state: Rc::clone(state),
        }
    }
}

impl Drop for PauseGuard {
    fn drop(&mut self) {
        self.state.borrow_mut().paused = false;
    }
}
