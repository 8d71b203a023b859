//! The editing session: one document plus its history engine.
//!
//! Owns the pieces that the TS-era singletons used to hide behind module
//! state. Construct once per session and hand a reference to whatever
//! drives the UI; tests get a fresh, isolated session per call.

use crate::document::LogoDocument;
use crate::history::HistoryEngine;
use lf_core::{LogoPreset, LogoSnapshot, logo_presets};
use std::rc::Rc;

pub struct EditorSession {
    document: Rc<LogoDocument>,
    history: HistoryEngine,
}

impl EditorSession {
    /// A fresh session on the default document, with history tracking
    /// already attached.
    pub fn new() -> Self {
        let document = Rc::new(LogoDocument::new());
        let history = HistoryEngine::new(Rc::clone(&document));
        history.initialize();
        Self { document, history }
    }

    pub fn document(&self) -> &LogoDocument {
        &self.document
    }

    pub fn history(&self) -> &HistoryEngine {
        &self.history
    }

    /// The current document state as one snapshot.
    pub fn snapshot(&self) -> LogoSnapshot {
        self.document.capture()
    }

    /// Apply a preset as a single undoable step.
    pub fn apply_preset(&self, preset: &LogoPreset) {
        self.history
            .apply_batch(|| self.document.apply(&preset.values));
    }

    /// The preset the document currently matches, if any.
    pub fn active_preset(&self) -> Option<&'static LogoPreset> {
        let current = self.document.capture();
        logo_presets().iter().find(|preset| preset.is_active(&current))
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lf_core::preset_by_id;

    #[test]
    fn fresh_session_has_no_history() {
        let session = EditorSession::new();
        assert!(!session.history().can_undo());
        assert!(!session.history().can_redo());
        assert_eq!(session.snapshot(), LogoSnapshot::default());
    }

    #[test]
    fn preset_application_is_one_undo_step() {
        let session = EditorSession::new();
        let startup = preset_by_id("startup").unwrap();

        session.apply_preset(startup);
        assert_eq!(session.history().past_len(), 1);
        assert!(session.snapshot().equivalent(&startup.values));

        session.history().undo();
        assert_eq!(session.snapshot(), LogoSnapshot::default());
    }

    #[test]
    fn active_preset_tracks_document_state() {
        let session = EditorSession::new();
        assert!(session.active_preset().is_none());

        let eco = preset_by_id("eco").unwrap();
        session.apply_preset(eco);
        assert_eq!(session.active_preset().map(|p| p.id), Some("eco"));

        // Any diverging edit deactivates the preset.
        session.document().icon.set_rotate(5.0);
        assert!(session.active_preset().is_none());
    }

    #[test]
    fn reapplying_the_active_preset_records_nothing() {
        let session = EditorSession::new();
        let eco = preset_by_id("eco").unwrap();

        session.apply_preset(eco);
        session.apply_preset(eco);
        assert_eq!(session.history().past_len(), 1);
    }
}
