//! WASM bridge for the LogoFast editor — exposes the Rust editing
//! session to JavaScript.
//!
//! Compiled via `wasm-pack build --target web` and loaded by the editor
//! page. One `LogoEditor` instance backs one editing session.

use lf_core::{IconId, icon_catalog, logo_presets, preset_by_id};
use lf_editor::session::EditorSession;
use lf_editor::shortcuts::{ShortcutAction, ShortcutMap};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The main WASM-facing editor controller.
///
/// Holds the editor session (document stores + history engine). All
/// interaction from the page JS goes through this struct; the UI keeps
/// no state of its own beyond what it renders.
#[wasm_bindgen]
pub struct LogoEditor {
    session: EditorSession,
}

#[derive(Serialize)]
struct HistoryStatus {
    past: usize,
    future: usize,
    can_undo: bool,
    can_redo: bool,
}

#[wasm_bindgen]
impl LogoEditor {
    /// Create a session on the default document.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Set up panic hook for better error messages in console
        console_error_panic_hook_setup();

        Self {
            session: EditorSession::new(),
        }
    }

    // ─── Icon layer setters ──────────────────────────────────────────────

    pub fn set_icon(&self, id: &str) {
        self.session.document().icon.set_icon_id(IconId::intern(id));
    }

    pub fn set_size(&self, size: f32) {
        self.session.document().icon.set_size(size);
    }

    pub fn set_rotate(&self, rotate: f32) {
        self.session.document().icon.set_rotate(rotate);
    }

    pub fn set_border_width(&self, width: f32) {
        self.session.document().icon.set_border_width(width);
    }

    pub fn set_border_color(&self, color: &str) {
        self.session
            .document()
            .icon
            .set_border_color(color.to_string());
    }

    pub fn set_fill_opacity(&self, opacity: f32) {
        self.session.document().icon.set_fill_opacity(opacity);
    }

    pub fn set_color(&self, color: &str) {
        self.session.document().icon.set_color(color.to_string());
    }

    // ─── Background setters ──────────────────────────────────────────────

    pub fn set_rounded(&self, rounded: f32) {
        self.session.document().background.set_rounded(rounded);
    }

    pub fn set_padding(&self, padding: f32) {
        self.session.document().background.set_padding(padding);
    }

    pub fn set_shadow(&self, shadow: u8) {
        self.session.document().background.set_shadow(shadow);
    }

    pub fn set_bg_color(&self, color: &str) {
        self.session
            .document()
            .background
            .set_bg_color(color.to_string());
    }

    // ─── History ─────────────────────────────────────────────────────────

    pub fn undo(&self) {
        self.session.history().undo();
    }

    pub fn redo(&self) {
        self.session.history().redo();
    }

    pub fn clear_history(&self) {
        self.session.history().clear();
    }

    pub fn can_undo(&self) -> bool {
        self.session.history().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.session.history().can_redo()
    }

    pub fn past_len(&self) -> usize {
        self.session.history().past_len()
    }

    pub fn future_len(&self) -> usize {
        self.session.history().future_len()
    }

    /// Stack lengths and button enablement as JSON:
    /// `{"past":N,"future":N,"can_undo":b,"can_redo":b}`.
    pub fn history_json(&self) -> String {
        let status = HistoryStatus {
            past: self.session.history().past_len(),
            future: self.session.history().future_len(),
            can_undo: self.session.history().can_undo(),
            can_redo: self.session.history().can_redo(),
        };
        serde_json::to_string(&status).unwrap_or_default()
    }

    // ─── Presets ─────────────────────────────────────────────────────────

    /// Apply a preset by id as one undo step.
    /// Returns `false` for unknown ids.
    pub fn apply_preset(&self, id: &str) -> bool {
        match preset_by_id(id) {
            Some(preset) => {
                self.session.apply_preset(preset);
                true
            }
            None => false,
        }
    }

    /// Id of the preset the document currently matches, if any.
    pub fn active_preset_id(&self) -> Option<String> {
        self.session.active_preset().map(|preset| preset.id.to_string())
    }

    // ─── Queries ─────────────────────────────────────────────────────────

    /// The full current document state as JSON.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Handle a keydown. Returns `true` if the combo was consumed
    /// (the page should preventDefault).
    pub fn handle_key(&self, key: &str, ctrl: bool, shift: bool, meta: bool) -> bool {
        match ShortcutMap::resolve(key, ctrl, shift, meta) {
            Some(ShortcutAction::Undo) => {
                self.session.history().undo();
                true
            }
            Some(ShortcutAction::Redo) => {
                self.session.history().redo();
                true
            }
            None => false,
        }
    }
}

impl Default for LogoEditor {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Standalone catalog/preset accessors (no session needed) ─────────────

/// The built-in presets as JSON, in display order.
#[wasm_bindgen]
pub fn presets_json() -> String {
    serde_json::to_string(logo_presets()).unwrap_or_default()
}

/// The curated icon catalog as JSON.
#[wasm_bindgen]
pub fn icon_catalog_json() -> String {
    serde_json::to_string(icon_catalog()).unwrap_or_default()
}

/// Readable foreground color for the given background.
#[wasm_bindgen]
pub fn contrast_color(background: &str) -> String {
    lf_core::contrast_color(background).to_string()
}

/// Utility class for a shadow level.
#[wasm_bindgen]
pub fn shadow_class(level: u8) -> String {
    lf_core::shadow_class(level).to_string()
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("LF WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridge_setters_feed_history() {
        let editor = LogoEditor::new();
        editor.set_size(250.0);
        editor.set_rotate(10.0);
        assert_eq!(editor.past_len(), 2);

        editor.undo();
        assert!(editor.can_redo());
    }

    #[test]
    fn apply_preset_by_id() {
        let editor = LogoEditor::new();
        assert!(editor.apply_preset("creative"));
        assert_eq!(editor.active_preset_id().as_deref(), Some("creative"));
        assert!(!editor.apply_preset("nope"));
    }

    #[test]
    fn json_surfaces_are_well_formed() {
        let editor = LogoEditor::new();
        let snapshot: serde_json::Value =
            serde_json::from_str(&editor.snapshot_json()).unwrap();
        assert_eq!(snapshot["icon_id"], "bs-apple");

        let history: serde_json::Value =
            serde_json::from_str(&editor.history_json()).unwrap();
        assert_eq!(history["past"], 0);

        let presets: serde_json::Value = serde_json::from_str(&presets_json()).unwrap();
        assert_eq!(presets.as_array().unwrap().len(), 5);
    }

    #[test]
    fn keyboard_dispatch() {
        let editor = LogoEditor::new();
        editor.set_size(300.0);

        assert!(editor.handle_key("z", true, false, false));
        assert_eq!(editor.past_len(), 0);
        assert!(editor.handle_key("Z", true, true, false));
        assert_eq!(editor.past_len(), 1);
        assert!(!editor.handle_key("q", false, false, false));
    }
}
