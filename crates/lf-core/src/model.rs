//! Core data model for the logo document.
//!
//! The document is a flat record split across two independently edited
//! groups: the icon layer (glyph, size, rotation, stroke, fill) and the
//! background plate (corner radius, padding, shadow, color). A
//! `LogoSnapshot` is the total, immutable view of both groups at one
//! instant — the unit the history engine stores and compares.

use crate::color::colors_match;
use crate::icons::{DEFAULT_ICON_ID, IconId};
use serde::{Deserialize, Serialize};

// ─── Field groups ────────────────────────────────────────────────────────

/// Live values of the icon layer.
///
/// Setters perform no validation: range policing (size, opacity, ...)
/// belongs to the controls that produce the values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconState {
    pub icon_id: IconId,
    pub size: f32,
    pub rotate: f32,
    pub border_width: f32,
    pub border_color: String,
    pub fill_opacity: f32,
    pub color: String,
}

impl Default for IconState {
    fn default() -> Self {
        Self {
            icon_id: IconId::intern(DEFAULT_ICON_ID),
            size: 200.0,
            rotate: 0.0,
            border_width: 0.0,
            border_color: "#000000".to_string(),
            fill_opacity: 100.0,
            color: "#000000".to_string(),
        }
    }
}

/// Live values of the background plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundState {
    pub rounded: f32,
    pub padding: f32,
    /// Ordinal index into [`SHADOW_CLASSES`].
    pub shadow: u8,
    pub bg_color: String,
}

impl Default for BackgroundState {
    fn default() -> Self {
        Self {
            rounded: 50.0,
            padding: 10.0,
            shadow: 1,
            bg_color: "#000000".to_string(),
        }
    }
}

// ─── Snapshot ────────────────────────────────────────────────────────────

/// A total description of the document at one instant.
///
/// Always fully populated — there are no partial snapshots. Color fields
/// keep the spelling the user typed; use [`LogoSnapshot::equivalent`] for
/// comparisons that should ignore case and whitespace drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoSnapshot {
    pub icon_id: IconId,
    pub size: f32,
    pub rotate: f32,
    pub border_width: f32,
    pub border_color: String,
    pub fill_opacity: f32,
    pub color: String,
    pub rounded: f32,
    pub padding: f32,
    pub shadow: u8,
    pub bg_color: String,
}

impl LogoSnapshot {
    /// Build a snapshot from the two live field groups.
    pub fn compose(icon: &IconState, background: &BackgroundState) -> Self {
        Self {
            icon_id: icon.icon_id,
            size: icon.size,
            rotate: icon.rotate,
            border_width: icon.border_width,
            border_color: icon.border_color.clone(),
            fill_opacity: icon.fill_opacity,
            color: icon.color.clone(),
            rounded: background.rounded,
            padding: background.padding,
            shadow: background.shadow,
            bg_color: background.bg_color.clone(),
        }
    }

    /// The icon-group portion of this snapshot.
    pub fn icon_state(&self) -> IconState {
        IconState {
            icon_id: self.icon_id,
            size: self.size,
            rotate: self.rotate,
            border_width: self.border_width,
            border_color: self.border_color.clone(),
            fill_opacity: self.fill_opacity,
            color: self.color.clone(),
        }
    }

    /// The background-group portion of this snapshot.
    pub fn background_state(&self) -> BackgroundState {
        BackgroundState {
            rounded: self.rounded,
            padding: self.padding,
            shadow: self.shadow,
            bg_color: self.bg_color.clone(),
        }
    }

    /// Whether two snapshots describe the same document: non-color fields
    /// compare exactly, color fields compare after normalization.
    pub fn equivalent(&self, other: &Self) -> bool {
        self.icon_id == other.icon_id
            && self.size == other.size
            && self.rotate == other.rotate
            && self.border_width == other.border_width
            && colors_match(&self.border_color, &other.border_color)
            && self.fill_opacity == other.fill_opacity
            && colors_match(&self.color, &other.color)
            && self.rounded == other.rounded
            && self.padding == other.padding
            && self.shadow == other.shadow
            && colors_match(&self.bg_color, &other.bg_color)
    }
}

impl Default for LogoSnapshot {
    fn default() -> Self {
        Self::compose(&IconState::default(), &BackgroundState::default())
    }
}

// ─── Shadow levels ───────────────────────────────────────────────────────

/// Utility classes for each shadow level, smallest first.
pub const SHADOW_CLASSES: [&str; 6] = [
    "shadow-none",
    "shadow-sm",
    "shadow-md",
    "shadow-lg",
    "shadow-xl",
    "shadow-2xl",
];

/// Class for a shadow level. Out-of-range levels render with no shadow.
pub fn shadow_class(level: u8) -> &'static str {
    SHADOW_CLASSES
        .get(usize::from(level))
        .copied()
        .unwrap_or(SHADOW_CLASSES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_snapshot_matches_fresh_document() {
        let snapshot = LogoSnapshot::default();
        assert_eq!(snapshot.icon_id.as_str(), "bs-apple");
        assert_eq!(snapshot.size, 200.0);
        assert_eq!(snapshot.rounded, 50.0);
        assert_eq!(snapshot.shadow, 1);
        assert_eq!(snapshot.bg_color, "#000000");
    }

    #[test]
    fn compose_then_split_roundtrips() {
        let icon = IconState {
            size: 230.0,
            rotate: -8.0,
            color: "#fff7ed".to_string(),
            ..IconState::default()
        };
        let background = BackgroundState {
            rounded: 36.0,
            bg_color: "#EA580C".to_string(),
            ..BackgroundState::default()
        };

        let snapshot = LogoSnapshot::compose(&icon, &background);
        assert_eq!(snapshot.icon_state(), icon);
        assert_eq!(snapshot.background_state(), background);
    }

    #[test]
    fn equivalence_ignores_color_spelling() {
        let mut a = LogoSnapshot::default();
        a.color = "#abcdef".to_string();
        let mut b = a.clone();
        b.color = " #ABCDEF".to_string();
        b.bg_color = "  #000000 ".to_string();

        assert_ne!(a, b);
        assert!(a.equivalent(&b));
    }

    #[test]
    fn equivalence_is_exact_on_non_color_fields() {
        let a = LogoSnapshot::default();
        let mut b = a.clone();
        b.padding = 10.5;
        assert!(!a.equivalent(&b));
    }

    #[test]
    fn shadow_class_clamps_out_of_range() {
        assert_eq!(shadow_class(0), "shadow-none");
        assert_eq!(shadow_class(5), "shadow-2xl");
        assert_eq!(shadow_class(9), "shadow-none");
    }
}
