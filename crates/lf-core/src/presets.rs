//! Built-in logo presets.
//!
//! A preset is a complete snapshot plus display metadata. Applying one
//! rewrites every field of the document, which is why preset application
//! goes through the history engine's batch primitive — one undo step,
//! not eleven.

use crate::icons::IconId;
use crate::model::LogoSnapshot;
use serde::Serialize;
use std::sync::LazyLock;

/// A named, fully specified document configuration.
#[derive(Debug, Clone, Serialize)]
pub struct LogoPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub values: LogoSnapshot,
}

impl LogoPreset {
    /// Whether the document currently shows exactly this preset, under
    /// the same normalized comparison the history engine uses.
    pub fn is_active(&self, current: &LogoSnapshot) -> bool {
        self.values.equivalent(current)
    }
}

#[allow(clippy::too_many_arguments)]
fn preset(
    id: &'static str,
    name: &'static str,
    icon: &str,
    size: f32,
    rotate: f32,
    border_width: f32,
    border_color: &str,
    color: &str,
    rounded: f32,
    padding: f32,
    shadow: u8,
    bg_color: &str,
) -> LogoPreset {
    LogoPreset {
        id,
        name,
        values: LogoSnapshot {
            icon_id: IconId::intern(icon),
            size,
            rotate,
            border_width,
            border_color: border_color.to_string(),
            fill_opacity: 100.0,
            color: color.to_string(),
            rounded,
            padding,
            shadow,
            bg_color: bg_color.to_string(),
        },
    }
}

static LOGO_PRESETS: LazyLock<Vec<LogoPreset>> = LazyLock::new(|| {
    vec![
        preset(
            "startup", "Startup", "bs-rocket", 230.0, -8.0, 0.0, "#fff7ed", "#fff7ed", 36.0, 20.0,
            4, "#ea580c",
        ),
        preset(
            "eco", "Eco", "io-leaf", 220.0, 0.0, 0.0, "#dcfce7", "#dcfce7", 120.0, 24.0, 2,
            "#166534",
        ),
        preset(
            "secure", "Secure", "bs-shield", 220.0, 0.0, 1.0, "#dbeafe", "#eff6ff", 44.0, 18.0, 3,
            "#1d4ed8",
        ),
        preset(
            "creative", "Creative", "bs-palette", 210.0, -12.0, 0.0, "#fef3c7", "#fef3c7", 22.0,
            22.0, 2, "#a16207",
        ),
        preset(
            "premium", "Premium", "bs-gem", 215.0, 0.0, 1.0, "#e5e7eb", "#f9fafb", 52.0, 18.0, 4,
            "#111827",
        ),
    ]
});

/// All built-in presets, in display order.
pub fn logo_presets() -> &'static [LogoPreset] {
    &LOGO_PRESETS
}

/// Look up a preset by id.
pub fn preset_by_id(id: &str) -> Option<&'static LogoPreset> {
    LOGO_PRESETS.iter().find(|preset| preset.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::icon_by_id;

    #[test]
    fn five_presets_in_display_order() {
        let ids: Vec<&str> = logo_presets().iter().map(|p| p.id).collect();
        assert_eq!(ids, ["startup", "eco", "secure", "creative", "premium"]);
    }

    #[test]
    fn preset_icons_exist_in_catalog() {
        for preset in logo_presets() {
            let icon = icon_by_id(preset.values.icon_id);
            assert_eq!(
                icon.icon_id(),
                preset.values.icon_id,
                "preset {} references an unknown icon",
                preset.id
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        let eco = preset_by_id("eco").unwrap();
        assert_eq!(eco.name, "Eco");
        assert_eq!(eco.values.bg_color, "#166534");
        assert!(preset_by_id("missing").is_none());
    }

    #[test]
    fn active_detection_uses_normalized_equivalence() {
        let secure = preset_by_id("secure").unwrap();
        let mut current = secure.values.clone();
        current.bg_color = "#1D4ED8 ".to_string();
        assert!(secure.is_active(&current));

        current.padding = 19.0;
        assert!(!secure.is_active(&current));
    }

    #[test]
    fn no_preset_matches_default_document() {
        let default = LogoSnapshot::default();
        assert!(logo_presets().iter().all(|p| !p.is_active(&default)));
    }
}
