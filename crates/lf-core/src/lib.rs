pub mod color;
pub mod icons;
pub mod model;
pub mod presets;

pub use color::{colors_match, contrast_color, normalize_color};
pub use icons::{DEFAULT_ICON_ID, IconId, IconOption, icon_by_id, icon_catalog};
pub use model::{BackgroundState, IconState, LogoSnapshot, SHADOW_CLASSES, shadow_class};
pub use presets::{LogoPreset, logo_presets, preset_by_id};
