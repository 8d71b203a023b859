//! Icon identifiers and the curated icon catalog.
//!
//! Icon glyphs themselves live in the host UI's icon library; the engine
//! only tracks which icon is selected. Ids are interned so snapshots stay
//! `Copy`-cheap no matter how often the document is captured.

use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for icon ids — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for catalog icons.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconId(Spur);

impl IconId {
    /// Intern a new string as an IconId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        IconId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }
}

impl fmt::Debug for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for IconId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for IconId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(IconId::intern(&s))
    }
}

/// Icon selected in a fresh document.
pub const DEFAULT_ICON_ID: &str = "bs-apple";

/// One catalog entry: a stable id, a display name, and search keywords
/// the host UI can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IconOption {
    pub id: &'static str,
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl IconOption {
    /// The interned form of this entry's id.
    pub fn icon_id(&self) -> IconId {
        IconId::intern(self.id)
    }
}

/// The curated icon catalog shown by the editor.
pub fn icon_catalog() -> &'static [IconOption] {
    ICON_CATALOG
}

/// Look up a catalog entry by interned id. Unknown ids fall back to the
/// default icon so a stale snapshot never leaves the preview empty.
pub fn icon_by_id(id: IconId) -> &'static IconOption {
    ICON_CATALOG
        .iter()
        .find(|icon| icon.icon_id() == id)
        .unwrap_or(&ICON_CATALOG[0])
}

macro_rules! icon {
    ($id:literal, $name:literal, [$($kw:literal),+]) => {
        IconOption {
            id: $id,
            name: $name,
            keywords: &[$($kw),+],
        }
    };
}

static ICON_CATALOG: &[IconOption] = &[
    icon!("bs-apple", "Apple", ["fruit", "technology", "minimal"]),
    icon!("bs-stars", "Stars", ["sparkle", "magic", "creative"]),
    icon!("bs-rocket", "Rocket", ["launch", "startup", "growth"]),
    icon!("bs-lightning", "Lightning", ["speed", "energy", "fast"]),
    icon!("bs-camera", "Camera", ["photo", "media", "studio"]),
    icon!("bs-palette", "Palette", ["design", "art", "color"]),
    icon!("bs-music", "Music", ["audio", "sound", "artist"]),
    icon!("bs-gem", "Gem", ["premium", "luxury", "brand"]),
    icon!("bs-globe", "Globe", ["world", "global", "travel"]),
    icon!("bs-shield", "Shield", ["secure", "trust", "protection"]),
    icon!("bs-cart", "Cart", ["shop", "store", "commerce"]),
    icon!("bs-coffee", "Coffee", ["cafe", "food", "morning"]),
    icon!("fa-react", "React", ["frontend", "javascript", "web"]),
    icon!("fa-node", "Node.js", ["backend", "server", "javascript"]),
    icon!("fa-github", "GitHub", ["code", "repository", "developer"]),
    icon!("fa-figma", "Figma", ["design", "ui", "collaboration"]),
    icon!("fa-aws", "AWS", ["cloud", "infrastructure", "hosting"]),
    icon!("fa-stripe", "Stripe", ["payment", "checkout", "finance"]),
    icon!("fa-shopify", "Shopify", ["ecommerce", "store", "sales"]),
    icon!("fa-discord", "Discord", ["community", "chat", "gaming"]),
    icon!("fa-slack", "Slack", ["team", "communication", "work"]),
    icon!("fa-youtube", "YouTube", ["video", "content", "media"]),
    icon!("fa-instagram", "Instagram", ["social", "photo", "brand"]),
    icon!("fa-twitter", "Twitter", ["x", "social", "post"]),
    icon!("fa-facebook", "Facebook", ["social", "community", "network"]),
    icon!("fa-google", "Google", ["search", "internet", "engine"]),
    icon!("fa-chrome", "Chrome", ["browser", "web", "internet"]),
    icon!("fa-firefox", "Firefox", ["browser", "web", "internet"]),
    icon!("fa-linux", "Linux", ["open source", "os", "developer"]),
    icon!("fa-android", "Android", ["mobile", "phone", "google"]),
    icon!("fa-apple", "Apple Brand", ["ios", "device", "technology"]),
    icon!("fa-docker", "Docker", ["container", "devops", "deployment"]),
    icon!("io-sparkles", "Sparkles", ["shine", "creative", "magic"]),
    icon!("io-rocket", "Rocket Outline", ["startup", "fast", "growth"]),
    icon!("io-planet", "Planet", ["space", "orbit", "global"]),
    icon!("io-leaf", "Leaf", ["nature", "eco", "green"]),
    icon!("io-diamond", "Diamond", ["luxury", "quality", "premium"]),
    icon!("io-shield", "Shield Check", ["safe", "security", "verified"]),
    icon!("io-flame", "Flame", ["hot", "energy", "bold"]),
    icon!("io-flash", "Flash", ["electric", "quick", "power"]),
    icon!("io-gift", "Gift", ["box", "present", "offer"]),
    icon!("io-trophy", "Trophy", ["winner", "award", "achievement"]),
    icon!("io-game", "Game Controller", ["gaming", "console", "play"]),
    icon!("io-fitness", "Fitness", ["sport", "health", "gym"]),
    icon!("io-music", "Music Notes", ["song", "audio", "sound"]),
    icon!("io-camera", "Camera Outline", ["photo", "record", "media"]),
    icon!("io-briefcase", "Briefcase", ["company", "work", "business"]),
    icon!("io-school", "School", ["education", "learning", "academy"]),
    icon!("io-business", "Business", ["office", "building", "enterprise"]),
    icon!("io-cart", "Cart Outline", ["shopping", "retail", "store"]),
    icon!("io-home", "Home", ["house", "real estate", "property"]),
    icon!("io-code", "Code", ["developer", "software", "programming"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = IconId::intern("bs-rocket");
        let b = IconId::intern("bs-rocket");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "bs-rocket");
    }

    #[test]
    fn catalog_starts_with_default() {
        assert_eq!(ICON_CATALOG[0].id, DEFAULT_ICON_ID);
    }

    #[test]
    fn lookup_known_id() {
        let leaf = icon_by_id(IconId::intern("io-leaf"));
        assert_eq!(leaf.name, "Leaf");
        assert!(leaf.keywords.contains(&"eco"));
    }

    #[test]
    fn lookup_unknown_id_falls_back_to_default() {
        let icon = icon_by_id(IconId::intern("does-not-exist"));
        assert_eq!(icon.id, DEFAULT_ICON_ID);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in ICON_CATALOG.iter().enumerate() {
            for b in &ICON_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate catalog id");
            }
        }
    }
}
