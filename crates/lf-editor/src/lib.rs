pub mod document;
pub mod history;
pub mod session;
pub mod shortcuts;
pub mod store;

pub use document::LogoDocument;
pub use history::{HistoryEngine, MAX_HISTORY_ITEMS};
pub use session::EditorSession;
pub use shortcuts::{ShortcutAction, ShortcutMap};
pub use store::{BackgroundStore, FieldStore, IconStore};
