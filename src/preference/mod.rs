mod error;
mod store;
mod theme;

pub use error::PreferenceError;
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeToggle};
