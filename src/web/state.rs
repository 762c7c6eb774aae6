use std::sync::Arc;
use tokio::sync::Mutex;

use crate::preference::ThemeToggle;
use crate::render::Board;

use super::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub board: Arc<Board>,
    pub theme: Arc<Mutex<ThemeToggle>>,
}

impl AppState {
    pub fn new(config: Config, board: Arc<Board>, theme: ThemeToggle) -> Self {
        AppState {
            config: Arc::new(config),
            board,
            theme: Arc::new(Mutex::new(theme)),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    use crate::preference::MemoryStore;

    let theme = ThemeToggle::load(Box::new(MemoryStore::new())).unwrap();
    AppState::new(Config::default(), Arc::new(Board::new()), theme)
}
