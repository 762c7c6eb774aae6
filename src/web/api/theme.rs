use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::preference::{PreferenceError, Theme, ThemeToggle};
use crate::web::api::error::{ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ThemeResponse {
    pub theme: Theme,
    /// Label for the control, naming the theme it switches to.
    pub label: String,
}

impl From<&ThemeToggle> for ThemeResponse {
    fn from(toggle: &ThemeToggle) -> Self {
        ThemeResponse {
            theme: toggle.theme(),
            label: toggle.label().to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/theme",
    responses(
        (status = 200, description = "Current display theme", body = ThemeResponse)
    ),
    tag = "theme"
)]
pub async fn current(State(state): State<AppState>) -> Json<ThemeResponse> {
    let toggle = state.theme.lock().await;
    Json(ThemeResponse::from(&*toggle))
}

#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    responses(
        (status = 200, description = "Theme switched and stored", body = ThemeResponse),
        (status = 500, description = "Preference store failure", body = ErrorResponse)
    ),
    tag = "theme"
)]
pub async fn toggle(State(state): State<AppState>) -> ApiResult<Json<ThemeResponse>> {
    let mut toggle = state.theme.clone().lock_owned().await;
    // Store writes may block on disk.
    let response = tokio::task::spawn_blocking(move || {
        toggle.toggle()?;
        Ok::<_, PreferenceError>(ThemeResponse::from(&*toggle))
    })
    .await??;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::PreferenceStore;
    use crate::render::Board;
    use crate::web::state::test_state;
    use crate::web::Config;
    use std::sync::{mpsc, Arc, Mutex};
    use std::time::Duration;

    #[tokio::test]
    async fn starts_light() {
        let Json(body) = current(State(test_state())).await;
        assert_eq!(body.theme, Theme::Light);
        assert_eq!(body.label, "🌙 Dark Mode");
    }

    #[tokio::test]
    async fn toggle_flips_and_back() {
        let state = test_state();

        let Json(first) = toggle(State(state.clone())).await.unwrap();
        assert_eq!(first.theme, Theme::Dark);
        assert_eq!(first.label, "☀️ Light Mode");

        let Json(second) = toggle(State(state.clone())).await.unwrap();
        assert_eq!(second.theme, Theme::Light);

        let Json(now) = current(State(state)).await;
        assert_eq!(now.theme, Theme::Light);
    }

    /// Store whose writes wait until the test releases them.
    struct GatedStore {
        release: Mutex<mpsc::Receiver<()>>,
    }

    impl PreferenceStore for GatedStore {
        fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            let release = self.release.lock().unwrap();
            release
                .recv_timeout(Duration::from_secs(5))
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::TimedOut, e).into())
        }
    }

    #[tokio::test]
    async fn slow_store_does_not_stall_runtime() {
        let (release_tx, release_rx) = mpsc::channel();
        let store = GatedStore {
            release: Mutex::new(release_rx),
        };
        let theme = ThemeToggle::load(Box::new(store)).unwrap();
        let state = AppState::new(Config::default(), Arc::new(Board::new()), theme);

        let pending = tokio::spawn(toggle(State(state.clone())));

        // Runs on the same single-threaded runtime as the toggle.
        tokio::time::sleep(Duration::from_millis(50)).await;
        release_tx.send(()).unwrap();

        let Json(body) = pending.await.unwrap().unwrap();
        assert_eq!(body.theme, Theme::Dark);
    }
}
