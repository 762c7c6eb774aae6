use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse},
};

use crate::render::Region;
use crate::web::state::AppState;

use super::templates::{DashboardTemplate, AWAITING_TELEMETRY};

pub async fn dashboard(State(state): State<AppState>) -> impl IntoResponse {
    dashboard_page(&state).await
}

pub(crate) async fn dashboard_page(state: &AppState) -> DashboardTemplate {
    let (theme, toggle_label) = {
        let toggle = state.theme.lock().await;
        (toggle.theme().to_string(), toggle.label().to_string())
    };

    DashboardTemplate {
        theme,
        toggle_label,
        mars_markup: region_markup(state, Region::MarsData),
        deep_space_markup: region_markup(state, Region::DeepSpaceData),
        mars_interval_ms: state.config.feeds.mars_interval.as_millis(),
        deep_space_interval_ms: state.config.feeds.deep_space_interval.as_millis(),
    }
}

/// Current markup of one region, polled by the dashboard script.
pub async fn fragment(State(state): State<AppState>, Path(region): Path<Region>) -> Html<String> {
    Html(region_markup(&state, region))
}

fn region_markup(state: &AppState, region: Region) -> String {
    state
        .board
        .markup(region)
        .unwrap_or_else(|| AWAITING_TELEMETRY.to_string())
}
