use axum::{
    extract::{Path, State},
    Json,
};

use crate::render::Region;
use crate::telemetry::{Link, Snapshot};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::state::AppState;

#[utoipa::path(
    get,
    path = "/api/telemetry/{link}",
    params(
        ("link" = Link, Path, description = "Link to read (mars, deep-space)")
    ),
    responses(
        (status = 200, description = "Latest snapshot of the link", body = Snapshot),
        (status = 404, description = "No snapshot produced yet", body = ErrorResponse)
    ),
    tag = "telemetry"
)]
pub async fn latest(
    State(state): State<AppState>,
    Path(link): Path<Link>,
) -> ApiResult<Json<Snapshot>> {
    state
        .board
        .get(Region::from(link))
        .map(|content| Json(content.snapshot))
        .ok_or(ApiError::NoSnapshot(link))
}
