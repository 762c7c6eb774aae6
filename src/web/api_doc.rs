use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::theme::ThemeResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::telemetry::latest,
        super::api::theme::current,
        super::api::theme::toggle,
    ),
    components(
        schemas(
            ErrorResponse,
            ThemeResponse,
            crate::preference::Theme,
            crate::telemetry::Link,
            crate::telemetry::Snapshot,
            crate::telemetry::OrbiterSnapshot,
            crate::telemetry::ProbeSnapshot,
        )
    ),
    info(
        title = "QSL Simulator API",
        description = "Synthetic deep-space link telemetry and display preferences",
        version = "0.1.0"
    ),
    tags(
        (name = "telemetry", description = "Latest simulated link snapshots"),
        (name = "theme", description = "Display theme preference")
    )
)]
pub struct ApiDoc;
