use askama::Template;
use thiserror::Error;

use super::view::{OrbiterView, ProbeView};
use crate::telemetry::Snapshot;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] askama::Error),
}

#[derive(Template)]
#[template(path = "fragments/mars_data.html")]
struct MarsDataFragment<'a> {
    view: &'a OrbiterView,
}

#[derive(Template)]
#[template(path = "fragments/deep_space_data.html")]
struct DeepSpaceDataFragment<'a> {
    view: &'a ProbeView,
}

/// Markup placed inside a display region.
pub fn render_html(snapshot: &Snapshot) -> Result<String, RenderError> {
    let markup = match snapshot {
        Snapshot::Orbiter(s) => MarsDataFragment {
            view: &OrbiterView::from(s),
        }
        .render()?,
        Snapshot::Probe(s) => DeepSpaceDataFragment {
            view: &ProbeView::from(s),
        }
        .render()?,
    };
    Ok(markup)
}
