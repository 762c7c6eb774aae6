mod board;
mod html;
mod text;
pub mod view;

pub use board::Board;
pub use text::{render_text, TerminalSink};

use serde::{Deserialize, Serialize};

use crate::telemetry::{Link, Snapshot};

/// Addressable display regions of the dashboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::AsRefStr,
    utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Region {
    MarsData,
    DeepSpaceData,
}

impl Region {
    pub fn id(&self) -> &str {
        self.as_ref()
    }
}

impl From<Link> for Region {
    fn from(link: Link) -> Self {
        match link {
            Link::Mars => Region::MarsData,
            Link::DeepSpace => Region::DeepSpaceData,
        }
    }
}

/// Receives each freshly computed snapshot and replaces the region's content.
pub trait PresentationSink: Send + Sync {
    fn render(&self, snapshot: &Snapshot, region: Region);
}
