mod clock;
pub mod constants;
mod orbiter;
mod probe;
mod snapshot;

pub use clock::{Clock, FixedClock, SystemClock};
pub use orbiter::OrbiterLink;
pub use probe::ProbeLink;
pub use snapshot::{OrbiterSnapshot, ProbeSnapshot, Snapshot};

use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// The two simulated links, addressable from the CLI and the API.
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
    utoipa::ToSchema,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Link {
    Mars,
    DeepSpace,
}

impl Link {
    pub fn sample(&self, now: DateTime<Utc>, rng: &mut dyn RngCore) -> Snapshot {
        match self {
            Link::Mars => OrbiterLink.sample(now, rng).into(),
            Link::DeepSpace => ProbeLink.sample(now, rng).into(),
        }
    }
}
