use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct OrbiterSnapshot {
    pub timestamp: DateTime<Utc>,
    pub distance_km: f64,
    pub signal_delay_sec: f64,
    pub interference_db: f64,
    pub signal_strength_pct: f64,
    pub doppler_shift_hz: f64,
    pub anomaly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct ProbeSnapshot {
    pub timestamp: DateTime<Utc>,
    pub distance_km: f64,
    pub signal_delay_sec: f64,
    pub interference_db: f64,
    /// Quantum signal loss, in `[0, 1)`.
    pub qsl: f64,
    /// Quantum signal utility, `1 - qsl`.
    pub qsu: f64,
    pub received_frequency_hz: f64,
    /// Signed shift from the carrier; negative while receding.
    pub doppler_shift_hz: f64,
    /// Distance of the received frequency from the nominal-velocity Doppler.
    pub doppler_delta_hz: f64,
    pub anomaly: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(tag = "link", rename_all = "snake_case")]
pub enum Snapshot {
    Orbiter(OrbiterSnapshot),
    Probe(ProbeSnapshot),
}

impl Snapshot {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Snapshot::Orbiter(s) => s.timestamp,
            Snapshot::Probe(s) => s.timestamp,
        }
    }

    pub fn anomaly(&self) -> bool {
        match self {
            Snapshot::Orbiter(s) => s.anomaly,
            Snapshot::Probe(s) => s.anomaly,
        }
    }
}

impl From<OrbiterSnapshot> for Snapshot {
    fn from(snapshot: OrbiterSnapshot) -> Self {
        Snapshot::Orbiter(snapshot)
    }
}

impl From<ProbeSnapshot> for Snapshot {
    fn from(snapshot: ProbeSnapshot) -> Self {
        Snapshot::Probe(snapshot)
    }
}
