use chrono::{DateTime, Utc};

use crate::telemetry::{OrbiterSnapshot, ProbeSnapshot};

pub const ORBITER_ANOMALY_STATUS: &str = "⚠️ UNKNOWN SIGNAL DETECTED";
pub const ORBITER_NOMINAL_STATUS: &str = "✅ Normal Transmission";
pub const PROBE_ANOMALY_STATUS: &str = "⚠️ Signal Disruption Detected";
pub const PROBE_NOMINAL_STATUS: &str = "✅ Signal Stable";

/// Display-ready fields of an orbiter snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbiterView {
    pub distance: String,
    pub signal_delay: String,
    pub signal_strength: String,
    pub interference: String,
    pub doppler_shift: String,
    pub updated: String,
    pub status: &'static str,
}

impl From<&OrbiterSnapshot> for OrbiterView {
    fn from(s: &OrbiterSnapshot) -> Self {
        OrbiterView {
            distance: format!("{:.2}", s.distance_km),
            signal_delay: format!("{:.6}", s.signal_delay_sec),
            signal_strength: format!("{:.2}", s.signal_strength_pct),
            interference: format!("{:.2}", s.interference_db),
            doppler_shift: format!("{:.2}", s.doppler_shift_hz),
            updated: format_updated(s.timestamp),
            status: if s.anomaly {
                ORBITER_ANOMALY_STATUS
            } else {
                ORBITER_NOMINAL_STATUS
            },
        }
    }
}

/// Display-ready fields of a probe snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeView {
    pub distance: String,
    pub signal_delay: String,
    pub qsl: String,
    pub qsu: String,
    pub received_frequency: String,
    pub doppler_shift: String,
    pub updated: String,
    pub status: &'static str,
}

impl From<&ProbeSnapshot> for ProbeView {
    fn from(s: &ProbeSnapshot) -> Self {
        ProbeView {
            distance: format!("{:.2}", s.distance_km),
            signal_delay: format!("{:.6}", s.signal_delay_sec),
            qsl: format!("{:.6}", s.qsl),
            qsu: format!("{:.6}", s.qsu),
            received_frequency: format!("{:.2}", s.received_frequency_hz),
            doppler_shift: format!("{:.0}", s.doppler_shift_hz),
            updated: format_updated(s.timestamp),
            status: if s.anomaly {
                PROBE_ANOMALY_STATUS
            } else {
                PROBE_NOMINAL_STATUS
            },
        }
    }
}

/// RFC 1123 in GMT, e.g. `Sun, 18 Oct 2026 12:00:00 GMT`.
pub fn format_updated(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
