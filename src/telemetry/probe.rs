use chrono::{DateTime, Utc};
use rand::Rng;

use super::clock::epoch_millis;
use super::constants::*;
use super::snapshot::ProbeSnapshot;

/// Simulated deep-space probe downlink with the QSL decay model.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeLink;

impl ProbeLink {
    pub fn sample<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> ProbeSnapshot {
        let interference_db = rng.gen_range(2.0..10.0);
        self.compute(now, interference_db)
    }

    pub fn compute(&self, now: DateTime<Utc>, interference_db: f64) -> ProbeSnapshot {
        let t = epoch_millis(now);
        let distance_km = EARTH_PROBE_DISTANCE_KM;
        let signal_delay_sec = distance_km / SPEED_OF_LIGHT_KM_S;

        let qsl = quantum_signal_loss(distance_km, signal_delay_sec, interference_db, t);
        let qsu = 1.0 - qsl;

        let dynamic_velocity =
            PROBE_VELOCITY_KM_S + PROBE_VELOCITY_SWING_KM_S * (t / 1e7).sin();
        let received_frequency_hz =
            CARRIER_FREQUENCY_HZ * (1.0 - dynamic_velocity / SPEED_OF_LIGHT_KM_S);
        let doppler_shift_hz = received_frequency_hz - CARRIER_FREQUENCY_HZ;

        let base_doppler_hz =
            CARRIER_FREQUENCY_HZ * (1.0 - PROBE_VELOCITY_KM_S / SPEED_OF_LIGHT_KM_S);
        let doppler_delta_hz = (received_frequency_hz - base_doppler_hz).abs();

        ProbeSnapshot {
            timestamp: now,
            distance_km,
            signal_delay_sec,
            interference_db,
            qsl,
            qsu,
            received_frequency_hz,
            doppler_shift_hz,
            doppler_delta_hz,
            anomaly: probe_anomaly(qsl, doppler_delta_hz),
        }
    }
}

/// `1 - exp(-lambda * delta)`, where lambda decays with distance and swings
/// with time, and delta scales the light-time delay by the interference.
pub fn quantum_signal_loss(
    distance_km: f64,
    signal_delay_sec: f64,
    interference_db: f64,
    epoch_millis: f64,
) -> f64 {
    let distance_m = distance_km * 1e3;
    // Computed alongside the km-based delay but not used by the decay model.
    let _delay_sec_meters = distance_m / SPEED_OF_LIGHT_M_S;

    let gravity_factor = 1.0 / (1.0 + distance_m / 1e12).sqrt();
    let lambda = QSL_LAMBDA * (epoch_millis / 1e6).sin().abs() * gravity_factor;
    let decoherence_delta = signal_delay_sec * interference_db / 4000.0;

    1.0 - (-lambda * decoherence_delta).exp()
}

pub fn probe_anomaly(qsl: f64, doppler_delta_hz: f64) -> bool {
    qsl > QSL_ANOMALY_THRESHOLD && doppler_delta_hz > DOPPLER_ANOMALY_THRESHOLD_HZ
}
