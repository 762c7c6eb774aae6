use chrono::{DateTime, Utc};
use rand::Rng;

use super::clock::epoch_millis;
use super::constants::*;
use super::snapshot::OrbiterSnapshot;

/// Simulated Mars orbiter downlink.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrbiterLink;

impl OrbiterLink {
    pub fn sample<R: Rng + ?Sized>(&self, now: DateTime<Utc>, rng: &mut R) -> OrbiterSnapshot {
        let interference_db = rng.gen_range(0.0..10.0);
        self.compute(now, interference_db)
    }

    /// Derive a snapshot from an already drawn interference level.
    pub fn compute(&self, now: DateTime<Utc>, interference_db: f64) -> OrbiterSnapshot {
        let distance_km = orbit_distance_km(now);

        OrbiterSnapshot {
            timestamp: now,
            distance_km,
            signal_delay_sec: distance_km / SPEED_OF_LIGHT_KM_S,
            interference_db,
            signal_strength_pct: 100.0 - distance_km * MARS_ATMOSPHERIC_LOSS / MARS_SIGNAL_SCALE,
            doppler_shift_hz: CARRIER_FREQUENCY_HZ * (SPEED_OF_LIGHT_KM_S - MARS_VELOCITY_KM_S)
                / SPEED_OF_LIGHT_KM_S,
            anomaly: orbiter_anomaly(interference_db),
        }
    }
}

pub fn orbit_distance_km(now: DateTime<Utc>) -> f64 {
    EARTH_MARS_AVG_DISTANCE_KM
        + MARS_ORBIT_AMPLITUDE_KM * (epoch_millis(now) / MARS_ORBIT_PERIOD_MS).sin()
}

pub fn orbiter_anomaly(interference_db: f64) -> bool {
    interference_db > MARS_ANOMALY_INTERFERENCE_DB
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn epoch() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(0).unwrap()
    }

    #[test]
    fn distance_at_zero_phase_is_average() {
        let snapshot = OrbiterLink.compute(epoch(), 1.0);
        assert_eq!(snapshot.distance_km, 225_000_000.0);
        assert!((snapshot.signal_delay_sec - 750.519_214).abs() < 1e-6);
    }

    #[test]
    fn distance_stays_within_amplitude() {
        let low = EARTH_MARS_AVG_DISTANCE_KM - MARS_ORBIT_AMPLITUDE_KM;
        let high = EARTH_MARS_AVG_DISTANCE_KM + MARS_ORBIT_AMPLITUDE_KM;
        let mut seen_min = f64::MAX;
        let mut seen_max = f64::MIN;

        // Steps the phase by the golden fraction of a full cycle so samples
        // spread evenly instead of landing on the zero crossings.
        for step in 0..20_000i64 {
            let now = Utc.timestamp_millis_opt(step * 19_416_117).unwrap();
            let distance = orbit_distance_km(now);
            assert!(
                (low..=high).contains(&distance),
                "distance {distance} out of range at step {step}"
            );
            seen_min = seen_min.min(distance);
            seen_max = seen_max.max(distance);
        }
        assert!(seen_min - low < 1_000.0, "sweep minimum {seen_min}");
        assert!(high - seen_max < 1_000.0, "sweep maximum {seen_max}");
    }

    #[test]
    fn distance_reaches_both_extremes() {
        let low = EARTH_MARS_AVG_DISTANCE_KM - MARS_ORBIT_AMPLITUDE_KM;
        let high = EARTH_MARS_AVG_DISTANCE_KM + MARS_ORBIT_AMPLITUDE_KM;

        // sin peaks at phase π/2 + kπ, i.e. t = period * (π/2 + kπ) ms.
        for k in 0..50i64 {
            let phase = std::f64::consts::FRAC_PI_2 + k as f64 * std::f64::consts::PI;
            let millis = (MARS_ORBIT_PERIOD_MS * phase).round() as i64;
            let distance = orbit_distance_km(Utc.timestamp_millis_opt(millis).unwrap());

            let expected = if k % 2 == 0 { high } else { low };
            assert!(
                (distance - expected).abs() < 1.0,
                "k={k}: distance {distance}, expected {expected}"
            );
            assert!((low..=high).contains(&distance));
        }
    }

    #[test]
    fn delay_follows_distance() {
        let mut rng = StdRng::seed_from_u64(3);
        for step in 0..200i64 {
            let now = Utc.timestamp_millis_opt(1_700_000_000_000 + step * 977_000).unwrap();
            let s = OrbiterLink.sample(now, &mut rng);
            assert!((s.signal_delay_sec - s.distance_km / SPEED_OF_LIGHT_KM_S).abs() < 1e-9);
        }
    }

    #[test]
    fn interference_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..5_000 {
            let s = OrbiterLink.sample(epoch(), &mut rng);
            assert!((0.0..10.0).contains(&s.interference_db));
            assert_eq!(s.anomaly, s.interference_db > 8.0);
        }
    }

    #[test]
    fn anomaly_threshold_is_exclusive() {
        assert!(!OrbiterLink.compute(epoch(), 8.0).anomaly);
        assert!(OrbiterLink.compute(epoch(), 8.000_001).anomaly);
        assert!(!OrbiterLink.compute(epoch(), 0.0).anomaly);
    }

    #[test]
    fn strength_and_doppler() {
        let s = OrbiterLink.compute(epoch(), 0.0);
        assert!((s.signal_strength_pct - 99.1).abs() < 1e-9);
        let expected = 8.4e9 * (299_792.458 - 24.0) / 299_792.458;
        assert!((s.doppler_shift_hz - expected).abs() < 1e-3);
        assert!(s.doppler_shift_hz < CARRIER_FREQUENCY_HZ);
    }
}
