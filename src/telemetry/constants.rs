pub const SPEED_OF_LIGHT_KM_S: f64 = 299_792.458;
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Downlink carrier shared by both links (X-band).
pub const CARRIER_FREQUENCY_HZ: f64 = 8.4e9;

pub const EARTH_MARS_AVG_DISTANCE_KM: f64 = 225_000_000.0;
pub const MARS_ORBIT_AMPLITUDE_KM: f64 = 5_000_000.0;
/// Divisor applied to epoch milliseconds before the orbit sine.
pub const MARS_ORBIT_PERIOD_MS: f64 = 5_000_000.0;
pub const MARS_ATMOSPHERIC_LOSS: f64 = 0.04;
pub const MARS_SIGNAL_SCALE: f64 = 10_000_000.0;
pub const MARS_VELOCITY_KM_S: f64 = 24.0;
pub const MARS_ANOMALY_INTERFERENCE_DB: f64 = 8.0;

pub const EARTH_PROBE_DISTANCE_KM: f64 = 9_140_000_000.0;
pub const PROBE_VELOCITY_KM_S: f64 = 15.0;
pub const PROBE_VELOCITY_SWING_KM_S: f64 = 2.0;

/// QSL decay sensitivity.
pub const QSL_LAMBDA: f64 = 0.25;
pub const QSL_ANOMALY_THRESHOLD: f64 = 0.85;
pub const DOPPLER_ANOMALY_THRESHOLD_HZ: f64 = 1e8;
