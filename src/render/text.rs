use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::Mutex;

use super::view::{OrbiterView, ProbeView};
use super::{PresentationSink, Region};
use crate::telemetry::Snapshot;

/// Plain-text rendering with the same fields and precision as the markup.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    match snapshot {
        Snapshot::Orbiter(s) => {
            let v = OrbiterView::from(s);
            let _ = writeln!(out, "Distance: {} km", v.distance);
            let _ = writeln!(out, "Signal Delay: {} sec", v.signal_delay);
            let _ = writeln!(out, "Signal Strength: {} %", v.signal_strength);
            let _ = writeln!(out, "Interference: {} dB", v.interference);
            let _ = writeln!(out, "Doppler Shift: {} Hz", v.doppler_shift);
            let _ = writeln!(out, "Last Updated: {}", v.updated);
            let _ = write!(out, "Status: {}", v.status);
        }
        Snapshot::Probe(s) => {
            let v = ProbeView::from(s);
            let _ = writeln!(out, "Distance: {} km", v.distance);
            let _ = writeln!(out, "Signal Delay: {} sec", v.signal_delay);
            let _ = writeln!(out, "QSL (Quantum Signal Loss): {}", v.qsl);
            let _ = writeln!(out, "QSU (Quantum Signal Utility): {}", v.qsu);
            let _ = writeln!(out, "Received Frequency: {} Hz", v.received_frequency);
            let _ = writeln!(out, "Doppler Shift Δf: {} Hz", v.doppler_shift);
            let _ = writeln!(out, "Last Updated: {}", v.updated);
            let _ = write!(out, "Status: {}", v.status);
        }
    }
    out
}

/// Writes each rendered region as a text block.
pub struct TerminalSink<W: Write + Send> {
    out: Mutex<W>,
}

impl TerminalSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

impl<W: Write + Send> PresentationSink for TerminalSink<W> {
    fn render(&self, snapshot: &Snapshot, region: Region) {
        let block = render_text(snapshot);
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        let written = writeln!(out, "[{}]\n{}\n", region.id(), block).and_then(|_| out.flush());
        if let Err(e) = written {
            log::warn!("Failed to write {} to terminal: {}", region, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{OrbiterLink, ProbeLink};
    use chrono::{TimeZone, Utc};

    #[test]
    fn orbiter_text_block() {
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let text = render_text(&OrbiterLink.compute(now, 2.0).into());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Distance: 225000000.00 km");
        assert_eq!(lines[6], "Status: ✅ Normal Transmission");
    }

    #[test]
    fn sink_prefixes_region() {
        let now = Utc.timestamp_millis_opt(0).unwrap();
        let sink = TerminalSink::new(Vec::new());
        sink.render(&ProbeLink.compute(now, 2.0).into(), Region::DeepSpaceData);
        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.starts_with("[deep-space-data]\nDistance: 9140000000.00 km"));
        assert!(written.contains("QSU (Quantum Signal Utility): 1.000000"));
    }
}
