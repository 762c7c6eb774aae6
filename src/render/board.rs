use std::collections::HashMap;
use std::sync::RwLock;

use super::html::render_html;
use super::{PresentationSink, Region};
use crate::telemetry::Snapshot;

#[derive(Debug, Clone)]
pub struct RegionContent {
    pub snapshot: Snapshot,
    pub markup: String,
}

/// Latest rendered content of every region, shared with the dashboard.
#[derive(Debug, Default)]
pub struct Board {
    regions: RwLock<HashMap<Region, RegionContent>>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, region: Region) -> Option<RegionContent> {
        self.regions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(&region)
            .cloned()
    }

    pub fn markup(&self, region: Region) -> Option<String> {
        self.get(region).map(|c| c.markup)
    }
}

impl PresentationSink for Board {
    fn render(&self, snapshot: &Snapshot, region: Region) {
        let markup = match render_html(snapshot) {
            Ok(markup) => markup,
            Err(e) => {
                log::error!("Failed to render {}: {}", region, e);
                return;
            }
        };

        let mut regions = self.regions.write().unwrap_or_else(|e| e.into_inner());
        regions.insert(
            region,
            RegionContent {
                snapshot: snapshot.clone(),
                markup,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::{OrbiterLink, ProbeLink};
    use chrono::{TimeZone, Utc};

    #[test]
    fn empty_until_rendered() {
        let board = Board::new();
        assert!(board.get(Region::MarsData).is_none());
        assert!(board.markup(Region::DeepSpaceData).is_none());
    }

    #[test]
    fn render_replaces_region_content() {
        let board = Board::new();
        let t0 = Utc.timestamp_millis_opt(0).unwrap();
        let t1 = Utc.timestamp_millis_opt(5_000).unwrap();

        board.render(&OrbiterLink.compute(t0, 1.0).into(), Region::MarsData);
        board.render(&OrbiterLink.compute(t1, 9.0).into(), Region::MarsData);

        let content = board.get(Region::MarsData).unwrap();
        assert_eq!(content.snapshot.timestamp(), t1);
        assert!(content.snapshot.anomaly());
        assert!(content.markup.contains("9.00 dB"));
        assert!(board.get(Region::DeepSpaceData).is_none());
    }

    #[test]
    fn regions_are_independent() {
        let board = Board::new();
        let now = Utc.timestamp_millis_opt(0).unwrap();
        board.render(&ProbeLink.compute(now, 2.0).into(), Region::DeepSpaceData);
        board.render(&OrbiterLink.compute(now, 2.0).into(), Region::MarsData);
        assert!(board
            .markup(Region::DeepSpaceData)
            .unwrap()
            .contains("qsl-highlight"));
        assert!(!board.markup(Region::MarsData).unwrap().contains("qsl-highlight"));
    }
}
