use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::render::{PresentationSink, Region};
use crate::telemetry::{Clock, Link};
use crate::web::config::FeedsConfig;

/// A running telemetry feed.
#[derive(Debug)]
pub struct FeedHandle {
    link: Link,
    stop_tx: oneshot::Sender<()>,
    join: JoinHandle<u64>,
}

impl FeedHandle {
    /// Stops the feed and returns the number of snapshots it rendered.
    pub async fn stop(self) -> u64 {
        let _ = self.stop_tx.send(());
        match self.join.await {
            Ok(ticks) => ticks,
            Err(e) => {
                log::error!("{} feed task failed: {}", self.link, e);
                0
            }
        }
    }
}

/// Starts a feed that samples `link` every `period` and hands the snapshot to
/// `sink`. The first sample is taken one period after start.
pub fn spawn_feed(
    link: Link,
    period: Duration,
    clock: Arc<dyn Clock>,
    rng: StdRng,
    sink: Arc<dyn PresentationSink>,
) -> FeedHandle {
    let (stop_tx, stop_rx) = oneshot::channel();
    let join = tokio::spawn(run_feed_loop(link, period, clock, rng, sink, stop_rx));

    log::info!("Started {} feed every {:?}", link, period);
    FeedHandle {
        link,
        stop_tx,
        join,
    }
}

async fn run_feed_loop(
    link: Link,
    period: Duration,
    clock: Arc<dyn Clock>,
    mut rng: StdRng,
    sink: Arc<dyn PresentationSink>,
    mut stop_rx: oneshot::Receiver<()>,
) -> u64 {
    let region = Region::from(link);
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = 0;

    loop {
        let should_stop = tokio::select! {
            _ = ticker.tick() => false,
            _ = &mut stop_rx => true,
        };
        if should_stop {
            break;
        }

        let snapshot = link.sample(clock.now(), &mut rng);
        if snapshot.anomaly() {
            log::warn!("{} anomaly at {}", link, snapshot.timestamp());
        } else {
            log::debug!("{} snapshot at {}", link, snapshot.timestamp());
        }

        sink.render(&snapshot, region);
        ticks += 1;
    }

    log::info!("Stopped {} feed after {} snapshots", link, ticks);
    ticks
}

/// Both link feeds, started together and stopped together.
pub struct Feeds {
    handles: Vec<FeedHandle>,
}

impl Feeds {
    pub fn start(
        config: &FeedsConfig,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn PresentationSink>,
    ) -> Self {
        let rng_for = |offset: u64| match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(offset)),
            None => StdRng::from_entropy(),
        };

        let handles = vec![
            spawn_feed(
                Link::Mars,
                config.mars_interval,
                clock.clone(),
                rng_for(0),
                sink.clone(),
            ),
            spawn_feed(
                Link::DeepSpace,
                config.deep_space_interval,
                clock,
                rng_for(1),
                sink,
            ),
        ];

        Feeds { handles }
    }

    pub async fn shutdown(self) {
        for handle in self.handles {
            handle.stop().await;
        }
    }
}
