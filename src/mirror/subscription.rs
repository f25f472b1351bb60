//! Mirror producer tasks and their scoped subscription handles.

use super::{MirrorFeed, MirrorSnapshot};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

const DEFAULT_DEBOUNCE_MS: u64 = 20;

/// Tuning for mirror producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorSettings {
    /// Quiet period after a change notice during which further notices are
    /// folded into the same reload. Zero reloads on every notice.
    pub debounce_ms: u64,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl MirrorSettings {
    fn debounce(self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Spawns producers that keep local snapshots in sync with feeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mirror {
    settings: MirrorSettings,
}

impl Mirror {
    /// Creates a mirror with explicit settings.
    #[must_use]
    pub const fn new(settings: MirrorSettings) -> Self {
        Self { settings }
    }

    /// Starts mirroring `feed`.
    ///
    /// The producer subscribes to change notices before the first load, so
    /// no change made after this call is missed. Must be called within a
    /// Tokio runtime.
    #[must_use]
    pub fn watch<F>(&self, feed: F) -> Subscription<F::Item>
    where
        F: MirrorFeed,
    {
        let (sender, receiver) = watch::channel(MirrorSnapshot::loading());
        let notices = feed.subscribe();
        let handle = tokio::spawn(produce(feed, notices, sender, self.settings.debounce()));
        Subscription { receiver, handle }
    }
}

/// Handle to a running mirror producer.
///
/// Dropping the handle aborts the producer.
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: watch::Receiver<MirrorSnapshot<T>>,
    handle: JoinHandle<()>,
}

impl<T> Subscription<T>
where
    T: Clone,
{
    /// Returns a copy of the latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> MirrorSnapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Waits for the next published snapshot.
    ///
    /// Returns `None` once the producer has stopped.
    pub async fn changed(&mut self) -> Option<MirrorSnapshot<T>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Waits until a snapshot satisfies `predicate`, checking the current
    /// one first.
    ///
    /// Returns `None` if the producer stops before that happens.
    pub async fn wait_for(
        &mut self,
        predicate: impl FnMut(&MirrorSnapshot<T>) -> bool,
    ) -> Option<MirrorSnapshot<T>> {
        let snapshot = self.receiver.wait_for(predicate).await.ok()?;
        Some(snapshot.clone())
    }

    /// Returns `true` while the producer task is running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn produce<F>(
    feed: F,
    mut notices: broadcast::Receiver<F::Notice>,
    sender: watch::Sender<MirrorSnapshot<F::Item>>,
    debounce: Duration,
) where
    F: MirrorFeed,
{
    let mut generation = 0_u64;
    publish(&feed, &sender, &mut generation).await;

    loop {
        match notices.recv().await {
            Ok(notice) if !feed.is_relevant(&notice) => continue,
            Ok(_) => {}
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "mirror fell behind change notices; reloading");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::debug!("change notices closed; mirror stopping");
                break;
            }
        }

        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
            drain(&mut notices);
        }
        if sender.is_closed() {
            break;
        }
        publish(&feed, &sender, &mut generation).await;
    }
}

fn drain<N: Clone>(notices: &mut broadcast::Receiver<N>) {
    loop {
        match notices.try_recv() {
            Ok(_) | Err(broadcast::error::TryRecvError::Lagged(_)) => {}
            Err(_) => break,
        }
    }
}

async fn publish<F>(feed: &F, sender: &watch::Sender<MirrorSnapshot<F::Item>>, generation: &mut u64)
where
    F: MirrorFeed,
{
    *generation = generation.saturating_add(1);
    let snapshot = match feed.load().await {
        Ok(items) => MirrorSnapshot::live(items, *generation),
        Err(err) => {
            tracing::warn!(error = %err, "mirror load failed");
            MirrorSnapshot::failed(err.to_string(), *generation)
        }
    };
    sender.send_replace(snapshot);
}
