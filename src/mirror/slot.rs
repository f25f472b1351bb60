//! Retargetable holder for a single mirror subscription.

use super::{Mirror, MirrorFeed, MirrorSnapshot, Subscription};

/// Keeps at most one subscription alive and swaps it on retarget.
#[derive(Debug)]
pub struct MirrorSlot<T> {
    mirror: Mirror,
    current: Option<Subscription<T>>,
}

impl<T> MirrorSlot<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty slot.
    #[must_use]
    pub const fn new(mirror: Mirror) -> Self {
        Self {
            mirror,
            current: None,
        }
    }

    /// Watches `feed` instead of the current target, or nothing for `None`.
    ///
    /// The previous subscription is released before the new one starts.
    pub fn retarget<F>(&mut self, feed: Option<F>)
    where
        F: MirrorFeed<Item = T>,
    {
        self.current = None;
        self.current = feed.map(|target| self.mirror.watch(target));
    }

    /// Returns `true` while a target is being watched.
    #[must_use]
    pub const fn is_watching(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the latest snapshot, or an empty live snapshot when nothing
    /// is watched.
    #[must_use]
    pub fn snapshot(&self) -> MirrorSnapshot<T> {
        self.current
            .as_ref()
            .map_or_else(MirrorSnapshot::empty, Subscription::snapshot)
    }

    /// Returns the active subscription for waiting on changes.
    pub const fn subscription_mut(&mut self) -> Option<&mut Subscription<T>> {
        self.current.as_mut()
    }
}
