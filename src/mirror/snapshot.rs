//! Snapshots published by a mirror producer.

/// Freshness of a mirrored collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorState {
    /// The first load has not finished.
    Loading,
    /// The items reflect the latest successful load.
    Live,
    /// The latest load failed; the reason is kept for display.
    Failed(String),
}

/// Local copy of a remote collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSnapshot<T> {
    state: MirrorState,
    items: Vec<T>,
    generation: u64,
}

impl<T> MirrorSnapshot<T> {
    /// Snapshot published before the first load completes.
    #[must_use]
    pub const fn loading() -> Self {
        Self {
            state: MirrorState::Loading,
            items: Vec::new(),
            generation: 0,
        }
    }

    /// Live snapshot of an empty collection, used when nothing is watched.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            state: MirrorState::Live,
            items: Vec::new(),
            generation: 0,
        }
    }

    pub(crate) const fn live(items: Vec<T>, generation: u64) -> Self {
        Self {
            state: MirrorState::Live,
            items,
            generation,
        }
    }

    pub(crate) const fn failed(reason: String, generation: u64) -> Self {
        Self {
            state: MirrorState::Failed(reason),
            items: Vec::new(),
            generation,
        }
    }

    /// Returns the freshness state.
    #[must_use]
    pub const fn state(&self) -> &MirrorState {
        &self.state
    }

    /// Returns the mirrored items; empty unless the state is live.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns how many loads have been published, counting failures.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` once the items reflect a successful load.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.state, MirrorState::Live)
    }
}
