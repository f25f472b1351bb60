//! Collection mirror: live subscriptions mirrored into local snapshots.
//!
//! A [`MirrorFeed`] describes a remote collection: how to be told that it
//! changed, which change notices concern it, and how to load its current
//! contents. [`Mirror::watch`] spawns one producer task per feed that
//! publishes a fresh [`MirrorSnapshot`] after every relevant change. The
//! returned [`Subscription`] owns that producer; dropping it stops the
//! producer.
//!
//! [`MirrorSlot`] keeps at most one subscription alive and swaps it when the
//! watched target changes, for example when the selected project changes.

mod feed;
pub mod feeds;
mod slot;
mod snapshot;
mod subscription;

pub use feed::{MirrorFeed, MirrorFeedError};
pub use slot::MirrorSlot;
pub use snapshot::{MirrorSnapshot, MirrorState};
pub use subscription::{Mirror, MirrorSettings, Subscription};

#[cfg(test)]
mod tests;
