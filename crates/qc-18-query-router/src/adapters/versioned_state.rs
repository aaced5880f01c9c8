//! # Versioned State
//!
//! In-memory snapshot store applications can embed to answer
//! `Application::get_state`. Keeps one immutable snapshot per committed
//! height; heights without a commit resolve to the nearest earlier one.

use crate::domain::{BlockHeight, SnapshotError};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct Versions<S> {
    snapshots: BTreeMap<u64, Arc<S>>,
    /// Heights below this were pruned.
    pruned_before: u64,
}

/// Height-indexed immutable snapshots.
#[derive(Debug)]
pub struct VersionedState<S> {
    inner: RwLock<Versions<S>>,
}

impl<S> VersionedState<S> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Versions {
                snapshots: BTreeMap::new(),
                pruned_before: 0,
            }),
        }
    }

    /// Record the state committed at `height`.
    pub fn commit(&self, height: u64, state: S) {
        self.inner.write().snapshots.insert(height, Arc::new(state));
    }

    /// Drop every snapshot below `keep_from`, except the one needed to
    /// answer `keep_from` itself. Returns the number removed.
    ///
    /// `keep_from` is capped at the latest committed height, so the tip
    /// always stays queryable.
    pub fn prune(&self, keep_from: u64) -> usize {
        let mut inner = self.inner.write();
        let keep_from = match inner.snapshots.keys().next_back() {
            Some(&latest) => keep_from.min(latest),
            None => return 0,
        };

        // The newest snapshot at or below keep_from still backs keep_from.
        let anchor = inner
            .snapshots
            .range(..=keep_from)
            .next_back()
            .map(|(h, _)| *h);

        let before = inner.snapshots.len();
        inner
            .snapshots
            .retain(|h, _| *h >= keep_from || Some(*h) == anchor);
        inner.pruned_before = inner.pruned_before.max(keep_from);

        let removed = before - inner.snapshots.len();
        debug!(keep_from, removed, "[VersionedState] Pruned snapshots");
        removed
    }

    pub fn latest_height(&self) -> Option<u64> {
        self.inner.read().snapshots.keys().next_back().copied()
    }

    /// Oldest height that can still be queried.
    pub fn earliest_height(&self) -> Option<u64> {
        let inner = self.inner.read();
        let first = *inner.snapshots.keys().next()?;
        Some(first.max(inner.pruned_before))
    }

    pub fn get(&self, height: BlockHeight) -> Result<Arc<S>, SnapshotError> {
        let inner = self.inner.read();
        let (&latest, latest_state) = inner
            .snapshots
            .iter()
            .next_back()
            .ok_or(SnapshotError::NoCommittedBlocks)?;

        let height = match height {
            BlockHeight::Latest => return Ok(Arc::clone(latest_state)),
            BlockHeight::At(h) => h,
        };

        if height > latest {
            return Err(SnapshotError::HeightUnavailable { height, latest });
        }

        let earliest = inner
            .snapshots
            .keys()
            .next()
            .map_or(latest, |first| (*first).max(inner.pruned_before));
        if height < earliest {
            return Err(SnapshotError::HeightPruned { height, earliest });
        }

        inner
            .snapshots
            .range(..=height)
            .next_back()
            .map(|(_, s)| Arc::clone(s))
            .ok_or(SnapshotError::HeightPruned { height, earliest })
    }
}

impl<S> Default for VersionedState<S> {
    fn default() -> Self {
        Self::new()
    }
}
