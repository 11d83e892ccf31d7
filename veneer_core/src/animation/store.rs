// Copyright 2026 the Veneer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot storage for in-flight animation records.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::callback::OnceCallback;
use crate::layer::LayerId;
use crate::property::PropertyKey;

use super::id::{AnimationId, AnimationState};

/// The live record behind an [`AnimationId`].
///
/// The record is the sole owner of the completion callback. It exists only
/// while its animation is [`Attached`](AnimationState::Attached).
#[derive(Debug)]
struct AnimationRecord {
    target: LayerId,
    key: PropertyKey,
    on_stop: OnceCallback<bool>,
}

/// Storage for all in-flight animation records.
///
/// Records are addressed by [`AnimationId`] handles. Finished records are
/// recycled via a free list, and generation counters make handles to them
/// stale, so a late or duplicate notification can never reach a newer
/// animation that reused the slot.
///
/// The store also indexes records by `(layer, key)`; at most one record is
/// live per pair.
#[derive(Debug, Default)]
pub struct AnimationStore {
    slots: Vec<Option<AnimationRecord>>,
    generation: Vec<u32>,
    free_list: Vec<u32>,
    by_layer: HashMap<LayerId, HashMap<PropertyKey, AnimationId>>,
    live: usize,
}

impl AnimationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record for an animation of `key` on `target`.
    ///
    /// The record starts without a completion callback.
    ///
    /// # Panics
    ///
    /// Panics if `target` already has a live animation under `key`. Remove it
    /// first.
    pub fn insert(&mut self, target: LayerId, key: PropertyKey) -> AnimationId {
        assert!(
            self.animation_for(target, &key).is_none(),
            "layer already has an animation under this key"
        );

        let record = AnimationRecord {
            target,
            key: key.clone(),
            on_stop: OnceCallback::empty(),
        };
        let idx = if let Some(idx) = self.free_list.pop() {
            self.slots[idx as usize] = Some(record);
            idx
        } else {
            let idx = u32::try_from(self.slots.len())
                .ok()
                .filter(|&idx| idx != u32::MAX)
                .unwrap_or_else(|| panic!("animation store exhausted"));
            self.slots.push(Some(record));
            self.generation.push(0);
            idx
        };

        let id = AnimationId {
            idx,
            generation: self.generation[idx as usize],
        };
        self.by_layer.entry(target).or_default().insert(key, id);
        self.live += 1;
        id
    }

    /// Returns whether the given handle refers to a live record.
    #[must_use]
    pub fn is_alive(&self, id: AnimationId) -> bool {
        self.record(id).is_some()
    }

    /// Returns the layer the animation is attached to.
    #[must_use]
    pub fn target(&self, id: AnimationId) -> Option<LayerId> {
        self.record(id).map(|r| r.target)
    }

    /// Returns the property key the animation drives.
    #[must_use]
    pub fn key(&self, id: AnimationId) -> Option<&PropertyKey> {
        self.record(id).map(|r| &r.key)
    }

    /// Returns the live animation on `layer` under `key`, if any.
    #[must_use]
    pub fn animation_for(&self, layer: LayerId, key: &PropertyKey) -> Option<AnimationId> {
        self.by_layer
            .get(&layer)
            .and_then(|keys| keys.get(key.as_str()))
            .copied()
    }

    /// Returns every live animation on `layer`, in no particular order.
    #[must_use]
    pub fn animations_on(&self, layer: LayerId) -> Vec<AnimationId> {
        self.by_layer
            .get(&layer)
            .map(|keys| keys.values().copied().collect())
            .unwrap_or_default()
    }

    /// Installs the completion callback, replacing any previous one.
    ///
    /// Returns `false` (and drops `on_stop`) if the handle is stale.
    pub fn set_on_stop(&mut self, id: AnimationId, on_stop: OnceCallback<bool>) -> bool {
        match self.record_mut(id) {
            Some(record) => {
                record.on_stop = on_stop;
                true
            }
            None => false,
        }
    }

    /// Moves a live record into a terminal state and frees it.
    ///
    /// Returns the record's completion callback so the caller can decide
    /// whether to invoke it. Returns `None` if the handle is stale, which
    /// makes a second call for the same handle a no-op.
    ///
    /// # Panics
    ///
    /// Panics if `state` is [`AnimationState::Attached`].
    pub fn finish(&mut self, id: AnimationId, state: AnimationState) -> Option<OnceCallback<bool>> {
        assert!(state.is_terminal(), "cannot finish into a live state");
        self.record(id)?;

        let slot = &mut self.slots[id.idx as usize];
        let record = slot.take()?;

        if let Some(keys) = self.by_layer.get_mut(&record.target) {
            keys.remove(record.key.as_str());
            if keys.is_empty() {
                self.by_layer.remove(&record.target);
            }
        }

        // Bump generation so old handles immediately fail validation.
        let generation = &mut self.generation[id.idx as usize];
        *generation = generation.wrapping_add(1);
        self.free_list.push(id.idx);
        self.live -= 1;

        Some(record.on_stop)
    }

    /// Returns the number of live records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns whether no record is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    fn record(&self, id: AnimationId) -> Option<&AnimationRecord> {
        if self.generation.get(id.idx as usize) != Some(&id.generation) {
            return None;
        }
        self.slots[id.idx as usize].as_ref()
    }

    fn record_mut(&mut self, id: AnimationId) -> Option<&mut AnimationRecord> {
        if self.generation.get(id.idx as usize) != Some(&id.generation) {
            return None;
        }
        self.slots[id.idx as usize].as_mut()
    }
}
