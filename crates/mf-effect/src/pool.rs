//! Fixed-size explosion pool.

use mf_core::{ExplosionId, Rgb, Vec2};
use tracing::{debug, trace};

use crate::{Explosion, ExplosionParams};

pub struct ExplosionPool {
    slots: Vec<Explosion>,
}

impl ExplosionPool {
    /// `capacity` inert explosions.  Capacity is capped at `u16::MAX` slots.
    pub fn new(capacity: usize, params: &ExplosionParams) -> Self {
        let slots = (0..capacity.min(u16::MAX as usize))
            .map(|i| Explosion::new(ExplosionId(i as u16), params))
            .collect();
        Self { slots }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, id: ExplosionId) -> Option<&Explosion> {
        self.slots.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.slots.iter()
    }

    pub fn awake_count(&self) -> usize {
        self.slots.iter().filter(|e| e.is_awake()).count()
    }

    /// Start a pulse at `position` in the last inert slot.
    ///
    /// Returns the slot used, or `None` (and does nothing) when every slot is
    /// busy.
    pub fn trigger(&mut self, position: Vec2, color: Rgb) -> Option<ExplosionId> {
        let capacity = self.slots.len();
        let Some(slot) = self.slots.iter_mut().rev().find(|e| !e.is_awake()) else {
            trace!(capacity, "explosion pool exhausted");
            return None;
        };
        slot.position = position;
        slot.color = color;
        slot.awake();
        debug!(id = %slot.id, x = position.x, y = position.y, "explosion triggered");
        Some(slot.id)
    }

    /// Advance every awake explosion one frame; returns how many are still
    /// awake afterwards.
    pub fn update(&mut self) -> usize {
        let mut awake = 0;
        for e in &mut self.slots {
            e.update();
            if e.is_awake() {
                awake += 1;
            }
        }
        awake
    }
}
