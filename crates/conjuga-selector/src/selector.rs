//! ExerciseSelector: shuffles the pools and draws a batch.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use conjuga_catalog::Catalog;
use conjuga_core::constants::PRIMARY_POOL_TARGET;
use conjuga_core::models::{MasterySnapshot, VerbTense};

use crate::draw::draw_batch;
use crate::pools::build_pools;

/// Pure selection policy over a store snapshot.
#[derive(Debug, Clone)]
pub struct ExerciseSelector {
    primary_target: usize,
}

impl ExerciseSelector {
    pub fn new(primary_target: usize) -> Self {
        Self { primary_target }
    }

    /// Up to `batch_size` distinct eligible pairs. Empty when nothing is
    /// eligible; never fails.
    pub fn select<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        snapshot: &MasterySnapshot,
        batch_size: usize,
        rng: &mut R,
    ) -> Vec<VerbTense> {
        let mut pools = build_pools(catalog.pairs(), snapshot);
        pools.primary.shuffle(rng);
        pools.secondary.shuffle(rng);

        let batch = draw_batch(
            &pools.primary,
            &pools.secondary,
            batch_size,
            self.primary_target,
        );
        debug!(
            primary = pools.primary.len(),
            secondary = pools.secondary.len(),
            requested = batch_size,
            selected = batch.len(),
            "exercise batch selected"
        );
        batch
    }
}

impl Default for ExerciseSelector {
    fn default() -> Self {
        Self::new(PRIMARY_POOL_TARGET)
    }
}
