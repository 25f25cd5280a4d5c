//! Headless entry points for optimizer loops.
//!
//! Each run builds its own grid, agents and RNGs from a [`SimConfig`], so runs
//! share nothing and can execute on separate Rayon workers under the
//! `parallel` feature.

use wh_core::rng::entropy_seed;
use wh_core::{SimConfig, SimRng};
use wh_spatial::AStarRouter;

use crate::{NoopObserver, RunSummary, SimBuilder, SimResult};

/// Run one simulation to completion (or the tick ceiling) with the default
/// A* router and no observer.
pub fn run(config: &SimConfig) -> SimResult<RunSummary> {
    let mut sim = SimBuilder::new(config.clone(), AStarRouter).build()?;
    Ok(sim.run(&mut NoopObserver))
}

/// One run per seed in `seeds`, overriding `config.seed`.
///
/// Results are returned in the order of `seeds`.  The first configuration
/// error aborts the batch.
pub fn run_many(config: &SimConfig, seeds: &[u64]) -> SimResult<Vec<RunSummary>> {
    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run(&config.with_seed(seed))).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run(&config.with_seed(seed))).collect()
    }
}

/// `runs` independent runs whose seeds are drawn from a [`SimRng`] rooted at
/// `config.seed` (or entropy when unset).
///
/// The same root seed always yields the same seed list, so a sweep is
/// reproducible as a whole.
pub fn sweep(config: &SimConfig, runs: usize) -> SimResult<Vec<RunSummary>> {
    let mut rng = SimRng::new(config.seed.unwrap_or_else(entropy_seed));
    let seeds: Vec<u64> = (0..runs).map(|_| rng.next_seed()).collect();
    run_many(config, &seeds)
}
