//! Monte Carlo simulation of a linear milestone chain.

use crate::world_models::{MilestoneDurationModel, ReactorOutputModel, WorldModel};
use crate::{SamplerConfig, SamplerError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use techtree_types::{ImpactTable, Node, NodeKind, YearlyImpact};
use tracing::{debug, info};

/// Upper bound (exclusive) of the per-model sub-seeds.
const SUB_SEED_RANGE: u64 = 1_000_000;

/// Expected yearly energy attributed to each milestone of `chain`.
///
/// `chain` is in dependency order and ends with the reactor concept. Only
/// the `Milestone` nodes before it are attributed. For every reported year
/// the probability that all milestones are done (summed sampled durations
/// within the elapsed years) is multiplied by the mean sampled output and
/// split evenly across the milestones. Every year is present, zeros
/// included.
///
/// The same chain, configuration and seed always produce the same table.
pub fn simulate_chain(chain: &[Node], config: &SamplerConfig) -> Result<ImpactTable, SamplerError> {
    info!(
        chain = chain.len(),
        years = config.years,
        draws = config.draws,
        "Simulating chain"
    );

    let Some((_reactor, upstream)) = chain.split_last() else {
        return Ok(ImpactTable::new());
    };
    if config.draws == 0 {
        return Err(SamplerError::ZeroDraws);
    }

    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let milestones: Vec<&Node> = upstream
        .iter()
        .filter(|node| node.kind == NodeKind::Milestone)
        .collect();

    let mut total_duration = vec![0.0; config.draws];
    for milestone in &milestones {
        let model = MilestoneDurationModel::for_node(milestone, config)?;
        let mut sub_rng = ChaCha8Rng::seed_from_u64(rng.gen_range(0..SUB_SEED_RANGE));
        debug!(node = %milestone.id, median = model.median(), "Sampling milestone duration");

        for (total, draw) in total_duration
            .iter_mut()
            .zip(model.sample_n(&mut sub_rng, config.draws))
        {
            *total += draw;
        }
    }

    let output_model = ReactorOutputModel::new(config)?;
    let mut sub_rng = ChaCha8Rng::seed_from_u64(rng.gen_range(0..SUB_SEED_RANGE));
    let output = output_model.sample_n(&mut sub_rng, config.draws);
    let mean_output = output.iter().sum::<f64>() / output.len() as f64;

    let mut impact: ImpactTable = milestones
        .iter()
        .map(|node| (node.label.clone(), YearlyImpact::new()))
        .collect();
    if milestones.is_empty() {
        return Ok(impact);
    }

    for elapsed in 0..config.years {
        let year = config.current_year + elapsed as i32;
        let online = total_duration
            .iter()
            .filter(|duration| **duration <= f64::from(elapsed))
            .count();
        let online_prob = online as f64 / config.draws as f64;
        let per_milestone = online_prob * mean_output / milestones.len() as f64;

        for node in &milestones {
            if let Some(yearly) = impact.get_mut(&node.label) {
                yearly.insert(year, per_milestone);
            }
        }
    }

    info!(
        milestones = milestones.len(),
        mean_output_twh = mean_output,
        "Chain simulated"
    );
    Ok(impact)
}
