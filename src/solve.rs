use crate::anneal::{QubitState, SimpleAnnealer};
use crate::config::AnnealerConfig;
use crate::error::{Error, Result};
use crate::model::QuadraticModel;
use crate::solution::SampleSet;
use crate::LabelType;
use rand::rngs::{OsRng, SmallRng};
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::{debug, info};

/// A QUBO backend: takes a model and returns candidate samples.
pub trait Solver<Tq>
where
	Tq: LabelType,
{
	fn solve(&self, model: &QuadraticModel<Tq>) -> Result<SampleSet<Tq>>;
}

impl<Tq, F> Solver<Tq> for F
where
	Tq: LabelType,
	F: Fn(&QuadraticModel<Tq>) -> Result<SampleSet<Tq>>,
{
	fn solve(&self, model: &QuadraticModel<Tq>) -> Result<SampleSet<Tq>> {
		self(model)
	}
}

/// Simulated annealing with a geometric beta schedule. Each read is an
/// independent run from a random state.
#[derive(Clone, Debug)]
pub struct SimulatedAnnealer {
	pub reads: usize,
	pub beta_count: usize,
	pub sweeps_per_beta: usize,
	pub seed: Option<u64>,
}

impl Default for SimulatedAnnealer {
	fn default() -> Self {
		Self::from_config(&AnnealerConfig::default())
	}
}

impl SimulatedAnnealer {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_config(config: &AnnealerConfig) -> Self {
		Self {
			reads: config.reads,
			beta_count: config.beta_count,
			sweeps_per_beta: config.sweeps_per_beta,
			seed: config.seed,
		}
	}

	fn rng(&self, read: usize) -> Result<SmallRng> {
		match self.seed {
			Some(seed) => Ok(SmallRng::seed_from_u64(seed.wrapping_add(read as u64))),
			None => SmallRng::from_rng(OsRng).map_err(|e| Error::solver(e.to_string())),
		}
	}

	fn generate_beta_schedule(beta_min: f64, beta_max: f64, count: usize) -> Vec<f64> {
		if count < 2 {
			return vec![beta_max];
		}
		let r = f64::ln(beta_max / beta_min) / (count as f64 - 1.0);
		(0..count)
			.map(|index| beta_min * f64::exp(index as f64 * r))
			.collect()
	}

	// Hot end: the largest single flip is accepted with probability 1/2.
	// Cold end: the smallest nonzero flip is accepted with probability 1/100.
	fn generate_beta_range(h: &[f64], neighbors: &[Vec<(usize, f64)>]) -> (f64, f64) {
		let eg_min = h
			.iter()
			.chain(neighbors.iter().flat_map(|sl| sl.iter().map(|(_, f)| f)))
			.map(|f| f.abs())
			.filter(|f| *f > 0.0)
			.fold(f64::INFINITY, f64::min);
		let eg_max = h
			.iter()
			.zip(neighbors.iter())
			.map(|(h, ngs)| h.abs() + ngs.iter().map(|(_, f)| f.abs()).sum::<f64>())
			.fold(0.0, f64::max);
		if eg_max > 0.0 && eg_min.is_finite() {
			(f64::ln(2.0) / eg_max, f64::ln(100.0) / eg_min)
		} else {
			(0.1, 1.0)
		}
	}
}

impl<Tq> Solver<Tq> for SimulatedAnnealer
where
	Tq: LabelType,
{
	fn solve(&self, model: &QuadraticModel<Tq>) -> Result<SampleSet<Tq>> {
		if self.reads == 0 {
			return Err(Error::solver("annealer configured with zero reads"));
		}
		let h = model.linear();
		let neighbors = model.neighbors();
		let (beta_min, beta_max) = Self::generate_beta_range(h, neighbors);
		let beta_schedule = Self::generate_beta_schedule(beta_min, beta_max, self.beta_count);
		debug!(
			variables = model.len(),
			beta_min,
			beta_max,
			threads = rayon::current_num_threads(),
			"starting annealer"
		);
		let len = model.len();
		let states = (0..self.reads)
			.into_par_iter()
			.map(|read| -> Result<QubitState> {
				let annealer = SimpleAnnealer::new(self.sweeps_per_beta, beta_schedule.clone());
				let mut r = self.rng(read)?;
				let mut state = QubitState::new_random(len, &mut r);
				annealer.run(&mut state, &mut r, h, neighbors);
				Ok(state)
			})
			.collect::<Result<Vec<_>>>()?;
		let set = SampleSet::new(states.iter().map(|state| {
			(
				model.sample_from_state(|i| state.get(i)),
				model.energy_of(|i| state.get(i)),
			)
		}));
		if let Some(best) = set.first() {
			info!(
				reads = self.reads,
				distinct = set.len(),
				best_energy = best.energy,
				occurrences = best.occurrences,
				"annealing finished"
			);
		}
		Ok(set)
	}
}
