use crate::builder;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::model::QuadraticModel;
use crate::qubo::Qubo;
use crate::solution::Sample;
use crate::solve::Solver;
use crate::validate::{validate_complete, Verdict};
use crate::variable::Variable;
use crate::LabelType;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// A graph coloring instance ready to be encoded and solved.
#[derive(Clone, Debug)]
pub struct ColoringProblem<N>
where
	N: LabelType,
{
	graph: Graph<N>,
	colors: usize,
	gamma: f64,
}

/// Best sample of a solver run and its verification.
#[derive(Clone, Debug)]
pub struct Report<N>
where
	N: LabelType,
{
	pub sample: Sample<Variable<N>>,
	pub energy: f64,
	/// Energy every proper coloring reaches.
	pub baseline: f64,
	pub verdict: Verdict<N>,
	pub coloring: BTreeMap<N, usize>,
}

impl<N> ColoringProblem<N>
where
	N: LabelType,
{
	/// Fails on malformed graphs and on `colors == 0`, so nothing reaches a
	/// solver unchecked.
	pub fn new(nodes: Vec<N>, edges: Vec<(N, N)>, colors: usize, gamma: f64) -> Result<Self> {
		if colors == 0 {
			return Err(Error::InvalidColors(colors));
		}
		let graph = Graph::new(nodes, edges)?;
		if gamma <= graph.max_degree() as f64 {
			warn!(
				gamma,
				max_degree = graph.max_degree(),
				"gamma does not exceed the maximum degree, the ground state may break one-hot constraints"
			);
		}
		Ok(Self {
			graph,
			colors,
			gamma,
		})
	}

	pub fn from_config(nodes: Vec<N>, edges: Vec<(N, N)>, config: &Config) -> Result<Self> {
		Self::new(nodes, edges, config.colors, config.gamma)
	}

	pub fn graph(&self) -> &Graph<N> {
		&self.graph
	}

	pub fn colors(&self) -> usize {
		self.colors
	}

	pub fn gamma(&self) -> f64 {
		self.gamma
	}

	pub fn qubo(&self) -> Result<Qubo<Variable<N>>> {
		builder::build(&self.graph, self.colors, self.gamma)
	}

	pub fn model(&self) -> Result<QuadraticModel<Variable<N>>> {
		Ok(self.qubo()?.to_model())
	}

	pub fn baseline_energy(&self) -> f64 {
		builder::baseline_energy(&self.graph, self.colors)
	}

	/// Checks every node and edge of the instance against `sample`.
	pub fn verify(&self, sample: &Sample<Variable<N>>) -> Verdict<N> {
		validate_complete(sample, self.graph.nodes(), self.graph.edges())
	}

	/// Encodes the instance, hands it to `solver` and verifies the best
	/// sample returned.
	pub fn solve_with<S>(&self, solver: &S) -> Result<Report<N>>
	where
		S: Solver<Variable<N>>,
	{
		let model = self.model()?;
		let best = solver
			.solve(&model)?
			.into_first()
			.ok_or_else(|| Error::solver("solver returned no samples"))?;
		let verdict = self.verify(&best.sample);
		let coloring = best.sample.coloring();
		info!(
			energy = best.energy,
			baseline = self.baseline_energy(),
			valid = verdict.is_valid(),
			"verified best sample"
		);
		Ok(Report {
			energy: best.energy,
			baseline: self.baseline_energy(),
			sample: best.sample,
			verdict,
			coloring,
		})
	}
}
