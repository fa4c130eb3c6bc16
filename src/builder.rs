//! Penalty encoding of graph coloring.
//!
//! Two families of terms share one [`Qubo`]:
//!
//! * one color per node: for every node `n`, `gamma * (sum_j x[n,j] - 1)^2`,
//!   expanded into `-gamma` linear terms, `+2 gamma` pairwise terms and a
//!   `+gamma` offset;
//! * adjacent nodes differ: for every color `i` and edge `(j, k)`,
//!   `1 - x[j,i] - x[k,i] + 2 x[j,i] x[k,i]`, which is 0 when exactly one
//!   endpoint takes `i` and 1 otherwise.
//!
//! A proper one-hot coloring therefore evaluates to
//! [`baseline_energy`]` = (colors - 2) * |edges|`, which is 0 for two colors.
//! Every conflicting edge adds 2 on top of that, and a node with no color or
//! `s >= 2` colors adds `gamma * (s - 1)^2` to the first family.
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::qubo::Qubo;
use crate::variable::{encode, Variable};
use crate::LabelType;
use tracing::debug;

/// Builds the coloring QUBO for `graph` with `colors` available colors.
///
/// `gamma` weights the one-color-per-node family against the adjacency
/// family. It is not checked; it should exceed the maximum node degree for
/// the ground state to be a proper coloring.
pub fn build<N>(graph: &Graph<N>, colors: usize, gamma: f64) -> Result<Qubo<Variable<N>>>
where
	N: LabelType,
{
	if colors == 0 {
		return Err(Error::InvalidColors(colors));
	}
	let mut qubo = Qubo::new();
	qubo.add_offset(gamma * graph.nodes().len() as f64);

	for n in graph.nodes() {
		for j in 0..colors {
			let var_j = encode(n, j);
			qubo.add_linear(var_j.clone(), -gamma);
			for k in j + 1..colors {
				qubo.add_coefficient(var_j.clone(), encode(n, k), 2.0 * gamma);
			}
		}
	}

	for i in 0..colors {
		for (j, k) in graph.edges() {
			qubo.add_offset(1.0);
			let var_j = encode(j, i);
			let var_k = encode(k, i);
			qubo.add_linear(var_j.clone(), -1.0);
			qubo.add_linear(var_k.clone(), -1.0);
			qubo.add_coefficient(var_j, var_k, 2.0);
		}
	}

	debug!(
		nodes = graph.nodes().len(),
		edges = graph.edges().len(),
		colors,
		gamma,
		terms = qubo.len(),
		offset = qubo.offset(),
		"built coloring qubo"
	);
	Ok(qubo)
}

/// Energy shared by every proper one-hot coloring of `graph`.
pub fn baseline_energy<N>(graph: &Graph<N>, colors: usize) -> f64
where
	N: LabelType,
{
	(colors as f64 - 2.0) * graph.edges().len() as f64
}
