use crate::qubo::Qubo;
use crate::solution::Sample;
use crate::LabelType;
use std::collections::HashMap;

/// Solver-facing form of a [`Qubo`]: variables are numbered, linear biases
/// sit in a vector and every pairwise coupling is listed from both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadraticModel<Tq>
where
	Tq: LabelType,
{
	variables: Vec<Tq>,
	index: HashMap<Tq, usize>,
	linear: Vec<f64>,
	neighbors: Vec<Vec<(usize, f64)>>,
	offset: f64,
}

impl<Tq> QuadraticModel<Tq>
where
	Tq: LabelType,
{
	pub fn from_qubo(qubo: &Qubo<Tq>) -> Self {
		let variables = qubo.variables().into_iter().cloned().collect::<Vec<_>>();
		let index: HashMap<Tq, usize> = variables
			.iter()
			.enumerate()
			.map(|(i, q)| (q.clone(), i))
			.collect();
		let mut linear = vec![0.0; variables.len()];
		let mut neighbors = vec![Vec::new(); variables.len()];
		for ((a, b), coeff) in qubo.iter() {
			let (i, j) = (index[a], index[b]);
			if i == j {
				linear[i] += *coeff;
			} else {
				neighbors[i].push((j, *coeff));
				neighbors[j].push((i, *coeff));
			}
		}
		for ngs in neighbors.iter_mut() {
			ngs.sort_by_key(|(j, _)| *j);
		}
		Self {
			variables,
			index,
			linear,
			neighbors,
			offset: qubo.offset(),
		}
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.variables.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.variables.is_empty()
	}

	pub fn variables(&self) -> &[Tq] {
		&self.variables
	}

	pub fn index_of(&self, q: &Tq) -> Option<usize> {
		self.index.get(q).copied()
	}

	pub fn linear(&self) -> &[f64] {
		&self.linear
	}

	pub fn neighbors(&self) -> &[Vec<(usize, f64)>] {
		&self.neighbors
	}

	#[inline]
	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// Energy of a dense state, `state(i)` being the value of variable `i`.
	pub fn energy_of<F>(&self, state: F) -> f64
	where
		F: Fn(usize) -> bool,
	{
		let mut energy = self.offset;
		for (i, (h, neigh)) in self.linear.iter().zip(self.neighbors.iter()).enumerate() {
			if !state(i) {
				continue;
			}
			energy += *h;
			for (j, coeff) in neigh.iter() {
				// each coupling is listed twice, count it from the lower index
				if *j >= i {
					break;
				}
				if state(*j) {
					energy += *coeff;
				}
			}
		}
		energy
	}

	pub fn energy(&self, sample: &Sample<Tq>) -> f64 {
		self.energy_of(|i| sample.get(&self.variables[i]))
	}

	pub fn sample_from_state<F>(&self, state: F) -> Sample<Tq>
	where
		F: Fn(usize) -> bool,
	{
		self.variables
			.iter()
			.enumerate()
			.map(|(i, q)| (q.clone(), state(i)))
			.collect()
	}
}

impl<Tq> From<&Qubo<Tq>> for QuadraticModel<Tq>
where
	Tq: LabelType,
{
	fn from(qubo: &Qubo<Tq>) -> Self {
		Self::from_qubo(qubo)
	}
}

/// Wraps a coefficient mapping into the solver-facing model.
pub fn to_model<Tq: LabelType>(qubo: &Qubo<Tq>) -> QuadraticModel<Tq> {
	QuadraticModel::from_qubo(qubo)
}
