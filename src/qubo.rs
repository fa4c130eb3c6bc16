use crate::model::QuadraticModel;
use crate::solution::Sample;
use crate::LabelType;
use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// Sparse QUBO: coefficients keyed by unordered variable pairs plus a
/// constant offset.
///
/// A pair `(v, v)` holds the linear term of `v`. Coefficients accumulate:
/// adding to an existing pair sums into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Qubo<Tq>
where
	Tq: LabelType,
{
	terms: BTreeMap<(Tq, Tq), f64>,
	offset: f64,
}

impl<Tq> Default for Qubo<Tq>
where
	Tq: LabelType,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<Tq> Qubo<Tq>
where
	Tq: LabelType,
{
	pub fn new() -> Self {
		Self {
			terms: BTreeMap::new(),
			offset: 0.0,
		}
	}

	#[inline]
	fn key(a: Tq, b: Tq) -> (Tq, Tq) {
		if a <= b {
			(a, b)
		} else {
			(b, a)
		}
	}

	/// Adds `delta` to the coefficient of the pair `(a, b)`, starting from
	/// zero when the pair is new.
	pub fn add_coefficient(&mut self, a: Tq, b: Tq, delta: f64) {
		*self.terms.entry(Self::key(a, b)).or_insert(0.0) += delta;
	}

	#[inline]
	pub fn add_linear(&mut self, v: Tq, delta: f64) {
		self.add_coefficient(v.clone(), v, delta);
	}

	#[inline]
	pub fn add_offset(&mut self, delta: f64) {
		self.offset += delta;
	}

	pub fn coefficient(&self, a: &Tq, b: &Tq) -> Option<f64> {
		let key = Self::key(a.clone(), b.clone());
		self.terms.get(&key).copied()
	}

	#[inline]
	pub fn linear(&self, v: &Tq) -> Option<f64> {
		self.coefficient(v, v)
	}

	#[inline]
	pub fn offset(&self) -> f64 {
		self.offset
	}

	/// Number of distinct pairs carrying a coefficient.
	#[inline]
	pub fn len(&self) -> usize {
		self.terms.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.terms.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, (Tq, Tq), f64> {
		self.terms.iter()
	}

	pub fn variables(&self) -> BTreeSet<&Tq> {
		self.terms.keys().flat_map(|(a, b)| vec![a, b]).collect()
	}

	/// Offset plus every term whose variables are all set. Variables missing
	/// from the sample count as 0.
	pub fn energy(&self, sample: &Sample<Tq>) -> f64 {
		self.terms
			.iter()
			.filter(|((a, b), _)| sample.get(a) && sample.get(b))
			.fold(self.offset, |e, (_, coeff)| e + *coeff)
	}

	pub fn to_model(&self) -> QuadraticModel<Tq> {
		QuadraticModel::from_qubo(self)
	}
}

impl<'a, Tq> IntoIterator for &'a Qubo<Tq>
where
	Tq: LabelType,
{
	type Item = (&'a (Tq, Tq), &'a f64);
	type IntoIter = btree_map::Iter<'a, (Tq, Tq), f64>;

	fn into_iter(self) -> Self::IntoIter {
		self.terms.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn coefficients_accumulate_over_unordered_pairs() {
		let mut q = Qubo::new();
		q.add_coefficient("b", "a", 2.0);
		q.add_coefficient("a", "b", 0.5);
		q.add_linear("a", -1.0);
		q.add_linear("a", -1.0);
		q.add_offset(3.0);
		assert_eq!(q.coefficient(&"a", &"b"), Some(2.5));
		assert_eq!(q.coefficient(&"b", &"a"), Some(2.5));
		assert_eq!(q.linear(&"a"), Some(-2.0));
		assert_eq!(q.linear(&"b"), None);
		assert_eq!(q.len(), 2);
		assert_eq!(q.variables().len(), 2);
		assert_eq!(q.offset(), 3.0);
	}

	#[test]
	fn energy_counts_only_fully_set_terms() {
		let mut q = Qubo::new();
		q.add_linear(0, -1.0);
		q.add_linear(1, -1.0);
		q.add_coefficient(0, 1, 2.0);
		q.add_offset(1.0);
		let sample = |a: bool, b: bool| vec![(0, a), (1, b)].into_iter().collect::<Sample<_>>();
		assert_eq!(q.energy(&sample(false, false)), 1.0);
		assert_eq!(q.energy(&sample(true, false)), 0.0);
		assert_eq!(q.energy(&sample(false, true)), 0.0);
		assert_eq!(q.energy(&sample(true, true)), 1.0);
		assert_eq!(q.energy(&Sample::new()), 1.0);
	}
}
