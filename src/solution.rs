use crate::error::{Error, Result};
use crate::variable::Variable;
use crate::LabelType;
use std::cmp::Ordering;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::iter::FromIterator;

/// Binary assignment of variables, as returned by a solver.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sample<Tq>(BTreeMap<Tq, bool>)
where
	Tq: LabelType;

impl<Tq> Default for Sample<Tq>
where
	Tq: LabelType,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<Tq> Sample<Tq>
where
	Tq: LabelType,
{
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Builds a sample from 0/1 values. Any other value, or a variable
	/// listed twice, is rejected.
	pub fn from_binary<I>(values: I) -> Result<Self>
	where
		I: IntoIterator<Item = (Tq, i64)>,
	{
		let mut map = BTreeMap::new();
		for (q, value) in values {
			let bit = match value {
				0 => false,
				1 => true,
				value => {
					return Err(Error::NonBinaryValue {
						key: format!("{:?}", q),
						value,
					})
				}
			};
			match map.entry(q) {
				btree_map::Entry::Vacant(e) => {
					e.insert(bit);
				}
				btree_map::Entry::Occupied(e) => {
					return Err(Error::DuplicateVariable(format!("{:?}", e.key())));
				}
			}
		}
		Ok(Self(map))
	}

	pub fn insert(&mut self, q: Tq, value: bool) -> Option<bool> {
		self.0.insert(q, value)
	}

	/// Value of `q`; unassigned variables read as 0.
	#[inline]
	pub fn get(&self, q: &Tq) -> bool {
		self.0.get(q).copied().unwrap_or(false)
	}

	#[inline]
	pub fn value(&self, q: &Tq) -> Option<bool> {
		self.0.get(q).copied()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn keys(&self) -> impl Iterator<Item = &Tq> {
		self.0.keys()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, Tq, bool> {
		self.0.iter()
	}

	/// Variables set to 1, in order.
	pub fn ones(&self) -> impl Iterator<Item = &Tq> {
		self.0.iter().filter(|(_, v)| **v).map(|(q, _)| q)
	}
}

impl Sample<Variable<String>> {
	/// Parses a sample keyed by composite `"{node}_{color}"` strings.
	pub fn from_keys<I, K>(values: I) -> Result<Self>
	where
		I: IntoIterator<Item = (K, i64)>,
		K: AsRef<str>,
	{
		let parsed = values
			.into_iter()
			.map(|(k, v)| -> Result<(Variable<String>, i64)> {
				Ok((k.as_ref().parse()?, v))
			})
			.collect::<Result<Vec<_>>>()?;
		Self::from_binary(parsed)
	}
}

impl<N> Sample<Variable<N>>
where
	N: LabelType,
{
	/// Node to color map read off the variables set to 1. When a node has
	/// several colors the highest one is kept.
	pub fn coloring(&self) -> BTreeMap<N, usize> {
		self.ones()
			.map(|v| (v.node.clone(), v.color))
			.collect()
	}
}

impl<Tq> FromIterator<(Tq, bool)> for Sample<Tq>
where
	Tq: LabelType,
{
	fn from_iter<I: IntoIterator<Item = (Tq, bool)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a, Tq> IntoIterator for &'a Sample<Tq>
where
	Tq: LabelType,
{
	type Item = (&'a Tq, &'a bool);
	type IntoIter = btree_map::Iter<'a, Tq, bool>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<Tq: LabelType> std::ops::Index<&Tq> for Sample<Tq> {
	type Output = bool;

	fn index(&self, key: &Tq) -> &Self::Output {
		if self.get(key) {
			&true
		} else {
			&false
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Solution<Tq>
where
	Tq: LabelType,
{
	pub sample: Sample<Tq>,
	pub energy: f64,
	pub occurrences: usize,
}

/// Solutions ranked by ascending energy. Identical samples are merged and
/// counted.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet<Tq>
where
	Tq: LabelType,
{
	solutions: Vec<Solution<Tq>>,
}

impl<Tq> SampleSet<Tq>
where
	Tq: LabelType,
{
	pub fn new<I>(reads: I) -> Self
	where
		I: IntoIterator<Item = (Sample<Tq>, f64)>,
	{
		let mut solutions: Vec<Solution<Tq>> = Vec::new();
		for (sample, energy) in reads {
			if let Some(s) = solutions.iter_mut().find(|s| s.sample == sample) {
				s.occurrences += 1;
			} else {
				solutions.push(Solution {
					sample,
					energy,
					occurrences: 1,
				});
			}
		}
		solutions.sort_by(|a, b| a.energy.partial_cmp(&b.energy).unwrap_or(Ordering::Equal));
		Self { solutions }
	}

	/// Lowest energy solution.
	pub fn first(&self) -> Option<&Solution<Tq>> {
		self.solutions.first()
	}

	pub fn len(&self) -> usize {
		self.solutions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.solutions.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Solution<Tq>> {
		self.solutions.iter()
	}

	pub fn into_first(self) -> Option<Solution<Tq>> {
		self.solutions.into_iter().next()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn binary_values_are_enforced() {
		let s = Sample::from_binary(vec![("a", 0), ("b", 1)]).unwrap();
		assert!(!s.get(&"a"));
		assert!(s[&"b"]);
		assert!(!s.get(&"c"));
		assert_eq!(s.value(&"c"), None);
		match Sample::from_binary(vec![("a", 2)]) {
			Err(Error::NonBinaryValue { value, .. }) => assert_eq!(value, 2),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn parses_composite_keys() {
		let s =
			Sample::<Variable<String>>::from_keys(vec![("A_0", 1), ("A_1", 0), ("New_York_1", 1)])
				.unwrap();
		assert!(s.get(&Variable::new("A".to_string(), 0)));
		assert!(s.get(&Variable::new("New_York".to_string(), 1)));
		let coloring = s.coloring();
		assert_eq!(coloring.get("A"), Some(&0));
		assert_eq!(coloring.get("New_York"), Some(&1));
		assert!(Sample::<Variable<String>>::from_keys(vec![("A0", 1)]).is_err());
	}

	#[test]
	fn repeated_variables_are_rejected() {
		match Sample::from_binary(vec![("a", 1), ("b", 0), ("a", 0)]) {
			Err(Error::DuplicateVariable(key)) => assert_eq!(key, "\"a\""),
			other => panic!("unexpected {:?}", other),
		}
		assert!(matches!(
			Sample::<Variable<String>>::from_keys(vec![("A_0", 1), ("A_0", 0)]),
			Err(Error::DuplicateVariable(_))
		));
		// a non-canonical spelling cannot alias an existing key
		assert!(matches!(
			Sample::<Variable<String>>::from_keys(vec![("A_1", 1), ("A_01", 0)]),
			Err(Error::MalformedKey(_))
		));
	}

	#[test]
	fn sample_set_ranks_and_merges() {
		let a: Sample<u8> = vec![(0, true)].into_iter().collect();
		let b: Sample<u8> = vec![(0, false)].into_iter().collect();
		let set = SampleSet::new(vec![(a.clone(), 3.0), (b.clone(), -1.0), (a.clone(), 3.0)]);
		assert_eq!(set.len(), 2);
		let best = set.first().unwrap();
		assert_eq!(best.sample, b);
		assert_eq!(best.occurrences, 1);
		assert_eq!(set.iter().nth(1).unwrap().occurrences, 2);
		assert!(SampleSet::<u8>::new(vec![]).into_first().is_none());
	}
}
