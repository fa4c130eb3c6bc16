use crate::error::{Error, Result};
use crate::LabelType;
use std::fmt;
use std::str::FromStr;

/// Separator used by the composite string form `"{node}_{color}"`.
pub const SEPARATOR: char = '_';

/// Binary variable meaning "`node` takes color `color`".
///
/// Field order matters: variables sort by node first, then by color.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Ord, PartialOrd)]
pub struct Variable<N>
where
	N: LabelType,
{
	pub node: N,
	pub color: usize,
}

impl<N> Variable<N>
where
	N: LabelType,
{
	#[inline]
	pub fn new(node: N, color: usize) -> Self {
		Self { node, color }
	}
}

/// Encodes a (node, color) pair as a variable key.
#[inline]
pub fn encode<N: LabelType>(node: &N, color: usize) -> Variable<N> {
	Variable::new(node.clone(), color)
}

impl<N> fmt::Display for Variable<N>
where
	N: LabelType + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}{}", self.node, SEPARATOR, self.color)
	}
}

impl FromStr for Variable<String> {
	type Err = Error;

	// Splits at the last separator so node names may themselves contain it.
	fn from_str(key: &str) -> Result<Self> {
		let (node, color) = key
			.rsplit_once(SEPARATOR)
			.ok_or_else(|| Error::MalformedKey(key.to_owned()))?;
		// only the canonical decimal form, so each variable has one key
		let canonical = !color.is_empty()
			&& color.bytes().all(|b| b.is_ascii_digit())
			&& (color == "0" || !color.starts_with('0'));
		if node.is_empty() || !canonical {
			return Err(Error::MalformedKey(key.to_owned()));
		}
		let color = color
			.parse::<usize>()
			.map_err(|_| Error::MalformedKey(key.to_owned()))?;
		Ok(Self::new(node.to_owned(), color))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn encode_is_deterministic_and_injective() {
		let nodes = ["A", "B", "A_1", "A_1_2"];
		let mut seen = HashSet::new();
		for node in nodes.iter() {
			for color in 0..12 {
				let v = encode(node, color);
				assert_eq!(v, encode(node, color));
				assert!(seen.insert(v));
			}
		}
		assert_eq!(seen.len(), nodes.len() * 12);
	}

	#[test]
	fn composite_key_round_trip() {
		let v = Variable::new("North_East".to_string(), 11);
		assert_eq!(v.to_string(), "North_East_11");
		assert_eq!("North_East_11".parse::<Variable<String>>().unwrap(), v);
	}

	#[test]
	fn malformed_keys_are_rejected() {
		for key in ["A", "A_", "_3", "A_x", "A_-1", "A_01", "A_+1", "A_00", "A_ 1"].iter() {
			match key.parse::<Variable<String>>() {
				Err(Error::MalformedKey(k)) => assert_eq!(&k, key),
				other => panic!("{:?} parsed as {:?}", key, other),
			}
		}
	}

	#[test]
	fn zero_color_parses() {
		assert_eq!(
			"A_0".parse::<Variable<String>>().unwrap(),
			Variable::new("A".to_string(), 0)
		);
		assert_eq!(
			"A_10".parse::<Variable<String>>().unwrap(),
			Variable::new("A".to_string(), 10)
		);
	}

	#[test]
	fn variables_order_by_node_then_color() {
		let mut vs = vec![
			Variable::new("B", 0),
			Variable::new("A", 2),
			Variable::new("A", 0),
		];
		vs.sort();
		assert_eq!(
			vs,
			vec![
				Variable::new("A", 0),
				Variable::new("A", 2),
				Variable::new("B", 0)
			]
		);
	}
}
