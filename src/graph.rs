use crate::error::{Error, Result};
use crate::LabelType;
use std::collections::BTreeSet;

/// Well-formed coloring instance: unique nodes and edges whose endpoints are
/// all known nodes. Duplicate edges are kept as given.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph<N>
where
	N: LabelType,
{
	nodes: Vec<N>,
	edges: Vec<(N, N)>,
}

impl<N> Graph<N>
where
	N: LabelType,
{
	pub fn new(nodes: Vec<N>, edges: Vec<(N, N)>) -> Result<Self> {
		let mut known = BTreeSet::new();
		for node in nodes.iter() {
			if !known.insert(node) {
				return Err(Error::DuplicateNode(format!("{:?}", node)));
			}
		}
		for edge in edges.iter() {
			for endpoint in [&edge.0, &edge.1].iter() {
				if !known.contains(endpoint) {
					return Err(Error::malformed_instance(*endpoint, edge));
				}
			}
		}
		Ok(Self { nodes, edges })
	}

	pub fn nodes(&self) -> &[N] {
		&self.nodes
	}

	pub fn edges(&self) -> &[(N, N)] {
		&self.edges
	}

	/// Number of edge endpoints equal to `node`.
	pub fn degree(&self, node: &N) -> usize {
		self.edges
			.iter()
			.map(|(a, b)| (a == node) as usize + (b == node) as usize)
			.sum()
	}

	pub fn max_degree(&self) -> usize {
		self.nodes.iter().map(|n| self.degree(n)).max().unwrap_or(0)
	}
}
