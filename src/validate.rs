//! Checks a returned sample against the coloring rules.
//!
//! [`validate`] walks the edge list and reports the first problem it meets.
//! It only looks at nodes that appear on an edge, and for each edge it stops
//! reading the sample as soon as both endpoint colors are known, so a second
//! color that sorts after that point goes unseen. [`validate_complete`]
//! checks every node first and has neither gap.
use crate::solution::Sample;
use crate::variable::Variable;
use crate::LabelType;
use std::fmt;
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<N>
where
	N: LabelType,
{
	Valid,
	/// The node does not hold exactly one color.
	ConstraintViolation(N),
	/// Both endpoints of an edge hold the same color.
	ColoringViolation(N, N),
}

impl<N> Verdict<N>
where
	N: LabelType,
{
	pub fn is_valid(&self) -> bool {
		matches!(self, Verdict::Valid)
	}
}

impl<N> fmt::Display for Verdict<N>
where
	N: LabelType + fmt::Display,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Verdict::Valid => write!(f, "the solution is correct"),
			Verdict::ConstraintViolation(n) => {
				write!(f, "incorrect solution: {} does not have exactly one color", n)
			}
			Verdict::ColoringViolation(a, b) => {
				write!(f, "incorrect solution: {} and {} have the same color", a, b)
			}
		}
	}
}

/// Edge-driven check of `sample`, stopping at the first violation.
pub fn validate<N>(sample: &Sample<Variable<N>>, edges: &[(N, N)]) -> Verdict<N>
where
	N: LabelType,
{
	for (node1, node2) in edges {
		let mut col1 = None;
		let mut col2 = None;
		debug!(?node1, ?node2, "comparing");
		for var in sample.ones() {
			if &var.node == node1 {
				if col1.is_some() {
					warn!(node = ?node1, "more than one color assigned");
					return Verdict::ConstraintViolation(node1.clone());
				}
				col1 = Some(var.color);
			}
			if &var.node == node2 {
				if col2.is_some() {
					warn!(node = ?node2, "more than one color assigned");
					return Verdict::ConstraintViolation(node2.clone());
				}
				col2 = Some(var.color);
			}
			if col1.is_some() && col2.is_some() {
				break;
			}
		}
		debug!(?node1, color1 = ?col1, ?node2, color2 = ?col2, "edge colors");
		if col1.is_some() && col1 == col2 {
			warn!(?node1, ?node2, "adjacent nodes share a color");
			return Verdict::ColoringViolation(node1.clone(), node2.clone());
		}
	}
	Verdict::Valid
}

/// Checks that every node in `nodes` holds exactly one color, isolated
/// nodes included, then runs [`validate`] over `edges`.
pub fn validate_complete<N>(
	sample: &Sample<Variable<N>>,
	nodes: &[N],
	edges: &[(N, N)],
) -> Verdict<N>
where
	N: LabelType,
{
	for node in nodes {
		let colors = sample.ones().filter(|v| &v.node == node).count();
		if colors != 1 {
			warn!(?node, colors, "node does not have exactly one color");
			return Verdict::ConstraintViolation(node.clone());
		}
	}
	validate(sample, edges)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::variable::encode;

	fn sample(
		ones: &[(&'static str, usize)],
		nodes: &[&'static str],
		colors: usize,
	) -> Sample<Variable<&'static str>> {
		nodes
			.iter()
			.flat_map(|n| (0..colors).map(move |c| encode(n, c)))
			.map(|v| {
				let set = ones.contains(&(v.node, v.color));
				(v, set)
			})
			.collect()
	}

	#[test]
	fn proper_coloring_is_valid() {
		let s = sample(&[("A", 0), ("B", 1)], &["A", "B"], 2);
		assert_eq!(validate(&s, &[("A", "B")]), Verdict::Valid);
		assert!(validate(&s, &[("A", "B")]).is_valid());
	}

	#[test]
	fn shared_color_is_a_coloring_violation() {
		let s = sample(&[("A", 0), ("B", 0)], &["A", "B"], 2);
		assert_eq!(
			validate(&s, &[("A", "B")]),
			Verdict::ColoringViolation("A", "B")
		);
	}

	#[test]
	fn two_colors_is_a_constraint_violation() {
		let s = sample(&[("A", 0), ("A", 1), ("B", 1)], &["A", "B"], 2);
		assert_eq!(
			validate(&s, &[("A", "B")]),
			Verdict::ConstraintViolation("A")
		);
	}

	#[test]
	fn first_violation_wins() {
		let s = sample(&[("A", 1), ("A", 2), ("B", 1), ("D", 1)], &["A", "B", "D"], 3);
		assert_eq!(
			validate(&s, &[("B", "D"), ("A", "B")]),
			Verdict::ColoringViolation("B", "D")
		);
		assert_eq!(
			validate(&s, &[("A", "B"), ("B", "D")]),
			Verdict::ConstraintViolation("A")
		);
	}

	#[test]
	fn uncolored_endpoint_is_not_a_coloring_violation() {
		let s = sample(&[("B", 0)], &["A", "B"], 2);
		assert_eq!(validate(&s, &[("A", "B")]), Verdict::Valid);
		assert_eq!(
			validate_complete(&s, &["A", "B"], &[("A", "B")]),
			Verdict::ConstraintViolation("A")
		);
	}

	#[test]
	fn scan_stops_once_both_colors_are_known() {
		// B_2 sorts after A_0 and B_1, so the edge scan never reaches it
		let s = sample(&[("A", 0), ("B", 1), ("B", 2)], &["A", "B"], 3);
		let edges = [("A", "B")];
		assert_eq!(validate(&s, &edges), Verdict::Valid);
		assert_eq!(
			validate_complete(&s, &["A", "B"], &edges),
			Verdict::ConstraintViolation("B")
		);
	}

	#[test]
	fn isolated_nodes_are_only_checked_by_complete_validation() {
		let s = sample(&[("A", 0), ("B", 1), ("C", 0), ("C", 1)], &["A", "B", "C"], 2);
		let edges = [("A", "B")];
		assert_eq!(validate(&s, &edges), Verdict::Valid);
		assert_eq!(
			validate_complete(&s, &["A", "B", "C"], &edges),
			Verdict::ConstraintViolation("C")
		);
	}

	#[test]
	fn verdicts_render_as_diagnostics() {
		let v: Verdict<String> = Verdict::ColoringViolation("A".into(), "B".into());
		assert_eq!(
			v.to_string(),
			"incorrect solution: A and B have the same color"
		);
		assert_eq!(Verdict::<String>::Valid.to_string(), "the solution is correct");
	}
}
