//! GraphQUBO encodes graph coloring as a QUBO, hands it to a solver and
//! checks the coloring that comes back.
//!
//! # Examples
//!
//! ## Encoding and checking by hand
//! ```
//! # extern crate graphqubo;
//! # use graphqubo::{build, encode, validate, Graph, Sample, Verdict};
//! let graph = Graph::new(vec!["A", "B"], vec![("A", "B")]).unwrap();
//! let qubo = build(&graph, 2, 10.0).unwrap();
//! let sample = Sample::from_binary(vec![
//! 	(encode(&"A", 0), 1),
//! 	(encode(&"A", 1), 0),
//! 	(encode(&"B", 0), 0),
//! 	(encode(&"B", 1), 1),
//! ])
//! .unwrap();
//! assert_eq!(qubo.offset(), 22.0);
//! assert_eq!(qubo.energy(&sample), 0.0);
//! assert_eq!(validate(&sample, graph.edges()), Verdict::Valid);
//! ```
//!
//! ## Solving with the built-in annealer
//! ```
//! # extern crate graphqubo;
//! # use graphqubo::{ColoringProblem, SimulatedAnnealer, Verdict};
//! let problem = ColoringProblem::new(
//! 	vec!["A", "B", "C"],
//! 	vec![("A", "B"), ("B", "C"), ("C", "A")],
//! 	3,
//! 	10.0,
//! )
//! .unwrap();
//! let mut solver = SimulatedAnnealer::new();
//! solver.reads = 16;
//! solver.seed = Some(1);
//! let report = problem.solve_with(&solver).unwrap();
//! // displays 3, {"A": .., "B": .., "C": ..}, the solution is correct
//! println!("{}, {:?}, {}", &report.energy, &report.coloring, &report.verdict);
//! # assert_eq!(report.verdict, Verdict::Valid);
//! # assert_eq!(report.energy, report.baseline);
//! ```
use std::cmp::Ord;
use std::fmt::Debug;
use std::hash::Hash;

extern crate rand;
extern crate rayon;

/// Anything usable as a node identifier or variable label.
pub trait LabelType: PartialEq + Eq + Clone + Debug + Hash + Ord {}

impl<T> LabelType for T where T: PartialEq + Eq + Clone + Debug + Hash + Ord {}

mod anneal;
pub mod builder;
pub mod config;
pub mod error;
pub mod graph;
pub mod input;
pub mod model;
pub mod problem;
pub mod qubo;
pub mod solution;
pub mod solve;
pub mod validate;
pub mod variable;

pub use builder::{baseline_energy, build};
pub use config::{AnnealerConfig, Config};
pub use error::{Error, Result};
pub use graph::Graph;
pub use model::{to_model, QuadraticModel};
pub use problem::{ColoringProblem, Report};
pub use qubo::Qubo;
pub use solution::{Sample, SampleSet, Solution};
pub use solve::{SimulatedAnnealer, Solver};
pub use validate::{validate, validate_complete, Verdict};
pub use variable::{encode, Variable};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn label_test() {
		let _: Qubo<Variable<(u8, u8)>> = Qubo::new();
	}
}
