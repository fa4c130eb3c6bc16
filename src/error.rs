use std::fmt::Debug;
use thiserror::Error;

/// Errors raised while building, solving or reading a coloring instance.
///
/// Validation findings are not errors; see [`crate::validate::Verdict`].
#[derive(Error, Debug)]
pub enum Error {
	/// An edge references a node that is not part of the node set.
	#[error("malformed instance: edge {edge} references unknown node {node}")]
	MalformedInstance { node: String, edge: String },

	#[error("malformed instance: node {0} is listed more than once")]
	DuplicateNode(String),

	#[error("number of colors must be at least 1, got {0}")]
	InvalidColors(usize),

	/// A composite variable key could not be split into node and color.
	#[error("malformed variable key {0:?}")]
	MalformedKey(String),

	#[error("sample value for {key} must be 0 or 1, got {value}")]
	NonBinaryValue { key: String, value: i64 },

	#[error("variable {0} appears more than once in the sample")]
	DuplicateVariable(String),

	#[error("line {line}: expected two node names separated by a space, got {content:?}")]
	MalformedLine { line: usize, content: String },

	/// The solver did not produce a usable sample.
	#[error("solver failure: {0}")]
	SolverFailure(String),

	#[error("configuration error: {0}")]
	Config(#[from] serde_json::Error),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	pub(crate) fn malformed_instance<N: Debug>(node: &N, edge: &(N, N)) -> Self {
		Error::MalformedInstance {
			node: format!("{:?}", node),
			edge: format!("({:?}, {:?})", edge.0, edge.1),
		}
	}

	pub fn solver(message: impl Into<String>) -> Self {
		Error::SolverFailure(message.into())
	}
}

pub type Result<T> = std::result::Result<T, Error>;
