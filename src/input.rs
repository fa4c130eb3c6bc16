//! Plain-text node and edge lists: one node name per line, one
//! space-separated node pair per line. Blank lines are ignored.
use crate::error::{Error, Result};
use std::path::Path;

pub fn parse_nodes(text: &str) -> Vec<String> {
	text.lines()
		.map(str::trim_end)
		.filter(|line| !line.is_empty())
		.map(str::to_owned)
		.collect()
}

pub fn parse_edges(text: &str) -> Result<Vec<(String, String)>> {
	text.lines()
		.map(str::trim_end)
		.enumerate()
		.filter(|(_, line)| !line.is_empty())
		.map(|(i, line)| {
			let mut fields = line.split(' ');
			match (fields.next(), fields.next(), fields.next()) {
				(Some(a), Some(b), None) if !a.is_empty() && !b.is_empty() => {
					Ok((a.to_owned(), b.to_owned()))
				}
				_ => Err(Error::MalformedLine {
					line: i + 1,
					content: line.to_owned(),
				}),
			}
		})
		.collect()
}

pub fn read_nodes<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	Ok(parse_nodes(&std::fs::read_to_string(path)?))
}

pub fn read_edges<P: AsRef<Path>>(path: P) -> Result<Vec<(String, String)>> {
	parse_edges(&std::fs::read_to_string(path)?)
}
