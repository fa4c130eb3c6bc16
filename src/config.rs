use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

/// Run configuration, read from JSON. Missing fields take their defaults.
///
/// ```
/// # use graphqubo::Config;
/// let config = Config::from_json_str(r#"{"colors": 4, "annealer": {"seed": 3}}"#).unwrap();
/// assert_eq!(config.colors, 4);
/// assert_eq!(config.gamma, 10.0);
/// assert_eq!(config.annealer.seed, Some(3));
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
	pub colors: usize,
	/// Weight of the one-color-per-node penalty.
	pub gamma: f64,
	pub annealer: AnnealerConfig,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			colors: 5,
			gamma: 10.0,
			annealer: AnnealerConfig::default(),
		}
	}
}

impl Config {
	pub fn from_json_str(s: &str) -> Result<Self> {
		Ok(serde_json::from_str(s)?)
	}

	pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
		let content = std::fs::read_to_string(path)?;
		Self::from_json_str(&content)
	}

	/// Replaces the fields for which a value is given, as the command line
	/// does over a loaded file.
	pub fn apply_overrides(
		&mut self,
		colors: Option<usize>,
		gamma: Option<f64>,
		reads: Option<usize>,
		seed: Option<u64>,
	) {
		if let Some(colors) = colors {
			self.colors = colors;
		}
		if let Some(gamma) = gamma {
			self.gamma = gamma;
		}
		if let Some(reads) = reads {
			self.annealer.reads = reads;
		}
		if seed.is_some() {
			self.annealer.seed = seed;
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnnealerConfig {
	/// Independent annealing runs, executed in parallel.
	pub reads: usize,
	pub beta_count: usize,
	pub sweeps_per_beta: usize,
	/// Fixed seed for reproducible runs; the OS seeds each read otherwise.
	pub seed: Option<u64>,
}

impl Default for AnnealerConfig {
	fn default() -> Self {
		Self {
			reads: 100,
			beta_count: 100,
			sweeps_per_beta: 30,
			seed: None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::error::Error;
	use std::io::Write;
	use tempfile::NamedTempFile;

	#[test]
	fn empty_config_uses_defaults() {
		assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
	}

	#[test]
	fn bad_config_is_an_error() {
		assert!(matches!(
			Config::from_json_str(r#"{"colors": "five"}"#),
			Err(Error::Config(_))
		));
	}

	#[test]
	fn loads_config_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(br#"{"colors": 3, "gamma": 4.5, "annealer": {"reads": 8, "seed": 11}}"#)
			.unwrap();
		let config = Config::from_path(file.path()).unwrap();
		assert_eq!(config.colors, 3);
		assert_eq!(config.gamma, 4.5);
		assert_eq!(config.annealer.reads, 8);
		assert_eq!(config.annealer.seed, Some(11));
		assert_eq!(config.annealer.beta_count, 100);
		assert_eq!(config.annealer.sweeps_per_beta, 30);
	}

	#[test]
	fn config_file_errors() {
		assert!(matches!(
			Config::from_path("/nonexistent/graphqubo/config.json"),
			Err(Error::Io(_))
		));
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(b"colors = 3").unwrap();
		assert!(matches!(
			Config::from_path(file.path()),
			Err(Error::Config(_))
		));
	}

	#[test]
	fn overrides_replace_only_given_fields() {
		let mut config = Config::from_json_str(r#"{"colors": 3, "annealer": {"seed": 7}}"#).unwrap();
		config.apply_overrides(None, None, None, None);
		assert_eq!(config.colors, 3);
		assert_eq!(config.annealer.seed, Some(7));

		config.apply_overrides(Some(4), Some(2.5), Some(16), None);
		assert_eq!(config.colors, 4);
		assert_eq!(config.gamma, 2.5);
		assert_eq!(config.annealer.reads, 16);
		assert_eq!(config.annealer.seed, Some(7));

		config.apply_overrides(None, None, None, Some(9));
		assert_eq!(config.annealer.seed, Some(9));
		assert_eq!(config.colors, 4);
	}
}
