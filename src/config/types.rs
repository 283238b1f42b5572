use serde::Deserialize;
use std::path::PathBuf;

/// Suffix of the sibling file written in debug mode.
pub const DEFAULT_DEBUG_SUFFIX: &str = ".out";

/// Top-level configuration from a `.cmaketricks.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// If true, stop directory cascade and jump directly to ~/.cmaketricks.toml.
	#[serde(default)]
	pub root: bool,

	/// Environment variable name that, if truthy, skips ~/.cmaketricks.toml lookup.
	/// Useful for CI environments.
	#[serde(default)]
	pub root_config_lookup_disable_env_var: Option<String>,

	/// Suffix appended to the file name when writing in debug mode.
	#[serde(default)]
	pub debug_suffix: Option<String>,

	/// Prefix mappings used when Wine's translation function is unavailable.
	#[serde(default)]
	pub mappings: Vec<PathMapping>,
}

/// Maps every absolute path under `prefix` to the same path under `replacement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PathMapping {
	/// Absolute path prefix as written by the build scripts.
	pub prefix: String,

	/// What the prefix becomes for the compiler.
	pub replacement: String,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Merged configuration from multiple config files in the cascade.
#[derive(Debug, Clone, Default)]
pub struct MergedConfig {
	/// All mappings from all configs, in cascade order.
	pub mappings: Vec<PathMapping>,

	/// Debug suffix from the most specific config that sets one.
	pub debug_suffix: Option<String>,
}

impl PathMapping {
	/// Validate that the prefix is an absolute path.
	pub fn validate(&self) -> Result<(), crate::error::TricksError> {
		let reason = if self.prefix.is_empty() {
			"prefix must not be empty"
		} else if !self.prefix.starts_with('/') {
			"prefix must be an absolute path"
		} else {
			return Ok(());
		};

		Err(crate::error::TricksError::InvalidMapping {
			prefix: self.prefix.clone(),
			reason: reason.to_string(),
		})
	}
}

impl Config {
	/// Validate all mappings in this config.
	pub fn validate(&self) -> Result<(), crate::error::TricksError> {
		for mapping in &self.mappings {
			mapping.validate()?;
		}
		Ok(())
	}
}

impl MergedConfig {
	/// Debug suffix to use, falling back to the default.
	pub fn debug_suffix(&self) -> &str {
		self.debug_suffix.as_deref().unwrap_or(DEFAULT_DEBUG_SUFFIX)
	}
}
