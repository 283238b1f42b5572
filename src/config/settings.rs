use crate::config::types::{DEFAULT_DEBUG_SUFFIX, MergedConfig};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// What kind of file is being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// A `cl` response file: every argument is re-quoted, paths are remapped.
	Command,

	/// A precompiled header: only `#include` targets are remapped.
	PrecompiledHeader,
}

impl Mode {
	pub fn as_str(&self) -> &'static str {
		match self {
			Mode::Command => "cmd",
			Mode::PrecompiledHeader => "pch",
		}
	}
}

/// Read-only settings for one run, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Suppress warnings, such as a file skipped because it was already remapped.
	pub quiet: bool,

	/// Write to a sibling file instead of in place, and trace every token.
	pub debug: bool,

	/// Mode for the files named on the command line.
	pub mode: Mode,

	/// Suffix of the sibling file written in debug mode.
	pub debug_suffix: String,
}

impl Settings {
	/// Combine command line flags with the merged configuration.
	pub fn new(quiet: bool, debug: bool, mode: Mode, config: &MergedConfig) -> Self {
		Settings {
			quiet,
			debug,
			mode,
			debug_suffix: config.debug_suffix().to_string(),
		}
	}

	/// Where the rewritten content of `input` goes.
	pub fn output_path(&self, input: &Path) -> PathBuf {
		if !self.debug {
			return input.to_path_buf();
		}
		let mut name = OsString::from(input.as_os_str());
		name.push(&self.debug_suffix);
		PathBuf::from(name)
	}
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			quiet: false,
			debug: false,
			mode: Mode::Command,
			debug_suffix: DEFAULT_DEBUG_SUFFIX.to_string(),
		}
	}
}
