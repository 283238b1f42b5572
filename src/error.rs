use std::path::PathBuf;

/// Library-level structured errors for cmaketricks.
///
/// Every variant is fatal for the whole run. The CLI binary wraps these with
/// `anyhow` for context and maps them to process exit codes via
/// [`TricksError::exit_code`].
#[derive(Debug, thiserror::Error)]
pub enum TricksError {
	#[error(
		"cannot get the address of 'wine_get_dos_file_name' and no path mappings are configured; did you run the executable under wine?"
	)]
	ServiceUnavailable,

	#[error("Failed to remap response file `{path}`")]
	FileOpen {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write remapped file `{path}`")]
	FileWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to remap path `{path}`")]
	PathRejected { path: String },

	#[error("token of {len} bytes does not fit the {capacity}-byte token buffer")]
	TokenTooLong { len: usize, capacity: usize },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid path mapping prefix `{prefix}`: {reason}")]
	InvalidMapping { prefix: String, reason: String },

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl TricksError {
	/// Process exit code reported for this error.
	pub fn exit_code(&self) -> u8 {
		match self {
			TricksError::ServiceUnavailable => 2,
			TricksError::FileOpen { .. } | TricksError::FileWrite { .. } => 3,
			TricksError::PathRejected { .. } => 4,
			_ => 1,
		}
	}
}

/// Result type alias using TricksError.
pub type Result<T> = std::result::Result<T, TricksError>;
