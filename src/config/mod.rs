//! Configuration loading and parsing for cmaketricks.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Config merging
//! - Run settings assembled from the command line

pub mod cascade;
pub mod parser;
pub mod settings;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, discover_configs, load_merged_config, merge_configs, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use settings::{Mode, Settings};
pub use types::{Config, DEFAULT_DEBUG_SUFFIX, LoadedConfig, MergedConfig, PathMapping};
