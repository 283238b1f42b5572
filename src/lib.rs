//! cmaketricks - remaps paths in `cl` response files and precompiled headers
//! for builds whose compiler runs under Wine.
//!
//! This library provides the core functionality for cmaketricks, including:
//! - Tokenizing response files and classifying path-bearing arguments
//! - Translating paths through Wine or configured prefix mappings
//! - Rewriting files in place, following forced includes into headers
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```no_run
//! use cmaketricks::config::{Mode, Settings, load_merged_config};
//! use cmaketricks::rewrite::remap_files;
//! use cmaketricks::translate::host_translator;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let config = load_merged_config(&cwd).unwrap();
//! let translator = host_translator(&config).unwrap();
//! let settings = Settings::new(false, false, Mode::Command, &config);
//!
//! remap_files(&["CMakeFiles/app.dir/main.cpp.obj.rsp"], &settings, translator.as_ref()).unwrap();
//! ```

pub mod config;
pub mod error;
pub mod rewrite;
pub mod scan;
pub mod translate;

pub use error::{Result, TricksError};
