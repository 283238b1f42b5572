//! Rewriting response files and precompiled headers.
//!
//! This module handles:
//! - Reading a file and streaming its tokens into the destination
//! - Re-quoting `cl` arguments and resolving the paths they carry
//! - Remapping `#include` targets in precompiled headers
//! - Following forced includes from a response file into its header

pub mod orchestrator;
pub mod session;

pub use orchestrator::Remapper;
pub use session::RewriteSession;

use crate::config::Settings;
use crate::error::Result;
use crate::translate::PathTranslator;
use std::path::Path;

/// Rewrite every file in order, using the mode from `settings`.
///
/// Stops at the first error; files after it are left untouched.
pub fn remap_files<P: AsRef<Path>>(
	files: &[P],
	settings: &Settings,
	translator: &dyn PathTranslator,
) -> Result<()> {
	let mut remapper = Remapper::new(settings, translator);
	for file in files {
		remapper.rewrite_file(file.as_ref(), settings.mode)?;
	}
	Ok(())
}
