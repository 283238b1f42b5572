//! Path translation for cmaketricks.
//!
//! This module handles:
//! - The path translation service seam (`PathTranslator`)
//! - Wine's `wine_get_dos_file_name` backend (Windows targets)
//! - Prefix mappings from configuration as a native fallback
//! - Resolving the path part of a token in place

pub mod mapping;
#[cfg(windows)]
pub mod wine;

pub use mapping::MappingTranslator;
#[cfg(windows)]
pub use wine::WineTranslator;

use crate::config::types::MergedConfig;
use crate::error::{Result, TricksError};
use crate::scan::Token;

/// A service that maps a path as written by the build scripts to the path
/// the compiler running under emulation can open.
pub trait PathTranslator {
	/// Short name used in diagnostics.
	fn name(&self) -> &'static str;

	/// Translate `path`, or `None` if the service cannot resolve it.
	fn translate(&self, path: &[u8]) -> Option<Vec<u8>>;
}

/// Pick the translation service for this process.
///
/// Wine's own facility wins when present; configured mappings are the
/// fallback. With neither, nothing can be remapped.
pub fn host_translator(config: &MergedConfig) -> Result<Box<dyn PathTranslator>> {
	#[cfg(windows)]
	if let Some(wine) = WineTranslator::load() {
		return Ok(Box::new(wine));
	}

	let mappings = MappingTranslator::new(config.mappings.clone());
	if !mappings.is_empty() {
		return Ok(Box::new(mappings));
	}

	Err(TricksError::ServiceUnavailable)
}

/// Rewrites the path part of a token in place.
pub struct PathResolver<'a> {
	translator: &'a dyn PathTranslator,
}

impl<'a> PathResolver<'a> {
	pub fn new(translator: &'a dyn PathTranslator) -> Self {
		PathResolver { translator }
	}

	/// Replace everything from `path_start` onward with its translation.
	pub fn resolve(&self, token: &mut Token, path_start: usize) -> Result<()> {
		let path = token.as_bytes().get(path_start..).unwrap_or_default();
		let resolved = self.translator.translate(path).ok_or_else(|| TricksError::PathRejected {
			path: String::from_utf8_lossy(path).into_owned(),
		})?;

		token.replace_tail(path_start, &resolved)
	}
}
