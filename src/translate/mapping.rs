use crate::config::types::PathMapping;
use crate::translate::PathTranslator;

/// Translates paths by rewriting configured prefixes.
///
/// Used when the tool runs natively and the emulated paths are mirrored on
/// the host (bind mounts, symlinked drive roots). Absolute paths must fall
/// under one of the mappings; relative paths are the same in both worlds and
/// pass through unchanged.
#[derive(Debug, Clone)]
pub struct MappingTranslator {
	/// Longest prefix first, so the most specific mapping wins.
	mappings: Vec<PathMapping>,
}

impl MappingTranslator {
	pub fn new(mut mappings: Vec<PathMapping>) -> Self {
		mappings.sort_by_key(|m| std::cmp::Reverse(trimmed(&m.prefix).len()));
		MappingTranslator { mappings }
	}

	pub fn is_empty(&self) -> bool {
		self.mappings.is_empty()
	}
}

impl PathTranslator for MappingTranslator {
	fn name(&self) -> &'static str {
		"path mappings"
	}

	fn translate(&self, path: &[u8]) -> Option<Vec<u8>> {
		if path.first() != Some(&b'/') {
			return Some(path.to_vec());
		}

		self.mappings.iter().find_map(|mapping| {
			let prefix = trimmed(&mapping.prefix).as_bytes();
			let rest = path.strip_prefix(prefix)?;
			// Only match at a component boundary.
			if !rest.is_empty() && rest[0] != b'/' {
				return None;
			}
			let mut out = trimmed(&mapping.replacement).as_bytes().to_vec();
			out.extend_from_slice(rest);
			Some(out)
		})
	}
}

fn trimmed(s: &str) -> &str {
	s.trim_end_matches('/')
}
