/// Which path-bearing argument shape a token has.
///
/// Every path shape carries the byte offset at which the embedded path
/// starts; the bytes before it are flag text and are never translated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
	/// `-I/absolute/path` or `/I/absolute/path`.
	OnePrefixPath { path_start: usize },

	/// `-Fo/absolute/path` or `/Fo/absolute/path`.
	DuoPrefixPath { path_start: usize },

	/// `-MANIFESTINPUT:/absolute/path` or `/MANIFESTINPUT:/absolute/path`.
	TriPrefixPath { path_start: usize },

	/// `/absolute/path` with at least one intermediate separator.
	JustPath,

	NotAPath,
}

impl Classification {
	/// Offset of the embedded path, if the token carries one.
	pub fn path_start(&self) -> Option<usize> {
		match *self {
			Classification::OnePrefixPath { path_start }
			| Classification::DuoPrefixPath { path_start }
			| Classification::TriPrefixPath { path_start } => Some(path_start),
			Classification::JustPath => Some(0),
			Classification::NotAPath => None,
		}
	}
}

/// How a token names a forced include (`/FI` or `-Fi` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForcedInclude {
	/// The header path is attached to the flag: `-FI/abs/cmake_pch.h`.
	Attached,

	/// The flag stands alone and the next token is the header: `-FI cmake_pch.h`.
	Detached,
}

/// Classify a token. Prefix shapes win over a bare path, so `-I/usr/include`
/// keeps its flag letters out of translation.
pub fn classify(token: &[u8]) -> Classification {
	if let Some(prefixed) = classify_prefixed(token) {
		return prefixed;
	}
	if is_just_path(token) {
		return Classification::JustPath;
	}
	Classification::NotAPath
}

/// Detect a forced-include flag, given the token and its classification.
pub fn forced_include(token: &[u8], classification: Classification) -> Option<ForcedInclude> {
	let flag = token.get(..3)?;
	if !is_flag_marker(flag[0]) || flag[1] != b'F' || !matches!(flag[2], b'I' | b'i') {
		return None;
	}
	match classification {
		Classification::DuoPrefixPath { .. } => Some(ForcedInclude::Attached),
		_ if token.len() == 3 => Some(ForcedInclude::Detached),
		_ => None,
	}
}

fn classify_prefixed(token: &[u8]) -> Option<Classification> {
	if !is_flag_marker(*token.first()?) {
		return None;
	}

	let letters = token[1..]
		.iter()
		.take_while(|b| b.is_ascii_alphabetic())
		.count();
	let after = 1 + letters;

	match letters {
		0 => None,
		1 | 2 => {
			if token.get(after) == Some(&b'/') && is_rest(&token[after + 1..]) {
				let path_start = after;
				Some(if letters == 1 {
					Classification::OnePrefixPath { path_start }
				} else {
					Classification::DuoPrefixPath { path_start }
				})
			} else {
				None
			}
		}
		_ => {
			if token.get(after) == Some(&b':')
				&& token.get(after + 1) == Some(&b'/')
				&& is_rest(&token[after + 2..])
			{
				Some(Classification::TriPrefixPath {
					path_start: after + 1,
				})
			} else {
				None
			}
		}
	}
}

/// `/` + one or more bytes + `/` + one or more bytes.
fn is_just_path(token: &[u8]) -> bool {
	if token.len() < 4 || token[0] != b'/' || !is_rest(&token[1..]) {
		return false;
	}
	token[2..token.len() - 1].contains(&b'/')
}

fn is_flag_marker(b: u8) -> bool {
	b == b'-' || b == b'/'
}

fn is_rest(bytes: &[u8]) -> bool {
	!bytes.iter().any(|&b| b == b'\r' || b == b'\n')
}
