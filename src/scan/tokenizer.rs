use crate::error::{Result, TricksError};
use std::fmt;

/// Size of the token buffer. A token must be strictly shorter than this,
/// one byte stays reserved the way a terminated C buffer would.
pub const TOKEN_CAPACITY: usize = 1024;

/// Kind of a token, decided by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
	/// A single carriage-return or line-feed byte.
	Newline,

	/// Content starting with a space. Never written back out.
	Blank,

	/// Any other content, with surrounding quotes already stripped.
	Text,
}

/// A bounded, reusable token buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
	bytes: Vec<u8>,
}

impl Token {
	pub fn new() -> Self {
		Token {
			bytes: Vec::with_capacity(TOKEN_CAPACITY),
		}
	}

	/// Get the kind of the token currently held.
	pub fn kind(&self) -> TokenKind {
		match self.bytes.first() {
			Some(b'\r' | b'\n') => TokenKind::Newline,
			Some(b' ') => TokenKind::Blank,
			_ => TokenKind::Text,
		}
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Replace the whole content with `span`.
	pub fn set(&mut self, span: &[u8]) -> Result<()> {
		check_capacity(span.len())?;
		self.bytes.clear();
		self.bytes.extend_from_slice(span);
		Ok(())
	}

	/// Replace everything from `start` onward with `tail`, keeping the prefix.
	pub fn replace_tail(&mut self, start: usize, tail: &[u8]) -> Result<()> {
		let start = start.min(self.bytes.len());
		check_capacity(start + tail.len())?;
		self.bytes.truncate(start);
		self.bytes.extend_from_slice(tail);
		Ok(())
	}
}

impl Default for Token {
	fn default() -> Self {
		Self::new()
	}
}

impl fmt::Display for Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&String::from_utf8_lossy(&self.bytes))
	}
}

fn check_capacity(len: usize) -> Result<()> {
	if len >= TOKEN_CAPACITY {
		return Err(TricksError::TokenTooLong {
			len,
			capacity: TOKEN_CAPACITY,
		});
	}
	Ok(())
}

/// Scanner over a response file or header held fully in memory.
///
/// Arguments are separated by spaces and tabs, a double quote groups
/// everything up to the next double quote (no escapes, no nesting), and each
/// carriage-return or line-feed byte is a token of its own. A NUL byte ends
/// the input.
#[derive(Debug)]
pub struct Tokenizer<'a> {
	input: &'a [u8],
	cursor: usize,
}

impl<'a> Tokenizer<'a> {
	pub fn new(input: &'a [u8]) -> Self {
		let end = input.iter().position(|&b| b == 0).unwrap_or(input.len());
		Tokenizer {
			input: &input[..end],
			cursor: 0,
		}
	}

	/// Byte offset of the next unread byte.
	pub fn cursor(&self) -> usize {
		self.cursor
	}

	/// Scan the next token into `token`.
	///
	/// Returns `Ok(false)` once the input is exhausted. On `TokenTooLong` the
	/// token buffer is left untouched.
	pub fn next_token(&mut self, token: &mut Token) -> Result<bool> {
		let input = self.input;
		let mut pos = self.cursor;

		while pos < input.len() && matches!(input[pos], b' ' | b'\t') {
			pos += 1;
		}

		if pos >= input.len() {
			self.cursor = pos;
			return Ok(false);
		}

		if matches!(input[pos], b'\r' | b'\n') {
			token.set(&input[pos..=pos])?;
			self.cursor = pos + 1;
			return Ok(true);
		}

		let (start, end, next) = if input[pos] == b'"' {
			let start = pos + 1;
			let end = input[start..]
				.iter()
				.position(|&b| b == b'"')
				.map_or(input.len(), |i| start + i);
			// The closing quote belongs to the span.
			(start, end, (end + 1).min(input.len()))
		} else {
			let end = input[pos..]
				.iter()
				.position(|&b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
				.map_or(input.len(), |i| pos + i);
			(pos, end, end)
		};

		token.set(&input[start..end])?;
		self.cursor = next;
		Ok(true)
	}
}
