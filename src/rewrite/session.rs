use crate::error::{Result, TricksError};
use crate::scan::{Token, Tokenizer};
use std::io::Write;
use std::path::{Path, PathBuf};

/// State for rewriting one file: the scan over its content, the reused token
/// buffer and the destination stream.
pub struct RewriteSession<'a, W: Write> {
	tokenizer: Tokenizer<'a>,
	pub token: Token,
	out: W,
	out_path: PathBuf,
}

impl<'a, W: Write> RewriteSession<'a, W> {
	pub fn new(input: &'a [u8], out: W, out_path: &Path) -> Self {
		RewriteSession {
			tokenizer: Tokenizer::new(input),
			token: Token::new(),
			out,
			out_path: out_path.to_path_buf(),
		}
	}

	/// Scan the next token. `Ok(false)` at end of input.
	pub fn advance(&mut self) -> Result<bool> {
		self.tokenizer.next_token(&mut self.token)
	}

	/// Write the token as-is.
	pub fn write_raw(&mut self) -> Result<()> {
		let res = self.out.write_all(self.token.as_bytes());
		self.check(res)
	}

	/// Write `"token" `.
	pub fn write_quoted(&mut self) -> Result<()> {
		let res = write_parts(&mut self.out, &[&b"\""[..], self.token.as_bytes(), b"\" "]);
		self.check(res)
	}

	/// Write ` "token"`, the form of an include target.
	pub fn write_include_target(&mut self) -> Result<()> {
		let res = write_parts(&mut self.out, &[&b" \""[..], self.token.as_bytes(), b"\""]);
		self.check(res)
	}

	/// Write the token followed by a single space.
	pub fn write_spaced(&mut self) -> Result<()> {
		let res = write_parts(&mut self.out, &[self.token.as_bytes(), b" "]);
		self.check(res)
	}

	/// Flush and hand back the destination stream.
	pub fn finish(mut self) -> Result<W> {
		let res = self.out.flush();
		self.check(res)?;
		Ok(self.out)
	}

	fn check(&self, res: std::io::Result<()>) -> Result<()> {
		res.map_err(|source| TricksError::FileWrite {
			path: self.out_path.clone(),
			source,
		})
	}
}

fn write_parts<W: Write>(out: &mut W, parts: &[&[u8]]) -> std::io::Result<()> {
	for part in parts {
		out.write_all(part)?;
	}
	Ok(())
}
