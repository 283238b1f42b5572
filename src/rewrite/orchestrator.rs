use crate::config::{Mode, Settings};
use crate::error::{Result, TricksError};
use crate::rewrite::session::RewriteSession;
use crate::scan::{ForcedInclude, TokenKind, classify, forced_include};
use crate::translate::{PathResolver, PathTranslator};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Rewrites response files and precompiled headers.
///
/// Each file is read fully, then streamed token by token into its
/// destination. A forced include found in a response file is rewritten as a
/// precompiled header before the outer file continues.
pub struct Remapper<'a> {
	settings: &'a Settings,
	resolver: PathResolver<'a>,
	/// Every file rewritten during this run, so an include chain that cycles
	/// or a header shared by several response files is only rewritten once.
	visited: HashSet<PathBuf>,
}

impl<'a> Remapper<'a> {
	pub fn new(settings: &'a Settings, translator: &'a dyn PathTranslator) -> Self {
		Remapper {
			settings,
			resolver: PathResolver::new(translator),
			visited: HashSet::new(),
		}
	}

	/// Rewrite `path` in `mode`, in place or into its debug sibling.
	pub fn rewrite_file(&mut self, path: &Path, mode: Mode) -> Result<()> {
		let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
		if !self.visited.insert(key) {
			if !self.settings.quiet {
				tracing::warn!(file = %path.display(), "already remapped, skipping");
			}
			return Ok(());
		}

		let input = std::fs::read(path).map_err(|source| TricksError::FileOpen {
			path: path.to_path_buf(),
			source,
		})?;

		let out_path = self.settings.output_path(path);
		let file = File::create(&out_path).map_err(|source| TricksError::FileOpen {
			path: path.to_path_buf(),
			source,
		})?;

		tracing::info!(
			file = %path.display(),
			output = %out_path.display(),
			mode = mode.as_str(),
			"remapping"
		);

		let session = RewriteSession::new(&input, BufWriter::new(file), &out_path);
		self.run(session, mode)?;
		Ok(())
	}

	/// Rewrite an in-memory buffer and return the rewritten bytes.
	///
	/// Forced includes still name files on disk and are rewritten there.
	pub fn rewrite_buffer(&mut self, input: &[u8], mode: Mode) -> Result<Vec<u8>> {
		let session = RewriteSession::new(input, Vec::new(), Path::new("<buffer>"));
		self.run(session, mode)
	}

	fn run<W: Write>(&mut self, mut session: RewriteSession<'_, W>, mode: Mode) -> Result<W> {
		while session.advance()? {
			match session.token.kind() {
				TokenKind::Blank => continue,
				TokenKind::Newline => session.write_raw()?,
				TokenKind::Text => match mode {
					Mode::Command => self.command_token(&mut session)?,
					Mode::PrecompiledHeader => self.header_token(&mut session)?,
				},
			}
		}
		session.finish()
	}

	fn command_token<W: Write>(&mut self, session: &mut RewriteSession<'_, W>) -> Result<()> {
		let original = self.trace_input(session);
		let classification = classify(session.token.as_bytes());
		let forced = forced_include(session.token.as_bytes(), classification);

		if let Some(path_start) = classification.path_start() {
			self.resolver.resolve(&mut session.token, path_start)?;
		}
		session.write_quoted()?;
		self.trace_output(original, session);

		match forced {
			Some(ForcedInclude::Attached) => {
				let target = token_path(&session.token.as_bytes()[3..]);
				self.rewrite_file(&target, Mode::PrecompiledHeader)
			}
			Some(ForcedInclude::Detached) => {
				if !next_argument(session)? {
					return Ok(());
				}
				if session.token.kind() == TokenKind::Newline {
					return session.write_raw();
				}

				let original = self.trace_input(session);
				self.resolver.resolve(&mut session.token, 0)?;
				session.write_quoted()?;
				self.trace_output(original, session);

				let target = token_path(session.token.as_bytes());
				self.rewrite_file(&target, Mode::PrecompiledHeader)
			}
			None => Ok(()),
		}
	}

	fn header_token<W: Write>(&mut self, session: &mut RewriteSession<'_, W>) -> Result<()> {
		if session.token.as_bytes() != b"#include" {
			let original = self.trace_input(session);
			session.write_spaced()?;
			self.trace_output(original, session);
			return Ok(());
		}

		session.write_raw()?;
		if !next_argument(session)? {
			return Ok(());
		}
		if session.token.kind() == TokenKind::Newline {
			return session.write_raw();
		}

		let original = self.trace_input(session);
		self.resolver.resolve(&mut session.token, 0)?;
		session.write_include_target()?;
		self.trace_output(original, session);
		Ok(())
	}

	fn trace_input<W: Write>(&self, session: &RewriteSession<'_, W>) -> Option<String> {
		(self.settings.debug && tracing::enabled!(tracing::Level::DEBUG))
			.then(|| session.token.to_string())
	}

	fn trace_output<W: Write>(&self, original: Option<String>, session: &RewriteSession<'_, W>) {
		if let Some(original) = original {
			tracing::debug!("token: `{}` -> `{}`", original, session.token);
		}
	}
}

/// Pull the next token that is not an artifact of the scan.
fn next_argument<W: Write>(session: &mut RewriteSession<'_, W>) -> Result<bool> {
	while session.advance()? {
		if session.token.kind() != TokenKind::Blank {
			return Ok(true);
		}
	}
	Ok(false)
}

fn token_path(bytes: &[u8]) -> PathBuf {
	PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}
