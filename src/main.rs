use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use cmaketricks::TricksError;
use cmaketricks::config::{Mode, Settings, load_merged_config};
use cmaketricks::rewrite::remap_files;
use cmaketricks::translate::host_translator;

const EXIT_CODES: &str = "\
Exit codes:
  0  Success
  1  Generic failure
  2  Failed to get address of wine-internal function, did you run the executable under wine?
  3  Failed to open file to remap
  4  Failed to remap path, wine-internal failure";

/// Flags understood by the CLI. Any other dash-prefixed argument is ignored.
const KNOWN_FLAGS: &[&str] = &[
	"-h",
	"--help",
	"-V",
	"--version",
	"-q",
	"--quiet",
	"--debug",
	"--pch",
	"--cmd",
];

#[derive(Parser)]
#[command(name = "cmaketricks")]
#[command(
	version,
	about = "Remaps CL's command files and precompiled headers, as those are not known by the scripts",
	after_help = EXIT_CODES
)]
struct Cli {
	/// Hide errors
	#[arg(short, long)]
	quiet: bool,

	/// Show debug output; writes new files with the `.out` extension instead of replacing them
	#[arg(long)]
	debug: bool,

	/// Remap the given files as precompiled headers (`cmake_pch.h` and the like)
	#[arg(long)]
	pch: bool,

	/// Remap the given files as command files [default]
	#[arg(long)]
	cmd: bool,

	/// Files to remap
	files: Vec<PathBuf>,
}

impl Cli {
	fn mode(&self) -> Mode {
		if self.pch {
			Mode::PrecompiledHeader
		} else {
			Mode::Command
		}
	}
}

fn main() -> ExitCode {
	let args: Vec<OsString> = std::env::args_os().collect();
	if args.len() == 1 {
		eprintln!("usage: cmaketricks [option(s)] [file(s)]");
		return ExitCode::from(1);
	}

	let cli = match Cli::try_parse_from(known_args(args)) {
		Ok(cli) => cli,
		Err(e) => {
			let _ = e.print();
			return match e.kind() {
				ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
				_ => ExitCode::from(1),
			};
		}
	};

	init_tracing(&cli);

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			if !cli.quiet {
				eprintln!("cmaketricks: {e:#}");
			}
			let code = e
				.downcast_ref::<TricksError>()
				.map_or(1, TricksError::exit_code);
			ExitCode::from(code)
		}
	}
}

fn run(cli: &Cli) -> Result<()> {
	let cwd = std::env::current_dir().context("Failed to get current directory")?;
	let config = load_merged_config(&cwd).context("Failed to load configuration")?;

	let translator = host_translator(&config)?;
	tracing::debug!(service = translator.name(), "path translation ready");

	let settings = Settings::new(cli.quiet, cli.debug, cli.mode(), &config);
	remap_files(&cli.files, &settings, translator.as_ref())?;

	Ok(())
}

/// Drop unknown dash-prefixed arguments; they are neither flags nor files.
fn known_args(args: Vec<OsString>) -> Vec<OsString> {
	args.into_iter()
		.enumerate()
		.filter(|(i, arg)| {
			*i == 0 || {
				let text = arg.to_string_lossy();
				!text.starts_with('-') || KNOWN_FLAGS.iter().any(|flag| *flag == text)
			}
		})
		.map(|(_, arg)| arg)
		.collect()
}

fn init_tracing(cli: &Cli) {
	let filter = if cli.quiet {
		EnvFilter::new("off")
	} else {
		let default = if cli.debug { "debug" } else { "warn" };
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(std::io::stderr().is_terminal())
		.with_target(false)
		.without_time()
		.init();
}
