#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn tricks_cmd(dir: &Path) -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("cmaketricks").unwrap();
	cmd.current_dir(dir).env("HOME", dir).env_remove("RUST_LOG");
	cmd
}

/// Write a root config mapping `/build` and `/src` into `dir`.
fn write_config(dir: &Path) {
	let root = dir.to_string_lossy();
	fs::write(
		dir.join(".cmaketricks.toml"),
		format!(
			r#"
root = true

[[mappings]]
prefix = "/build"
replacement = "{root}"

[[mappings]]
prefix = "/src"
replacement = "/work/src"
"#
		),
	)
	.unwrap();
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	tricks_cmd(temp_dir.path())
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("precompiled headers"))
		.stdout(predicate::str::contains("Exit codes"));
}

#[test]
fn test_short_help_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	tricks_cmd(temp_dir.path())
		.args(["some.rsp", "-h"])
		.assert()
		.success()
		.stdout(predicate::str::contains("--pch"));
}

#[test]
fn test_version_flag() {
	let temp_dir = tempfile::tempdir().unwrap();
	tricks_cmd(temp_dir.path())
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("cmaketricks"));
}

#[test]
fn test_no_args_is_usage_error() {
	let temp_dir = tempfile::tempdir().unwrap();
	tricks_cmd(temp_dir.path())
		.assert()
		.code(1)
		.stderr(predicate::str::contains("usage: cmaketricks"));
}

// ============================================================================
// Translation service tests
// ============================================================================

#[cfg(unix)]
#[test]
fn test_no_translation_service() {
	let temp_dir = tempfile::tempdir().unwrap();
	let rsp = temp_dir.path().join("cl.rsp");
	fs::write(&rsp, "-I/src/include\n").unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.code(2)
		.stderr(predicate::str::contains("wine_get_dos_file_name"));

	// Nothing is touched before the service is available.
	assert_eq!(fs::read_to_string(&rsp).unwrap(), "-I/src/include\n");
}

#[cfg(unix)]
#[test]
fn test_quiet_hides_errors() {
	let temp_dir = tempfile::tempdir().unwrap();

	tricks_cmd(temp_dir.path())
		.args(["--quiet", "cl.rsp"])
		.assert()
		.code(2)
		.stderr(predicate::str::is_empty());
}

// ============================================================================
// Response file tests (Unix only - mappings use Unix paths)
// ============================================================================

#[cfg(unix)]
#[test]
fn test_rewrites_response_file_in_place() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	let rsp = temp_dir.path().join("cl.rsp");
	fs::write(
		&rsp,
		"-nologo -I/src/include \"/Fo/build/obj dir/main.obj\"\r\n/MANIFESTINPUT:/src/app.manifest /src/main.cpp -c\n",
	)
	.unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.success()
		.stdout(predicate::str::is_empty());

	let root = temp_dir.path().display();
	assert_eq!(
		fs::read_to_string(&rsp).unwrap(),
		format!(
			"\"-nologo\" \"-I/work/src/include\" \"/Fo{root}/obj dir/main.obj\" \r\n\"/MANIFESTINPUT:/work/src/app.manifest\" \"/work/src/main.cpp\" \"-c\" \n"
		)
	);
}

#[cfg(unix)]
#[test]
fn test_debug_writes_sibling_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	let rsp = temp_dir.path().join("cl.rsp");
	fs::write(&rsp, "-I/src/include\n").unwrap();

	tricks_cmd(temp_dir.path())
		.args(["--debug", "cl.rsp"])
		.assert()
		.success()
		.stderr(predicate::str::contains("token: `-I/src/include` -> `-I/work/src/include`"));

	assert_eq!(fs::read_to_string(&rsp).unwrap(), "-I/src/include\n");
	assert_eq!(
		fs::read_to_string(temp_dir.path().join("cl.rsp.out")).unwrap(),
		"\"-I/work/src/include\" \n"
	);
}

#[cfg(unix)]
#[test]
fn test_configured_debug_suffix() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(
		temp_dir.path().join(".cmaketricks.toml"),
		"root = true\ndebug-suffix = \".remapped\"\nmappings = [{ prefix = \"/\", replacement = \"/\" }]\n",
	)
	.unwrap();
	fs::write(temp_dir.path().join("cl.rsp"), "-c\n").unwrap();

	tricks_cmd(temp_dir.path())
		.args(["--debug", "cl.rsp"])
		.assert()
		.success();

	assert!(temp_dir.path().join("cl.rsp.remapped").exists());
}

#[cfg(unix)]
#[test]
fn test_unknown_flags_are_skipped() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	fs::write(temp_dir.path().join("cl.rsp"), "/src/a/b.cpp").unwrap();

	tricks_cmd(temp_dir.path())
		.args(["--frobnicate", "cl.rsp", "-x"])
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(temp_dir.path().join("cl.rsp")).unwrap(),
		"\"/work/src/a/b.cpp\" "
	);
}

#[cfg(unix)]
#[test]
fn test_forced_include_rewrites_header() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	fs::write(
		temp_dir.path().join("cmake_pch.h"),
		"#pragma once\n#include \"/src/pch.h\"\n",
	)
	.unwrap();
	fs::write(
		temp_dir.path().join("cl.rsp"),
		"-c -FI /build/cmake_pch.h\n",
	)
	.unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.success();

	let header = temp_dir.path().join("cmake_pch.h");
	assert_eq!(
		fs::read_to_string(temp_dir.path().join("cl.rsp")).unwrap(),
		format!("\"-c\" \"-FI\" \"{}\" \n", header.display())
	);
	assert_eq!(
		fs::read_to_string(&header).unwrap(),
		"#pragma once \n#include \"/work/src/pch.h\"\n"
	);
}

#[cfg(unix)]
#[test]
fn test_pch_mode() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	let header = temp_dir.path().join("cmake_pch.hxx");
	fs::write(&header, "#include \"/src/pch.h\"\n").unwrap();

	tricks_cmd(temp_dir.path())
		.args(["--pch", "cmake_pch.hxx"])
		.assert()
		.success();

	assert_eq!(
		fs::read_to_string(&header).unwrap(),
		"#include \"/work/src/pch.h\"\n"
	);
}

// ============================================================================
// Failure exit code tests
// ============================================================================

#[cfg(unix)]
#[test]
fn test_missing_file_exit_code() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());

	tricks_cmd(temp_dir.path())
		.arg("missing.rsp")
		.assert()
		.code(3)
		.stderr(predicate::str::contains("missing.rsp"));
}

#[cfg(unix)]
#[test]
fn test_rejected_path_exit_code() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	fs::write(temp_dir.path().join("cl.rsp"), "-I/opt/sdk/include\n").unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.code(4)
		.stderr(predicate::str::contains("/opt/sdk/include"));
}

#[cfg(unix)]
#[test]
fn test_first_failure_stops_the_run() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	fs::write(temp_dir.path().join("b.rsp"), "-I/src/include\n").unwrap();

	tricks_cmd(temp_dir.path())
		.args(["missing.rsp", "b.rsp"])
		.assert()
		.code(3);

	assert_eq!(
		fs::read_to_string(temp_dir.path().join("b.rsp")).unwrap(),
		"-I/src/include\n"
	);
}

#[cfg(unix)]
#[test]
fn test_oversized_token_is_generic_failure() {
	let temp_dir = tempfile::tempdir().unwrap();
	write_config(temp_dir.path());
	fs::write(temp_dir.path().join("cl.rsp"), "x".repeat(4096)).unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("token"));
}

#[test]
fn test_invalid_config() {
	let temp_dir = tempfile::tempdir().unwrap();
	fs::write(temp_dir.path().join(".cmaketricks.toml"), "invalid toml [[[").unwrap();

	tricks_cmd(temp_dir.path())
		.arg("cl.rsp")
		.assert()
		.code(1)
		.stderr(predicate::str::contains("configuration"));
}
