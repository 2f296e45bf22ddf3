// Copyright 2026 Octave Online LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Plumbing shared by the `docker` wrapper binary.

use crate::docker_env;
use crate::CGroup;
use crate::CgroupParentInjector;
use crate::EnvironmentMap;
use crate::Error;
use crate::Result;
use crate::DEFAULT_SUBCOMMANDS;
use clap::builder::BoolishValueParser;
use clap::Parser;
use std::env;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::process::CommandExt;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;

/// Settings of the wrapper itself.
///
/// Every command-line token belongs to the container CLI, so these are only read from the
/// environment (see [`Config::from_env`]). The long flags exist for tests.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "Runs the container CLI under the cgroup of the current process")]
pub struct Config {
	/// Name or path of the real container binary, looked up in the sanitized PATH.
	#[arg(long, env = "DOCKER_WRAPPER_BINARY", default_value = "docker")]
	pub binary: PathBuf,

	/// Subcommands that receive a --cgroup-parent flag.
	#[arg(long, env = "DOCKER_WRAPPER_SUBCOMMANDS", value_delimiter = ',', default_value = "run,build")]
	pub subcommands: Vec<String>,

	/// Cgroup table of the current process.
	#[arg(long, env = "DOCKER_WRAPPER_CGROUP_FILE", default_value = "/proc/self/cgroup")]
	pub cgroup_file: PathBuf,

	/// Forward the call without adding --cgroup-parent. Accepts 1/0, yes/no, on/off, true/false.
	#[arg(long, env = "DOCKER_WRAPPER_DISABLE_CGROUP_PARENT", value_parser = BoolishValueParser::new())]
	pub disable_cgroup_parent: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			binary: PathBuf::from("docker"),
			subcommands: DEFAULT_SUBCOMMANDS.iter().map(|s| s.to_string()).collect(),
			cgroup_file: PathBuf::from("/proc/self/cgroup"),
			disable_cgroup_parent: false,
		}
	}
}

impl Config {
	/// Builds the configuration from `DOCKER_WRAPPER_*` variables only.
	///
	/// Invalid values are logged and the defaults are used instead.
	pub fn from_env() -> Self {
		match Self::try_parse_from([env!("CARGO_PKG_NAME")]) {
			Ok(config) => config,
			Err(err) => {
				log::warn!("ignoring DOCKER_WRAPPER_* settings: {}", err.to_string().trim_end());
				Self::default()
			}
		}
	}

	pub fn injector(&self) -> CgroupParentInjector {
		CgroupParentInjector::new(&self.subcommands)
	}
}

pub fn os_check() -> Result<()> {
	if cfg!(target_os = "linux") {
		Ok(())
	} else {
		Err(Error::UnsupportedOs(env::consts::OS))
	}
}

/// Resolves the cgroup to use as `--cgroup-parent`, or `None` if injection should be skipped.
pub fn cgroup_parent(config: &Config) -> Option<CGroup> {
	if config.disable_cgroup_parent {
		log::debug!("cgroup parent injection disabled");
		return None;
	}
	let resolved = os_check().and_then(|()| CGroup::read(&config.cgroup_file));
	match resolved {
		Ok(cgroup) => {
			log::debug!("using cgroup parent {cgroup}");
			Some(cgroup)
		}
		Err(err) => {
			log::warn!("not setting --cgroup-parent: {err}");
			None
		}
	}
}

/// Path of the running wrapper as it appears in `PATH`, preferring how it was invoked over the
/// resolved executable.
///
/// A bare `argv0` is looked up in the `PATH` of `env` the way a shell would, so the directory
/// matches the `PATH` entry even when that entry is a symlink.
pub fn script_path(argv0: Option<&OsStr>, env: &EnvironmentMap) -> Result<PathBuf> {
	if let Some(argv0) = argv0.map(Path::new) {
		if argv0.components().count() > 1 {
			if argv0.is_absolute() {
				return Ok(argv0.to_path_buf());
			}
			return Ok(env::current_dir().map_err(Error::CurrentExe)?.join(argv0));
		}
		if let Some(found) = find_in_path(argv0, env) {
			return Ok(found);
		}
	}
	env::current_exe().map_err(Error::CurrentExe)
}

fn find_in_path(name: &Path, env: &EnvironmentMap) -> Option<PathBuf> {
	let search_path = env.get(OsStr::new("PATH"))?;
	env::split_paths(search_path)
		.filter(|dir| dir.is_absolute())
		.map(|dir| dir.join(name))
		.find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
	path.metadata()
		.is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

/// Replaces the current process with the real container binary. Only returns on failure.
pub fn exec(config: &Config, argv: &[OsString], env: &EnvironmentMap) -> Error {
	log::debug!("exec {} {argv:?}", config.binary.display());
	let source = Command::new(&config.binary)
		.args(argv)
		.env_clear()
		.envs(env)
		.exec();
	Error::Exec {
		binary: config.binary.clone(),
		source,
	}
}

/// Runs the wrapper with the given arguments (excluding argv\[0\]) and environment.
pub fn run(config: &Config, argv0: Option<&OsStr>, argv: Vec<OsString>, env: &EnvironmentMap) -> Result<()> {
	let argv = match cgroup_parent(config) {
		Some(cgroup) => config.injector().inject(argv, cgroup.as_path()),
		None => argv,
	};
	let env = docker_env(env, script_path(argv0, env)?);
	Err(exec(config, &argv, &env))
}
