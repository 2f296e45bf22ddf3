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

use std::collections::HashMap;
use std::env;
use std::ffi::OsStr;
use std::ffi::OsString;
use std::path::Path;

pub type EnvironmentMap = HashMap<OsString, OsString>;

const PATH: &str = "PATH";

/// Returns a copy of `env` in which `PATH` no longer contains the directory of `script_path`.
///
/// Without this, looking up the container binary by name would find the wrapper again. If no
/// directory is left, `PATH` is dropped from the copy.
pub fn docker_env(env: &EnvironmentMap, script_path: impl AsRef<Path>) -> EnvironmentMap {
	let mut env = env.clone();
	let Some(script_dir) = script_path.as_ref().parent() else {
		return env;
	};
	let Some(search_path) = env.remove(OsStr::new(PATH)) else {
		return env;
	};
	let kept: Vec<_> = env::split_paths(&search_path)
		.filter(|dir| dir.as_path() != script_dir)
		.collect();
	if kept.is_empty() {
		log::debug!("dropping PATH, it only contained {}", script_dir.display());
		return env;
	}
	match env::join_paths(kept) {
		Ok(joined) => {
			env.insert(PATH.into(), joined);
		}
		Err(err) => {
			log::warn!("keeping PATH unchanged: {err}");
			env.insert(PATH.into(), search_path);
		}
	}
	env
}
