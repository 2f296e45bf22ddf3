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

// Kept to a single test: it mutates the process environment.

use cgparent::internal::Config;
use std::env;

const DISABLE: &str = "DOCKER_WRAPPER_DISABLE_CGROUP_PARENT";

#[test]
fn test_config_from_env() {
	for (value, disabled) in [("1", true), ("yes", true), ("on", true), ("true", true), ("0", false), ("no", false), ("off", false)] {
		env::set_var(DISABLE, value);
		assert_eq!(Config::from_env().disable_cgroup_parent, disabled, "{DISABLE}={value}");
	}

	env::set_var(DISABLE, "1");
	env::set_var("DOCKER_WRAPPER_SUBCOMMANDS", "run,create");
	let config = Config::from_env();
	assert!(config.disable_cgroup_parent);
	assert_eq!(config.subcommands, ["run", "create"]);
	env::remove_var("DOCKER_WRAPPER_SUBCOMMANDS");

	env::set_var(DISABLE, "maybe");
	assert_eq!(Config::from_env(), Config::default());

	env::remove_var(DISABLE);
	assert_eq!(Config::from_env(), Config::default());
}
