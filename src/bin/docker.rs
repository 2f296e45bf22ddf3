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

use cgparent::internal;
use cgparent::internal::Config;
use cgparent::EnvironmentMap;
use std::process::ExitCode;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::new().filter_or("DOCKER_WRAPPER_LOG", "warn")).init();
	let config = Config::from_env();
	let mut args = std::env::args_os();
	let argv0 = args.next();
	let env: EnvironmentMap = std::env::vars_os().collect();
	match internal::run(&config, argv0.as_deref(), args.collect(), &env) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("docker wrapper: {err}");
			ExitCode::FAILURE
		}
	}
}
