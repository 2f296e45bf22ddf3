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

//! This package contains a wrapper around the `docker` CLI for CI jobs that run inside a resource-limited control group.
//!
//! The wrapper is installed as `docker` in a directory placed early in `PATH`. On every call it:
//!
//! - looks up the memory cgroup of the current process in `/proc/self/cgroup`,
//! - adds `--cgroup-parent <cgroup>` to `run` and `build` so that new containers share the job's limits,
//! - removes its own directory from `PATH` and executes the real `docker`.
//!
//! Settings are read from `DOCKER_WRAPPER_*` environment variables, and logging is controlled by `DOCKER_WRAPPER_LOG`.

mod argv;
mod cgroup;
mod env;
mod error;

#[doc(hidden)]
pub mod internal;

pub use argv::docker_add_cgroup_parent;
pub use argv::CgroupParentInjector;
pub use argv::CGROUP_PARENT_FLAG;
pub use argv::DEFAULT_SUBCOMMANDS;
pub use cgroup::get_memory_cgroup;
pub use cgroup::CGroup;
pub use cgroup::MEMORY_CONTROLLER;
pub use env::docker_env;
pub use env::EnvironmentMap;
pub use error::Error;
pub use error::Result;
