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

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("no line with the `memory` controller in cgroup table")]
	MemoryCgroupNotFound,

	#[error("no memory or unified cgroup entry in cgroup table")]
	CgroupNotFound,

	#[error("failed to read cgroup file `{path}`: {source}")]
	ReadCgroupFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("cgroup discovery is only supported on Linux, not `{0}`")]
	UnsupportedOs(&'static str),

	#[error("failed to locate the wrapper executable: {0}")]
	CurrentExe(#[source] std::io::Error),

	#[error("failed to execute `{binary}`: {source}")]
	Exec {
		binary: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
