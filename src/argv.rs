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

use std::ffi::OsStr;
use std::ffi::OsString;

pub const CGROUP_PARENT_FLAG: &str = "--cgroup-parent";

/// Subcommands that get a `--cgroup-parent` unless configured otherwise.
pub const DEFAULT_SUBCOMMANDS: &[&str] = &["run", "build"];

/// Global options of the container CLI whose value is a separate token.
const GLOBAL_OPTIONS_WITH_VALUE: &[&str] = &[
	"-H",
	"--host",
	"-c",
	"--context",
	"--config",
	"-l",
	"--log-level",
	"--tlscacert",
	"--tlscert",
	"--tlskey",
];

/// Commands that group subcommands, as in `container run` or `image build`.
const MANAGEMENT_COMMANDS: &[&str] = &["container", "image", "builder", "buildx"];

/// Inserts `--cgroup-parent <cgroup>` after the subcommand of a container CLI invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CgroupParentInjector {
	subcommands: Vec<String>,
}

impl Default for CgroupParentInjector {
	fn default() -> Self {
		Self::new(DEFAULT_SUBCOMMANDS)
	}
}

impl CgroupParentInjector {
	pub fn new<I>(subcommands: I) -> Self
	where
		I: IntoIterator,
		I::Item: AsRef<str>,
	{
		Self {
			subcommands: subcommands.into_iter().map(|s| s.as_ref().to_string()).collect(),
		}
	}

	pub fn subcommands(&self) -> &[String] {
		&self.subcommands
	}

	/// Returns `argv` with the flag pair inserted, or `argv` unchanged when the subcommand is
	/// not in the allow-list.
	///
	/// A `--cgroup-parent` given by the caller is kept after the inserted one, so it still wins.
	pub fn inject(&self, mut argv: Vec<OsString>, cgroup: impl AsRef<OsStr>) -> Vec<OsString> {
		let Some(index) = self.insertion_point(&argv) else {
			return argv;
		};
		let flag_pair = [OsString::from(CGROUP_PARENT_FLAG), cgroup.as_ref().to_os_string()];
		argv.splice(index..index, flag_pair);
		argv
	}

	fn insertion_point(&self, argv: &[OsString]) -> Option<usize> {
		let mut tokens = argv.iter().enumerate();
		while let Some((i, token)) = tokens.next() {
			let Some(token) = token.to_str() else {
				if token.as_encoded_bytes().starts_with(b"-") {
					continue;
				}
				return None;
			};
			if token == "--" {
				return None;
			}
			if GLOBAL_OPTIONS_WITH_VALUE.contains(&token) {
				tokens.next();
				continue;
			}
			if token.starts_with('-') || MANAGEMENT_COMMANDS.contains(&token) {
				continue;
			}
			if !self.subcommands.iter().any(|s| s == token) {
				log::debug!("not adding {CGROUP_PARENT_FLAG} to `{token}`");
				return None;
			}
			return Some(i + 1);
		}
		None
	}
}

/// Inserts `--cgroup-parent <cgroup>` using the default subcommand allow-list.
///
/// # Examples
///
/// ```
/// use std::ffi::OsString;
///
/// let argv: Vec<OsString> = vec!["run".into(), "alpine".into()];
/// let got = cgparent::docker_add_cgroup_parent(argv, "/ci/job");
/// assert_eq!(got, ["run", "--cgroup-parent", "/ci/job", "alpine"]);
/// ```
pub fn docker_add_cgroup_parent(argv: Vec<OsString>, cgroup: impl AsRef<OsStr>) -> Vec<OsString> {
	CgroupParentInjector::default().inject(argv, cgroup)
}
