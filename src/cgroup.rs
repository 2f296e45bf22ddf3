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

use crate::Error;
use crate::Result;
use std::fmt;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

pub const MEMORY_CONTROLLER: &str = "memory";

/// One line of a `/proc/<pid>/cgroup` table: `hierarchy-id:controller-list:path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CgroupLine<'a> {
	hierarchy_id: &'a str,
	controllers: &'a str,
	path: &'a str,
}

impl<'a> CgroupLine<'a> {
	fn parse(line: &'a str) -> Option<Self> {
		let mut fields = line.splitn(3, ':');
		Some(Self {
			hierarchy_id: fields.next()?,
			controllers: fields.next()?,
			path: fields.next()?,
		})
	}

	fn has_controller(&self, name: &str) -> bool {
		self.controllers.split(',').any(|c| c == name)
	}

	fn is_unified(&self) -> bool {
		self.hierarchy_id == "0" && self.controllers.is_empty()
	}
}

/// Returns the path of the first line whose controller list contains `memory`.
///
/// # Examples
///
/// ```
/// let table = "12:net_cls,net_prio:/a\n5:cpu,memory:/b\n";
/// assert_eq!(cgparent::get_memory_cgroup(table).unwrap(), "/b");
/// assert!(cgparent::get_memory_cgroup("0::/c\n").is_err());
/// ```
pub fn get_memory_cgroup(text: &str) -> Result<&str> {
	text.lines()
		.filter_map(CgroupLine::parse)
		.find(|line| line.has_controller(MEMORY_CONTROLLER))
		.map(|line| line.path)
		.ok_or(Error::MemoryCgroupNotFound)
}

/// A cgroup path as seen from inside the current cgroup namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CGroup(PathBuf);

impl CGroup {
	/// Reads and resolves a cgroup table such as `/proc/self/cgroup`.
	pub fn read(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let file_contents = fs::read_to_string(path).map_err(|source| Error::ReadCgroupFile {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_cgroup_table(&file_contents)
	}

	/// Resolves the memory controller path, falling back to the unified (v2) entry.
	pub fn from_cgroup_table(text: &str) -> Result<Self> {
		match get_memory_cgroup(text) {
			Ok(path) => Ok(Self::from_path(path)),
			Err(Error::MemoryCgroupNotFound) => text
				.lines()
				.filter_map(CgroupLine::parse)
				.find(CgroupLine::is_unified)
				.map(|line| Self::from_path(line.path))
				.ok_or(Error::CgroupNotFound),
			Err(err) => Err(err),
		}
	}

	pub fn from_path(path: impl AsRef<Path>) -> Self {
		Self(PathBuf::from(path.as_ref()))
	}

	pub fn as_path(&self) -> &Path {
		&self.0
	}
}

impl AsRef<Path> for CGroup {
	fn as_ref(&self) -> &Path {
		&self.0
	}
}

impl fmt::Display for CGroup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.display())
	}
}
