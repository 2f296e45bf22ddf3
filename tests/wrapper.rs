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

use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn wrapper() -> Command {
	let mut cmd = Command::new(env!("CARGO_BIN_EXE_docker"));
	for (key, _) in std::env::vars_os() {
		if key.to_string_lossy().starts_with("DOCKER_WRAPPER_") {
			cmd.env_remove(key);
		}
	}
	cmd
}

fn cgroup_file(name: &str, contents: &str) -> PathBuf {
	let path = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
	fs::write(&path, contents).unwrap();
	path
}

#[test]
fn test_exec_failure_reported_with_logging_off() {
	let output = wrapper()
		.args(["run", "foo"])
		.env("DOCKER_WRAPPER_LOG", "off")
		.env("DOCKER_WRAPPER_DISABLE_CGROUP_PARENT", "1")
		.env("DOCKER_WRAPPER_BINARY", "/nonexistent/cgparent/docker")
		.output()
		.unwrap();
	assert!(!output.status.success());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("failed to execute `/nonexistent/cgparent/docker`"), "{stderr}");
}

#[test]
fn test_forwards_rewritten_arguments() {
	let cgroup = cgroup_file("cgroup-v1", "12:net_cls,net_prio:/other\n5:memory:/ci/job\n");
	let output = wrapper()
		.args(["-D", "run", "--rm", "foo"])
		.env("DOCKER_WRAPPER_BINARY", "echo")
		.env("DOCKER_WRAPPER_CGROUP_FILE", &cgroup)
		.output()
		.unwrap();
	assert!(output.status.success());
	insta::assert_snapshot!(String::from_utf8(output.stdout).unwrap().trim_end(), @"-D run --cgroup-parent /ci/job --rm foo");
}

#[test]
fn test_forwards_unchanged_without_memory_cgroup() {
	let cgroup = cgroup_file("cgroup-none", "1:name=systemd:/init.scope\n");
	let output = wrapper()
		.args(["run", "foo"])
		.env("DOCKER_WRAPPER_BINARY", "echo")
		.env("DOCKER_WRAPPER_CGROUP_FILE", &cgroup)
		.output()
		.unwrap();
	assert!(output.status.success());
	insta::assert_snapshot!(String::from_utf8(output.stdout).unwrap().trim_end(), @"run foo");
}
