// Copyright 2019 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{
  io::Write,
  process::{Command, Output, Stdio},
};

fn run_earley(args: &[&str], stdin: &str) -> Output {
  let mut child = Command::new(env!("CARGO_BIN_EXE_earley"))
    .args(args)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .unwrap();
  child
    .stdin
    .take()
    .unwrap()
    .write_all(stdin.as_bytes())
    .unwrap();
  child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
  String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
  String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn test_answers_in_input_order() {
  let output = run_earley(&[], "1 2 2 S ab S->aSb S-> S 3 ab ba aabb");
  assert!(output.status.success(), "{}", stderr_of(&output));
  assert_eq!(stdout_of(&output), "Yes\nNo\nYes\n");
}

#[test]
fn test_alphabet_violation_exits_nonzero() {
  let output = run_earley(&[], "1 2 2 S ab S->aXb S-> S 1 ab");
  assert!(!output.status.success());
  assert!(stdout_of(&output).is_empty());
  let stderr = stderr_of(&output);
  assert!(stderr.contains("'X'"), "{}", stderr);
}

#[test]
fn test_truncated_input_exits_nonzero() {
  let output = run_earley(&[], "1 2 2 S ab S->aSb");
  assert!(!output.status.success());
  assert!(stderr_of(&output).contains("rules"));
}

#[test]
fn test_reads_input_path() {
  let path =
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/balanced.txt");
  let output = run_earley(&[path], "");
  assert!(output.status.success(), "{}", stderr_of(&output));
  assert_eq!(stdout_of(&output), "Yes\nYes\nNo\nNo\nNo\n");
}

#[test]
fn test_missing_input_path() {
  let output = run_earley(&["/nonexistent/grammar.txt"], "");
  assert!(!output.status.success());
  assert!(stderr_of(&output).contains("/nonexistent/grammar.txt"));
}
