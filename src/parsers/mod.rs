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

pub mod earley;

/// Decides membership of words in a fixed language.
pub trait Recognizer {
  /// Returns true iff `word` is in the language.
  fn accept(&self, word: &str) -> bool;

  /// Runs `accept` over each word, keeping the input order.
  fn accept_all<W: AsRef<str>>(&self, words: &[W]) -> Vec<bool> {
    words.iter().map(|word| self.accept(word.as_ref())).collect()
  }
}
