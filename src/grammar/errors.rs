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

/// Why a rule string could not be split into a head and a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatReason {
  #[error("missing head symbol")]
  MissingHead,
  #[error("missing `->` separator after the head symbol")]
  MissingSeparator,
}

/// Errors reported while constructing a `Grammar`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
  #[error("malformed rule {text:?}: {reason}")]
  Format { text: String, reason: FormatReason },

  #[error(
    "rule `{rule}` uses {symbol:?}, which is neither a declared terminal \
     nor a declared nonterminal"
  )]
  AlphabetViolation { rule: String, symbol: char },

  #[error(
    "rule `{rule}` has head {head:?}, which is not a declared nonterminal"
  )]
  UndeclaredHead { rule: String, head: char },

  #[error("start symbol {0:?} is not a declared nonterminal")]
  UndeclaredStart(char),
}
