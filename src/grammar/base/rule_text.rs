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

//! Parsing of the `<head> -> <body>` rule notation.

use crate::grammar::errors::{FormatReason, GrammarError};

const SEPARATOR: &str = "->";

/// A rule as written, before its symbols are checked against any alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleText {
  pub head: char,
  pub body: Vec<char>,
}

impl RuleText {
  /// Parses `text` as `<head> -> <body>`. All whitespace is discarded before
  /// splitting, so `"S -> a S b"` and `"S->aSb"` are the same rule. An empty
  /// body is an epsilon rule.
  pub fn parse(text: &str) -> Result<Self, GrammarError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let format_err = |reason| GrammarError::Format {
      text: text.to_string(),
      reason,
    };

    if compact.starts_with(SEPARATOR) {
      return Err(format_err(FormatReason::MissingHead));
    }

    let mut chars = compact.chars();
    let head = chars
      .next()
      .ok_or_else(|| format_err(FormatReason::MissingHead))?;
    let rest = chars.as_str();
    let body = rest
      .strip_prefix(SEPARATOR)
      .ok_or_else(|| format_err(FormatReason::MissingSeparator))?;

    Ok(RuleText {
      head,
      body: body.chars().collect(),
    })
  }
}

impl std::str::FromStr for RuleText {
  type Err = GrammarError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    RuleText::parse(s)
  }
}

impl std::fmt::Display for RuleText {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} -> {}", self.head, self.body.iter().collect::<String>())
  }
}
