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

//! Reads grammars and word batches from whitespace-separated text.
//!
//! A grammar is written as:
//!
//! ```text
//! <#nonterminals> <#terminals> <#rules>
//! <nonterminal symbols>
//! <terminal symbols>
//! <rules, one token each, e.g. S->aSb or S->>
//! <start symbol>
//! ```
//!
//! A batch follows the grammar with a word count and that many words. A
//! fixture additionally follows the words with one `YES`/`NO` answer per
//! word.
//!
//! Symbols are read one character at a time, so `ab` and `a b` both declare
//! two symbols. Counts, rules and words are whole tokens. As a consequence
//! a rule cannot contain spaces here, and the empty word cannot be written.

use {
  crate::grammar::{Grammar, GrammarError},
  std::num::ParseIntError,
};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
  #[error("Input ended while reading the {0}")]
  UnexpectedEnd(&'static str),
  #[error("Expected the {what}, found {token:?}")]
  InvalidCount {
    what: &'static str,
    token: String,
    #[source]
    source: ParseIntError,
  },
  #[error("Expected YES or NO, found {0:?}")]
  NotAnAnswer(String),
  #[error(transparent)]
  Grammar(#[from] GrammarError),
}

/// A cursor over whitespace-separated input.
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
  rest: &'a str,
}

impl<'a> Tokens<'a> {
  pub fn new(text: &'a str) -> Self {
    Tokens { rest: text }
  }

  /// True if only whitespace remains.
  pub fn is_empty(&self) -> bool {
    self.rest.trim_start().is_empty()
  }

  /// Reads the next whitespace-delimited token.
  pub fn next_token(
    &mut self,
    what: &'static str,
  ) -> Result<&'a str, InputError> {
    let rest = self.rest.trim_start();
    if rest.is_empty() {
      return Err(InputError::UnexpectedEnd(what));
    }
    let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (token, rest) = rest.split_at(end);
    self.rest = rest;
    Ok(token)
  }

  /// Reads the next non-whitespace character.
  pub fn next_symbol(
    &mut self,
    what: &'static str,
  ) -> Result<char, InputError> {
    let rest = self.rest.trim_start();
    let mut chars = rest.chars();
    let symbol = chars.next().ok_or(InputError::UnexpectedEnd(what))?;
    self.rest = chars.as_str();
    Ok(symbol)
  }

  pub fn next_count(
    &mut self,
    what: &'static str,
  ) -> Result<usize, InputError> {
    let token = self.next_token(what)?;
    token.parse().map_err(|source| InputError::InvalidCount {
      what,
      token: token.to_string(),
      source,
    })
  }

  fn next_symbols(
    &mut self,
    count: usize,
    what: &'static str,
  ) -> Result<Vec<char>, InputError> {
    (0..count).map(|_| self.next_symbol(what)).collect()
  }

  fn next_tokens(
    &mut self,
    count: usize,
    what: &'static str,
  ) -> Result<Vec<&'a str>, InputError> {
    (0..count).map(|_| self.next_token(what)).collect()
  }
}

/// Reads one grammar.
pub fn parse_grammar(tokens: &mut Tokens) -> Result<Grammar, InputError> {
  let num_nonterms = tokens.next_count("nonterminal count")?;
  let num_terms = tokens.next_count("terminal count")?;
  let num_rules = tokens.next_count("rule count")?;

  let nonterminals = tokens.next_symbols(num_nonterms, "nonterminals")?;
  let terminals = tokens.next_symbols(num_terms, "terminals")?;
  let rules = tokens.next_tokens(num_rules, "rules")?;
  let start = tokens.next_symbol("start symbol")?;

  Ok(Grammar::new(nonterminals, terminals, start, rules)?)
}

/// Reads a word count followed by that many words.
pub fn parse_words(tokens: &mut Tokens) -> Result<Vec<String>, InputError> {
  let num_words = tokens.next_count("word count")?;
  Ok(
    tokens
      .next_tokens(num_words, "words")?
      .into_iter()
      .map(str::to_string)
      .collect(),
  )
}

/// A grammar together with the words to test against it.
#[derive(Clone, Debug)]
pub struct Batch {
  pub grammar: Grammar,
  pub words: Vec<String>,
}

pub fn parse_batch(text: &str) -> Result<Batch, InputError> {
  let mut tokens = Tokens::new(text);
  let grammar = parse_grammar(&mut tokens)?;
  let words = parse_words(&mut tokens)?;
  Ok(Batch { grammar, words })
}

/// A batch with the expected answer for each word.
#[derive(Clone, Debug)]
pub struct Fixture {
  pub batch: Batch,
  pub expected: Vec<bool>,
}

pub fn parse_fixture(text: &str) -> Result<Fixture, InputError> {
  let mut tokens = Tokens::new(text);
  let grammar = parse_grammar(&mut tokens)?;
  let words = parse_words(&mut tokens)?;
  let expected = tokens
    .next_tokens(words.len(), "answers")?
    .into_iter()
    .map(|answer| {
      if answer.eq_ignore_ascii_case("yes") {
        Ok(true)
      } else if answer.eq_ignore_ascii_case("no") {
        Ok(false)
      } else {
        Err(InputError::NotAnAnswer(answer.to_string()))
      }
    })
    .collect::<Result<_, _>>()?;

  Ok(Fixture {
    batch: Batch { grammar, words },
    expected,
  })
}
