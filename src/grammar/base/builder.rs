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

use {
  super::{rule_text::RuleText, Elem, Grammar, Rule},
  crate::grammar::errors::GrammarError,
  std::collections::{BTreeSet, HashSet},
};

/// Accumulates alphabets and rules, then validates them all at once in
/// `build`.
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
  nonterminals: BTreeSet<char>,
  terminals: BTreeSet<char>,
  rules: Vec<Result<RuleText, GrammarError>>,
}

impl GrammarBuilder {
  pub fn new() -> Self {
    GrammarBuilder::default()
  }

  pub fn add_nonterm(&mut self, nt: char) -> &mut Self {
    self.nonterminals.insert(nt);
    self
  }

  pub fn add_nonterms(
    &mut self,
    nts: impl IntoIterator<Item = char>,
  ) -> &mut Self {
    self.nonterminals.extend(nts);
    self
  }

  pub fn add_term(&mut self, t: char) -> &mut Self {
    self.terminals.insert(t);
    self
  }

  pub fn add_terms(&mut self, ts: impl IntoIterator<Item = char>) -> &mut Self {
    self.terminals.extend(ts);
    self
  }

  /// Adds the rule `head -> body`. An empty body is an epsilon rule.
  pub fn add_rule(
    &mut self,
    head: char,
    body: impl IntoIterator<Item = char>,
  ) -> &mut Self {
    self.rules.push(Ok(RuleText {
      head,
      body: body.into_iter().collect(),
    }));
    self
  }

  /// Adds a rule written as `"<head> -> <body>"`. A malformed string is
  /// reported by `build`.
  pub fn add_rule_text(&mut self, text: &str) -> &mut Self {
    self.rules.push(RuleText::parse(text));
    self
  }

  fn classify_body_symbol(&self, symbol: char) -> Option<Elem> {
    if self.nonterminals.contains(&symbol) {
      Some(Elem::NonTerm(symbol))
    } else if self.terminals.contains(&symbol) {
      Some(Elem::Term(symbol))
    } else {
      None
    }
  }

  fn check_rule(&self, text: &RuleText) -> Result<Rule, GrammarError> {
    if !self.nonterminals.contains(&text.head) {
      return Err(GrammarError::UndeclaredHead {
        rule: text.to_string(),
        head: text.head,
      });
    }

    let elems = text
      .body
      .iter()
      .map(|symbol| {
        self.classify_body_symbol(*symbol).ok_or_else(|| {
          GrammarError::AlphabetViolation {
            rule: text.to_string(),
            symbol: *symbol,
          }
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(Rule::new(text.head, elems))
  }

  /// Validates everything added so far and builds the grammar. The first
  /// problem found, in the order rules were added, is returned.
  pub fn build(&self, start: char) -> Result<Grammar, GrammarError> {
    for both in self.nonterminals.intersection(&self.terminals) {
      log::warn!(
        "Symbol {:?} is declared as both terminal and nonterminal; \
         treating it as a nonterminal",
        both
      );
    }

    let mut seen = HashSet::new();
    let mut rules = Vec::new();
    for text in &self.rules {
      let rule = self.check_rule(text.as_ref().map_err(Clone::clone)?)?;
      if seen.insert(rule.clone()) {
        rules.push(rule);
      } else {
        log::debug!("Dropping duplicate rule {}", rule);
      }
    }

    if !self.nonterminals.contains(&start) {
      return Err(GrammarError::UndeclaredStart(start));
    }

    Ok(Grammar::from_parts(
      self.terminals.clone(),
      self.nonterminals.clone(),
      start,
      rules,
    ))
  }
}

/// Builds a grammar using a builder function.
///
/// Example:
///
/// ```rust
/// # use earley_recognizer::grammar::build;
/// let g = build('S', |gb| {
///   gb.add_nonterm('S')
///     .add_terms("ab".chars())
///     .add_rule('S', "aSb".chars())
///     .add_rule_text("S ->");
/// })
/// .unwrap();
/// assert!(g.is_nullable('S'));
/// ```
pub fn build(
  start: char,
  build_fn: impl FnOnce(&mut GrammarBuilder),
) -> Result<Grammar, GrammarError> {
  let mut builder = GrammarBuilder::new();
  build_fn(&mut builder);
  builder.build(start)
}

#[cfg(test)]
mod test {
  use super::*;
  use crate::grammar::errors::FormatReason;
  use crate::grammar::SymbolClass;

  fn ab_builder() -> GrammarBuilder {
    let mut gb = GrammarBuilder::new();
    gb.add_nonterm('S').add_terms(vec!['a', 'b']);
    gb
  }

  #[test]
  fn test_build_simple() {
    let mut gb = ab_builder();
    gb.add_rule('S', "aSb".chars())
      .add_rule('S', std::iter::empty());
    let g = gb.build('S').unwrap();
    assert_eq!(g.start_symbol(), 'S');
    assert_eq!(g.num_rules(), 2);
    assert!(g.is_nullable('S'));
  }

  #[test]
  fn test_alphabet_violation() {
    let mut gb = ab_builder();
    gb.add_rule_text("S->aXb");
    assert_eq!(
      gb.build('S').unwrap_err(),
      GrammarError::AlphabetViolation {
        rule: "S -> aXb".to_string(),
        symbol: 'X',
      }
    );
  }

  #[test]
  fn test_undeclared_head() {
    let mut gb = ab_builder();
    gb.add_rule_text("a->b");
    assert!(matches!(
      gb.build('S').unwrap_err(),
      GrammarError::UndeclaredHead { head: 'a', .. }
    ));
  }

  #[test]
  fn test_undeclared_start() {
    let mut gb = ab_builder();
    gb.add_rule_text("S->a");
    assert_eq!(gb.build('T').unwrap_err(), GrammarError::UndeclaredStart('T'));
  }

  #[test]
  fn test_first_error_wins() {
    let mut gb = ab_builder();
    gb.add_rule_text("S a b").add_rule_text("S->Q");
    assert_eq!(
      gb.build('S').unwrap_err(),
      GrammarError::Format {
        text: "S a b".to_string(),
        reason: FormatReason::MissingSeparator,
      }
    );
  }

  #[test]
  fn test_duplicate_rules_kept_once() {
    let mut gb = ab_builder();
    gb.add_rule_text("S->ab")
      .add_rule_text("S -> a b")
      .add_rule('S', "ab".chars());
    let g = gb.build('S').unwrap();
    assert_eq!(g.num_rules(), 1);
  }

  #[test]
  fn test_overlapping_alphabets_prefer_nonterminal() {
    let mut gb = ab_builder();
    gb.add_term('S').add_rule_text("S->aS").add_rule_text("S->b");
    let g = gb.build('S').unwrap();
    assert_eq!(g.classify('S'), SymbolClass::NonTerminal);
    assert_eq!(g.rules_for('S').next().unwrap().elems()[1], Elem::NonTerm('S'));
  }

  #[test]
  fn test_build_fn() {
    let g = build('S', |gb| {
      gb.add_nonterm('S')
        .add_term('a')
        .add_rule('S', "SS".chars())
        .add_rule('S', "a".chars());
    })
    .unwrap();
    assert_eq!(g.num_rules(), 2);
    assert!(!g.is_nullable('S'));
  }
}
