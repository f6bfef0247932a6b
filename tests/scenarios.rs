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

use earley_recognizer::{
  grammar::{FormatReason, SymbolClass},
  input::{self, InputError},
  EarleyRecognizer, Grammar, GrammarError, Recognizer,
};
use std::sync::Arc;

#[test]
fn test_balanced_nesting() {
  let g = Grammar::new(vec!['S'], vec!['a', 'b'], 'S', &["S->aSb", "S->"])
    .unwrap();
  let rec = EarleyRecognizer::fit(g);
  assert!(rec.accept(""));
  assert!(rec.accept("ab"));
  assert!(rec.accept("aabb"));
  assert!(!rec.accept("a"));
  assert!(!rec.accept("ba"));
}

#[test]
fn test_balanced_parentheses() {
  let g = Grammar::new(vec!['S'], vec!['(', ')'], 'S', &["S->(S)S", "S->"])
    .unwrap();
  let rec = EarleyRecognizer::fit(g);
  assert!(rec.accept("()()"));
  assert!(!rec.accept("(()"));
}

#[test]
fn test_ambiguous_repetition() {
  let g =
    Grammar::new(vec!['S'], vec!['a'], 'S', &["S->SS", "S->a"]).unwrap();
  assert!(!g.is_nullable('S'));
  let rec = EarleyRecognizer::fit(g);
  assert!(rec.accept("aaa"));
  assert!(!rec.accept(""));
  assert!(rec.accept(&"a".repeat(30)));
}

#[test]
fn test_alphabet_violation() {
  let err =
    Grammar::new(vec!['S'], vec!['a'], 'S', &["S->a", "S->aXa"]).unwrap_err();
  assert_eq!(
    err,
    GrammarError::AlphabetViolation {
      rule: "S -> aXa".to_string(),
      symbol: 'X',
    }
  );
}

#[test]
fn test_format_errors() {
  let err = Grammar::new(vec!['S'], vec!['a'], 'S', &["->a"]).unwrap_err();
  assert!(matches!(
    err,
    GrammarError::Format {
      reason: FormatReason::MissingHead,
      ..
    }
  ));

  let err = Grammar::new(vec!['S'], vec!['a'], 'S', &["S a"]).unwrap_err();
  assert!(matches!(
    err,
    GrammarError::Format {
      reason: FormatReason::MissingSeparator,
      ..
    }
  ));
}

#[test]
fn test_undeclared_start() {
  let err = Grammar::new(vec!['S'], vec!['a'], 'T', &["S->a"]).unwrap_err();
  assert_eq!(err, GrammarError::UndeclaredStart('T'));
}

#[test]
fn test_whitespace_in_rules() {
  let g = Grammar::new(
    vec!['S'],
    vec!['a', 'b'],
    'S',
    &[" S - > a S b ", "S\t->\n"],
  )
  .unwrap();
  assert_eq!(g.num_rules(), 2);
  assert_eq!(g.rules_for('S').next().unwrap().to_string(), "S -> aSb");
  assert!(EarleyRecognizer::fit(g).accept("aabb"));
}

#[test]
fn test_grammar_queries() {
  let g = Grammar::new(
    "SA".chars(),
    "ab".chars(),
    'S',
    &["S->Ab", "A->a", "S->a", "A->"],
  )
  .unwrap();
  assert_eq!(g.start_symbol(), 'S');
  assert_eq!(g.classify('S'), SymbolClass::NonTerminal);
  assert_eq!(g.classify('b'), SymbolClass::Terminal);
  assert_eq!(g.classify('z'), SymbolClass::Unknown);
  assert!(g.is_nullable('A'));
  assert!(!g.is_nullable('S'));

  let s_rules: Vec<String> = g.rules_for('S').map(|r| r.to_string()).collect();
  assert_eq!(s_rules, vec!["S -> Ab", "S -> a"]);
  assert_eq!(g.rules_for('b').count(), 0);
  assert_eq!(g.rules_for('q').count(), 0);
}

#[test]
fn test_shared_grammar_across_threads() {
  let grammar = Arc::new(
    Grammar::new(vec!['S'], vec!['(', ')'], 'S', &["S->(S)S", "S->"]).unwrap(),
  );
  let words = ["", "()", "(()())", "())", "((", "()(())"];
  let expected = vec![true, true, true, false, false, true];

  std::thread::scope(|scope| {
    for _ in 0..4 {
      let rec = EarleyRecognizer::fit(grammar.clone());
      let expected = &expected;
      let words = &words;
      scope.spawn(move || {
        for _ in 0..10 {
          assert_eq!(&rec.accept_all(words), expected);
        }
      });
    }
  });
}

fn check_fixture(text: &str) {
  let fixture = input::parse_fixture(text).unwrap();
  let rec = EarleyRecognizer::fit(fixture.batch.grammar);
  assert_eq!(rec.accept_all(&fixture.batch.words), fixture.expected);
}

#[test]
fn test_fixtures() {
  check_fixture(include_str!("fixtures/balanced.txt"));
  check_fixture(include_str!("fixtures/arith.txt"));
  check_fixture(include_str!("fixtures/palindromes.txt"));
}

#[test]
fn test_batch_with_bad_grammar() {
  let err = input::parse_batch("1 1 1\nS\na\nS->aXa\nS\n1 a\n").unwrap_err();
  assert!(matches!(
    err,
    InputError::Grammar(GrammarError::AlphabetViolation { symbol: 'X', .. })
  ));
}
