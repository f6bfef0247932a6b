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

#![allow(dead_code)]

use earley_recognizer::{
  grammar::{Elem, Grammar},
  utils::{change_loop, WasChanged},
  Recognizer,
};
use std::collections::{BTreeMap, BTreeSet};

/// A recognizer that shares no code with the chart engine.
///
/// For a fixed word it computes, for every nonterminal, the set of spans
/// `(i, j)` such that the nonterminal derives `word[i..j]`, by iterating the
/// rules to a least fixpoint. Epsilon rules and cycles need no special case.
pub struct SpanOracle<'g> {
  grammar: &'g Grammar,
}

impl<'g> SpanOracle<'g> {
  pub fn new(grammar: &'g Grammar) -> Self {
    SpanOracle { grammar }
  }

  fn spans(&self, word: &[char]) -> BTreeMap<char, BTreeSet<(usize, usize)>> {
    let mut spans: BTreeMap<char, BTreeSet<(usize, usize)>> = BTreeMap::new();

    change_loop(|| {
      let mut changed = WasChanged::Unchanged;
      for (_, rule) in self.grammar.rules() {
        for start in 0..=word.len() {
          let ends = body_ends(&spans, word, rule.elems(), start);
          let head_spans = spans.entry(rule.head()).or_default();
          for end in ends {
            changed.merge(WasChanged::from_changed(
              head_spans.insert((start, end)),
            ));
          }
        }
      }
      changed
    });

    spans
  }
}

/// The positions where `elems` can end when matched from `start`.
fn body_ends(
  spans: &BTreeMap<char, BTreeSet<(usize, usize)>>,
  word: &[char],
  elems: &[Elem],
  start: usize,
) -> BTreeSet<usize> {
  let mut ends: BTreeSet<usize> = vec![start].into_iter().collect();
  for elem in elems {
    let mut next = BTreeSet::new();
    for &pos in &ends {
      match elem {
        Elem::Term(t) => {
          if word.get(pos) == Some(t) {
            next.insert(pos + 1);
          }
        }
        Elem::NonTerm(nt) => {
          if let Some(nt_spans) = spans.get(nt) {
            next.extend(
              nt_spans
                .iter()
                .filter(|(i, _)| *i == pos)
                .map(|(_, j)| *j),
            );
          }
        }
      }
    }
    ends = next;
  }
  ends
}

impl Recognizer for SpanOracle<'_> {
  fn accept(&self, word: &str) -> bool {
    let word: Vec<char> = word.chars().collect();
    self
      .spans(&word)
      .get(&self.grammar.start_symbol())
      .map_or(false, |s| s.contains(&(0, word.len())))
  }
}

/// Every word over `alphabet` with at most `max_len` symbols, shortest
/// first.
pub fn words_up_to(alphabet: &[char], max_len: usize) -> Vec<String> {
  let mut words = vec![String::new()];
  let mut frontier = vec![String::new()];
  for _ in 0..max_len {
    frontier = frontier
      .iter()
      .flat_map(|prefix| {
        alphabet.iter().map(move |c| {
          let mut word = prefix.clone();
          word.push(*c);
          word
        })
      })
      .collect();
    words.extend(frontier.iter().cloned());
  }
  words
}
