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

//! An Earley recognizer for any `Grammar`.
//!
//! Recognition builds a chart of Earley states, one state set per input
//! position, by sweeping the positions left to right and closing each one
//! under predict, scan and complete. Nullable nonterminals are stepped over
//! during prediction, so a single pass per position reaches the fixpoint.

pub mod state;

use {
  crate::{
    grammar::{Elem, Grammar},
    parsers::Recognizer,
    start_grammar::AugmentedGrammar,
    utils::WasChanged,
  },
  state::{Chart, EarleyState},
  std::sync::Arc,
};

/// Recognizes words of a fixed grammar.
///
/// The recognizer holds only the augmented view of its grammar. Every call
/// to `accept` or `chart` builds a fresh chart, so one recognizer can serve
/// any number of calls, from any number of threads.
#[derive(Clone, Debug)]
pub struct EarleyRecognizer {
  augmented: AugmentedGrammar,
}

impl EarleyRecognizer {
  /// Binds a grammar to a new recognizer.
  pub fn fit(grammar: impl Into<Arc<Grammar>>) -> Self {
    EarleyRecognizer {
      augmented: AugmentedGrammar::new(grammar.into()),
    }
  }

  pub fn grammar(&self) -> &Grammar {
    self.augmented.grammar()
  }

  /// Returns true iff `word` is derivable from the grammar's start symbol.
  pub fn accept(&self, word: &str) -> bool {
    let accepted = self.chart(word).accepted();
    log::debug!(
      "{:?} is {}",
      word,
      if accepted { "accepted" } else { "rejected" }
    );
    accepted
  }

  /// Runs recognition over `word` and returns the complete chart.
  pub fn chart(&self, word: &str) -> Chart<'_> {
    let word: Vec<char> = word.chars().collect();
    let mut chart = Chart::new(self.augmented.start_prod(), word.len());

    for position in 0..=word.len() {
      // The state set grows while it is walked; stop once the cursor
      // catches up with the last insertion.
      let mut cursor = 0;
      while let Some(state) = chart.set(position).get(cursor) {
        match state.next_elem() {
          Some(Elem::NonTerm(nt)) => {
            self.predict(&mut chart, position, state, nt)
          }
          Some(Elem::Term(term)) => {
            scan(&mut chart, &word, position, state, term)
          }
          None => complete(&mut chart, position, state),
        }
        cursor += 1;
      }

      log::debug!(
        "position {}: {} states",
        position,
        chart.set(position).len()
      );
    }

    chart
  }

  fn predict<'a>(
    &'a self,
    chart: &mut Chart<'a>,
    position: usize,
    state: EarleyState<'a>,
    nt: char,
  ) {
    for prod in self.augmented.prods_for(nt) {
      add_state(
        chart,
        position,
        EarleyState::from_prod_start(prod, position),
        "predict",
      );
    }

    if self.grammar().is_nullable(nt) {
      add_state(chart, position, state.advance(), "nullable");
    }
  }
}

fn scan<'a>(
  chart: &mut Chart<'a>,
  word: &[char],
  position: usize,
  state: EarleyState<'a>,
  term: char,
) {
  if word.get(position) == Some(&term) {
    add_state(chart, position + 1, state.scan(term), "scan");
  }
}

fn complete<'a>(
  chart: &mut Chart<'a>,
  position: usize,
  state: EarleyState<'a>,
) {
  assert!(state.is_complete(), "completing unfinished state {:?}", state);

  // The origin set may be the set being walked, so collect before inserting.
  let parents: Vec<_> = chart
    .set(state.origin())
    .awaiting(state.head())
    .collect();

  for parent in parents {
    add_state(chart, position, parent.advance(), "complete");
  }
}

fn add_state<'a>(
  chart: &mut Chart<'a>,
  position: usize,
  state: EarleyState<'a>,
  action: &str,
) {
  if let WasChanged::Changed = chart.insert(position, state) {
    log::trace!("{} at {}: {:?}", action, position, state);
  }
}

impl Recognizer for EarleyRecognizer {
  fn accept(&self, word: &str) -> bool {
    EarleyRecognizer::accept(self, word)
  }
}
