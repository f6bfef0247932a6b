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

//! A read-only view of a grammar extended with a synthetic start rule
//! `<START> -> S`.
//!
//! The synthetic rule lives in the view, never in the `Grammar`, so the same
//! grammar can back any number of views at once.

use {
  crate::{
    grammar::{Elem, Grammar, RuleId},
    utils::ToDoc,
  },
  std::sync::Arc,
};

/// A nonterminal of the augmented grammar. `Start` cannot collide with any
/// declared symbol since it is not a symbol at all.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub enum StartNonTerminal {
  Start,
  NTerm(char),
}

impl ToDoc for StartNonTerminal {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    match self {
      StartNonTerminal::Start => da.text("<START>"),
      StartNonTerminal::NTerm(nt) => nt.to_doc(da),
    }
  }
}

/// Identifies a production of the augmented grammar.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub enum ProdKey {
  Start,
  Rule(RuleId),
}

/// A single production of the augmented grammar.
///
/// Productions compare and hash by key alone. Comparing productions from
/// different views of different grammars is meaningless.
#[derive(Clone, Copy, Derivative)]
#[derivative(PartialEq, Eq, Hash, Debug)]
pub struct Prod<'a> {
  key: ProdKey,
  #[derivative(PartialEq = "ignore", Hash = "ignore")]
  head: StartNonTerminal,
  #[derivative(PartialEq = "ignore", Hash = "ignore")]
  elems: &'a [Elem],
}

impl<'a> Prod<'a> {
  pub fn key(&self) -> ProdKey {
    self.key
  }

  /// Returns the head of this production.
  pub fn head(&self) -> StartNonTerminal {
    self.head
  }

  pub fn elems(&self) -> &'a [Elem] {
    self.elems
  }

  /// Returns the element at a given index, or `None` past the end.
  pub fn element_at(&self, index: usize) -> Option<Elem> {
    self.elems.get(index).copied()
  }

  /// Returns the number of elements in this production.
  pub fn num_elements(&self) -> usize {
    self.elems.len()
  }
}

/// A grammar together with its synthetic start production.
#[derive(Clone, Debug)]
pub struct AugmentedGrammar {
  grammar: Arc<Grammar>,
  start_body: [Elem; 1],
}

impl AugmentedGrammar {
  pub fn new(grammar: Arc<Grammar>) -> Self {
    let start_body = [Elem::NonTerm(grammar.start_symbol())];
    AugmentedGrammar {
      grammar,
      start_body,
    }
  }

  /// Returns the underlying grammar.
  pub fn grammar(&self) -> &Grammar {
    &self.grammar
  }

  /// Returns the production `<START> -> S`.
  pub fn start_prod(&self) -> Prod<'_> {
    Prod {
      key: ProdKey::Start,
      head: StartNonTerminal::Start,
      elems: &self.start_body,
    }
  }

  pub fn prod(&self, key: ProdKey) -> Prod<'_> {
    match key {
      ProdKey::Start => self.start_prod(),
      ProdKey::Rule(id) => {
        let rule = self.grammar.rule(id);
        Prod {
          key,
          head: StartNonTerminal::NTerm(rule.head()),
          elems: rule.elems(),
        }
      }
    }
  }

  /// Returns the productions headed by `nt`, in the grammar's rule order.
  pub fn prods_for(&self, nt: char) -> impl Iterator<Item = Prod<'_>> + '_ {
    self
      .grammar
      .rule_ids_for(nt)
      .iter()
      .map(move |id| self.prod(ProdKey::Rule(*id)))
  }

  pub fn is_nullable(&self, nt: StartNonTerminal) -> bool {
    match nt {
      StartNonTerminal::Start => {
        self.grammar.is_nullable(self.grammar.start_symbol())
      }
      StartNonTerminal::NTerm(nt) => self.grammar.is_nullable(nt),
    }
  }

  /// The number of productions, counting the start production.
  pub fn num_prods(&self) -> usize {
    self.grammar.num_rules() + 1
  }
}
