// Copyright 2018 Google LLC
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

use crate::{grammar::Elem, start_grammar::Prod, utils::ToDoc};

/// A state of a production within a parse state.
///
/// A production state keeps track of a particular production and an index
/// into the production, which is the current location of the parse state.
/// For example:
///
/// ```text
/// A => a <B> . c
/// ```
///
/// This indicates that the head is A, the production is a <B> c, and the
/// current location is just before the final c.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProdState<'a> {
  /// The production this state is part of.
  prod: Prod<'a>,

  /// The index of this production state. Must be in the range [0,
  /// self.prod.num_elements()].
  index: usize,
}

impl<'a> ProdState<'a> {
  /// Create a ProdState at the start of the given production.
  pub fn from_start(prod: Prod<'a>) -> Self {
    ProdState { prod, index: 0 }
  }

  pub fn prod(&self) -> Prod<'a> {
    self.prod
  }

  pub fn index(&self) -> usize {
    self.index
  }

  pub fn next_elem(&self) -> Option<Elem> {
    self.prod.element_at(self.index)
  }

  /// Returns the next element after the current index together with the
  /// state advanced past it. If it is at the end, then it returns `None`.
  pub fn next_elem_state(&self) -> Option<(Elem, ProdState<'a>)> {
    self.next_elem().map(|elem| {
      (
        elem,
        ProdState {
          prod: self.prod,
          index: self.index + 1,
        },
      )
    })
  }

  pub fn is_complete(&self) -> bool {
    self.prod.num_elements() == self.index
  }

  /// Return Some(state) which is this state advanced if the next element is
  /// `elem`.
  pub fn advance_if(&self, elem: Elem) -> Option<ProdState<'a>> {
    self
      .next_elem_state()
      .filter(|(e, _)| *e == elem)
      .map(|(_, next)| next)
  }
}

impl ToDoc for ProdState<'_> {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    let elems = self.prod.elems();
    let mut body = da.nil();
    for (i, elem) in elems.iter().enumerate() {
      if i == self.index {
        body = body.append(da.text("·"));
      }
      body = body.append(elem.to_doc(da));
    }
    if self.index == elems.len() {
      body = body.append(da.text("·"));
    }

    self
      .prod
      .head()
      .to_doc(da)
      .append(da.text(" => "))
      .append(body)
  }
}

impl std::fmt::Debug for ProdState<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(&crate::utils::render_doc(self, 80))
  }
}
