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
  crate::{
    grammar::{Elem, Rule},
    utils::{change_iter, change_loop, WasChanged},
  },
  std::collections::BTreeSet,
};

fn is_rule_nullable(nullables: &BTreeSet<char>, rule: &Rule) -> bool {
  rule.elems().iter().all(|elem| match elem {
    Elem::Term(_) => false,
    Elem::NonTerm(nt) => nullables.contains(nt),
  })
}

/// Calculate the nullable set of a list of rules.
///
/// The nullable set is the set of non-terminals that can derive the empty
/// string. Epsilon rules seed the set; a head becomes nullable once every
/// element of one of its bodies is nullable. Each round either adds a
/// nonterminal or stops, so there are at most as many rounds as heads.
pub fn calculate_nullables(rules: &[Rule]) -> BTreeSet<char> {
  let mut nullables = BTreeSet::new();

  change_loop(|| {
    change_iter(rules, |rule| {
      if nullables.contains(&rule.head()) || !is_rule_nullable(&nullables, rule)
      {
        return WasChanged::Unchanged;
      }

      log::trace!("{:?} is nullable via {}", rule.head(), rule);
      WasChanged::from_changed(nullables.insert(rule.head()))
    })
  });

  nullables
}
