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

pub mod builder;
pub mod rule_text;

use {
  crate::{
    grammar::{errors::GrammarError, nullable},
    utils::{breadth_first_search, render_doc, ToDoc},
  },
  std::collections::{BTreeMap, BTreeSet},
};

/// A single element of a rule body (terminal or non-terminal).
#[derive(Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Elem {
  Term(char),
  NonTerm(char),
}

impl Elem {
  /// If this element is a terminal, returns a `Some` value containing the
  /// terminal symbol. Returns `None` otherwise.
  pub fn as_term(&self) -> Option<char> {
    match self {
      Elem::NonTerm(_) => None,
      Elem::Term(t) => Some(*t),
    }
  }

  /// Gets an element as a nonterm. Returns a `None` value otherwise.
  pub fn as_nonterm(&self) -> Option<char> {
    match self {
      Elem::NonTerm(nt) => Some(*nt),
      Elem::Term(_) => None,
    }
  }

  /// The symbol itself, regardless of its class.
  pub fn symbol(&self) -> char {
    match self {
      Elem::Term(c) | Elem::NonTerm(c) => *c,
    }
  }
}

impl ToDoc for Elem {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    match self {
      Elem::NonTerm(nt) => {
        da.text("<").append(nt.to_doc(da)).append(da.text(">"))
      }
      Elem::Term(t) => t.to_doc(da),
    }
  }
}

impl std::fmt::Debug for Elem {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Elem::Term(term) => write!(fmt, "{}", term),
      Elem::NonTerm(nt) => write!(fmt, "<{}>", nt),
    }
  }
}

/// How a grammar classifies a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolClass {
  Terminal,
  NonTerminal,
  Unknown,
}

/// A stable index into a grammar's rule table.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RuleId(usize);

impl RuleId {
  pub fn index(self) -> usize {
    self.0
  }
}

/// A production `head -> body`. Equality and hashing are structural.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rule {
  head: char,
  elems: Vec<Elem>,
}

impl Rule {
  pub(crate) fn new(head: char, elems: Vec<Elem>) -> Self {
    Rule { head, elems }
  }

  /// Returns the head nonterminal.
  pub fn head(&self) -> char {
    self.head
  }

  /// Returns the classified body of this rule.
  pub fn elems(&self) -> &[Elem] {
    &self.elems
  }

  /// Returns the body symbols, without their classification.
  pub fn body(&self) -> impl Iterator<Item = char> + '_ {
    self.elems.iter().map(Elem::symbol)
  }

  /// Returns the element at a given index, or `None` past the end.
  pub fn element_at(&self, index: usize) -> Option<Elem> {
    self.elems.get(index).copied()
  }

  /// Returns the number of elements in the body.
  pub fn num_elements(&self) -> usize {
    self.elems.len()
  }

  pub fn is_epsilon(&self) -> bool {
    self.elems.is_empty()
  }
}

impl ToDoc for Rule {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    self
      .head
      .to_doc(da)
      .append(da.text(" =>"))
      .append(da.softline())
      .append(body_doc(&self.elems, da))
  }
}

fn body_doc<'a, DA: pretty::DocAllocator<'a>>(
  elems: &[Elem],
  da: &'a DA,
) -> pretty::DocBuilder<'a, DA>
where
  DA::Doc: Clone,
{
  if elems.is_empty() {
    da.text("ε")
  } else {
    da.intersperse(elems.iter().map(|e| e.to_doc(da)), da.softline())
  }
}

impl std::fmt::Display for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(f, "{} -> ", self.head)?;
    if self.elems.is_empty() {
      f.write_str("ε")
    } else {
      self.body().try_for_each(|c| write!(f, "{}", c))
    }
  }
}

impl std::fmt::Debug for Rule {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    std::fmt::Display::fmt(self, f)
  }
}

/// A context-free grammar over single-character symbols.
///
/// A grammar consists of
///
/// - A terminal and a nonterminal alphabet, which decide the class of every
///   symbol
/// - A start nonterminal
/// - An append-only table of rules, grouped by head in insertion order
/// - The set of nullable nonterminals, derived once at construction
///
/// Grammars are read-only once built, so a single grammar can be shared
/// between threads and recognizers.
#[derive(Clone)]
pub struct Grammar {
  terminals: BTreeSet<char>,
  nonterminals: BTreeSet<char>,
  start_symbol: char,
  rules: Vec<Rule>,
  rule_set: BTreeMap<char, Vec<RuleId>>,
  nullables: BTreeSet<char>,
}

impl std::fmt::Debug for Grammar {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    let mut dbg_struct = f.debug_struct("Grammar");
    dbg_struct.field("Terms", &self.terminals);
    dbg_struct.field("NonTerms", &self.nonterminals);
    dbg_struct.field("Start", &self.start_symbol);
    dbg_struct.field("Rules", &self.rules);
    dbg_struct.field("Nullable", &self.nullables);
    dbg_struct.finish()
  }
}

impl Grammar {
  /// Builds a grammar from explicit alphabets, a start symbol and rule
  /// strings of the form `"<head> -> <body>"`.
  ///
  /// Every head and the start symbol must be declared nonterminals, and
  /// every body symbol must be declared in one of the alphabets. Symbols
  /// declared in both alphabets are treated as nonterminals.
  pub fn new<R: AsRef<str>>(
    nonterminals: impl IntoIterator<Item = char>,
    terminals: impl IntoIterator<Item = char>,
    start: char,
    rules: impl IntoIterator<Item = R>,
  ) -> Result<Self, GrammarError> {
    let mut builder = builder::GrammarBuilder::new();
    builder.add_nonterms(nonterminals).add_terms(terminals);
    for rule in rules {
      builder.add_rule_text(rule.as_ref());
    }
    builder.build(start)
  }

  /// Assembles an already validated grammar and derives its nullable set.
  fn from_parts(
    terminals: BTreeSet<char>,
    nonterminals: BTreeSet<char>,
    start_symbol: char,
    rules: Vec<Rule>,
  ) -> Self {
    let mut rule_set: BTreeMap<char, Vec<RuleId>> = BTreeMap::new();
    for (index, rule) in rules.iter().enumerate() {
      rule_set.entry(rule.head).or_default().push(RuleId(index));
    }

    let nullables = nullable::calculate_nullables(&rules);

    let g = Grammar {
      terminals,
      nonterminals,
      start_symbol,
      rules,
      rule_set,
      nullables,
    };

    let unreachable = g.unreachable_nonterms();
    if !unreachable.is_empty() {
      log::warn!(
        "Nonterminals unreachable from {:?}: {:?}",
        g.start_symbol,
        unreachable
      );
    }

    g
  }

  /// Returns the start nonterminal for this grammar.
  pub fn start_symbol(&self) -> char {
    self.start_symbol
  }

  /// Classifies `symbol` by membership in the declared alphabets.
  pub fn classify(&self, symbol: char) -> SymbolClass {
    if self.nonterminals.contains(&symbol) {
      SymbolClass::NonTerminal
    } else if self.terminals.contains(&symbol) {
      SymbolClass::Terminal
    } else {
      SymbolClass::Unknown
    }
  }

  /// Returns true if `nt` can derive the empty string.
  pub fn is_nullable(&self, nt: char) -> bool {
    self.nullables.contains(&nt)
  }

  /// Returns the set of nonterminals that can derive the empty string.
  pub fn nullable_set(&self) -> &BTreeSet<char> {
    &self.nullables
  }

  pub fn terminals(&self) -> &BTreeSet<char> {
    &self.terminals
  }

  pub fn nonterminals(&self) -> &BTreeSet<char> {
    &self.nonterminals
  }

  /// Returns the ids of the rules headed by `head`, in insertion order. Empty
  /// if `head` has no rules.
  pub fn rule_ids_for(&self, head: char) -> &[RuleId] {
    self.rule_set.get(&head).map(Vec::as_slice).unwrap_or(&[])
  }

  /// Returns the rules headed by `head`, in insertion order.
  pub fn rules_for(&self, head: char) -> impl Iterator<Item = &Rule> + '_ {
    self.rule_ids_for(head).iter().map(move |id| self.rule(*id))
  }

  /// Gets the rule with the given id. Panics if the id came from another
  /// grammar with more rules.
  pub fn rule(&self, id: RuleId) -> &Rule {
    &self.rules[id.0]
  }

  /// Returns an iterator over all rules paired with their ids.
  pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> + '_ {
    self
      .rules
      .iter()
      .enumerate()
      .map(|(index, rule)| (RuleId(index), rule))
  }

  pub fn num_rules(&self) -> usize {
    self.rules.len()
  }

  fn reachable_nonterms(&self) -> BTreeSet<char> {
    breadth_first_search(std::iter::once(self.start_symbol), |nt| {
      self
        .rules_for(*nt)
        .flat_map(|rule| rule.elems())
        .filter_map(Elem::as_nonterm)
        .collect::<BTreeSet<_>>()
    })
  }

  fn unreachable_nonterms(&self) -> BTreeSet<char> {
    let reachable = self.reachable_nonterms();
    self
      .nonterminals
      .iter()
      .filter(|nt| !reachable.contains(nt))
      .copied()
      .collect()
  }

  pub fn to_pretty(&self) -> String {
    render_doc(self, 80)
  }
}

impl ToDoc for Grammar {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    let start_entry = da
      .text("Start =")
      .group()
      .append(da.softline())
      .append(self.start_symbol.to_doc(da));
    let rules_entry = da.text("Rules ").append(
      da.softline()
        .append(
          da.concat(self.rule_set.iter().map(|(head, ids)| {
            head
              .to_doc(da)
              .append(da.text(" =>"))
              .append(da.softline())
              .append(da.intersperse(
                ids.iter().map(|id| body_doc(self.rule(*id).elems(), da)),
                da.text(" |").append(da.softline()),
              ))
              .append(da.text(";"))
              .append(da.softline())
          }))
          .nest(2),
        )
        .braces(),
    );

    da.concat(
      vec![start_entry, rules_entry]
        .into_iter()
        .map(|doc| doc.append(da.text(",")).append(da.softline())),
    )
  }
}
