//! Provides base data structures to represent and work with Earley states.
//!
//! An Earley state is a production state plus the chart position at which
//! its match began. Earley states are grouped into one state set per input
//! position, and the state sets together form the chart.

use {
  crate::{
    grammar::Elem,
    start_grammar::{Prod, StartNonTerminal},
    state::ProdState,
    utils::{render_doc, ToDoc, WasChanged},
  },
  std::collections::HashSet,
};

/// An Earley item: a dotted production and the position where it started.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EarleyState<'a> {
  prod_state: ProdState<'a>,
  origin: usize,
}

impl<'a> EarleyState<'a> {
  pub fn from_prod_start(prod: Prod<'a>, origin: usize) -> Self {
    EarleyState {
      prod_state: ProdState::from_start(prod),
      origin,
    }
  }

  pub fn prod_state(&self) -> &ProdState<'a> {
    &self.prod_state
  }

  pub fn origin(&self) -> usize {
    self.origin
  }

  pub fn head(&self) -> StartNonTerminal {
    self.prod_state.prod().head()
  }

  pub fn next_elem(&self) -> Option<Elem> {
    self.prod_state.next_elem()
  }

  pub fn is_complete(&self) -> bool {
    self.prod_state.is_complete()
  }

  /// Returns this state with the dot moved past its next element. Panics if
  /// the state is already complete.
  pub fn advance(&self) -> Self {
    let (_, prod_state) = self
      .prod_state
      .next_elem_state()
      .expect("advanced a complete Earley state");
    EarleyState {
      prod_state,
      origin: self.origin,
    }
  }

  /// Returns this state advanced past the terminal `term`. Panics if the
  /// next element is anything else.
  pub fn scan(&self, term: char) -> Self {
    let prod_state = self
      .prod_state
      .advance_if(Elem::Term(term))
      .unwrap_or_else(|| {
        panic!("cannot scan {:?} from Earley state {:?}", term, self)
      });
    EarleyState {
      prod_state,
      origin: self.origin,
    }
  }

  /// True if this state is waiting on the nonterminal `head`.
  pub fn awaits(&self, head: StartNonTerminal) -> bool {
    match (self.next_elem(), head) {
      (Some(Elem::NonTerm(nt)), StartNonTerminal::NTerm(completed)) => {
        nt == completed
      }
      _ => false,
    }
  }
}

impl ToDoc for EarleyState<'_> {
  fn to_doc<'a, DA: pretty::DocAllocator<'a>>(
    &self,
    da: &'a DA,
  ) -> pretty::DocBuilder<'a, DA>
  where
    DA::Doc: Clone,
  {
    da.text(format!("[{}] ", self.origin))
      .append(self.prod_state.to_doc(da))
  }
}

impl std::fmt::Debug for EarleyState<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    f.write_str(&render_doc(self, 80))
  }
}

/// The Earley states of one chart position.
///
/// States are kept in insertion order, which doubles as the work queue of
/// the position's fixpoint: a cursor walks `states` while processing appends
/// to it. `seen` gates every insertion so each distinct state is queued,
/// and therefore processed, at most once.
#[derive(Derivative)]
#[derivative(Default, Debug)]
pub struct EarleyStateSet<'a> {
  states: Vec<EarleyState<'a>>,
  #[derivative(Debug = "ignore")]
  seen: HashSet<EarleyState<'a>>,
}

impl<'a> EarleyStateSet<'a> {
  pub fn new() -> Self {
    EarleyStateSet::default()
  }

  pub fn insert(&mut self, state: EarleyState<'a>) -> WasChanged {
    if self.seen.insert(state) {
      self.states.push(state);
      WasChanged::Changed
    } else {
      WasChanged::Unchanged
    }
  }

  /// Returns the state queued at `index`, if any.
  pub fn get(&self, index: usize) -> Option<EarleyState<'a>> {
    self.states.get(index).copied()
  }

  pub fn contains(&self, state: &EarleyState<'a>) -> bool {
    self.seen.contains(state)
  }

  pub fn len(&self) -> usize {
    self.states.len()
  }

  pub fn is_empty(&self) -> bool {
    self.states.is_empty()
  }

  /// Iterates over the states in insertion order.
  pub fn states(&self) -> impl Iterator<Item = EarleyState<'a>> + '_ {
    self.states.iter().copied()
  }

  /// Returns the states whose next element is the nonterminal `head`.
  pub fn awaiting(
    &self,
    head: StartNonTerminal,
  ) -> impl Iterator<Item = EarleyState<'a>> + '_ {
    self.states().filter(move |state| state.awaits(head))
  }
}

/// All state sets for one recognition: positions `0..=n+1` for a word of
/// length `n`.
#[derive(Debug)]
pub struct Chart<'a> {
  sets: Vec<EarleyStateSet<'a>>,
  word_len: usize,
  target: EarleyState<'a>,
}

impl<'a> Chart<'a> {
  /// Creates an empty chart for a word of length `word_len`, seeded with
  /// `start_prod` at position 0.
  pub fn new(start_prod: Prod<'a>, word_len: usize) -> Self {
    let seed = EarleyState::from_prod_start(start_prod, 0);
    let mut chart = Chart {
      sets: (0..word_len + 2).map(|_| EarleyStateSet::new()).collect(),
      word_len,
      target: seed.advance(),
    };
    chart.insert(0, seed);
    chart
  }

  /// Adds `state` at `position` unless it is already there.
  pub fn insert(
    &mut self,
    position: usize,
    state: EarleyState<'a>,
  ) -> WasChanged {
    assert!(
      position < self.sets.len(),
      "chart position {} out of range 0..{}",
      position,
      self.sets.len()
    );
    assert!(
      state.origin() <= position,
      "Earley state {:?} starts after position {}",
      state,
      position
    );
    self.sets[position].insert(state)
  }

  pub fn set(&self, position: usize) -> &EarleyStateSet<'a> {
    &self.sets[position]
  }

  pub fn num_positions(&self) -> usize {
    self.sets.len()
  }

  pub fn word_len(&self) -> usize {
    self.word_len
  }

  /// True if the completed start production spans the whole word.
  pub fn accepted(&self) -> bool {
    self.sets[self.word_len].contains(&self.target)
  }

  /// The total number of states stored over all positions.
  pub fn num_states(&self) -> usize {
    self.sets.iter().map(EarleyStateSet::len).sum()
  }
}
