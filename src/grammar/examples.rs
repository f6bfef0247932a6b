//! Small grammars used by tests and demos.

use crate::grammar::{build, Grammar};

/// `S -> aSb | ε`: the language aⁿbⁿ.
pub fn make_balanced() -> Grammar {
  Grammar::new(vec!['S'], vec!['a', 'b'], 'S', vec!["S->aSb", "S->"])
    .expect("balanced grammar is well-formed")
}

/// `S -> (S)S | ε`: balanced parentheses.
pub fn make_parens() -> Grammar {
  Grammar::new(vec!['S'], vec!['(', ')'], 'S', vec!["S->(S)S", "S->"])
    .expect("parens grammar is well-formed")
}

/// `S -> SS | a`: every non-empty string of a's, with exponentially many
/// derivations.
pub fn make_ambiguous() -> Grammar {
  Grammar::new(vec!['S'], vec!['a'], 'S', vec!["S->SS", "S->a"])
    .expect("ambiguous grammar is well-formed")
}

/// `S -> Sa | b`: left recursion, the language ba*.
pub fn make_left_recursive() -> Grammar {
  Grammar::new(vec!['S'], vec!['a', 'b'], 'S', vec!["S->Sa", "S->b"])
    .expect("left recursive grammar is well-formed")
}

/// Arithmetic over a single digit with the usual precedence.
pub fn make_arith() -> Grammar {
  build('E', |gb| {
    gb.add_nonterms("ETF".chars())
      .add_terms("1+*()".chars())
      .add_rule_text("E -> E + T")
      .add_rule_text("E -> T")
      .add_rule_text("T -> T * F")
      .add_rule_text("T -> F")
      .add_rule_text("F -> ( E )")
      .add_rule_text("F -> 1");
  })
  .expect("arith grammar is well-formed")
}

/// Chains of nullable nonterminals with terminals between them, including an
/// epsilon cycle `A -> B`, `B -> A`.
pub fn make_nullable_chain() -> Grammar {
  build('S', |gb| {
    gb.add_nonterms("SABC".chars())
      .add_terms("xy".chars())
      .add_rule_text("S -> A x B C y A")
      .add_rule_text("A -> B")
      .add_rule_text("B -> A")
      .add_rule_text("B -> ")
      .add_rule_text("B -> y")
      .add_rule_text("C -> A B");
  })
  .expect("nullable chain grammar is well-formed")
}
