use earley_recognizer::grammar::build;
use earley_recognizer::EarleyRecognizer;

fn main() {
  let g = build('S', |b| {
    b.add_nonterm('S')
      .add_terms("()".chars())
      .add_rule('S', "(S)S".chars())
      .add_rule('S', std::iter::empty());
  })
  .unwrap();

  eprintln!("Grammar: {}", g.to_pretty());

  let rec = EarleyRecognizer::fit(g);
  for word in &["", "()", "(())()", "(()", ")("] {
    println!("{:>8} {}", format!("{:?}", word), rec.accept(word));
  }
}
