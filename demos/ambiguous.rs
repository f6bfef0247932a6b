use earley_recognizer::grammar::Grammar;
use earley_recognizer::EarleyRecognizer;

fn main() {
  let g = Grammar::new("S".chars(), "a".chars(), 'S', &["S -> SS", "S -> a"])
    .unwrap();

  eprintln!("Grammar: {:#?}", g);

  let rec = EarleyRecognizer::fit(g);
  let word = "a".repeat(16);
  let chart = rec.chart(&word);

  for position in 0..chart.num_positions() {
    println!("{:>3}: {} states", position, chart.set(position).len());
  }
  println!("accepted: {}", chart.accepted());
}
