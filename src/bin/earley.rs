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

//! Reads a grammar and a batch of words, then prints `Yes` or `No` for each
//! word in order.

use {
  anyhow::Context,
  clap::Parser,
  earley_recognizer::{input, EarleyRecognizer, Recognizer},
  std::{
    io::{self, Read, Write},
    path::PathBuf,
  },
};

#[derive(Parser, Debug)]
#[command(about = "Earley recognizer for single-character grammars")]
struct Args {
  /// Grammar and words to read. Reads stdin when absent.
  input: Option<PathBuf>,

  /// Log to stderr; repeat for more detail.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

struct StderrLogger;

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &log::Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &log::Record) {
    if self.enabled(record.metadata()) {
      eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
    }
  }

  fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) -> anyhow::Result<()> {
  let level = match verbose {
    0 => log::LevelFilter::Warn,
    1 => log::LevelFilter::Info,
    2 => log::LevelFilter::Debug,
    _ => log::LevelFilter::Trace,
  };
  log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("{}", e))?;
  log::set_max_level(level);
  Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
  match path {
    Some(path) => std::fs::read_to_string(path)
      .with_context(|| format!("Failed to read {}", path.display())),
    None => {
      let mut text = String::new();
      io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read stdin")?;
      Ok(text)
    }
  }
}

fn main() -> anyhow::Result<()> {
  let args = Args::parse();
  init_logging(args.verbose)?;

  let text = read_input(args.input.as_ref())?;
  let batch = input::parse_batch(&text).context("Malformed input")?;
  log::info!("Grammar:\n{}", batch.grammar.to_pretty());

  let recognizer = EarleyRecognizer::fit(batch.grammar);
  let stdout = io::stdout();
  let mut out = stdout.lock();
  for accepted in recognizer.accept_all(&batch.words) {
    writeln!(out, "{}", if accepted { "Yes" } else { "No" })?;
  }
  Ok(())
}
