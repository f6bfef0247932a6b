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

//! Earley recognition for context-free grammars over single-character
//! symbols.
//!
//! A [`Grammar`] is built once from declared alphabets, a start symbol and
//! rule strings, and is immutable afterwards. An [`EarleyRecognizer`] binds
//! a grammar and answers membership queries:
//!
//! ```
//! use earley_recognizer::{EarleyRecognizer, Grammar};
//!
//! let g = Grammar::new("S".chars(), "ab".chars(), 'S', &["S -> aSb", "S ->"])
//!   .unwrap();
//! let rec = EarleyRecognizer::fit(g);
//! assert!(rec.accept("aabb"));
//! assert!(!rec.accept("aab"));
//! ```

#[macro_use]
extern crate derivative;

pub mod grammar;
pub mod input;
pub mod parsers;
pub mod start_grammar;
pub mod state;
pub mod utils;

pub use crate::{
  grammar::{Grammar, GrammarError},
  parsers::{earley::EarleyRecognizer, Recognizer},
};
