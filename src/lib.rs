/* Description: Regular expression matching from first principles, via explicit finite-state automata.

Copyright (C) 2025 Danny McClanahan <dmcC2@hypnicjerk.ai>
SPDX-License-Identifier: GPL-3.0-or-later

This file is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as
published by the Free Software Foundation; either version 3 of the
License, or (at your option) any later version.

This file is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>. */

#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]

//! Regular expression matching from first principles, via explicit
//! finite-state automata.
//!
//! Expressions are assembled programmatically (there is no pattern-string
//! parser), compiled to an NFA by Thompson's construction, and from there may
//! be determinized, reversed, or minimized via Brzozowski's double-reversal
//! algorithm.
//!
//! ```
//! use thompson_regexp::{Expr, Pattern};
//!
//! let pattern = Pattern::new(Expr::concat(Expr::star(Expr::ch('a')), Expr::ch('b')));
//! assert!(pattern.matches("aaab"));
//! assert!(!pattern.matches("ba"));
//! ```

use displaydoc::Display;
use thiserror::Error;

pub use thompson_regexp_automata as automata;
pub use thompson_regexp_syntax as syntax;

pub use crate::{
  automata::{
    compile::compile,
    determinize::determinize,
    dfa::Dfa,
    minimize::minimize,
    nfa::Nfa,
    reverse::{reverse_dfa, reverse_nfa},
  },
  syntax::ast::{Expr, ExprError},
};

/// Top-level errors for the pattern surface.
#[derive(Debug, Display, Error, Copy, Clone, PartialEq, Eq)]
pub enum PatternError {
  /// invalid expression: {0}
  Expr(#[from] ExprError),
}

/// An expression tree together with its compiled automaton.
#[derive(Debug)]
pub struct Pattern {
  expr: Expr,
  nfa: Nfa,
}

impl Pattern {
  /// Compile `expr` into a matchable pattern.
  pub fn new(expr: Expr) -> Self {
    let nfa = compile(&expr);
    Self { expr, nfa }
  }

  /// A pattern matching exactly the (nonempty) string `s`.
  pub fn literal(s: impl Into<String>) -> Result<Self, PatternError> {
    Ok(Self::new(Expr::literal(s)?))
  }

  pub fn expr(&self) -> &Expr { &self.expr }

  pub fn nfa(&self) -> &Nfa { &self.nfa }

  /// Test `text` for membership in the pattern's language.
  pub fn matches(&self, text: &str) -> bool { self.nfa.recognize(text) }

  /// Graphviz rendering of the compiled NFA.
  pub fn to_dot(&self) -> String { self.nfa.to_dot() }

  /// An equivalent deterministic automaton.
  pub fn determinized(&self) -> Dfa { determinize(&self.nfa) }

  /// The Brzozowski-minimized deterministic automaton.
  pub fn minimized(&self) -> Dfa { minimize(&self.nfa) }
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::*;

  fn lit(s: &str) -> Expr { Expr::literal(s).unwrap() }

  #[test]
  fn literal_string() {
    let pattern = Pattern::literal("abcd").unwrap();
    assert!(pattern.matches("abcd"));
    assert!(!pattern.matches("abc"));
    assert!(!pattern.matches("abcde"));
  }

  #[test]
  fn empty_literal_is_an_error() {
    assert_eq!(Pattern::literal("").unwrap_err(), PatternError::Expr(ExprError::EmptyLiteral));
  }

  #[test]
  fn plus_of_char() {
    let pattern = Pattern::new(Expr::plus(Expr::ch('a')));
    assert!(pattern.matches("a"));
    assert!(pattern.matches("aaaaa"));
    assert!(!pattern.matches(""));
    assert!(!pattern.matches("aaaaab"));
  }

  #[test]
  fn star_of_char() {
    let pattern = Pattern::new(Expr::star(Expr::ch('a')));
    assert!(pattern.matches(""));
    assert!(pattern.matches("a"));
    assert!(pattern.matches("aaa"));
    assert!(!pattern.matches("b"));
    assert!(!pattern.matches("aaaab"));
  }

  #[test]
  fn star_then_literal() {
    let pattern = Pattern::new(Expr::concat(Expr::star(Expr::ch('a')), lit("b")));
    assert!(pattern.matches("b"));
    assert!(pattern.matches("ab"));
    assert!(pattern.matches("aab"));
    assert!(pattern.matches("aaaaaaaaaaaaab"));
    assert!(!pattern.matches(""));
    assert!(!pattern.matches("a"));
    assert!(!pattern.matches("aaabx"));
    assert!(!pattern.matches("ba"));
  }

  #[test]
  fn union_of_literals() {
    let pattern = Pattern::new(Expr::or(lit("aa"), lit("bb")));
    assert!(pattern.matches("aa"));
    assert!(pattern.matches("bb"));
    assert!(!pattern.matches(""));
    assert!(!pattern.matches("a"));
    assert!(!pattern.matches("aaa"));
    assert!(!pattern.matches("bbb"));
  }

  #[test]
  fn union_of_longer_literals() {
    let pattern = Pattern::new(Expr::or(lit("abc"), lit("abg")));
    assert!(pattern.matches("abc"));
    assert!(pattern.matches("abg"));
    assert!(!pattern.matches("abx"));
    assert!(!pattern.matches(""));
    assert!(!pattern.matches("abcabc"));
    assert!(!pattern.matches("abga"));
  }

  #[test]
  fn union_of_two_starred_branches() {
    /* a*b | b*a */
    let pattern = Pattern::new(Expr::or(
      Expr::concat(Expr::star(Expr::ch('a')), lit("b")),
      Expr::concat(Expr::star(Expr::ch('b')), lit("a")),
    ));
    for good in ["b", "ab", "a", "ba", "aab", "bba", "aaaaaaaaaaab", "bbbbbbbbbbba"] {
      assert!(pattern.matches(good), "{good:?}");
    }
    for bad in ["", "x", "abab", "baba"] {
      assert!(!pattern.matches(bad), "{bad:?}");
    }
  }

  #[test]
  fn sheep_language() {
    /* ba a* a! */
    let pattern = Pattern::new(Expr::concat(
      Expr::concat(lit("ba"), Expr::star(Expr::ch('a'))),
      lit("a!"),
    ));
    assert!(pattern.matches("baaa!"));
    assert!(pattern.matches("baaaaaaaaa!"));
    assert!(pattern.matches("baa!"));
    assert!(!pattern.matches("baa"));
    assert!(!pattern.matches("baaa!!"));
    assert!(!pattern.matches("aaa!"));
    assert!(!pattern.matches(""));
  }

  #[test]
  fn starred_compound() {
    /* ((ab|ac)d+)* */
    let pattern = Pattern::new(Expr::star(Expr::concat(
      Expr::or(lit("ab"), lit("ac")),
      Expr::plus(Expr::ch('d')),
    )));
    for good in ["", "abd", "acd", "abdabddabddd", "abdacdabddacddacddddddddddd"] {
      assert!(pattern.matches(good), "{good:?}");
    }
    for bad in ["ab", "abcd!!", "acdabdac!"] {
      assert!(!pattern.matches(bad), "{bad:?}");
    }
  }

  #[test]
  fn determinized_and_minimized_agree() {
    let pattern = Pattern::new(Expr::star(Expr::concat(
      Expr::or(lit("ab"), lit("ac")),
      Expr::plus(Expr::ch('d')),
    )));
    let dfa = pattern.determinized();
    let min = pattern.minimized();
    for input in ["", "abd", "acd", "abdacdd", "ab", "ad", "abdd", "abda"] {
      assert_eq!(dfa.recognize(input), pattern.matches(input), "{input:?}");
      assert_eq!(min.recognize(input), pattern.matches(input), "{input:?}");
    }
  }

  #[test]
  fn identical_constructions_render_identically() {
    let build = || Pattern::new(Expr::or(Expr::plus(Expr::ch('a')), lit("ab")));
    assert_eq!(build().to_dot(), build().to_dot());
  }

  /* Language-level closure properties, checked by exhaustive enumeration over
   * short strings. */

  fn arb_expr() -> impl Strategy<Value=Expr> {
    let leaf = prop_oneof![
      prop::sample::select(vec!['a', 'b']).prop_map(Expr::ch),
      "[ab]{1,3}".prop_map(|s| Expr::literal(s).unwrap()),
    ];
    leaf.prop_recursive(3, 16, 2, |inner| {
      prop_oneof![
        (inner.clone(), inner.clone()).prop_map(|(x, y)| Expr::concat(x, y)),
        (inner.clone(), inner.clone()).prop_map(|(x, y)| Expr::or(x, y)),
        inner.prop_map(Expr::star),
      ]
    })
  }

  fn all_strings(max_len: usize) -> Vec<String> {
    let alphabet = ['a', 'b'];
    let mut all: Vec<String> = vec![String::new()];
    let mut last_round: Vec<String> = vec![String::new()];
    for _ in 0..max_len {
      let mut next_round: Vec<String> = Vec::new();
      for prefix in &last_round {
        for &c in &alphabet {
          let mut s = prefix.clone();
          s.push(c);
          next_round.push(s);
        }
      }
      all.extend(next_round.iter().cloned());
      last_round = next_round;
    }
    all
  }

  proptest! {
    #[test]
    fn union_is_language_union(x in arb_expr(), y in arb_expr()) {
      let a = Pattern::new(x.clone());
      let b = Pattern::new(y.clone());
      let joined = Pattern::new(Expr::or(x, y));
      for s in all_strings(4) {
        prop_assert_eq!(joined.matches(&s), a.matches(&s) || b.matches(&s), "input {:?}", s);
      }
    }

    #[test]
    fn concatenation_is_language_product(x in arb_expr(), y in arb_expr()) {
      let a = Pattern::new(x.clone());
      let b = Pattern::new(y.clone());
      let joined = Pattern::new(Expr::concat(x, y));
      for s in all_strings(4) {
        let split_exists = (0..=s.len()).any(|i| a.matches(&s[..i]) && b.matches(&s[i..]));
        prop_assert_eq!(joined.matches(&s), split_exists, "input {:?}", s);
      }
    }

    #[test]
    fn star_is_finite_self_concatenation(x in arb_expr()) {
      let a = Pattern::new(x.clone());
      let starred = Pattern::new(Expr::star(x));
      prop_assert!(starred.matches(""));
      for s in all_strings(4) {
        /* decomposable[i]: the prefix of length i splits into words of a's
         * language. */
        let mut decomposable = vec![false; s.len()+1];
        decomposable[0] = true;
        for end in 1..=s.len() {
          decomposable[end] =
            (0..end).any(|mid| decomposable[mid] && a.matches(&s[mid..end]));
        }
        prop_assert_eq!(starred.matches(&s), decomposable[s.len()], "input {:?}", s);
      }
    }
  }
}
