/* Description: Brzozowski minimization by double reversal-determinization.

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

//! Brzozowski minimization by double reversal-determinization.

use crate::{determinize::determinize, dfa::Dfa, nfa::Nfa, reverse};

/// Minimize `nfa` into a small equivalent DFA.
///
/// `determinize(reverse(determinize(reverse(nfa))))`: determinizing the
/// reversal of a deterministic automaton merges exactly the states that are
/// indistinguishable in the reversed language, so two rounds land on the
/// canonical machine. No partition-refinement pass exists here; correctness
/// rests entirely on the reversal and determinization building blocks.
///
/// Because the reversed-start hub is a materialized state rather than a bare
/// epsilon source, the result carries one extra start-state twin whenever the
/// language is a quotient of itself by some nonempty word (for instance
/// `a*`). The composition is the fixed point the rendering-idempotence tests
/// pin down, and re-minimizing reproduces it exactly.
pub fn minimize(nfa: &Nfa) -> Dfa {
  let halfway = determinize(&reverse::reverse_nfa(nfa));
  determinize(&reverse::reverse_dfa(&halfway))
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::*;
  use crate::{
    compile::compile,
    testing::{all_strings, arb_expr},
  };
  use thompson_regexp_syntax::ast::Expr;

  #[test]
  fn matches_manual_pipeline() {
    /* (xb|xx|xa|xcw) */
    let expr = Expr::or(
      Expr::or(Expr::literal("xb").unwrap(), Expr::literal("xx").unwrap()),
      Expr::or(Expr::literal("xa").unwrap(), Expr::literal("xcw").unwrap()),
    );
    let nfa = compile(&expr);

    let rev_1 = reverse::reverse_nfa(&nfa);
    let det_2 = determinize(&rev_1);
    let rev_3 = reverse::reverse_dfa(&det_2);
    let manual = determinize(&rev_3);

    assert_eq!(minimize(&nfa).to_dot(), manual.to_dot());
  }

  #[test]
  fn union_of_two_literals() {
    /* aa | bb: distinct one-letter prefixes, shared accepting suffix state. */
    let nfa = compile(&Expr::or(Expr::literal("aa").unwrap(), Expr::literal("bb").unwrap()));
    let min = minimize(&nfa);
    assert!(min.recognize("aa"));
    assert!(min.recognize("bb"));
    assert!(!min.recognize(""));
    assert!(!min.recognize("ab"));
    assert_eq!(min.states().len(), 4);
    assert_eq!(min.accept_states().len(), 1);
  }

  #[test]
  fn star_minimizes_to_loop() {
    let min = minimize(&compile(&Expr::star(Expr::ch('a'))));
    assert!(min.recognize(""));
    assert!(min.recognize("aaaa"));
    assert!(!min.recognize("b"));
    /* The accepting loop state plus the start twin the hub leaves behind. */
    assert_eq!(min.states().len(), 2);
  }

  #[test]
  fn sheep_language() {
    /* ba a* a! */
    let expr = Expr::concat(
      Expr::concat(Expr::literal("ba").unwrap(), Expr::star(Expr::ch('a'))),
      Expr::literal("a!").unwrap(),
    );
    let nfa = compile(&expr);
    let min = minimize(&nfa);
    for input in ["baa!", "baaa!", "baaaaaaaa!", "", "ba!", "baa", "aaa!", "baa!!"] {
      assert_eq!(min.recognize(input), nfa.recognize(input), "{input:?}");
    }
  }

  proptest! {
    #[test]
    fn minimization_preserves_language(expr in arb_expr()) {
      let nfa = compile(&expr);
      let min = minimize(&nfa);
      for s in all_strings(&['a', 'b'], 4) {
        prop_assert_eq!(min.recognize(&s), nfa.recognize(&s), "input {:?}", s);
      }
    }

    #[test]
    fn minimization_is_idempotent_by_rendering(expr in arb_expr()) {
      let once = minimize(&compile(&expr));
      /* Feed the minimal DFA back through as an NFA. */
      let mut as_nfa = crate::nfa::Nfa::new();
      let mut ids = std::collections::HashMap::new();
      for s in once.states() {
        if s == once.start() {
          if once.is_accept(s) {
            let start = as_nfa.start();
            as_nfa.set_accept(start, true);
          }
          ids.insert(s, as_nfa.start());
        } else {
          ids.insert(s, as_nfa.add_state(once.is_accept(s)));
        }
      }
      for s in once.states() {
        for (sym, target) in once.transitions(s) {
          as_nfa.add_transition(ids[&s], sym, ids[&target]);
        }
      }
      let twice = minimize(&as_nfa);
      prop_assert_eq!(once.to_dot(), twice.to_dot());
    }
  }
}
