/* Description: Subset construction: converting an NFA into an equivalent DFA.

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

//! Subset construction: converting an NFA into an equivalent DFA.

use std::collections::{BTreeMap, VecDeque};

use crate::{dfa::Dfa, nfa::Nfa, table::FxHashMap, State};

/// Convert `nfa` into a DFA recognizing the same language.
///
/// Each DFA state stands for a set of NFA states, keyed in the seen-map as a
/// sorted, deduplicated index slice so that set equality is a genuine hash
/// lookup rather than a scan over every previously seen subset. The work
/// queue holds subsets whose outgoing transitions are still to be derived.
///
/// Symbols are processed in sorted order per subset. Any stable order would
/// make repeated runs render identically; sorting additionally makes the
/// output canonical in the input's language structure, which the Brzozowski
/// minimizer's idempotence relies on.
pub fn determinize(nfa: &Nfa) -> Dfa {
  let mut dfa = Dfa::new();
  let mut mapping: FxHashMap<Box<[State]>, State> = FxHashMap::default();
  let mut queue: VecDeque<Box<[State]>> = VecDeque::new();

  let start_set: Box<[State]> = vec![nfa.start()].into_boxed_slice();
  mapping.insert(start_set.clone(), dfa.start());
  queue.push_back(start_set);

  while let Some(subset) = queue.pop_front() {
    let from = mapping[&subset];
    /* Union the member states' destination sets, per symbol. */
    let mut outgoing: BTreeMap<char, Vec<State>> = BTreeMap::new();
    for &s in subset.iter() {
      if nfa.is_accept(s) {
        dfa.set_accept(from, true);
      }
      for (sym, targets) in nfa.transitions(s) {
        outgoing.entry(sym).or_default().extend_from_slice(targets);
      }
    }
    for (sym, mut targets) in outgoing {
      targets.sort_unstable();
      targets.dedup();
      let key: Box<[State]> = targets.into_boxed_slice();
      let to = match mapping.get(&key) {
        Some(&to) => to,
        None => {
          let to = dfa.add_state(false);
          mapping.insert(key.clone(), to);
          queue.push_back(key);
          to
        },
      };
      dfa.add_transition(from, sym, to);
    }
  }
  dfa
}

#[cfg(test)]
mod test {
  use proptest::prelude::*;

  use super::*;
  use crate::{
    compile::compile,
    testing::{all_strings, arb_expr},
    thompson,
  };

  #[test]
  fn branching_literals() {
    /* abc | abg */
    let nfa = thompson::union(
      &compile(&thompson_regexp_syntax::ast::Expr::literal("abc").unwrap()),
      &compile(&thompson_regexp_syntax::ast::Expr::literal("abg").unwrap()),
    );
    let dfa = determinize(&nfa);
    for input in ["abc", "abg", "ab", "abx", "", "abcabc", "abga"] {
      assert_eq!(dfa.recognize(input), nfa.recognize(input), "{input:?}");
    }
  }

  #[test]
  fn star_collapses_to_loop() {
    let nfa = thompson::kleene_star(&thompson::character('a'));
    let dfa = determinize(&nfa);
    assert!(dfa.recognize(""));
    assert!(dfa.recognize("aaaa"));
    assert!(!dfa.recognize("aab"));
    /* One accepting start subset plus one subset for the loop body. */
    assert_eq!(dfa.states().len(), 2);
    assert_eq!(dfa.accept_states().len(), 2);
  }

  #[test]
  fn repeated_runs_render_identically() {
    let nfa = thompson::kleene_star(&thompson::concatenate(
      &thompson::union(&thompson::character('a'), &thompson::character('b')),
      &thompson::character('d'),
    ));
    assert_eq!(determinize(&nfa).to_dot(), determinize(&nfa).to_dot());
  }

  proptest! {
    #[test]
    fn determinization_preserves_language(expr in arb_expr()) {
      let nfa = compile(&expr);
      let dfa = determinize(&nfa);
      for s in all_strings(&['a', 'b'], 4) {
        prop_assert_eq!(dfa.recognize(&s), nfa.recognize(&s), "input {:?}", s);
      }
    }
  }
}
