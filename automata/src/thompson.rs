/* Description: Thompson construction operators for composing automata.

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

//! Thompson construction operators for composing automata.
//!
//! Every operator is non-destructive: operands are cloned into a fresh output
//! arena before any mutation, so callers keep working automata. Epsilon edges
//! are folded away eagerly via [`Nfa::add_epsilon`]; each operand is absorbed
//! whole before any merge touches it, which keeps merged-from states frozen as
//! that operation requires.

use crate::nfa::Nfa;

/// An automaton recognizing exactly the one-character string `sym`: a fresh
/// non-accepting start with a single transition to a fresh accepting state.
pub fn character(sym: char) -> Nfa {
  let mut nfa = Nfa::new();
  let accept = nfa.add_state(true);
  nfa.add_transition(nfa.start(), sym, accept);
  nfa
}

/// An automaton recognizing `xy` for every `x` in `first`'s language and `y`
/// in `second`'s language.
///
/// Every accept state of the cloned `first` is demoted to non-accepting and
/// epsilon-merged with the cloned `second`'s start state.
pub fn concatenate(first: &Nfa, second: &Nfa) -> Nfa {
  let mut out = first.clone();
  let first_accepts = out.accept_states();
  let second_start = out.absorb(second);
  for s in first_accepts {
    out.set_accept(s, false);
    out.add_epsilon(s, second_start);
  }
  out
}

/// An automaton recognizing every string either operand recognizes.
///
/// A fresh start state epsilon-merges both operand starts; then every accept
/// state of the combined automaton (covering both branches, and the new start
/// itself when an operand accepts the empty string) is demoted and
/// epsilon-merged with a fresh accepting end state.
pub fn union(first: &Nfa, second: &Nfa) -> Nfa {
  let mut out = Nfa::new();
  let first_start = out.absorb(first);
  let second_start = out.absorb(second);
  let start = out.start();
  out.add_epsilon(start, first_start);
  out.add_epsilon(start, second_start);

  let accepts = out.accept_states();
  let end = out.add_state(true);
  for s in accepts {
    out.set_accept(s, false);
    out.add_epsilon(s, end);
  }
  out
}

/// An automaton recognizing zero or more repetitions of `inner`'s language,
/// including the empty string.
///
/// The result is rooted at a fresh accepting hub which epsilon-merges the
/// cloned operand's start; every accept state of the cloned operand
/// epsilon-merges the hub back in, so finishing one repetition re-arms the
/// next.
pub fn kleene_star(inner: &Nfa) -> Nfa {
  let mut out = Nfa::new();
  let hub = out.start();
  out.set_accept(hub, true);

  let inner_start = out.absorb(inner);
  let inner_accepts: Vec<_> = out
    .reachable_from(inner_start)
    .into_iter()
    .filter(|&s| out.is_accept(s))
    .collect();

  out.add_epsilon(hub, inner_start);
  /* The hub is frozen from here on: accept states copy its loop-back edges. */
  for s in inner_accepts {
    out.add_epsilon(s, hub);
  }
  out
}
