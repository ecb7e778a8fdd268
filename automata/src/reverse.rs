/* Description: Reversal: automata accepting the mirror image of a language.

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

//! Reversal: automata accepting the mirror image of a language.
//!
//! Reversing a DFA yields an NFA — several original states may fall together
//! onto one reversed path — so both entry points produce [`Nfa`] values.
//!
//! The construction mirrors the input graph state for state. Each original
//! transition `u --x--> v` becomes `mirror(v) --x--> mirror(u)`; the mirror of
//! the original start is the unique always-accepting state, and a dedicated
//! reversed-start hub additionally receives a copy of every mirrored edge
//! leaving the mirror of an original accept state (the folded-epsilon form of
//! hub-to-accept-mirror epsilon edges). Accept states keep their own distinct
//! mirrors for the edge-destination role: routing those edges into the hub
//! instead would let a reversed path restart through an unrelated accept
//! state, accepting strings outside the reversed language. The contract is
//! `reverse(x).recognize(reverse(s)) == x.recognize(s)` for every `s`.

use crate::{dfa::Dfa, nfa::Nfa, table::FxHashMap, State};

/// Reverse an NFA's language.
pub fn reverse_nfa(nfa: &Nfa) -> Nfa {
  let mut rev = Nfa::new();
  let hub = rev.start();
  /* The reversed language contains the empty string exactly when the
   * original's does. */
  if nfa.is_accept(nfa.start()) {
    rev.set_accept(hub, true);
  }

  let order = nfa.states();
  let mut mirror: FxHashMap<State, State> = FxHashMap::default();
  for &s in &order {
    mirror.insert(s, rev.add_state(s == nfa.start()));
  }
  for &from in &order {
    for (sym, targets) in nfa.transitions(from) {
      for &to in targets {
        rev.add_transition(mirror[&to], sym, mirror[&from]);
        if nfa.is_accept(to) {
          rev.add_transition(hub, sym, mirror[&from]);
        }
      }
    }
  }
  rev
}

/// Reverse a DFA's language. The result is nondeterministic in general.
pub fn reverse_dfa(dfa: &Dfa) -> Nfa {
  let mut rev = Nfa::new();
  let hub = rev.start();
  if dfa.is_accept(dfa.start()) {
    rev.set_accept(hub, true);
  }

  let order = dfa.states();
  let mut mirror: FxHashMap<State, State> = FxHashMap::default();
  for &s in &order {
    mirror.insert(s, rev.add_state(s == dfa.start()));
  }
  for &from in &order {
    for (sym, to) in dfa.transitions(from) {
      rev.add_transition(mirror[&to], sym, mirror[&from]);
      if dfa.is_accept(to) {
        rev.add_transition(hub, sym, mirror[&from]);
      }
    }
  }
  rev
}
