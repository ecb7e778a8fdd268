/* Description: Deterministic finite-state automaton over an arena of states.

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

//! Deterministic finite-state automaton over an arena of states.

use std::collections::VecDeque;

use crate::{
  dot::DotBuilder,
  table::{FxHashMap, FxHashSet, FxIndexMap},
  State,
};

#[derive(Debug, Clone, Default)]
struct Node {
  accept: bool,
  trans: FxIndexMap<char, State>,
}

/// A deterministic finite-state automaton: one symbol leads to at most one
/// successor state.
///
/// Same arena layout as [`crate::nfa::Nfa`], with single-target transition
/// tables. Correct builders (the subset construction) never write the same
/// symbol twice on one state; if one does, the last write wins.
#[derive(Debug)]
pub struct Dfa {
  states: Vec<Node>,
  start: State,
}

impl Default for Dfa {
  fn default() -> Self { Self::new() }
}

impl Dfa {
  /// Create an automaton holding a single non-accepting start state.
  pub fn new() -> Self {
    Self {
      states: vec![Node::default()],
      start: State(0),
    }
  }

  pub fn start(&self) -> State { self.start }

  /// Allocate a fresh state with no transitions.
  pub fn add_state(&mut self, accept: bool) -> State {
    let id = State(self.states.len() as u32);
    self.states.push(Node {
      accept,
      trans: FxIndexMap::default(),
    });
    id
  }

  pub fn is_accept(&self, s: State) -> bool { self.states[s.idx()].accept }

  pub fn set_accept(&mut self, s: State, accept: bool) { self.states[s.idx()].accept = accept; }

  /// Add (or overwrite) the outgoing transition on `sym`.
  pub fn add_transition(&mut self, from: State, sym: char, to: State) {
    assert!(to.idx() < self.states.len(), "transition target out of bounds");
    self.states[from.idx()].trans.insert(sym, to);
  }

  /// The state reached from `s` on `sym`, if any.
  pub fn target(&self, s: State, sym: char) -> Option<State> {
    self.states[s.idx()].trans.get(&sym).copied()
  }

  /// All transitions leaving `s`, in insertion order.
  pub fn transitions(&self, s: State) -> impl Iterator<Item=(char, State)>+'_ {
    self.states[s.idx()]
      .trans
      .iter()
      .map(|(sym, target)| (*sym, *target))
  }

  /// All states reachable from the start state, in breadth-first order.
  pub fn states(&self) -> Vec<State> {
    let mut order: Vec<State> = Vec::new();
    let mut seen: FxHashSet<State> = FxHashSet::default();
    let mut queue: VecDeque<State> = VecDeque::new();
    seen.insert(self.start);
    queue.push_back(self.start);
    while let Some(s) = queue.pop_front() {
      order.push(s);
      for (_, target) in self.transitions(s) {
        if seen.insert(target) {
          queue.push_back(target);
        }
      }
    }
    order
  }

  /// The reachable states with their accept flag set.
  pub fn accept_states(&self) -> Vec<State> {
    self
      .states()
      .into_iter()
      .filter(|&s| self.is_accept(s))
      .collect()
  }

  /// Test whether `input` is in the automaton's language.
  ///
  /// Same (position, state) search shape as the nondeterministic flavor; here
  /// at most one pair is in flight per position, so the "queue" never holds
  /// more than one element.
  pub fn recognize(&self, input: &str) -> bool {
    let symbols: Vec<char> = input.chars().collect();
    let mut queue: VecDeque<(usize, State)> = VecDeque::new();
    queue.push_back((0, self.start));
    while let Some((position, s)) = queue.pop_front() {
      if position == symbols.len() && self.is_accept(s) {
        return true;
      }
      if position < symbols.len() {
        if let Some(target) = self.target(s, symbols[position]) {
          queue.push_back((position+1, target));
        }
      }
    }
    false
  }

  /// Render the automaton in Graphviz dot format, numbering states in
  /// breadth-first order from the start state.
  pub fn to_dot(&self) -> String {
    let order = self.states();
    let numbers: FxHashMap<State, usize> = order
      .iter()
      .enumerate()
      .map(|(n, &s)| (s, n))
      .collect();
    let mut dot = DotBuilder::new();
    for (n, &s) in order.iter().enumerate() {
      if self.is_accept(s) {
        dot.accept(n);
      }
      for (sym, target) in self.transitions(s) {
        dot.edge(n, sym, numbers[&target]);
      }
    }
    dot.finish()
  }
}

/// Deep copy: a structurally isomorphic automaton sharing no state identities
/// with the original, compacted to the reachable subgraph.
impl Clone for Dfa {
  fn clone(&self) -> Self {
    let mut out = Dfa {
      states: Vec::new(),
      start: State(0),
    };
    let mut mapping: FxHashMap<State, State> = FxHashMap::default();
    let mut queue: VecDeque<State> = VecDeque::new();
    let start = out.add_state(self.is_accept(self.start));
    mapping.insert(self.start, start);
    queue.push_back(self.start);
    while let Some(s) = queue.pop_front() {
      let image = mapping[&s];
      for (sym, target) in self.transitions(s) {
        let target_image = match mapping.get(&target) {
          Some(&t) => t,
          None => {
            let t = out.add_state(self.is_accept(target));
            mapping.insert(target, t);
            queue.push_back(target);
            t
          },
        };
        out.add_transition(image, sym, target_image);
      }
    }
    out.start = start;
    out
  }
}
