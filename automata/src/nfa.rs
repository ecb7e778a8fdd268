/* Description: Nondeterministic finite-state automaton over an arena of states.

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

//! Nondeterministic finite-state automaton over an arena of states.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::{
  dot::DotBuilder,
  table::{FxHashMap, FxHashSet, FxIndexMap},
  State,
};

/// Destination set for one transition symbol. Thompson states rarely fan out
/// to more than a couple of targets, so the common case stays inline.
pub(crate) type TargetSet = SmallVec<[State; 2]>;

#[derive(Debug, Clone, Default)]
struct Node {
  accept: bool,
  trans: FxIndexMap<char, TargetSet>,
}

/// A nondeterministic finite-state automaton.
///
/// The automaton owns an arena of states and a start index; the reachable
/// state set is recomputed by traversal rather than stored, so states orphaned
/// by construction steps are simply ignored. One symbol may lead to zero, one,
/// or many successor states.
#[derive(Debug)]
pub struct Nfa {
  states: Vec<Node>,
  start: State,
}

impl Default for Nfa {
  fn default() -> Self { Self::new() }
}

impl Nfa {
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

  /// Add an outgoing transition on `sym`. Duplicate insertions are ignored.
  pub fn add_transition(&mut self, from: State, sym: char, to: State) {
    assert!(to.idx() < self.states.len(), "transition target out of bounds");
    let targets = self.states[from.idx()].trans.entry(sym).or_default();
    if !targets.contains(&to) {
      targets.push(to);
    }
  }

  /// Add an epsilon transition from `from` to `to`.
  ///
  /// The epsilon is not stored as an explicit edge: `to`'s entire current
  /// transition table is copied into `from`, and `from` becomes accepting if
  /// `to` is. `to` must therefore be frozen — it may not receive new
  /// transitions or further merges afterwards, or the earlier copy silently
  /// goes stale. The Thompson operators respect this by fully cloning each
  /// operand into the output arena before folding any epsilon edges.
  pub fn add_epsilon(&mut self, from: State, to: State) {
    if self.is_accept(to) {
      self.set_accept(from, true);
    }
    let copied: Vec<(char, TargetSet)> = self.states[to.idx()]
      .trans
      .iter()
      .map(|(sym, targets)| (*sym, targets.clone()))
      .collect();
    for (sym, targets) in copied {
      for target in targets {
        self.add_transition(from, sym, target);
      }
    }
  }

  /// The states reached from `s` by following a transition on `sym`, possibly
  /// empty.
  pub fn targets(&self, s: State, sym: char) -> &[State] {
    self.states[s.idx()]
      .trans
      .get(&sym)
      .map(|targets| targets.as_slice())
      .unwrap_or(&[])
  }

  /// All transitions leaving `s`, in insertion order.
  pub fn transitions(&self, s: State) -> impl Iterator<Item=(char, &[State])>+'_ {
    self.states[s.idx()]
      .trans
      .iter()
      .map(|(sym, targets)| (*sym, targets.as_slice()))
  }

  pub(crate) fn reachable_from(&self, from: State) -> Vec<State> {
    let mut order: Vec<State> = Vec::new();
    let mut seen: FxHashSet<State> = FxHashSet::default();
    let mut queue: VecDeque<State> = VecDeque::new();
    seen.insert(from);
    queue.push_back(from);
    while let Some(s) = queue.pop_front() {
      order.push(s);
      for (_, targets) in self.transitions(s) {
        for &target in targets {
          if seen.insert(target) {
            queue.push_back(target);
          }
        }
      }
    }
    order
  }

  /// All states reachable from the start state, in breadth-first order.
  pub fn states(&self) -> Vec<State> { self.reachable_from(self.start) }

  /// The reachable states with their accept flag set.
  pub fn accept_states(&self) -> Vec<State> {
    self
      .states()
      .into_iter()
      .filter(|&s| self.is_accept(s))
      .collect()
  }

  /// Copy `other`'s reachable subgraph into this arena, returning the image
  /// of `other`'s start state. The old-to-new index map doubles as the
  /// visited set, so cycles are copied exactly once.
  pub(crate) fn absorb(&mut self, other: &Nfa) -> State {
    let mut mapping: FxHashMap<State, State> = FxHashMap::default();
    let mut queue: VecDeque<State> = VecDeque::new();
    let new_start = self.add_state(other.is_accept(other.start));
    mapping.insert(other.start, new_start);
    queue.push_back(other.start);
    while let Some(s) = queue.pop_front() {
      let image = mapping[&s];
      for (sym, targets) in other.transitions(s) {
        for &target in targets {
          let target_image = match mapping.get(&target) {
            Some(&t) => t,
            None => {
              let t = self.add_state(other.is_accept(target));
              mapping.insert(target, t);
              queue.push_back(target);
              t
            },
          };
          self.add_transition(image, sym, target_image);
        }
      }
    }
    new_start
  }

  /// Test whether `input` is in the automaton's language.
  ///
  /// Breadth-first search over (position, state) pairs; nondeterminism keeps
  /// multiple pairs in flight, and a visited set bounds the work by the number
  /// of distinct pairs rather than the number of paths.
  pub fn recognize(&self, input: &str) -> bool {
    let symbols: Vec<char> = input.chars().collect();
    let mut seen: FxHashSet<(usize, State)> = FxHashSet::default();
    let mut queue: VecDeque<(usize, State)> = VecDeque::new();
    seen.insert((0, self.start));
    queue.push_back((0, self.start));
    while let Some((position, s)) = queue.pop_front() {
      if position == symbols.len() && self.is_accept(s) {
        return true;
      }
      if position < symbols.len() {
        for &target in self.targets(s, symbols[position]) {
          if seen.insert((position+1, target)) {
            queue.push_back((position+1, target));
          }
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
      for (sym, targets) in self.transitions(s) {
        for &target in targets {
          dot.edge(n, sym, numbers[&target]);
        }
      }
    }
    dot.finish()
  }
}

/// Deep copy: a structurally isomorphic automaton sharing no state identities
/// with the original. Unreachable arena slots are compacted away, so the copy
/// holds exactly the reachable subgraph.
impl Clone for Nfa {
  fn clone(&self) -> Self {
    let mut out = Nfa {
      states: Vec::new(),
      start: State(0),
    };
    let start = out.absorb(self);
    out.start = start;
    out
  }
}
