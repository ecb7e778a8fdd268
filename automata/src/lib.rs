/* Description: Finite-state automata: Thompson construction, determinization, reversal, minimization.

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

//! Finite-state automata: Thompson construction, determinization, reversal,
//! minimization.
//!
//! The state graphs are arenas of nodes addressed by [`State`] indices, so
//! cyclic and shared structure (Kleene-star loops, subset-construction merges)
//! needs no ownership gymnastics while traversals still get the
//! reference-identity semantics their visited sets rely on. Epsilon
//! transitions are never stored: [`nfa::Nfa::add_epsilon`] folds them away at
//! construction time by copying the target state's transition table.

pub mod compile;
pub mod determinize;
pub mod dfa;
mod dot;
pub mod minimize;
pub mod nfa;
pub mod reverse;
pub mod thompson;

pub(crate) mod table {
  use core::hash::BuildHasherDefault;

  use indexmap::IndexMap;
  use rustc_hash::FxHasher;

  pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
  pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<FxHasher>>;
  pub type FxHashSet<T> = hashbrown::HashSet<T, BuildHasherDefault<FxHasher>>;
}

/// Index of a state within the arena of its owning automaton.
///
/// Indices are only meaningful against the automaton that produced them;
/// transformations hand back fresh automata with fresh indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct State(pub u32);

impl State {
  #[inline]
  pub(crate) fn idx(self) -> usize { self.0 as usize }
}
