/* Description: Graphviz dot rendering shared by the NFA and DFA flavors.

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

//! Graphviz dot rendering shared by the NFA and DFA flavors.
//!
//! States are referenced by small integers assigned in breadth-first order
//! from the start state, so two automata built by identical construction
//! sequences render byte-identically. Tests lean on that determinism for
//! exact-string comparison; the output is not a parseable serialization
//! format.

use core::fmt::Write;

pub(crate) struct DotBuilder {
  out: String,
}

impl DotBuilder {
  pub fn new() -> Self {
    Self {
      out: String::from("digraph G {\nrankdir=LR;\n"),
    }
  }

  /// Mark numbered state `n` as accepting.
  pub fn accept(&mut self, n: usize) {
    /* Infallible for String destinations. */
    let _ = writeln!(&mut self.out, "{n} [peripheries=2];");
  }

  /// Emit one transition edge labeled with its symbol.
  pub fn edge(&mut self, from: usize, sym: char, to: usize) {
    let _ = writeln!(&mut self.out, "{from} -> {to} [label=\"{sym}\"];");
  }

  pub fn finish(mut self) -> String {
    self.out.push('}');
    self.out
  }
}
