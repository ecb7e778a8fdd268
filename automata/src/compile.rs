/* Description: Lowering expression trees into nondeterministic automata.

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

//! Lowering expression trees into nondeterministic automata.

use thompson_regexp_syntax::ast::Expr;

use crate::{nfa::Nfa, thompson};

/// Compile `expr` into an NFA recognizing its language.
///
/// Pure: repeated calls on the same expression build equal automata, and the
/// match over the closed variant set is exhaustive — a new expression form
/// fails to compile until it is handled here.
pub fn compile(expr: &Expr) -> Nfa {
  match expr {
    Expr::Char(c) => thompson::character(*c),
    Expr::Concat(first, second) => thompson::concatenate(&compile(first), &compile(second)),
    Expr::Or(first, second) => thompson::union(&compile(first), &compile(second)),
    Expr::Star(inner) => thompson::kleene_star(&compile(inner)),
    Expr::Literal(lit) => {
      let mut chars = lit.chars();
      /* StringLiteral is nonempty by construction. */
      let mut nfa = thompson::character(chars.next().unwrap());
      for c in chars {
        nfa = thompson::concatenate(&nfa, &thompson::character(c));
      }
      nfa
    },
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn literal_folds_left() {
    let via_literal = compile(&Expr::literal("ab").unwrap());
    let via_concat = compile(&Expr::concat(Expr::ch('a'), Expr::ch('b')));
    assert_eq!(via_literal.to_dot(), via_concat.to_dot());
  }

  #[test]
  fn plus_requires_one_occurrence() {
    let nfa = compile(&Expr::plus(Expr::ch('a')));
    assert!(nfa.recognize("a"));
    assert!(nfa.recognize("aaaaa"));
    assert!(!nfa.recognize(""));
    assert!(!nfa.recognize("aaaaab"));
  }

  #[test]
  fn compilation_is_repeatable() {
    let expr = Expr::star(Expr::concat(
      Expr::or(Expr::literal("ab").unwrap(), Expr::literal("ac").unwrap()),
      Expr::plus(Expr::ch('d')),
    ));
    assert_eq!(compile(&expr).to_dot(), compile(&expr).to_dot());
  }
}
