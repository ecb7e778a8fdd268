/* Description: AST for programmatically assembled regular expressions.

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

//! AST for programmatically assembled regular expressions.

use core::fmt;

use displaydoc::Display;
use thiserror::Error;

/// Errors arising while assembling an expression tree.
#[derive(Debug, Display, Error, Copy, Clone, PartialEq, Eq)]
pub enum ExprError {
  /// literal expressions require at least one character
  EmptyLiteral,
}

pub mod literals {
  use core::fmt;

  use super::ExprError;

  /// A nonempty sequence of literal characters, matched in order.
  ///
  /// Nonemptiness is enforced at construction, so consumers may fold over
  /// [`Self::chars`] knowing at least one element exists.
  #[derive(Debug, Clone, PartialEq, Eq, Hash)]
  pub struct StringLiteral(String);

  impl StringLiteral {
    pub fn new(s: impl Into<String>) -> Result<Self, ExprError> {
      let s: String = s.into();
      if s.is_empty() {
        return Err(ExprError::EmptyLiteral);
      }
      Ok(Self(s))
    }

    pub fn as_str(&self) -> &str { &self.0 }

    pub fn chars(&self) -> impl Iterator<Item=char>+'_ { self.0.chars() }
  }

  impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", &self.0) }
  }
}

use literals::StringLiteral;

/// A regular expression over single characters.
///
/// The variant set is closed: each variant maps onto exactly one automaton
/// construction primitive, and compilation is an exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
  /// Matches a single character.
  Char(char),
  /// Matches the left expression followed by the right expression.
  Concat(Box<Expr>, Box<Expr>),
  /// Matches either branch.
  Or(Box<Expr>, Box<Expr>),
  /// Matches zero or more repetitions of the inner expression.
  Star(Box<Expr>),
  /// Matches a literal character sequence.
  Literal(StringLiteral),
}

impl Expr {
  /// An expression recognizing the single character `c`.
  pub fn ch(c: char) -> Self { Self::Char(c) }

  /// The concatenation of `first` and `second`.
  pub fn concat(first: Self, second: Self) -> Self {
    Self::Concat(Box::new(first), Box::new(second))
  }

  /// The union of `first` and `second`.
  pub fn or(first: Self, second: Self) -> Self { Self::Or(Box::new(first), Box::new(second)) }

  /// Zero or more repetitions of `inner`.
  pub fn star(inner: Self) -> Self { Self::Star(Box::new(inner)) }

  /// One or more repetitions of `inner`, desugared as `inner(inner)*`.
  pub fn plus(inner: Self) -> Self { Self::concat(inner.clone(), Self::star(inner)) }

  /// An expression recognizing exactly the (nonempty) string `s`.
  pub fn literal(s: impl Into<String>) -> Result<Self, ExprError> {
    Ok(Self::Literal(StringLiteral::new(s)?))
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Char(c) => write!(f, "{c}"),
      Self::Concat(first, second) => write!(f, "{first}{second}"),
      Self::Or(first, second) => write!(f, "({first}|{second})"),
      Self::Star(inner) => write!(f, "({inner})*"),
      Self::Literal(lit) => write!(f, "{lit}"),
    }
  }
}
