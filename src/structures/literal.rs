//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity.
//!
//! The canonical implementation of the literal trait is [IntLiteral], a signed integer whose sign is the polarity of the literal.
//! This matches the use of literals in rule bodies, conditions, and assumptions.
//!
//! ```rust
//! # use lp_smodels::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.negate(), 79);
//! ```
//!
//! In the smodels format literals are not written with a sign.
//! Instead, the atoms of negative and positive literals of a body are listed in two separate groups.

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// Splits `literals` into the atoms of negative literals and the atoms of positive literals, preserving order.
pub fn split_by_polarity(literals: &[IntLiteral]) -> (Vec<Atom>, Vec<Atom>) {
    let mut negative = Vec::default();
    let mut positive = Vec::default();
    for literal in literals {
        match literal.polarity() {
            true => positive.push(literal.atom()),
            false => negative.push(literal.atom()),
        }
    }
    (negative, positive)
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn polarity_split() {
        let (negative, positive) = split_by_polarity(&[3, -1, 2, -5]);
        assert_eq!(negative, vec![1, 5]);
        assert_eq!(positive, vec![3, 2]);
    }

    #[test]
    fn int_literal() {
        let literal = IntLiteral::new(7, true);
        assert_eq!(literal, 7);
        assert_eq!(literal.negate().atom(), 7);
        assert!(!literal.negate().polarity());
    }
}
