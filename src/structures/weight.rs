//! Weights and weighted literals.
//!
//! Weighted literals are used in the bodies of cardinality and weight rules, and in minimize statements.
//! A cardinality rule is a weight rule where each literal has weight `1`.

use crate::structures::literal::{IntLiteral, Literal};

/// A weight (or a bound on the sum of weights).
pub type Weight = i32;

/// A literal paired with a weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeightLiteral {
    /// The literal.
    pub literal: IntLiteral,

    /// The weight of the literal.
    pub weight: Weight,
}

impl WeightLiteral {
    pub fn new(literal: IntLiteral, weight: Weight) -> Self {
        Self { literal, weight }
    }

    /// The literal with weight `1`.
    pub fn unit(literal: IntLiteral) -> Self {
        Self { literal, weight: 1 }
    }
}

impl From<IntLiteral> for WeightLiteral {
    fn from(literal: IntLiteral) -> Self {
        Self::unit(literal)
    }
}

impl std::fmt::Display for WeightLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.literal.polarity() {
            true => write!(f, "{}={}", self.literal.atom(), self.weight),
            false => write!(f, "not {}={}", self.literal.atom(), self.weight),
        }
    }
}
