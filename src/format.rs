/*!
Predicates on the representability of rules in smodels format.

The smodels format has no representation of:
- Rules with an empty head.
  Integrity constraints are instead written with a reserved 'false atom' as their head, see [writer](crate::writer).
- Choice rules or disjunctive rules with a cardinality or weight body.
- Negative weights, or negative bounds.

Further, a sum body with a positive bound and no literals is not accepted.

The predicates are advisory, in that nothing requires a caller to use them.
Still, a [writer](crate::writer) refuses to write any rule for which they do not hold.

```rust
# use lp_smodels::format::{is_smodels_head, is_smodels_rule};
# use lp_smodels::structures::rule::HeadKind;
# use lp_smodels::structures::weight::WeightLiteral;
assert!(is_smodels_head(HeadKind::Choice, &[1, 2]));
assert!(!is_smodels_head(HeadKind::Disjunctive, &[]));

let body = [WeightLiteral::new(2, 3), WeightLiteral::new(-4, 1)];
assert!(is_smodels_rule(HeadKind::Disjunctive, &[1], 2, &body));
assert!(!is_smodels_rule(HeadKind::Choice, &[1], 2, &body));
```
*/

use crate::structures::{
    atom::{valid_atom, Atom},
    literal::Literal,
    rule::{HeadKind, RuleType},
    weight::{Weight, WeightLiteral},
};

/// The type of record used to write a rule with the given head and a normal body, if any.
pub fn head_rule_type(kind: HeadKind, head: &[Atom]) -> Option<RuleType> {
    if head.is_empty() {
        return None;
    }
    match kind {
        HeadKind::Choice => Some(RuleType::Choice),
        HeadKind::Disjunctive if head.len() == 1 => Some(RuleType::Basic),
        HeadKind::Disjunctive => Some(RuleType::Disjunctive),
    }
}

/// The type of record used to write a rule with the given head and sum body, if any.
///
/// Bodies where each literal has weight `1` are written as cardinality bodies.
pub fn sum_rule_type(
    kind: HeadKind,
    head: &[Atom],
    bound: Weight,
    body: &[WeightLiteral],
) -> Option<RuleType> {
    if kind != HeadKind::Disjunctive || head.len() != 1 {
        return None;
    }
    if bound < 0 || (bound > 0 && body.is_empty()) {
        return None;
    }

    let mut cardinality = true;
    for weighted in body {
        if weighted.weight < 0 || !valid_atom(weighted.literal.atom()) {
            return None;
        }
        if weighted.weight != 1 {
            cardinality = false;
        }
    }

    match cardinality {
        true => Some(RuleType::Cardinality),
        false => Some(RuleType::Weight),
    }
}

/// Whether the head can be represented in smodels format, i.e. whether the head is not empty.
pub fn is_smodels_head(kind: HeadKind, head: &[Atom]) -> bool {
    head_rule_type(kind, head).is_some()
}

/// Whether the rule with the given head and sum body can be represented in smodels format.
pub fn is_smodels_rule(
    kind: HeadKind,
    head: &[Atom],
    bound: Weight,
    body: &[WeightLiteral],
) -> bool {
    is_smodels_head(kind, head) && sum_rule_type(kind, head, bound, body).is_some()
}
