/*!
Abstract elements of a logic program, and their representation.

- [atom]s are the propositional variables of a program.
- [literal]s pair an atom with a polarity.
- [weight]ed literals pair a literal with a weight.
- [rule] contains the kinds of head and the numeric codes of rule records.
- [directive] contains the values of external atoms and the modifiers of heuristic directives.
*/

pub mod atom;
pub mod directive;
pub mod literal;
pub mod rule;
pub mod weight;
