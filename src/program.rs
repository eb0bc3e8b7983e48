/*!
The receiver of a logic program.

A [ProgramSink] is told of the elements of a program in the order they occur:

```text
init_program
begin_step
  rule | sum_rule | minimize | external
  output | acyc_edge | heuristic
  assume
end_step
begin_step
  ...
```

A [reader](crate::reader) reads a program from a stream and passes each element to a sink.
A [writer](crate::writer) is a sink which writes each element to a stream.
The [dispatch](crate::dispatch) module has sinks which record elements, or send them to a callback.

Each method is fallible, and an error aborts whatever procedure is passing a program to the sink.

The directives [acyc_edge](ProgramSink::acyc_edge) and [heuristic](ProgramSink::heuristic) are only passed when a reader is configured to convert pseudo-atoms, and by default are ignored.
*/

use crate::{
    structures::{
        atom::Atom,
        directive::{HeuristicModifier, Value},
        literal::IntLiteral,
        rule::HeadKind,
        weight::{Weight, WeightLiteral},
    },
    types::err::ErrorKind,
};

/// A receiver of the elements of a logic program.
pub trait ProgramSink {
    /// Prepares for a new program, which is incremental if `incremental` is true.
    fn init_program(&mut self, incremental: bool) -> Result<(), ErrorKind> {
        let _ = incremental;
        Ok(())
    }

    /// Starts a step.
    fn begin_step(&mut self) -> Result<(), ErrorKind>;

    /// A rule with a normal body.
    fn rule(&mut self, kind: HeadKind, head: &[Atom], body: &[IntLiteral])
        -> Result<(), ErrorKind>;

    /// A rule with a sum body, true if the sum of the weights of true literals is at least `bound`.
    fn sum_rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        bound: Weight,
        body: &[WeightLiteral],
    ) -> Result<(), ErrorKind>;

    /// A minimize statement at the given priority.
    fn minimize(&mut self, priority: Weight, literals: &[WeightLiteral]) -> Result<(), ErrorKind>;

    /// An association of `name` with the condition.
    fn output(&mut self, name: &str, condition: &[IntLiteral]) -> Result<(), ErrorKind>;

    /// A declaration of `atom` as external with the given value.
    fn external(&mut self, atom: Atom, value: Value) -> Result<(), ErrorKind>;

    /// Literals assumed for the current step.
    fn assume(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind>;

    /// An edge from `source` to `target`, under the condition.
    fn acyc_edge(
        &mut self,
        source: i32,
        target: i32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        let _ = (source, target, condition);
        Ok(())
    }

    /// A heuristic modification for `atom`, under the condition.
    fn heuristic(
        &mut self,
        atom: Atom,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        let _ = (atom, modifier, bias, priority, condition);
        Ok(())
    }

    /// Ends the current step.
    fn end_step(&mut self) -> Result<(), ErrorKind>;
}

impl<S: ProgramSink + ?Sized> ProgramSink for &mut S {
    fn init_program(&mut self, incremental: bool) -> Result<(), ErrorKind> {
        (**self).init_program(incremental)
    }

    fn begin_step(&mut self) -> Result<(), ErrorKind> {
        (**self).begin_step()
    }

    fn rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        body: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        (**self).rule(kind, head, body)
    }

    fn sum_rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        bound: Weight,
        body: &[WeightLiteral],
    ) -> Result<(), ErrorKind> {
        (**self).sum_rule(kind, head, bound, body)
    }

    fn minimize(&mut self, priority: Weight, literals: &[WeightLiteral]) -> Result<(), ErrorKind> {
        (**self).minimize(priority, literals)
    }

    fn output(&mut self, name: &str, condition: &[IntLiteral]) -> Result<(), ErrorKind> {
        (**self).output(name, condition)
    }

    fn external(&mut self, atom: Atom, value: Value) -> Result<(), ErrorKind> {
        (**self).external(atom, value)
    }

    fn assume(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind> {
        (**self).assume(literals)
    }

    fn acyc_edge(
        &mut self,
        source: i32,
        target: i32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        (**self).acyc_edge(source, target, condition)
    }

    fn heuristic(
        &mut self,
        atom: Atom,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        (**self).heuristic(atom, modifier, bias, priority, condition)
    }

    fn end_step(&mut self) -> Result<(), ErrorKind> {
        (**self).end_step()
    }
}
