/*!
Dispatches of the elements of a program.

A [Dispatch] is an owned record of a single call to a [ProgramSink].
Dispatches are tidy to deconstruct by pattern matching, and so are a convenient way to examine a program read from a stream.

- A `Vec<Dispatch>` is a sink which records each element of a program.
- A [Dispatcher] is a sink which sends each element of a program to a callback.
- [replay] passes recorded dispatches on to some other sink, e.g. a [writer](crate::writer).

Dispatches record the elements of steps, and not whether a program is incremental.
So, [init_program](ProgramSink::init_program) is not recorded, and should be called on a sink before a replay when the program is incremental.

# Examples

```rust
# use lp_smodels::dispatch::{Dispatch, replay};
# use lp_smodels::program::ProgramSink;
# use lp_smodels::structures::rule::HeadKind;
let mut program: Vec<Dispatch> = Vec::default();
program.begin_step().unwrap();
program.rule(HeadKind::Disjunctive, &[1], &[-2]).unwrap();
program.end_step().unwrap();

let mut copy: Vec<Dispatch> = Vec::default();
replay(&program, &mut copy).unwrap();
assert_eq!(program, copy);
```

The callback of a dispatcher may be used to filter or count elements without storing a program:

```rust
# use lp_smodels::dispatch::{Dispatch, Dispatcher};
# use lp_smodels::program::ProgramSink;
# use lp_smodels::structures::rule::HeadKind;
# use lp_smodels::types::err::ErrorKind;
# use std::{cell::Cell, rc::Rc};
let rules = Rc::new(Cell::new(0));
let counter = rules.clone();

let mut dispatcher = Dispatcher::new(Box::new(move |dispatch: Dispatch| {
    if let Dispatch::Rule { .. } = dispatch {
        counter.set(counter.get() + 1);
    }
    Ok::<(), ErrorKind>(())
}));

dispatcher.rule(HeadKind::Choice, &[1, 2], &[]).unwrap();
assert_eq!(rules.get(), 1);
```
*/

use crate::{
    program::ProgramSink,
    structures::{
        atom::Atom,
        directive::{HeuristicModifier, Value},
        literal::{IntLiteral, Literal},
        rule::HeadKind,
        weight::{Weight, WeightLiteral},
    },
    types::err::ErrorKind,
};

/// An owned record of a call to a [ProgramSink].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    BeginStep,

    Rule {
        kind: HeadKind,
        head: Vec<Atom>,
        body: Vec<IntLiteral>,
    },

    SumRule {
        kind: HeadKind,
        head: Vec<Atom>,
        bound: Weight,
        body: Vec<WeightLiteral>,
    },

    Minimize {
        priority: Weight,
        literals: Vec<WeightLiteral>,
    },

    Output {
        name: String,
        condition: Vec<IntLiteral>,
    },

    External {
        atom: Atom,
        value: Value,
    },

    Assume {
        literals: Vec<IntLiteral>,
    },

    AcycEdge {
        source: i32,
        target: i32,
        condition: Vec<IntLiteral>,
    },

    Heuristic {
        atom: Atom,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
        condition: Vec<IntLiteral>,
    },

    EndStep,
}

impl Dispatch {
    /// Passes the dispatch on to `sink`.
    pub fn send(&self, sink: &mut impl ProgramSink) -> Result<(), ErrorKind> {
        match self {
            Self::BeginStep => sink.begin_step(),
            Self::Rule { kind, head, body } => sink.rule(*kind, head, body),
            Self::SumRule {
                kind,
                head,
                bound,
                body,
            } => sink.sum_rule(*kind, head, *bound, body),
            Self::Minimize { priority, literals } => sink.minimize(*priority, literals),
            Self::Output { name, condition } => sink.output(name, condition),
            Self::External { atom, value } => sink.external(*atom, *value),
            Self::Assume { literals } => sink.assume(literals),
            Self::AcycEdge {
                source,
                target,
                condition,
            } => sink.acyc_edge(*source, *target, condition),
            Self::Heuristic {
                atom,
                modifier,
                bias,
                priority,
                condition,
            } => sink.heuristic(*atom, *modifier, *bias, *priority, condition),
            Self::EndStep => sink.end_step(),
        }
    }
}

/// Passes each dispatch, in order, on to `sink`, stopping at the first error.
pub fn replay<'d>(
    dispatches: impl IntoIterator<Item = &'d Dispatch>,
    sink: &mut impl ProgramSink,
) -> Result<(), ErrorKind> {
    for dispatch in dispatches {
        dispatch.send(sink)?;
    }
    Ok(())
}

fn write_literals(f: &mut std::fmt::Formatter<'_>, literals: &[IntLiteral]) -> std::fmt::Result {
    for (index, literal) in literals.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        match literal.polarity() {
            true => write!(f, "{}", literal.atom())?,
            false => write!(f, "not {}", literal.atom())?,
        }
    }
    Ok(())
}

fn write_weighted(f: &mut std::fmt::Formatter<'_>, literals: &[WeightLiteral]) -> std::fmt::Result {
    for (index, literal) in literals.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{literal}")?;
    }
    Ok(())
}

fn write_head(f: &mut std::fmt::Formatter<'_>, kind: HeadKind, head: &[Atom]) -> std::fmt::Result {
    let atoms = head.iter().map(|a| a.to_string()).collect::<Vec<_>>();
    match kind {
        HeadKind::Choice => write!(f, "{{{}}}", atoms.join("; ")),
        HeadKind::Disjunctive => write!(f, "{}", atoms.join(" | ")),
    }
}

/// A one line summary of the dispatch.
impl std::fmt::Display for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BeginStep => write!(f, "begin step"),
            Self::Rule { kind, head, body } => {
                write_head(f, *kind, head)?;
                write!(f, " :- ")?;
                write_literals(f, body)?;
                write!(f, ".")
            }
            Self::SumRule {
                kind,
                head,
                bound,
                body,
            } => {
                write_head(f, *kind, head)?;
                write!(f, " :- {bound} {{")?;
                write_weighted(f, body)?;
                write!(f, "}}.")
            }
            Self::Minimize { priority, literals } => {
                write!(f, "#minimize {{")?;
                write_weighted(f, literals)?;
                write!(f, "}}@{priority}.")
            }
            Self::Output { name, condition } => {
                write!(f, "#show {name} : ")?;
                write_literals(f, condition)?;
                write!(f, ".")
            }
            Self::External { atom, value } => write!(f, "#external {atom}. [{value}]"),
            Self::Assume { literals } => {
                write!(f, "#assume {{")?;
                write_literals(f, literals)?;
                write!(f, "}}.")
            }
            Self::AcycEdge {
                source,
                target,
                condition,
            } => {
                write!(f, "#edge ({source}, {target}) : ")?;
                write_literals(f, condition)?;
                write!(f, ".")
            }
            Self::Heuristic {
                atom,
                modifier,
                bias,
                priority,
                condition,
            } => {
                write!(f, "#heuristic {atom} : ")?;
                write_literals(f, condition)?;
                write!(f, ". [{bias}@{priority}, {modifier}]")
            }
            Self::EndStep => write!(f, "end step"),
        }
    }
}

impl ProgramSink for Vec<Dispatch> {
    fn begin_step(&mut self) -> Result<(), ErrorKind> {
        self.push(Dispatch::BeginStep);
        Ok(())
    }

    fn rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        body: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.push(Dispatch::Rule {
            kind,
            head: head.to_vec(),
            body: body.to_vec(),
        });
        Ok(())
    }

    fn sum_rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        bound: Weight,
        body: &[WeightLiteral],
    ) -> Result<(), ErrorKind> {
        self.push(Dispatch::SumRule {
            kind,
            head: head.to_vec(),
            bound,
            body: body.to_vec(),
        });
        Ok(())
    }

    fn minimize(&mut self, priority: Weight, literals: &[WeightLiteral]) -> Result<(), ErrorKind> {
        self.push(Dispatch::Minimize {
            priority,
            literals: literals.to_vec(),
        });
        Ok(())
    }

    fn output(&mut self, name: &str, condition: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.push(Dispatch::Output {
            name: name.to_owned(),
            condition: condition.to_vec(),
        });
        Ok(())
    }

    fn external(&mut self, atom: Atom, value: Value) -> Result<(), ErrorKind> {
        self.push(Dispatch::External { atom, value });
        Ok(())
    }

    fn assume(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.push(Dispatch::Assume {
            literals: literals.to_vec(),
        });
        Ok(())
    }

    fn acyc_edge(
        &mut self,
        source: i32,
        target: i32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.push(Dispatch::AcycEdge {
            source,
            target,
            condition: condition.to_vec(),
        });
        Ok(())
    }

    fn heuristic(
        &mut self,
        atom: Atom,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.push(Dispatch::Heuristic {
            atom,
            modifier,
            bias,
            priority,
            condition: condition.to_vec(),
        });
        Ok(())
    }

    fn end_step(&mut self) -> Result<(), ErrorKind> {
        self.push(Dispatch::EndStep);
        Ok(())
    }
}

/// The type of a callback which receives dispatches.
pub type CallbackDispatch = dyn FnMut(Dispatch) -> Result<(), ErrorKind>;

/// A sink which sends each element of a program as a dispatch to a callback.
pub struct Dispatcher {
    callback: Box<CallbackDispatch>,
}

impl Dispatcher {
    pub fn new(callback: Box<CallbackDispatch>) -> Self {
        Dispatcher { callback }
    }

    fn dispatch(&mut self, dispatch: Dispatch) -> Result<(), ErrorKind> {
        (self.callback)(dispatch)
    }
}

impl ProgramSink for Dispatcher {
    fn begin_step(&mut self) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::BeginStep)
    }

    fn rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        body: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::Rule {
            kind,
            head: head.to_vec(),
            body: body.to_vec(),
        })
    }

    fn sum_rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        bound: Weight,
        body: &[WeightLiteral],
    ) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::SumRule {
            kind,
            head: head.to_vec(),
            bound,
            body: body.to_vec(),
        })
    }

    fn minimize(&mut self, priority: Weight, literals: &[WeightLiteral]) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::Minimize {
            priority,
            literals: literals.to_vec(),
        })
    }

    fn output(&mut self, name: &str, condition: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::Output {
            name: name.to_owned(),
            condition: condition.to_vec(),
        })
    }

    fn external(&mut self, atom: Atom, value: Value) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::External { atom, value })
    }

    fn assume(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::Assume {
            literals: literals.to_vec(),
        })
    }

    fn acyc_edge(
        &mut self,
        source: i32,
        target: i32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::AcycEdge {
            source,
            target,
            condition: condition.to_vec(),
        })
    }

    fn heuristic(
        &mut self,
        atom: Atom,
        modifier: HeuristicModifier,
        bias: i32,
        priority: u32,
        condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::Heuristic {
            atom,
            modifier,
            bias,
            priority,
            condition: condition.to_vec(),
        })
    }

    fn end_step(&mut self) -> Result<(), ErrorKind> {
        self.dispatch(Dispatch::EndStep)
    }
}
