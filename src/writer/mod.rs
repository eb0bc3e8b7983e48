/*!
Writing programs in (extended) smodels format.

A [SmodelsWriter] is a [ProgramSink] which writes each element of a program to a stream.

Elements of a step must be given in the order of the sections of the format:
- Rules, minimize statements, and external declarations.
- Outputs, each of which must have a single positive atom as condition.
- At most one assumption.

A step is closed by [end_step](ProgramSink::end_step), which writes whatever sections remain, and the number of models (always `1`).

# Integrity constraints

The format has no representation of rules with an empty head.
Instead, if the writer is configured with a 'false atom' each rule with an empty disjunctive head is written with the false atom as head, and the false atom is added to the false part of each compute statement which follows.
Choice rules with an empty head have no effect, and are skipped.

# Incremental programs

With the clasp extension a program may be incremental, in which case each step begins with `90 0`.
External atoms are written as records of type 91 (with a value) or 92 (on release).

# Example

```rust
# use lp_smodels::config::WriterConfig;
# use lp_smodels::program::ProgramSink;
# use lp_smodels::structures::rule::HeadKind;
# use lp_smodels::writer::SmodelsWriter;
let mut writer = SmodelsWriter::new(Vec::default(), WriterConfig::new(false, 9));

writer.begin_step().unwrap();
writer.rule(HeadKind::Disjunctive, &[1], &[-2, 3]).unwrap();
writer.rule(HeadKind::Disjunctive, &[], &[1]).unwrap();
writer.output("a", &[1]).unwrap();
writer.end_step().unwrap();

let written = String::from_utf8(writer.into_inner()).unwrap();
assert_eq!(written, "1 1 2 1 2 3\n1 9 1 0 1\n0\n1 a\n0\nB+\n0\nB-\n9\n0\n1\n");
```
*/

use std::{fmt::Write as _, io::Write};

use crate::{
    config::WriterConfig,
    format,
    incremental::AtomTracker,
    misc::log::targets::{self},
    program::ProgramSink,
    structures::{
        atom::{valid_atom, Atom, FALSE_ATOM_NONE},
        directive::{HeuristicModifier, Value},
        literal::{split_by_polarity, IntLiteral, Literal},
        rule::{HeadKind, RuleType},
        weight::{Weight, WeightLiteral},
    },
    types::err::{ErrorKind, UsageError},
};

/// The sections of a step, in the order they are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Rules,
    Symbols,
    Compute,
}

/// The part of a rule record being written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RecordPart {
    /// No record is being written.
    Outside,
    Head,
    NegativeBody,
    PositiveBody,
    Weights,
}

impl RecordPart {
    /// Whether a record may move from this part to `next`.
    fn precedes(self, next: RecordPart) -> bool {
        use RecordPart::*;
        matches!(
            (self, next),
            (Outside, Head)
                | (Head, NegativeBody)
                | (NegativeBody, PositiveBody)
                | (PositiveBody, Weights)
                | (Head | PositiveBody | Weights, Outside)
        )
    }
}

/// A writer of programs in smodels format.
pub struct SmodelsWriter<W: Write> {
    out: W,

    config: WriterConfig,

    /// The record being written.
    line: String,

    section: Section,

    part: RecordPart,

    /// Whether some rule was written with the false atom as head.
    false_head: bool,

    incremental: bool,

    step_open: bool,

    /// Whether some record has been written in the current step.
    rules_in_step: bool,

    steps: usize,

    tracker: AtomTracker,

    /// A buffer for the literals of a sum body.
    literals: Vec<IntLiteral>,
}

impl<W: Write> SmodelsWriter<W> {
    pub fn new(out: W, config: WriterConfig) -> Self {
        SmodelsWriter {
            out,
            config,
            line: String::default(),
            section: Section::Rules,
            part: RecordPart::Outside,
            false_head: false,
            incremental: false,
            step_open: false,
            rules_in_step: false,
            steps: 0,
            tracker: AtomTracker::default(),
            literals: Vec::default(),
        }
    }

    /// The stream written to.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// The count of steps completed.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether some integrity constraint has been written.
    pub fn false_atom_used(&self) -> bool {
        self.false_head
    }

    /// Moves the current record to `part`.
    fn enter(&mut self, part: RecordPart) -> Result<(), ErrorKind> {
        match self.part.precedes(part) {
            true => {
                self.part = part;
                Ok(())
            }
            false => Err(ErrorKind::from(UsageError::RecordOrder)),
        }
    }

    /// Adds a token to the current line.
    fn token(&mut self, value: impl std::fmt::Display) {
        let _ = match self.line.is_empty() {
            true => write!(self.line, "{value}"),
            false => write!(self.line, " {value}"),
        };
    }

    /// Writes the current line to the stream.
    fn end_line(&mut self) -> Result<(), ErrorKind> {
        self.line.push('\n');
        self.out.write_all(self.line.as_bytes())?;
        self.line.clear();
        Ok(())
    }

    fn start_record(&mut self, rule_type: RuleType) -> Result<(), ErrorKind> {
        self.enter(RecordPart::Head)?;
        self.token(rule_type.code());
        Ok(())
    }

    fn end_record(&mut self) -> Result<(), ErrorKind> {
        self.enter(RecordPart::Outside)?;
        self.rules_in_step = true;
        self.end_line()
    }

    fn require_step(&self) -> Result<(), ErrorKind> {
        match self.step_open {
            true => Ok(()),
            false => Err(ErrorKind::from(UsageError::NoOpenStep)),
        }
    }

    fn require_rules(&self) -> Result<(), ErrorKind> {
        self.require_step()?;
        match self.section {
            Section::Rules => Ok(()),
            _ => Err(ErrorKind::from(UsageError::RuleAfterRules)),
        }
    }

    /// The false atom, noting the atom has been used.
    fn false_atom(&mut self) -> Result<Atom, ErrorKind> {
        let atom = self.config.false_atom.value;
        if atom == FALSE_ATOM_NONE {
            return Err(ErrorKind::from(UsageError::EmptyHeadWithoutFalseAtom));
        }
        if !self.false_head {
            log::debug!(target: targets::WRITER, "Integrity constraints written with head {atom}");
        }
        self.false_head = true;
        self.tracker.observe(atom);
        Ok(atom)
    }

    /// Writes the head of a record, with the count of atoms if the record type takes a count.
    fn write_head(&mut self, rule_type: RuleType, head: &[Atom]) {
        if matches!(rule_type, RuleType::Choice | RuleType::Disjunctive) {
            self.token(head.len());
        }
        for atom in head {
            self.tracker.observe(*atom);
            self.token(atom);
        }
    }

    /// Writes the counts and atoms of a body, with the atoms of negative literals first.
    ///
    /// The bound of a cardinality body is written between the counts and the atoms.
    fn write_body(&mut self, body: &[IntLiteral], bound: Option<Weight>) -> Result<(), ErrorKind> {
        let negative = body.iter().filter(|literal| !literal.polarity()).count();

        self.enter(RecordPart::NegativeBody)?;
        self.token(body.len());
        self.token(negative);
        if let Some(bound) = bound {
            self.token(bound);
        }
        for literal in body.iter().filter(|literal| !literal.polarity()) {
            self.tracker.observe(literal.atom());
            self.token(literal.atom());
        }

        self.enter(RecordPart::PositiveBody)?;
        for literal in body.iter().filter(|literal| literal.polarity()) {
            self.tracker.observe(literal.atom());
            self.token(literal.atom());
        }
        Ok(())
    }

    /// Writes the weights of a body, in the order the atoms of the body were written.
    fn write_weights(&mut self, body: &[WeightLiteral]) -> Result<(), ErrorKind> {
        self.enter(RecordPart::Weights)?;
        for weighted in body.iter().filter(|w| !w.literal.polarity()) {
            self.token(weighted.weight);
        }
        for weighted in body.iter().filter(|w| w.literal.polarity()) {
            self.token(weighted.weight);
        }
        Ok(())
    }

    /// Writes the terminators of the rule and symbol sections, as required to reach `section`.
    fn close_sections(&mut self, section: Section) -> Result<(), ErrorKind> {
        while self.section < section {
            self.token(0);
            self.end_line()?;
            self.section = match self.section {
                Section::Rules => Section::Symbols,
                Section::Symbols | Section::Compute => Section::Compute,
            };
        }
        Ok(())
    }

    /// Writes the compute statement of the step.
    fn write_compute(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.close_sections(Section::Compute)?;

        let (negative, positive) = split_by_polarity(literals);

        self.token("B+");
        self.end_line()?;
        for atom in positive {
            self.tracker.observe(atom);
            self.token(atom);
            self.end_line()?;
        }
        self.token(0);
        self.end_line()?;

        self.token("B-");
        self.end_line()?;
        for atom in negative {
            self.tracker.observe(atom);
            self.token(atom);
            self.end_line()?;
        }
        if self.false_head {
            self.token(self.config.false_atom.value);
            self.end_line()?;
        }
        self.token(0);
        self.end_line()
    }
}

impl<W: Write> ProgramSink for SmodelsWriter<W> {
    fn init_program(&mut self, incremental: bool) -> Result<(), ErrorKind> {
        if incremental && !self.config.clasp_ext.value {
            return Err(ErrorKind::from(UsageError::IncrementalWithoutExtension));
        }
        self.incremental = incremental;
        self.false_head = false;
        self.steps = 0;
        self.tracker.reset();
        Ok(())
    }

    fn begin_step(&mut self) -> Result<(), ErrorKind> {
        if self.step_open {
            return Err(ErrorKind::from(UsageError::StepAlreadyOpen));
        }
        if self.steps > 0 && !self.incremental {
            return Err(ErrorKind::from(UsageError::SingleStep));
        }

        self.step_open = true;
        self.section = Section::Rules;
        self.rules_in_step = false;
        self.tracker.begin_step();

        if self.incremental {
            self.start_record(RuleType::ClaspIncrement)?;
            self.token(0);
            self.enter(RecordPart::Outside)?;
            self.end_line()?;
        }
        Ok(())
    }

    fn rule(&mut self, kind: HeadKind, head: &[Atom], body: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.require_rules()?;
        if kind == HeadKind::Choice && head.is_empty() {
            log::trace!(target: targets::WRITER, "Skipped choice rule with empty head");
            return Ok(());
        }

        let false_head;
        let head = match head.is_empty() {
            true => {
                false_head = [self.false_atom()?];
                &false_head[..]
            }
            false => head,
        };

        let Some(rule_type) = format::head_rule_type(kind, head) else {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        };
        let atoms_valid = head.iter().all(|atom| valid_atom(*atom))
            && body.iter().all(|literal| valid_atom(literal.atom()));
        if !atoms_valid {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        }

        self.start_record(rule_type)?;
        self.write_head(rule_type, head);
        self.write_body(body, None)?;
        self.end_record()
    }

    fn sum_rule(
        &mut self,
        kind: HeadKind,
        head: &[Atom],
        bound: Weight,
        body: &[WeightLiteral],
    ) -> Result<(), ErrorKind> {
        self.require_rules()?;
        if kind == HeadKind::Choice && head.is_empty() {
            log::trace!(target: targets::WRITER, "Skipped choice rule with empty head");
            return Ok(());
        }

        let false_head;
        let head = match head.is_empty() {
            true => {
                false_head = [self.false_atom()?];
                &false_head[..]
            }
            false => head,
        };

        let Some(rule_type) = format::sum_rule_type(kind, head, bound, body) else {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        };
        if !head.iter().all(|atom| valid_atom(*atom)) {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        }

        let mut literals = std::mem::take(&mut self.literals);
        literals.clear();
        literals.extend(body.iter().map(|weighted| weighted.literal));

        self.start_record(rule_type)?;
        self.write_head(rule_type, head);
        let written = match rule_type {
            RuleType::Cardinality => self.write_body(&literals, Some(bound)),
            _ => {
                self.token(bound);
                self.write_body(&literals, None)
                    .and_then(|_| self.write_weights(body))
            }
        };
        self.literals = literals;
        written?;
        self.end_record()
    }

    fn minimize(&mut self, priority: Weight, literals: &[WeightLiteral]) -> Result<(), ErrorKind> {
        self.require_rules()?;
        for weighted in literals {
            if weighted.weight < 0 {
                return Err(ErrorKind::from(UsageError::NegativeWeight(
                    weighted.literal.atom(),
                )));
            }
            if !valid_atom(weighted.literal.atom()) {
                return Err(ErrorKind::from(UsageError::NotRepresentable));
            }
        }
        log::trace!(target: targets::WRITER, "Minimize statement at priority {priority} written without priority");

        let mut body = std::mem::take(&mut self.literals);
        body.clear();
        body.extend(literals.iter().map(|weighted| weighted.literal));

        self.start_record(RuleType::Optimize)?;
        self.token(0);
        let written = self
            .write_body(&body, None)
            .and_then(|_| self.write_weights(literals));
        self.literals = body;
        written?;
        self.end_record()
    }

    fn output(&mut self, name: &str, condition: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.require_step()?;
        let [literal] = *condition else {
            return Err(ErrorKind::from(UsageError::UnsupportedOutput));
        };
        if !literal.polarity() || !valid_atom(literal.atom()) {
            return Err(ErrorKind::from(UsageError::UnsupportedOutput));
        }
        // Names are read to the end of their line, less surrounding whitespace.
        if name.is_empty() || name.trim() != name || name.contains(['\n', '\r']) {
            return Err(ErrorKind::from(UsageError::UnsupportedOutput));
        }

        match self.section {
            Section::Compute => return Err(ErrorKind::from(UsageError::OutputAfterCompute)),
            Section::Rules if !self.rules_in_step => {
                return Err(ErrorKind::from(UsageError::OutputBeforeRules))
            }
            _ => {}
        }

        self.close_sections(Section::Symbols)?;
        self.tracker.observe(literal.atom());
        self.token(literal.atom());
        self.token(name);
        self.end_line()
    }

    fn external(&mut self, atom: Atom, value: Value) -> Result<(), ErrorKind> {
        if !self.config.clasp_ext.value {
            return Err(ErrorKind::from(UsageError::ExternalWithoutExtension));
        }
        self.require_rules()?;
        if !valid_atom(atom) {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        }

        self.tracker.observe(atom);
        match value.assign_code() {
            Some(code) => {
                self.start_record(RuleType::ClaspAssignExt)?;
                self.token(atom);
                self.token(code);
            }
            None => {
                self.start_record(RuleType::ClaspReleaseExt)?;
                self.token(atom);
            }
        }
        self.end_record()
    }

    fn assume(&mut self, literals: &[IntLiteral]) -> Result<(), ErrorKind> {
        self.require_step()?;
        if self.section == Section::Compute {
            return Err(ErrorKind::from(UsageError::RepeatedAssume));
        }
        if !literals.iter().all(|literal| valid_atom(literal.atom())) {
            return Err(ErrorKind::from(UsageError::NotRepresentable));
        }
        self.write_compute(literals)
    }

    fn acyc_edge(
        &mut self,
        _source: i32,
        _target: i32,
        _condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        Err(ErrorKind::from(UsageError::UnsupportedDirective("edge")))
    }

    fn heuristic(
        &mut self,
        _atom: Atom,
        _modifier: HeuristicModifier,
        _bias: i32,
        _priority: u32,
        _condition: &[IntLiteral],
    ) -> Result<(), ErrorKind> {
        Err(ErrorKind::from(UsageError::UnsupportedDirective("heuristic")))
    }

    fn end_step(&mut self) -> Result<(), ErrorKind> {
        self.require_step()?;
        if self.section != Section::Compute {
            self.write_compute(&[])?;
        }
        self.token(1);
        self.end_line()?;
        self.out.flush()?;

        self.step_open = false;
        self.steps += 1;
        log::debug!(
            target: targets::STEP,
            "Wrote step {} with fresh atoms {:?}",
            self.steps,
            self.tracker.fresh_atoms()
        );
        Ok(())
    }
}
