/*!
Reading programs in (extended) smodels format.

A [SmodelsReader] reads a program from a buffered stream, and passes each element of the program to a [ProgramSink].

# The format

A program is a sequence of steps, each of which is read in sections:

| state              | input                                            |
|--------------------|--------------------------------------------------|
| `ReadRules`        | rule records, terminated by `0`                  |
| `ReadSymbols`      | `atom name` lines, terminated by `0`             |
| `ReadComputeTrue`  | `B+` and atoms, terminated by `0`                |
| `ReadComputeFalse` | `B-` and atoms, terminated by `0`                |
| `ReadExtra`        | optionally `E` and atoms, terminated by `0`, and then the number of models |

Rule records begin with a code, see [RuleType](crate::structures::rule::RuleType).
Bodies are written as the count of literals, the count of negative literals, the atoms of negative literals, and the atoms of positive literals.
So, for example, the rule `1 :- 2, not 3.` is written `1 1 2 1 3 2`.

With the clasp extension enabled a program beginning with `90 0` is incremental, and each step of the program begins with `90 0`.
A step marker elsewhere is an error.
Further, with the extension external atoms may be declared by records of type 91 and 92, or in the `E` section.

The reader passes:
- [begin_step](ProgramSink::begin_step) before the first record of a step.
- Each rule, minimize statement, and external atom as read.
  Minimize statements are given increasing priorities in order of appearance within a step, starting from `0`.
- Each symbol as an [output](ProgramSink::output) whose condition is the atom of the symbol, unless the symbol is a converted pseudo-atom and converted atoms are dropped.
- Directives of converted pseudo-atoms, see [pseudo].
- Atoms of the external section, as [external](ProgramSink::external) atoms with a free value.
- The atoms of the compute statement as a single [assume](ProgramSink::assume), if there are any such atoms.
- [end_step](ProgramSink::end_step) after the number of models, if the step was read without error.

# Example

```rust
# use lp_smodels::config::ReaderConfig;
# use lp_smodels::dispatch::Dispatch;
# use lp_smodels::reader::SmodelsReader;
# use lp_smodels::structures::rule::HeadKind;
let program = b"1 1 0 0\n0\n1 a\n0\nB+\n0\nB-\n0\n1\n";

let mut events: Vec<Dispatch> = Vec::default();
let mut reader = SmodelsReader::new(program.as_slice(), &mut events, ReaderConfig::default());
let info = reader.parse().expect("valid program");
assert_eq!(info.rules, 1);

assert_eq!(
    events,
    vec![
        Dispatch::BeginStep,
        Dispatch::Rule { kind: HeadKind::Disjunctive, head: vec![1], body: vec![] },
        Dispatch::Output { name: "a".to_string(), condition: vec![1] },
        Dispatch::EndStep,
    ]
);
```
*/

mod lexer;
pub mod pseudo;

use std::io::BufRead;

pub use lexer::Lexer;
use pseudo::{NodeTable, PseudoAtom};

use crate::{
    config::ReaderConfig,
    incremental::AtomTracker,
    misc::log::targets::{self},
    program::ProgramSink,
    structures::{
        atom::{Atom, ATOM_MAX, ATOM_SENTINEL},
        directive::{HeuristicModifier, Value},
        literal::{IntLiteral, Literal},
        rule::{HeadKind, RuleType},
        weight::{Weight, WeightLiteral},
    },
    symbols::{AtomTable, NameTable},
    types::err::{ErrorKind, FormatError, UsageError},
};

/// The states of a reader.
///
/// The states from `BeginStep` to `EndStep` repeat for each step of a program.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReaderState {
    Attach,
    BeginStep,
    ReadRules,
    ReadSymbols,
    ReadComputeTrue,
    ReadComputeFalse,
    ReadExtra,
    EndStep,

    /// The program has been read.
    Finished,

    /// Reading stopped at an error.
    Failed,
}

/// A summary of a read program.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadInfo {
    /// Whether the program is incremental.
    pub incremental: bool,

    /// The count of steps read.
    pub steps: usize,

    /// The count of rules read.
    pub rules: usize,

    /// The count of minimize statements read.
    pub minimize: usize,

    /// The count of symbols read.
    pub symbols: usize,

    /// The count of atoms in compute statements.
    pub assumptions: usize,

    /// The count of external declarations.
    pub externals: usize,

    /// The largest atom read.
    pub max_atom: Atom,
}

/// The type of a handler of errors, returning a status code.
pub type ErrorHandler<'h> = dyn FnMut(&ErrorKind) -> i32 + 'h;

/// A heuristic pseudo-atom, waiting for the name of its target to be read.
struct PendingHeuristic {
    condition: Atom,
    target: String,
    modifier: HeuristicModifier,
    bias: i32,
    priority: u32,
}

/// A reader of programs in smodels format.
pub struct SmodelsReader<'t, R: BufRead, S: ProgramSink> {
    lexer: Lexer<R>,

    sink: S,

    config: ReaderConfig,

    /// An attached symbol table.
    atoms: Option<&'t mut dyn AtomTable>,

    /// A symbol table owned by the reader, used to resolve heuristic pseudo-atoms when no table is attached.
    own_atoms: Option<NameTable>,

    tracker: AtomTracker,

    nodes: NodeTable,

    state: ReaderState,

    incremental: bool,

    info: ReadInfo,

    /// The priority of the next minimize statement in the step.
    priority: Weight,

    /// Whether no record of the step has been read.
    first_record: bool,

    // Buffers reused across records, and cleared before use.
    head: Vec<Atom>,
    body: Vec<IntLiteral>,
    weighted: Vec<WeightLiteral>,
    assumptions: Vec<IntLiteral>,
    heuristics: Vec<PendingHeuristic>,
}

impl<'t, R: BufRead, S: ProgramSink> SmodelsReader<'t, R, S> {
    /// A reader of `input` which passes each element of the read program to `sink`.
    pub fn new(input: R, sink: S, config: ReaderConfig) -> Self {
        if config.converts() {
            log::debug!(
                target: targets::CONVERSION,
                "Converting edges: {}, heuristics: {}, dropping converted atoms: {}",
                config.convert_edges.value,
                config.convert_heuristic.value,
                config.drop_converted.value
            );
        }

        let own_atoms = match config.convert_heuristic.value {
            true => Some(NameTable::default()),
            false => None,
        };

        SmodelsReader {
            lexer: Lexer::new(input),
            sink,
            config,
            atoms: None,
            own_atoms,
            tracker: AtomTracker::default(),
            nodes: NodeTable::default(),
            state: ReaderState::Attach,
            incremental: false,
            info: ReadInfo::default(),
            priority: 0,
            first_record: true,
            head: Vec::default(),
            body: Vec::default(),
            weighted: Vec::default(),
            assumptions: Vec::default(),
            heuristics: Vec::default(),
        }
    }

    /// Attaches a symbol table, to which each symbol read is added.
    ///
    /// An attached table takes the place of any table owned by the reader.
    pub fn with_atom_table(mut self, table: &'t mut dyn AtomTable) -> Self {
        self.atoms = Some(table);
        self.own_atoms = None;
        self
    }

    /// The current state of the reader.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Whether the program read is incremental.
    ///
    /// Known once the reader has left the [Attach](ReaderState::Attach) state.
    pub fn incremental(&self) -> bool {
        self.incremental
    }

    /// The record of atoms across steps.
    pub fn tracker(&self) -> &AtomTracker {
        &self.tracker
    }

    /// A summary of what has been read so far.
    pub fn info(&self) -> &ReadInfo {
        &self.info
    }

    pub fn sink(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Reads the program in full.
    pub fn parse(&mut self) -> Result<ReadInfo, ErrorKind> {
        while self.parse_step()? {}
        Ok(self.info.clone())
    }

    /// Reads the next step of the program.
    ///
    /// Returns whether some further step remains to be read.
    pub fn parse_step(&mut self) -> Result<bool, ErrorKind> {
        if self.state == ReaderState::Finished {
            return Ok(false);
        }
        loop {
            self.advance()?;
            match self.state {
                ReaderState::BeginStep => return Ok(true),
                ReaderState::Finished => return Ok(false),
                _ => {}
            }
        }
    }

    /// Performs the action of the current state and moves to the next state.
    fn advance(&mut self) -> Result<(), ErrorKind> {
        let next = match self.state {
            ReaderState::Attach => self.attach().map(|_| ReaderState::BeginStep),

            ReaderState::BeginStep => self.begin_step().map(|_| ReaderState::ReadRules),

            ReaderState::ReadRules => self.read_rules().map(|_| ReaderState::ReadSymbols),

            ReaderState::ReadSymbols => self.read_symbols().map(|_| ReaderState::ReadComputeTrue),

            ReaderState::ReadComputeTrue => self
                .read_compute("B+", true)
                .map(|_| ReaderState::ReadComputeFalse),

            ReaderState::ReadComputeFalse => self
                .read_compute("B-", false)
                .map(|_| ReaderState::ReadExtra),

            ReaderState::ReadExtra => self.read_extra().map(|_| ReaderState::EndStep),

            ReaderState::EndStep => self.end_step(),

            ReaderState::Finished => Ok(ReaderState::Finished),

            ReaderState::Failed => Err(ErrorKind::from(UsageError::ParseAborted)),
        };

        match next {
            Ok(state) => {
                self.state = state;
                Ok(())
            }
            Err(e) => {
                log::debug!(target: targets::READER, "Failed at line {}: {e}", self.lexer.line());
                self.state = ReaderState::Failed;
                Err(e)
            }
        }
    }

    /// Checks the input begins as a program in smodels format, and notes whether the program is incremental.
    fn attach(&mut self) -> Result<(), ErrorKind> {
        let start = self.lexer.peek_token()?.map(str::to_owned);
        let incremental = match start {
            Some(token) if token.bytes().all(|byte| byte.is_ascii_digit()) => {
                self.config.clasp_ext.value && token == "90"
            }

            _ => return Err(self.lexer.error(FormatError::InvalidStart)),
        };

        self.incremental = incremental;
        self.info.incremental = incremental;
        log::info!(target: targets::READER, "Reading smodels program (incremental: {incremental})");
        self.sink.init_program(incremental)
    }

    fn begin_step(&mut self) -> Result<(), ErrorKind> {
        self.tracker.begin_step();
        self.priority = 0;
        self.first_record = true;
        log::debug!(
            target: targets::STEP,
            "Step {} from atom {}",
            self.tracker.steps(),
            self.tracker.floor()
        );
        self.sink.begin_step()
    }

    fn end_step(&mut self) -> Result<ReaderState, ErrorKind> {
        self.sink.end_step()?;
        self.info.steps += 1;
        self.info.max_atom = self.tracker.max_atom();
        log::debug!(
            target: targets::STEP,
            "Step {} introduced atoms {:?}",
            self.tracker.steps(),
            self.tracker.fresh_atoms()
        );

        match self.lexer.at_end()? {
            true => Ok(ReaderState::Finished),
            false if self.incremental => Ok(ReaderState::BeginStep),
            false => Err(self.lexer.error(FormatError::TrailingInput)),
        }
    }

    /// Reads an atom, where `what` describes the atom for errors.
    fn match_atom(&mut self, what: &'static str) -> Result<Atom, ErrorKind> {
        let atom = self.lexer.match_uint(what)?;
        if atom == ATOM_SENTINEL {
            return Err(self.lexer.error(FormatError::UnexpectedTerminator(what)));
        }
        if atom > ATOM_MAX {
            return Err(self.lexer.error(FormatError::InvalidAtom(atom)));
        }
        self.tracker.observe(atom);
        Ok(atom)
    }

    /// Reads a non-negative weight, where `what` describes the weight for errors.
    fn match_weight(&mut self, what: &'static str) -> Result<Weight, ErrorKind> {
        let value = self.lexer.match_uint(what)?;
        match Weight::try_from(value) {
            Ok(weight) => Ok(weight),
            Err(_) => Err(self.lexer.error(FormatError::InvalidNumber(what))),
        }
    }

    /// Reads `size` literals, the first `negative` of which are negative, to the body buffer.
    ///
    /// Returns the count of literals read.
    fn match_literals(&mut self, size: u32, negative: u32) -> Result<usize, ErrorKind> {
        if negative > size {
            return Err(self
                .lexer
                .error(FormatError::InvalidNumber("negative body size")));
        }
        self.body.clear();
        for index in 0..size {
            let atom = self.match_atom("body atom")?;
            self.body.push(IntLiteral::new(atom, index >= negative));
        }
        Ok(self.body.len())
    }

    /// Reads a normal body to the body buffer.
    fn match_body(&mut self) -> Result<usize, ErrorKind> {
        let size = self.lexer.match_uint("body size")?;
        let negative = self.lexer.match_uint("negative body size")?;
        self.match_literals(size, negative)
    }

    /// Reads a sum body to the weighted buffer, with weights if `weights` is true and otherwise with unit weights.
    ///
    /// Returns the bound of the sum.
    fn match_sum(&mut self, weights: bool) -> Result<Weight, ErrorKind> {
        let (bound, size, negative) = match weights {
            true => {
                let bound = self.match_weight("bound")?;
                let size = self.lexer.match_uint("body size")?;
                let negative = self.lexer.match_uint("negative body size")?;
                (bound, size, negative)
            }
            false => {
                let size = self.lexer.match_uint("body size")?;
                let negative = self.lexer.match_uint("negative body size")?;
                let bound = self.match_weight("bound")?;
                (bound, size, negative)
            }
        };

        self.match_literals(size, negative)?;
        self.weighted.clear();
        for index in 0..self.body.len() {
            let weight = match weights {
                true => self.match_weight("weight")?,
                false => 1,
            };
            self.weighted.push(WeightLiteral::new(self.body[index], weight));
        }
        Ok(bound)
    }

    /// Reads a head of the given size to the head buffer.
    fn match_head(&mut self, size: u32) -> Result<(), ErrorKind> {
        self.head.clear();
        for _ in 0..size {
            let atom = self.match_atom("head atom")?;
            self.head.push(atom);
        }
        Ok(())
    }

    fn require_extension(&self, what: &'static str) -> Result<(), ErrorKind> {
        match self.config.clasp_ext.value {
            true => Ok(()),
            false => Err(self.lexer.error(FormatError::ExtensionDisabled(what))),
        }
    }

    /// Reads rule records, up to and including the terminating `0`.
    fn read_rules(&mut self) -> Result<(), ErrorKind> {
        loop {
            let code = self.lexer.match_uint("rule type")?;
            let rule_type = match RuleType::try_from(code) {
                Ok(rule_type) => rule_type,
                Err(unknown) => return Err(self.lexer.error(FormatError::UnknownRuleType(unknown))),
            };
            log::trace!(target: targets::READER, "Rule record {rule_type} at line {}", self.lexer.line());
            if rule_type.is_extension() {
                self.require_extension(rule_type.name())?;
            }
            let first_record = std::mem::replace(&mut self.first_record, false);

            match rule_type {
                RuleType::End => break,

                RuleType::Basic => {
                    self.match_head(1)?;
                    self.match_body()?;
                    self.sink.rule(HeadKind::Disjunctive, &self.head, &self.body)?;
                    self.info.rules += 1;
                }

                RuleType::Choice | RuleType::Disjunctive => {
                    let size = self.lexer.match_uint("head size")?;
                    if size == 0 {
                        return Err(self.lexer.error(FormatError::UnexpectedTerminator("head size")));
                    }
                    self.match_head(size)?;
                    self.match_body()?;
                    let kind = match rule_type {
                        RuleType::Choice => HeadKind::Choice,
                        _ => HeadKind::Disjunctive,
                    };
                    self.sink.rule(kind, &self.head, &self.body)?;
                    self.info.rules += 1;
                }

                RuleType::Cardinality | RuleType::Weight => {
                    self.match_head(1)?;
                    let bound = self.match_sum(rule_type == RuleType::Weight)?;
                    self.sink
                        .sum_rule(HeadKind::Disjunctive, &self.head, bound, &self.weighted)?;
                    self.info.rules += 1;
                }

                RuleType::Optimize => {
                    if self.lexer.match_uint("minimize rule")? != 0 {
                        return Err(self.lexer.error(FormatError::ExpectedZero("in minimize rule")));
                    }
                    let size = self.lexer.match_uint("body size")?;
                    let negative = self.lexer.match_uint("negative body size")?;
                    self.match_literals(size, negative)?;
                    self.weighted.clear();
                    for index in 0..self.body.len() {
                        let weight = self.match_weight("weight")?;
                        self.weighted.push(WeightLiteral::new(self.body[index], weight));
                    }
                    self.sink.minimize(self.priority, &self.weighted)?;
                    self.priority += 1;
                    self.info.minimize += 1;
                }

                RuleType::ClaspIncrement => {
                    if !(self.incremental && first_record) {
                        return Err(self.lexer.error(FormatError::MisplacedStepMarker));
                    }
                    if self.lexer.match_uint("step marker")? != 0 {
                        return Err(self.lexer.error(FormatError::ExpectedZero("after step marker")));
                    }
                }

                RuleType::ClaspAssignExt => {
                    let atom = self.match_atom("external atom")?;
                    let code = self.lexer.match_uint("external value")?;
                    let Some(value) = Value::from_assign_code(code) else {
                        return Err(self.lexer.error(FormatError::InvalidNumber("external value")));
                    };
                    self.sink.external(atom, value)?;
                    self.info.externals += 1;
                }

                RuleType::ClaspReleaseExt => {
                    let atom = self.match_atom("external atom")?;
                    self.sink.external(atom, Value::Release)?;
                    self.info.externals += 1;
                }
            }
        }
        Ok(())
    }

    /// The symbol table in use, if any.
    fn table(&mut self) -> Option<&mut dyn AtomTable> {
        match (&mut self.atoms, &mut self.own_atoms) {
            (Some(table), _) => Some(&mut **table as &mut dyn AtomTable),
            (None, Some(table)) => Some(table as &mut dyn AtomTable),
            (None, None) => None,
        }
    }

    /// Reads the symbol section, up to and including the terminating `0`.
    fn read_symbols(&mut self) -> Result<(), ErrorKind> {
        self.heuristics.clear();
        loop {
            let atom = self.lexer.match_uint("atom")?;
            if atom == ATOM_SENTINEL {
                break;
            }
            if atom > ATOM_MAX {
                return Err(self.lexer.error(FormatError::InvalidAtom(atom)));
            }
            self.tracker.observe(atom);

            let name = self.lexer.match_line();
            if name.is_empty() {
                return Err(self.lexer.error(FormatError::EmptyName));
            }
            self.add_symbol(atom, &name)?;
            self.info.symbols += 1;
        }
        self.resolve_heuristics()
    }

    /// Passes on the association of `name` with `atom`, converting the atom if the atom is a pseudo-atom.
    fn add_symbol(&mut self, atom: Atom, name: &str) -> Result<(), ErrorKind> {
        let converted = self.convert(atom, name)?;
        let output = !(converted && self.config.drop_converted.value);

        if !self.tracker.is_fresh(atom) {
            log::debug!(target: targets::SYMBOLS, "Name {name} for atom {atom} of an earlier step");
        }

        if let Some(table) = self.table() {
            table.add(atom, name, output);
        }
        match output {
            true => self.sink.output(name, &[IntLiteral::new(atom, true)]),
            false => {
                log::trace!(target: targets::CONVERSION, "Dropped {name}");
                Ok(())
            }
        }
    }

    /// Converts `atom` to a directive if `name` is the name of a pseudo-atom and conversion is requested.
    ///
    /// Returns whether the atom was converted.
    fn convert(&mut self, atom: Atom, name: &str) -> Result<bool, ErrorKind> {
        let names = &self.config.names;

        if self.config.convert_edges.value && pseudo::has_edge_prefix(name, names) {
            match pseudo::match_edge(name, names) {
                Some(PseudoAtom::Edge { source, target }) => {
                    match (self.nodes.node(source), self.nodes.node(target)) {
                        (Some(source), Some(target)) => {
                            log::trace!(target: targets::CONVERSION, "Edge ({source}, {target}) from {name}");
                            self.sink
                                .acyc_edge(source, target, &[IntLiteral::new(atom, true)])?;
                            return Ok(true);
                        }
                        _ => {
                            log::warn!(target: targets::CONVERSION, "Ignored conversion of edge atom {name}, as nodes are exhausted");
                        }
                    }
                }
                _ => {
                    log::warn!(target: targets::CONVERSION, "Ignored conversion of malformed edge atom {name}");
                }
            }
        }

        let names = &self.config.names;
        if self.config.convert_heuristic.value && pseudo::has_heuristic_prefix(name, names) {
            match pseudo::match_heuristic(name, names) {
                Some(PseudoAtom::Heuristic {
                    target,
                    modifier,
                    bias,
                    priority,
                }) => {
                    self.heuristics.push(PendingHeuristic {
                        condition: atom,
                        target: target.to_owned(),
                        modifier,
                        bias,
                        priority,
                    });
                    return Ok(true);
                }
                _ => {
                    log::warn!(target: targets::CONVERSION, "Ignored conversion of malformed heuristic atom {name}");
                }
            }
        }

        Ok(false)
    }

    /// Passes on each heuristic directive of the step whose target has been named.
    fn resolve_heuristics(&mut self) -> Result<(), ErrorKind> {
        let heuristics = std::mem::take(&mut self.heuristics);
        for heuristic in &heuristics {
            let target = self.table().and_then(|table| table.find(&heuristic.target));
            match target {
                Some(target) => {
                    self.sink.heuristic(
                        target,
                        heuristic.modifier,
                        heuristic.bias,
                        heuristic.priority,
                        &[IntLiteral::new(heuristic.condition, true)],
                    )?;
                }
                None => {
                    log::warn!(target: targets::CONVERSION, "Ignored heuristic for unknown atom {}", heuristic.target);
                }
            }
        }
        self.heuristics = heuristics;
        self.heuristics.clear();
        Ok(())
    }

    /// Reads a part of the compute statement, with `section` naming the part.
    ///
    /// The atoms of the true part are read as positive literals, and the atoms of the false part as negative literals.
    /// The literals read are passed on as a single assumption after any external section, see [read_extra](SmodelsReader::read_extra).
    fn read_compute(&mut self, section: &'static str, value: bool) -> Result<(), ErrorKind> {
        if !self.lexer.match_word(section)? {
            return Err(self.lexer.error(FormatError::ExpectedSection(section)));
        }
        if value {
            self.assumptions.clear();
        }

        loop {
            let atom = self.lexer.match_uint("compute atom")?;
            if atom == ATOM_SENTINEL {
                break;
            }
            if atom > ATOM_MAX {
                return Err(self.lexer.error(FormatError::InvalidAtom(atom)));
            }
            self.tracker.observe(atom);
            self.assumptions.push(IntLiteral::new(atom, value));
        }

        Ok(())
    }

    /// Reads the optional external section and the number of models.
    ///
    /// External atoms are passed on before the assumption of the compute statement, as a sink expects external declarations alongside rules.
    fn read_extra(&mut self) -> Result<(), ErrorKind> {
        if self.lexer.match_word("E")? {
            self.require_extension("external section (E)")?;
            loop {
                let atom = self.lexer.match_uint("external atom")?;
                if atom == ATOM_SENTINEL {
                    break;
                }
                if atom > ATOM_MAX {
                    return Err(self.lexer.error(FormatError::InvalidAtom(atom)));
                }
                self.tracker.observe(atom);
                self.sink.external(atom, Value::Free)?;
                self.info.externals += 1;
            }
        }

        if !self.assumptions.is_empty() {
            self.info.assumptions += self.assumptions.len();
            self.sink.assume(&self.assumptions)?;
        }

        let models = self.lexer.match_uint("number of models")?;
        log::trace!(target: targets::READER, "Number of models: {models}");
        Ok(())
    }
}

/// Reads the program in smodels format from `input`, passing each element of the program to `sink`.
///
/// On error, `handler` is called with the error if given, and the result of `handler` is returned as the status.
/// Otherwise, the error is returned.
/// On success, the status is `0`.
///
/// ```rust
/// # use lp_smodels::config::ReaderConfig;
/// # use lp_smodels::dispatch::Dispatch;
/// # use lp_smodels::reader::read_smodels;
/// # use lp_smodels::types::err::ErrorKind;
/// let mut events: Vec<Dispatch> = Vec::default();
/// let mut handler = |e: &ErrorKind| { eprintln!("{e}"); 2 };
///
/// let status = read_smodels(b"7 1 0 0".as_slice(), &mut events, Some(&mut handler), &ReaderConfig::default());
/// assert_eq!(status.ok(), Some(2));
/// assert_eq!(events, vec![Dispatch::BeginStep]);
/// ```
pub fn read_smodels<R: BufRead, S: ProgramSink>(
    input: R,
    sink: S,
    handler: Option<&mut ErrorHandler<'_>>,
    config: &ReaderConfig,
) -> Result<i32, ErrorKind> {
    let mut reader = SmodelsReader::new(input, sink, config.clone());
    match reader.parse() {
        Ok(info) => {
            log::info!(target: targets::READER, "Read {} steps and {} rules", info.steps, info.rules);
            Ok(0)
        }
        Err(e) => match handler {
            Some(handler) => Ok(handler(&e)),
            None => Err(e),
        },
    }
}
