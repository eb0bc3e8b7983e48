//! Error types used in the library.
//!
//! - [ParseError]s are raised by a reader on input outside of the grammar of the smodels format.
//!   Each parse error notes the line of the input on which the error was found, together with a [FormatError].
//! - [UsageError]s are raised by a writer when a caller breaks a precondition of the writer.
//!   These are programming errors, and a writer should not be used after returning one.
//! - I/O errors from an underlying stream are passed along as they are.
//!
//! Names of the error enums --- for the most part --- overlap with the structures which raise them.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

/// The top-level error type of the library.
#[derive(Debug)]
pub enum ErrorKind {
    /// Input outside of the grammar of the format.
    Parse(ParseError),

    /// Some precondition was not met by a caller.
    Usage(UsageError),

    /// An error from an underlying stream.
    Io(std::io::Error),

    /// An error raised by the consumer of a reader, which stops the read.
    Sink(String),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Usage(e) => write!(f, "usage error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Sink(msg) => write!(f, "sink error: {msg}"),
        }
    }
}

impl std::error::Error for ErrorKind {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e)
    }
}

/// An error found when parsing, at some line of the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseError {
    /// The line (counting from 1) at which the error was found.
    pub line: usize,

    /// The kind of error.
    pub kind: FormatError,
}

impl ParseError {
    pub fn new(line: usize, kind: FormatError) -> Self {
        Self { line, kind }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error at line {}: {}", self.line, self.kind)
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Input outside of the grammar of the smodels format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// The input does not begin as a program in smodels format.
    InvalidStart,

    /// The input ended (or a line ended) where some token was required.
    MissingToken(&'static str),

    /// A token which should have been a number (of the given sort) was not.
    InvalidNumber(&'static str),

    /// A record began with an unknown code.
    UnknownRuleType(u32),

    /// A record or section of the clasp extension was found, though the extension is not enabled.
    ExtensionDisabled(&'static str),

    /// Some number other than `0` where `0` was required.
    ExpectedZero(&'static str),

    /// The (named) start of a section was expected.
    ExpectedSection(&'static str),

    /// A symbol without a name.
    EmptyName,

    /// An atom was outside of the range of atoms.
    InvalidAtom(u32),

    /// The sentinel `0` was found where an atom was required.
    UnexpectedTerminator(&'static str),

    /// Input continued after the program ended.
    TrailingInput,

    /// A step marker other than as the first record of a step of an incremental program.
    MisplacedStepMarker,

    /// A line of input which is not valid UTF-8.
    InvalidEncoding,
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStart => write!(f, "unrecognised start of smodels program"),
            Self::MissingToken(what) => write!(f, "{what} expected"),
            Self::InvalidNumber(what) => write!(f, "invalid {what}"),
            Self::UnknownRuleType(code) => write!(f, "unrecognised rule type {code}"),
            Self::ExtensionDisabled(what) => write!(f, "{what} requires the clasp extension"),
            Self::ExpectedZero(what) => write!(f, "0 expected {what}"),
            Self::ExpectedSection(name) => write!(f, "'{name}' expected"),
            Self::EmptyName => write!(f, "symbol name expected"),
            Self::InvalidAtom(atom) => write!(f, "atom {atom} out of range"),
            Self::UnexpectedTerminator(what) => write!(f, "{what} expected, found 0"),
            Self::TrailingInput => write!(f, "input after end of program"),
            Self::MisplacedStepMarker => {
                write!(f, "step marker only expected at the start of an incremental step")
            }
            Self::InvalidEncoding => write!(f, "invalid UTF-8"),
        }
    }
}

/// A precondition of a writer (or some other receiver of a program) was not met.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UsageError {
    /// An incremental program was started without the clasp extension.
    IncrementalWithoutExtension,

    /// An external atom was declared without the clasp extension.
    ExternalWithoutExtension,

    /// A rule is not representable in the format.
    NotRepresentable,

    /// A rule with an empty head was given, though no false atom was reserved.
    EmptyHeadWithoutFalseAtom,

    /// A symbol was given before any rule of the step.
    OutputBeforeRules,

    /// A symbol was given after the compute statement of the step.
    OutputAfterCompute,

    /// A rule was given after the symbols or compute statement of the step.
    RuleAfterRules,

    /// A second compute statement was given in a single step.
    RepeatedAssume,

    /// The condition of an output is not a single positive literal.
    UnsupportedOutput,

    /// A directive without representation in the format.
    UnsupportedDirective(&'static str),

    /// A minimize statement with a negative weight.
    NegativeWeight(Atom),

    /// Some part of a program was given outside of a step.
    NoOpenStep,

    /// A step was started while another was open.
    StepAlreadyOpen,

    /// A part of a record was written out of order.
    RecordOrder,

    /// A second step was started in a program which is not incremental.
    SingleStep,

    /// A reader was used after an earlier error.
    ParseAborted,
}

impl std::fmt::Display for UsageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncrementalWithoutExtension => {
                write!(f, "incremental programs require the clasp extension")
            }
            Self::ExternalWithoutExtension => {
                write!(f, "external directives require the clasp extension")
            }
            Self::NotRepresentable => write!(f, "rule not representable in smodels format"),
            Self::EmptyHeadWithoutFalseAtom => {
                write!(f, "integrity constraints require a false atom")
            }
            Self::OutputBeforeRules => write!(f, "symbols are only supported after rules"),
            Self::OutputAfterCompute => write!(f, "symbols after compute statement"),
            Self::RuleAfterRules => write!(f, "rule after symbols or compute statement"),
            Self::RepeatedAssume => write!(f, "at most one compute statement per step"),
            Self::UnsupportedOutput => {
                write!(f, "output condition must be a single positive atom")
            }
            Self::UnsupportedDirective(name) => {
                write!(f, "{name} directive not supported in smodels format")
            }
            Self::NegativeWeight(atom) => write!(f, "negative weight for atom {atom}"),
            Self::NoOpenStep => write!(f, "no open step"),
            Self::StepAlreadyOpen => write!(f, "step already open"),
            Self::RecordOrder => write!(f, "record written out of order"),
            Self::SingleStep => write!(f, "a program which is not incremental has one step"),
            Self::ParseAborted => write!(f, "parse aborted by an earlier error"),
        }
    }
}

impl From<UsageError> for ErrorKind {
    fn from(e: UsageError) -> Self {
        ErrorKind::Usage(e)
    }
}
