//! A library for reading and writing logic programs in the numeric smodels format.
//!
//! The smodels format is the intermediate format of a grounder, such as lparse or gringo, and an answer set solver, such as smodels or clasp.
//! A program in the format is a list of numeric rule records, a table of atom names, a compute statement, and the number of models to compute.
//! Together with the extension of clasp, the format may also represent incremental programs and external atoms.
//!
//! # Orientation
//!
//! The library is designed around the [ProgramSink](program::ProgramSink) trait, a receiver of the elements of a program.
//!
//! - A [reader](reader) reads a program from a stream, and passes each element to a sink.
//! - A [writer](writer) is a sink which writes each element to a stream.
//! - A `Vec` of [dispatches](dispatch) is a sink which records each element, and recorded elements may be replayed to another sink.
//!
//! Alongside:
//! - The [format] predicates decide whether a rule has a representation in the format.
//! - An [AtomTracker](incremental::AtomTracker) records which atoms are fresh to a step of an incremental program.
//! - An [AtomTable](symbols::AtomTable) records the names of atoms read.
//! - Names of some atoms may stand for directives (edges, heuristics), which a reader may be [configured](config) to convert.
//!
//! # Examples
//!
//! + Read a program, and write the program again.
//!
//! ```rust
//! # use lp_smodels::config::{ReaderConfig, WriterConfig};
//! # use lp_smodels::reader::SmodelsReader;
//! # use lp_smodels::writer::SmodelsWriter;
//! let program = "1 1 1 1 2\n3 2 2 3 0 0\n0\n1 a\n3 c\n0\nB+\n0\nB-\n0\n1\n";
//!
//! let writer = SmodelsWriter::new(Vec::default(), WriterConfig::default());
//! let mut reader = SmodelsReader::new(program.as_bytes(), writer, ReaderConfig::default());
//! assert!(reader.parse().is_ok());
//!
//! let written = reader.into_sink().into_inner();
//! assert_eq!(written, program.as_bytes());
//! ```
//!
//! + Read an incremental program, as a sequence of dispatches.
//!
//! ```rust
//! # use lp_smodels::config::ReaderConfig;
//! # use lp_smodels::dispatch::Dispatch;
//! # use lp_smodels::reader::SmodelsReader;
//! # use lp_smodels::structures::directive::Value;
//! let program = "90 0\n91 1 2\n0\n0\nB+\n0\nB-\n0\n1\n90 0\n92 1\n0\n0\nB+\n0\nB-\n0\n1\n";
//!
//! let mut config = ReaderConfig::default();
//! config.enable_clasp_ext();
//!
//! let mut events: Vec<Dispatch> = Vec::default();
//! let mut reader = SmodelsReader::new(program.as_bytes(), &mut events, config);
//! let info = reader.parse().expect("valid program");
//! assert!(info.incremental);
//! assert_eq!(info.steps, 2);
//!
//! assert!(events.contains(&Dispatch::External { atom: 1, value: Value::Free }));
//! assert!(events.contains(&Dispatch::External { atom: 1, value: Value::Release }));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs of the conversion of pseudo-atoms can be filtered with `RUST_LOG=conversion …` or,
//! - Logs of the steps of an incremental program can be found with `RUST_LOG=step=debug …`

#![allow(clippy::single_match)]

pub mod config;
pub mod structures;
pub mod types;

pub mod format;
pub mod incremental;
pub mod program;
pub mod symbols;

pub mod dispatch;

pub mod reader;
pub mod writer;

pub mod misc;
