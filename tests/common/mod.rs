#![allow(dead_code)]

use lp_smodels::{
    config::{ReaderConfig, WriterConfig},
    dispatch::{replay, Dispatch},
    program::ProgramSink,
    reader::{ReadInfo, SmodelsReader},
    symbols::AtomTable,
    types::err::ErrorKind,
    writer::SmodelsWriter,
};

pub mod pcg;

/// Reads `program` as a list of dispatches.
pub fn read_events(program: &str, config: &ReaderConfig) -> Result<Vec<Dispatch>, ErrorKind> {
    let mut events: Vec<Dispatch> = Vec::default();
    SmodelsReader::new(program.as_bytes(), &mut events, config.clone()).parse()?;
    Ok(events)
}

/// Reads `program` as a list of dispatches, with `table` attached to the reader.
pub fn read_events_with_table(
    program: &str,
    config: &ReaderConfig,
    table: &mut dyn AtomTable,
) -> Result<(Vec<Dispatch>, ReadInfo), ErrorKind> {
    let mut events: Vec<Dispatch> = Vec::default();
    let info = SmodelsReader::new(program.as_bytes(), &mut events, config.clone())
        .with_atom_table(table)
        .parse()?;
    Ok((events, info))
}

/// The events of `program`, read with the clasp extension enabled.
pub fn read_ext_events(program: &str) -> Result<Vec<Dispatch>, ErrorKind> {
    let mut config = ReaderConfig::default();
    config.enable_clasp_ext();
    read_events(program, &config)
}

/// Writes `events` with a writer for a program which is incremental if `incremental` is true.
pub fn write_events(
    events: &[Dispatch],
    incremental: bool,
    config: WriterConfig,
) -> Result<String, ErrorKind> {
    let mut writer = SmodelsWriter::new(Vec::default(), config);
    writer.init_program(incremental)?;
    replay(events, &mut writer)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Applies `build` to a fresh writer and returns what was written.
pub fn written_by(
    config: WriterConfig,
    build: impl FnOnce(&mut SmodelsWriter<Vec<u8>>) -> Result<(), ErrorKind>,
) -> Result<String, ErrorKind> {
    let mut writer = SmodelsWriter::new(Vec::default(), config);
    build(&mut writer)?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Reads `program` and writes the program again with the given configurations.
pub fn rewrite(
    program: &str,
    reader_config: &ReaderConfig,
    writer_config: WriterConfig,
) -> Result<String, ErrorKind> {
    let mut writer = SmodelsWriter::new(Vec::default(), writer_config);
    SmodelsReader::new(program.as_bytes(), &mut writer, reader_config.clone()).parse()?;
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Lines of a (short) program, joined with line breaks and with a final line break.
pub fn program(lines: &[&str]) -> String {
    let mut program = lines.join("\n");
    program.push('\n');
    program
}
