use std::{
    ffi::OsString,
    io::{BufRead, BufReader},
    path::Path,
};

use lp_smodels::{
    config::ReaderConfig,
    program::ProgramSink,
    reader::{ReadInfo, SmodelsReader},
    types::err::ErrorKind,
};

pub(super) enum ReadError {
    #[cfg_attr(feature = "xz", allow(dead_code))]
    UnsupportedExtension(OsString),
    FailedToOpen,
    ParseError(ErrorKind),
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::UnsupportedExtension(ex) => {
                write!(f, "Extension {ex:?} requires the 'xz' feature.")
            }
            Self::FailedToOpen => write!(f, "Failed to open program file."),
            Self::ParseError(err) => write!(f, "{err}"),
        }
    }
}

/// Reads the program from `input` to `sink` and writes a report.
pub(super) fn read_program(
    input: impl BufRead,
    sink: impl ProgramSink,
    config: ReaderConfig,
) -> Result<ReadInfo, ReadError> {
    let mut reader = SmodelsReader::new(input, sink, config);

    match reader.parse() {
        Ok(info) => {
            eprintln!("c Incremental:      {}", info.incremental);
            eprintln!("c Steps:            {}", info.steps);
            eprintln!("c Rules:            {}", info.rules);
            eprintln!("c Minimize:         {}", info.minimize);
            eprintln!("c Symbols:          {}", info.symbols);
            eprintln!("c Maximal atom:     {}", info.max_atom);
            Ok(info)
        }

        Err(e) => Err(ReadError::ParseError(e)),
    }
}

/// Reads the program at `path` to `sink`, decompressing the program if the extension of `path` is `xz`.
pub(super) fn read_path(
    path: &Path,
    sink: impl ProgramSink,
    config: ReaderConfig,
) -> Result<ReadInfo, ReadError> {
    eprintln!("c Reading smodels program from {path:?}");

    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(ReadError::FailedToOpen),
    };

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => read_program(
            BufReader::new(xz2::read::XzDecoder::new(&file)),
            sink,
            config,
        ),

        #[cfg(not(feature = "xz"))]
        Some(extension) if extension == "xz" => {
            Err(ReadError::UnsupportedExtension(extension.to_owned()))
        }

        _ => read_program(BufReader::new(&file), sink, config),
    }
}

#[cfg(test)]
mod read_tests {
    use super::*;

    use lp_smodels::dispatch::Dispatch;

    fn temporary(name: &str, contents: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("lp_smodels_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).expect("writable temporary file");
        path
    }

    #[test]
    fn plain_file() {
        let path = temporary("plain.sm", b"1 1 0 0\n0\n1 a\n0\nB+\n0\nB-\n0\n1\n");
        let mut events: Vec<Dispatch> = Vec::default();
        let info = read_path(&path, &mut events, ReaderConfig::default());
        let _ = std::fs::remove_file(&path);

        assert!(info.is_ok_and(|info| info.rules == 1));
        assert_eq!(events.len(), 4);
    }

    #[cfg(not(feature = "xz"))]
    #[test]
    fn xz_requires_feature() {
        let path = temporary("compressed.sm.xz", b"");
        let mut events: Vec<Dispatch> = Vec::default();
        let result = read_path(&path, &mut events, ReaderConfig::default());
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ReadError::UnsupportedExtension(ex)) if ex == "xz"));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("lp_smodels_missing_file.sm");
        let mut events: Vec<Dispatch> = Vec::default();
        let result = read_path(&path, &mut events, ReaderConfig::default());
        assert!(matches!(result, Err(ReadError::FailedToOpen)));
    }
}
