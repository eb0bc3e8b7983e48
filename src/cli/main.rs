use std::io::{BufWriter, Write};

use clap::Parser;
use lp_smodels::{
    dispatch::{Dispatch, Dispatcher},
    program::ProgramSink,
    types::err::ErrorKind,
    writer::SmodelsWriter,
};

mod config;
mod read;

use config::Args;
use read::{read_path, read_program, ReadError};

fn read(args: &Args, sink: impl ProgramSink) -> Result<(), ReadError> {
    let config = args.reader_config();
    match &args.path {
        Some(path) => read_path(path, sink, config),
        None => read_program(std::io::stdin().lock(), sink, config),
    }
    .map(|_| ())
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let result = match args.events {
        true => {
            let dispatcher = Dispatcher::new(Box::new(|dispatch: Dispatch| {
                println!("{dispatch}");
                Ok::<(), ErrorKind>(())
            }));
            read(&args, dispatcher)
        }

        false => {
            let stdout = std::io::stdout();
            let mut writer = SmodelsWriter::new(BufWriter::new(stdout.lock()), args.writer_config());
            let result = read(&args, &mut writer);
            let _ = writer.into_inner().flush();
            result
        }
    };

    if let Err(e) = result {
        eprintln!("c {e}");
        std::process::exit(1);
    }
}
