use clap::Parser;

use lp_smodels::{
    config::{ReaderConfig, WriterConfig},
    structures::atom::{Atom, FALSE_ATOM_NONE},
};

/// Reads a logic program in smodels format, and writes the program again (or the elements of the program)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(super) struct Args {
    /// The program to read, or stdin if no path is given
    pub path: Option<std::path::PathBuf>,

    /// Accept (and write) incremental programs and external atoms
    #[arg(long, default_value_t = false)]
    pub clasp_ext: bool,

    /// Convert _edge and _acyc_ atoms to edge directives
    #[arg(long, default_value_t = false)]
    pub convert_edges: bool,

    /// Convert _heuristic atoms to heuristic directives
    #[arg(long, default_value_t = false)]
    pub convert_heuristic: bool,

    /// Omit converted atoms from the symbol table
    #[arg(long, default_value_t = false)]
    pub drop_converted: bool,

    /// The atom written as the head of integrity constraints, with 0 for none
    #[arg(long, default_value_t = FALSE_ATOM_NONE)]
    pub false_atom: Atom,

    /// Print the elements of the program, one per line, in place of the program
    #[arg(short, long, default_value_t = false)]
    pub events: bool,
}

impl Args {
    pub fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        if self.clasp_ext {
            config.enable_clasp_ext();
        }
        if self.convert_edges {
            config.convert_edges();
        }
        if self.convert_heuristic {
            config.convert_heuristic();
        }
        if self.drop_converted {
            config.drop_converted();
        }
        config
    }

    pub fn writer_config(&self) -> WriterConfig {
        let config = WriterConfig::new(self.clasp_ext, self.false_atom);
        if config.false_atom.value != self.false_atom {
            let (min, max) = config.false_atom.min_max();
            eprintln!("c False atom {} ignored, as outside {min}..={max}", self.false_atom);
        }
        config
    }
}
