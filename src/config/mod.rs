/*!
Configuration of readers and writers.

- A [ReaderConfig] sets which extensions of the format a [reader](crate::reader) accepts, and which pseudo-atoms are converted to directives.
- A [WriterConfig] sets which extensions of the format a [writer](crate::writer) may use, and the atom used as the head of integrity constraints.

The options of a reader may be set by chaining:

```rust
# use lp_smodels::config::ReaderConfig;
let mut config = ReaderConfig::default();
config.enable_clasp_ext().convert_edges().drop_converted();

assert!(config.clasp_ext.value);
assert!(config.convert_edges.value);
assert!(!config.convert_heuristic.value);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod pseudo_atoms;
pub use pseudo_atoms::PseudoAtomNames;

use crate::structures::atom::{Atom, ATOM_MAX, FALSE_ATOM_NONE};

/// The configuration of a reader.
#[derive(Clone, Debug)]
pub struct ReaderConfig {
    /// Accept incremental programs and external atoms.
    pub clasp_ext: ConfigOption<bool>,

    /// Convert `_edge` and `_acyc_` atoms to edge directives.
    pub convert_edges: ConfigOption<bool>,

    /// Convert `_heuristic` atoms to heuristic directives.
    pub convert_heuristic: ConfigOption<bool>,

    /// Omit converted atoms from the output.
    pub drop_converted: ConfigOption<bool>,

    /// The names which mark pseudo-atoms.
    pub names: PseudoAtomNames,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            clasp_ext: ConfigOption::switch("clasp_ext", false),
            convert_edges: ConfigOption::switch("convert_edges", false),
            convert_heuristic: ConfigOption::switch("convert_heuristic", false),
            drop_converted: ConfigOption::switch("drop_converted", false),
            names: PseudoAtomNames::default(),
        }
    }
}

impl ReaderConfig {
    /// Enable the clasp extension for incremental programs and external atoms.
    pub fn enable_clasp_ext(&mut self) -> &mut Self {
        self.clasp_ext.value = true;
        self
    }

    /// Convert `_edge`/`_acyc_` atoms to edge directives.
    pub fn convert_edges(&mut self) -> &mut Self {
        self.convert_edges.value = true;
        self
    }

    /// Convert `_heuristic` atoms to heuristic directives.
    pub fn convert_heuristic(&mut self) -> &mut Self {
        self.convert_heuristic.value = true;
        self
    }

    /// Remove converted atoms from the output.
    pub fn drop_converted(&mut self) -> &mut Self {
        self.drop_converted.value = true;
        self
    }

    /// Whether any conversion of pseudo-atoms is requested.
    pub fn converts(&self) -> bool {
        self.convert_edges.value || self.convert_heuristic.value
    }
}

/// The configuration of a writer.
#[derive(Clone, Debug)]
pub struct WriterConfig {
    /// Use rule types 90, 91, and 92 to write incremental programs and external atoms.
    pub clasp_ext: ConfigOption<bool>,

    /// The atom written as the head of integrity constraints.
    ///
    /// [FALSE_ATOM_NONE] disables integrity constraints.
    pub false_atom: ConfigOption<Atom>,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            clasp_ext: ConfigOption::switch("clasp_ext", false),
            false_atom: ConfigOption {
                name: "false_atom",
                min: FALSE_ATOM_NONE,
                max: ATOM_MAX,
                value: FALSE_ATOM_NONE,
            },
        }
    }
}

impl WriterConfig {
    /// A configuration with the given extension switch and false atom.
    ///
    /// A false atom beyond [ATOM_MAX] is ignored, and integrity constraints are then unsupported.
    pub fn new(clasp_ext: bool, false_atom: Atom) -> Self {
        let mut config = WriterConfig::default();
        config.clasp_ext.value = clasp_ext;
        config.false_atom.set(false_atom);
        config
    }
}
