/*!
Symbol tables, associating atoms with names.

The symbol section of a program in smodels format associates (some) atoms with names.
A [reader](crate::reader) passes each association to an [AtomTable], if one is attached, noting whether the association was also passed on as an output.

An atom table never allocates an atom itself, it only records the associations given.

[NameTable] is a simple atom table, and is used by a reader to resolve the target of heuristic pseudo-atoms when no other table is attached.

```rust
# use lp_smodels::symbols::{AtomTable, NameTable};
let mut table = NameTable::default();
table.add(3, "p(1)", true);
table.add(4, "_hidden", false);

assert_eq!(table.find("p(1)"), Some(3));
assert_eq!(table.find("q"), None);
assert_eq!(table.output_count(), 1);
```
*/

use std::collections::HashMap;

use crate::structures::atom::Atom;

/// An smodels-style symbol table.
pub trait AtomTable {
    /// Associates `name` with `atom`, which is an output atom if `output` is true.
    fn add(&mut self, atom: Atom, name: &str, output: bool);

    /// The atom associated with `name`, if some atom was associated with `name`.
    fn find(&self, name: &str) -> Option<Atom>;
}

/// A symbol table backed by a map from names to atoms.
#[derive(Clone, Debug, Default)]
pub struct NameTable {
    names: HashMap<String, Atom>,
    outputs: usize,
}

impl NameTable {
    /// The count of names in the table.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The count of associations added as outputs.
    pub fn output_count(&self) -> usize {
        self.outputs
    }
}

impl AtomTable for NameTable {
    fn add(&mut self, atom: Atom, name: &str, output: bool) {
        if output {
            self.outputs += 1;
        }
        self.names.insert(name.to_owned(), atom);
    }

    fn find(&self, name: &str) -> Option<Atom> {
        self.names.get(name).copied()
    }
}
