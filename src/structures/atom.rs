/*!
(The representation of) an atom.

Atoms are the propositional variables of a logic program.
Each atom is a positive u32 *u* with *u* at most [ATOM_MAX].

```rust
# use lp_smodels::structures::atom::{Atom, ATOM_MAX};
let atoms = (1..=4).collect::<Vec<Atom>>();
assert!(atoms.iter().all(|atom| *atom <= ATOM_MAX));
```

The atom `0` is not an atom.
In the smodels format `0` terminates a list (of rules, of atoms, of symbols), and so `0` is never reported as a head atom, a body literal, or the atom of a symbol.

# Notes
- Atoms are not allocated by this library, they are read from or written to a stream as given.
- A writer may be given a 'false atom', an atom reserved to stand as the head of integrity constraints.
  The value [FALSE_ATOM_NONE] indicates no such atom was reserved.
*/

/// An atom.
pub type Atom = u32;

/// The largest atom which may be used.
///
/// Atoms are bounded by the maximum (positive) signed literal, so that any atom may be given either polarity.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();

/// The sentinel used to terminate a list of atoms, which is otherwise not an atom.
pub const ATOM_SENTINEL: Atom = 0;

/// The false atom of a writer without support for integrity constraints.
pub const FALSE_ATOM_NONE: Atom = 0;

/// Whether `atom` may be used as an atom.
pub fn valid_atom(atom: Atom) -> bool {
    atom != ATOM_SENTINEL && atom <= ATOM_MAX
}
