/*!
Tracking of atoms across the steps of an incremental program.

Atoms of an incremental program accumulate over steps.
So, an atom seen in a step is either fresh to the step, or was seen in some earlier step.

An [AtomTracker] records the largest atom seen so far, and on entering a step records this atom as the 'floor' of the step.
Any atom above the floor is fresh to the step.

```rust
# use lp_smodels::incremental::AtomTracker;
let mut tracker = AtomTracker::default();

tracker.begin_step();
for atom in [1, 2, 3] {
    tracker.observe(atom);
}

tracker.begin_step();
assert_eq!(tracker.floor(), 3);
tracker.observe(5);
assert!(tracker.is_fresh(4) && !tracker.is_fresh(2));
assert_eq!(tracker.fresh_atoms(), 4..=5);
```

A tracker is owned by a single reader (or writer) and is reset only at the start of a new session.
*/

use crate::structures::atom::Atom;

/// A record of the atoms seen in the steps of an incremental program.
#[derive(Clone, Debug, Default)]
pub struct AtomTracker {
    /// The largest atom seen before the current step.
    floor: Atom,

    /// The largest atom seen.
    max: Atom,

    /// The number of steps begun.
    steps: usize,
}

impl AtomTracker {
    /// Notes `atom` has been seen.
    pub fn observe(&mut self, atom: Atom) {
        if atom > self.max {
            self.max = atom;
        }
    }

    /// Enters a new step, making the largest atom seen the floor of the step.
    pub fn begin_step(&mut self) {
        self.floor = self.max;
        self.steps += 1;
    }

    /// The largest atom seen before the current step.
    pub fn floor(&self) -> Atom {
        self.floor
    }

    /// The largest atom seen.
    pub fn max_atom(&self) -> Atom {
        self.max
    }

    /// The number of steps begun.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether `atom` is fresh to the current step.
    pub fn is_fresh(&self, atom: Atom) -> bool {
        atom > self.floor
    }

    /// The atoms fresh to the current step, given all atoms up to the largest atom seen are used.
    pub fn fresh_atoms(&self) -> std::ops::RangeInclusive<Atom> {
        (self.floor + 1)..=self.max
    }

    /// Forgets all atoms and steps.
    pub fn reset(&mut self) {
        *self = AtomTracker::default();
    }
}
